// ⚙️ Rental Configuration
//
// Pricing knobs for the registry. Loaded from JSON, or defaulted.

use crate::billing::DEFAULT_DAILY_RATE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalConfig {
    /// Flat charge per elapsed day, in currency units
    #[serde(default = "default_daily_rate")]
    pub daily_rate: i64,
}

fn default_daily_rate() -> i64 {
    DEFAULT_DAILY_RATE
}

impl RentalConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read rental config: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse rental config JSON")
    }

    pub fn with_daily_rate(daily_rate: i64) -> Self {
        RentalConfig { daily_rate }
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        RentalConfig {
            daily_rate: default_daily_rate(),
        }
    }
}
