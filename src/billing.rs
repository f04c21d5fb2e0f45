// 💵 Billing - Elapsed days and rental cost
//
// A rental is billed per whole elapsed day at a flat daily rate.
// Durations are signed: a return dated before the rental start yields a
// negative day count (and a negative cost). Partial days are floored.

use chrono::{DateTime, Duration, Utc};

/// Default flat daily rate, in currency units
pub const DEFAULT_DAILY_RATE: i64 = 50;

/// Whole days elapsed between `start` and `end`, floored.
///
/// `23h` is 0 days, `-1h` is -1 day.
pub fn elapsed_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let delta = end - start;
    let days = delta.num_days();

    // num_days truncates toward zero
    if delta < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Cost of a rental lasting `days` at `daily_rate`
pub fn rental_cost(days: i64, daily_rate: i64) -> i64 {
    days.saturating_mul(daily_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_elapsed_whole_days() {
        assert_eq!(elapsed_days(at(2023, 1, 1, 0), at(2023, 1, 6, 0)), 5);
        assert_eq!(elapsed_days(at(2023, 1, 1, 0), at(2023, 1, 1, 0)), 0);
    }

    #[test]
    fn test_elapsed_days_floors_partial_days() {
        assert_eq!(elapsed_days(at(2023, 1, 1, 0), at(2023, 1, 1, 23)), 0);
        assert_eq!(elapsed_days(at(2023, 1, 1, 0), at(2023, 1, 2, 12)), 1);
    }

    #[test]
    fn test_elapsed_days_negative() {
        assert_eq!(elapsed_days(at(2023, 1, 5, 0), at(2023, 1, 1, 0)), -4);
        assert_eq!(elapsed_days(at(2023, 1, 1, 1), at(2023, 1, 1, 0)), -1);
    }

    #[test]
    fn test_rental_cost() {
        assert_eq!(rental_cost(5, DEFAULT_DAILY_RATE), 250);
        assert_eq!(rental_cost(0, DEFAULT_DAILY_RATE), 0);
        assert_eq!(rental_cost(-2, DEFAULT_DAILY_RATE), -100);
    }
}
