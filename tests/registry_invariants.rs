// RentalRegistry property tests.
//
// Random sequences of add/remove/rent/return/extend/transfer over a small id
// space. After every step:
//  - a car is actively rented iff exactly one user holds it in its open
//    rentals, and that user is the recorded renter;
//  - every actively rented car is in the inventory;
//  - available cars == inventory minus active rentals.
// Rejected operations must leave the registry untouched.
use car_rental::{CarId, RentalRegistry, UserId};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

fn check_invariants(registry: &RentalRegistry) -> Result<(), TestCaseError> {
    for (car_id, renter) in registry.active_rentals() {
        prop_assert!(registry.inventory().contains_key(car_id));

        let holders: Vec<UserId> = registry
            .users()
            .iter()
            .filter(|u| u.holds(*car_id))
            .map(|u| u.id)
            .collect();
        prop_assert_eq!(holders, vec![*renter]);
    }

    // No user holds a car that is not actively rented
    for user in registry.users() {
        for car_id in user.open_rentals().keys() {
            prop_assert!(registry.active_rentals().contains_key(car_id));
        }
    }

    let available = registry.available_cars();
    for (car_id, name) in registry.inventory() {
        let rented = registry.active_rentals().contains_key(car_id);
        prop_assert_eq!(available.get(car_id), if rented { None } else { Some(name) });
    }
    prop_assert_eq!(
        available.len(),
        registry.inventory().len() - registry.active_rentals().len()
    );
    Ok(())
}

/// Everything observable, for before/after comparisons
fn state(registry: &RentalRegistry) -> String {
    format!(
        "{:?}|{:?}|{:?}",
        registry.inventory(),
        registry.active_rentals(),
        registry.users()
    )
}

proptest! {
    #[test]
    fn prop_rental_invariants_hold(
        ops in proptest::collection::vec((0u8..=6u8, 0u64..4, 0u64..3, 0u64..3, -5i64..30), 1..120)
    ) {
        let mut registry = RentalRegistry::new();

        for (op, car, user, other, days) in ops {
            let car_id = CarId(car);
            let user_id = UserId(user);
            let before = state(&registry);

            let result = match op {
                0 => registry.add_car(format!("Car {}", car), car_id),
                1 => registry.remove_car(car_id).map(|_| ()),
                2 => registry.add_user(user_id, format!("User {}", user)),
                3 => registry.rent(car_id, user_id, base() + Duration::days(days)),
                4 => registry.return_car(car_id, base() + Duration::days(days)).map(|_| ()),
                5 => registry.extend(car_id, user_id, days).map(|_| ()),
                6 => registry.transfer(car_id, user_id, UserId(other)),
                _ => unreachable!(),
            };

            if result.is_err() {
                prop_assert_eq!(state(&registry), before);
            }
            check_invariants(&registry)?;
        }
    }

    #[test]
    fn prop_rent_then_return_bills_elapsed_days(start in 0i64..365, length in 0i64..60) {
        let mut registry = RentalRegistry::new();
        registry.add_car("Toyota Corolla", CarId(1)).unwrap();
        registry.add_user(UserId(101), "Alice").unwrap();

        let rented_at = base() + Duration::days(start);
        registry.rent(CarId(1), UserId(101), rented_at).unwrap();
        let receipt = registry
            .return_car(CarId(1), rented_at + Duration::days(length))
            .unwrap();

        prop_assert_eq!(receipt.days, length);
        prop_assert_eq!(receipt.cost, length * 50);
        prop_assert!(registry.active_rentals().is_empty());
        prop_assert!(registry.user(UserId(101)).unwrap().open_rentals().is_empty());
    }

    #[test]
    fn prop_duplicate_inserts_are_rejected(id in 0u64..1000, first in "[a-z]{1,8}", second in "[a-z]{1,8}") {
        let mut registry = RentalRegistry::new();

        registry.add_car(first.clone(), CarId(id)).unwrap();
        prop_assert!(registry.add_car(second.clone(), CarId(id)).is_err());
        prop_assert_eq!(registry.inventory().get(&CarId(id)), Some(&first));

        registry.add_user(UserId(id), first.clone()).unwrap();
        prop_assert!(registry.add_user(UserId(id), second).is_err());
        prop_assert_eq!(registry.users().len(), 1);
        prop_assert_eq!(&registry.users()[0].name, &first);
    }
}
