//! Table-driven construction checks through the dynamic boundary.

use guardrail_domain::{BankAccount, Car, DomainError, ErrorKind, GuardedEntity, MusicPlayer};
use rstest::rstest;
use serde_json::{json, Value};

fn kind_of<T>(result: Result<T, DomainError>) -> Option<ErrorKind> {
    result.err().map(|err| err.kind())
}

#[rstest]
#[case::valid(json!({ "make": "Toyota", "model": "Corolla", "year": 2020 }), None)]
#[case::first_car(json!({ "make": "Benz", "model": "Patent-Motorwagen", "year": 1886 }), None)]
#[case::with_mileage(json!({ "make": "Lada", "model": "Niva", "year": 1995, "mileage": 120000 }), None)]
#[case::year_too_early(json!({ "make": "Ford", "model": "Mustang", "year": 1800 }), Some(ErrorKind::InvalidValue))]
#[case::negative_mileage(json!({ "make": "Ford", "model": "Focus", "year": 2010, "mileage": -1 }), Some(ErrorKind::InvalidValue))]
#[case::year_as_text(json!({ "make": "Ford", "model": "Focus", "year": "2010" }), Some(ErrorKind::InvalidType))]
#[case::year_u64_max(json!({ "make": "Ford", "model": "Focus", "year": u64::MAX }), Some(ErrorKind::InvalidValue))]
#[case::year_as_real(json!({ "make": "Ford", "model": "Focus", "year": 2010.5 }), Some(ErrorKind::InvalidType))]
#[case::model_missing(json!({ "make": "Ford", "year": 2010 }), Some(ErrorKind::InvalidType))]
#[case::mileage_as_bool(json!({ "make": "Ford", "model": "Focus", "year": 2010, "mileage": true }), Some(ErrorKind::InvalidType))]
#[case::not_an_object(json!(["Ford", "Focus", 2010]), Some(ErrorKind::InvalidType))]
fn car_construction(#[case] arguments: Value, #[case] expected: Option<ErrorKind>) {
    assert_eq!(kind_of(Car::from_json(&arguments)), expected);
}

#[rstest]
#[case::default_balance(json!({ "accountNumber": "1234567890", "owner": "Ivanov" }), None)]
#[case::zero_balance(json!({ "accountNumber": "1234567890", "owner": "Ivanov", "balance": 0.0 }), None)]
#[case::negative_balance(json!({ "accountNumber": "1", "owner": "Ivanov", "balance": -10 }), Some(ErrorKind::InvalidValue))]
#[case::owner_as_number(json!({ "accountNumber": "1", "owner": 42 }), Some(ErrorKind::InvalidType))]
#[case::balance_as_text(json!({ "accountNumber": "1", "owner": "Ivanov", "balance": "100" }), Some(ErrorKind::InvalidType))]
fn account_construction(#[case] arguments: Value, #[case] expected: Option<ErrorKind>) {
    assert_eq!(kind_of(BankAccount::from_json(&arguments)), expected);
}

#[rstest]
#[case::walkman(json!({ "brand": "Sony", "model": "Walkman", "batteryLife": 15.0 }), None)]
#[case::zero_capacity(json!({ "brand": "Sony", "model": "Walkman", "batteryLife": 0 }), Some(ErrorKind::InvalidValue))]
#[case::negative_capacity(json!({ "brand": "Sony", "model": "Walkman", "batteryLife": -3 }), Some(ErrorKind::InvalidValue))]
#[case::capacity_as_text(json!({ "brand": "Sony", "model": "Walkman", "batteryLife": "15" }), Some(ErrorKind::InvalidType))]
#[case::brand_missing(json!({ "model": "Walkman", "batteryLife": 15.0 }), Some(ErrorKind::InvalidType))]
fn player_construction(#[case] arguments: Value, #[case] expected: Option<ErrorKind>) {
    assert_eq!(kind_of(MusicPlayer::from_json(&arguments)), expected);
}

#[rstest]
#[case::drive_zero("drive", json!(0), None)]
#[case::drive_negative("drive", json!(-1), Some(ErrorKind::InvalidValue))]
#[case::drive_text("drive", json!("150"), Some(ErrorKind::InvalidType))]
#[case::repaint_red("repaint", json!("Red"), None)]
#[case::repaint_blank("repaint", json!("  "), Some(ErrorKind::InvalidValue))]
#[case::repaint_number("repaint", json!(255), Some(ErrorKind::InvalidType))]
#[case::unknown("refuel", json!(40), Some(ErrorKind::UnknownOperation))]
fn car_operations(
    #[case] operation: &str,
    #[case] argument: Value,
    #[case] expected: Option<ErrorKind>,
) {
    let mut car = Car::new("Ford", "Mustang", 2021).unwrap();
    let before = car.clone();

    let result = car.apply(operation, &argument);

    assert_eq!(kind_of(result), expected);
    if expected.is_some() {
        assert_eq!(car, before);
    }
}
