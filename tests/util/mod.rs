//! Shared fixtures for building runner records.

use chrono::{NaiveDate, NaiveDateTime};
use paceline::model::customer::Customer;

pub fn race_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// A registered runner still on course.
pub fn runner(name: &str, location: &str) -> Customer {
    Customer {
        name: name.to_string(),
        location: location.to_string(),
        registered_at: Some(race_morning()),
        ..Customer::default()
    }
}

/// A runner with a recorded finish.
pub fn finisher(name: &str, location: &str, finish_seconds: u32) -> Customer {
    Customer {
        finish_seconds: Some(finish_seconds),
        ..runner(name, location)
    }
}
