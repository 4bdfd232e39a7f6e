//! Request handlers, one module per screen

pub mod auth;
pub mod health;
pub mod applications;
pub mod claims;
pub mod payments;
pub mod dashboard;
pub mod admin;
pub mod terms;

use chrono::{NaiveDate, Utc};

/// The calendar date new records are stamped with
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
