//! Pre-built Test Fixtures
//!
//! Forms and values that match the seeded records, so tests read like the
//! back office does.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_claims::{ClaimType, NewClaim};
use domain_party::{NewUser, NewVeterinarian, Registration, UserRole};
use domain_policy::{NewApplication, PolicyType, Species};

/// The "today" used by fixtures and builders
pub static REFERENCE_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2024, 1, 20).unwrap_or_default());

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn usd_claim() -> Money {
        Money::usd(dec!(1250.00))
    }

    /// Monthly premium quoted for a comprehensive plan
    pub fn usd_premium() -> Money {
        Money::usd(dec!(89.99))
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn today() -> NaiveDate {
        *REFERENCE_DATE
    }

    pub fn incident() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap_or_default()
    }

    pub fn last_week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 13).unwrap_or_default()
    }

    pub fn next_week() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 27).unwrap_or_default()
    }
}

/// Fixture for filled-in forms
pub struct FormFixtures;

impl FormFixtures {
    pub fn new_application() -> NewApplication {
        NewApplication {
            pet_name: "Max".to_string(),
            species: Species::Dog,
            breed: Some("Golden Retriever".to_string()),
            pet_age: Some(3),
            owner_name: "John Smith".to_string(),
            owner_email: "john.smith@email.com".to_string(),
            owner_phone: Some("(555) 123-4567".to_string()),
            owner_address: Some("123 Main St, Springfield, IL 62701".to_string()),
            clinic_name: "City Veterinary Clinic".to_string(),
            veterinarian: "Dr. Sarah Johnson".to_string(),
            policy_type: PolicyType::Comprehensive,
            medical_history: None,
            pre_existing_conditions: None,
        }
    }

    pub fn new_claim() -> NewClaim {
        NewClaim {
            pet_name: "Max".to_string(),
            pet_type: "Dog - Golden Retriever".to_string(),
            owner_name: "John Smith".to_string(),
            owner_email: "john.smith@email.com".to_string(),
            owner_phone: None,
            clinic_name: "City Veterinary Clinic".to_string(),
            veterinarian: "Dr. Sarah Johnson".to_string(),
            incident_date: DateFixtures::incident(),
            claim_type: ClaimType::Accident,
            claim_amount: MoneyFixtures::usd_claim(),
            description: "Emergency treatment for leg injury".to_string(),
            documents: vec!["xray_results.pdf".to_string()],
        }
    }

    pub fn new_user() -> NewUser {
        NewUser {
            name: "Dana White".to_string(),
            email: "dana.white@vetinsure.com".to_string(),
            role: UserRole::ClaimsProcessor,
            organization: Some("VetInsure Pro".to_string()),
        }
    }

    pub fn new_veterinarian() -> NewVeterinarian {
        NewVeterinarian {
            name: "Dr. Amy Chen".to_string(),
            email: "amy.chen@northvet.com".to_string(),
            phone: Some("(555) 222-3333".to_string()),
            clinic_name: "North Vet".to_string(),
            address: None,
            license_number: "VET-2024-005".to_string(),
            specialization: Some("Dermatology".to_string()),
        }
    }

    pub fn registration() -> Registration {
        Registration {
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam.lee@clinic.com".to_string(),
            role: Some(UserRole::Veterinarian),
            organization: "Lee Animal Hospital".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_are_valid() {
        assert!(FormFixtures::new_application().validate().is_ok());
        assert!(FormFixtures::new_claim().validate().is_ok());
        assert!(FormFixtures::new_user().validate().is_ok());
        assert!(FormFixtures::new_veterinarian().validate().is_ok());
        assert!(FormFixtures::registration().validate().is_ok());
    }

    #[test]
    fn test_dates_are_ordered() {
        assert!(DateFixtures::last_week() < DateFixtures::today());
        assert!(DateFixtures::today() < DateFixtures::next_week());
    }
}
