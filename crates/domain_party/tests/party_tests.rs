//! Tests for domain_party

use chrono::NaiveDate;

use core_kernel::{Lifecycle, UserId, VetId};

use domain_party::{
    filter_users, filter_veterinarians, LoginRequest, NewUser, NewVeterinarian, PartyError, User,
    UserRole, UserStatus, Veterinarian, VetStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn user(seq: u32, name: &str, email: &str, role: UserRole) -> User {
    let form = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        role,
        organization: None,
    };
    User::create(UserId::new(seq), form, date(2023, 12, 1)).unwrap()
}

fn vet(seq: u32, name: &str, clinic: &str, specialization: &str) -> Veterinarian {
    let form = NewVeterinarian {
        name: name.to_string(),
        email: format!("vet{}@clinic.com", seq),
        phone: Some("(555) 123-4567".to_string()),
        clinic_name: clinic.to_string(),
        address: None,
        license_number: format!("VET-2023-{:03}", seq),
        specialization: Some(specialization.to_string()),
    };
    Veterinarian::register(VetId::new(seq), form, date(2023, 12, 1)).unwrap()
}

// ============================================================================
// User Tests
// ============================================================================

mod user_tests {
    use super::*;

    #[test]
    fn test_every_user_transition() {
        for &from in UserStatus::all() {
            for &to in UserStatus::all() {
                let mut u = user(1, "Emily Davis", "emily.davis@insurance.com", UserRole::InsuranceAgent);
                u.status = from;
                let result = u.update_status(to);
                if from.can_transition_to(to) {
                    assert!(result.is_ok());
                    assert_eq!(u.status, to);
                } else {
                    assert!(matches!(result, Err(PartyError::InvalidStatusTransition { .. })));
                    assert_eq!(u.status, from);
                }
            }
        }
    }

    #[test]
    fn test_toggle_active() {
        let mut u = user(1, "Emily Davis", "emily.davis@insurance.com", UserRole::InsuranceAgent);
        u.deactivate().unwrap();
        assert_eq!(u.status, UserStatus::Inactive);
        u.activate().unwrap();
        assert_eq!(u.status, UserStatus::Active);
    }

    #[test]
    fn test_record_login() {
        let mut u = user(1, "Emily Davis", "emily.davis@insurance.com", UserRole::InsuranceAgent);
        u.record_login(date(2024, 1, 16));
        assert_eq!(u.last_login_label(), "2024-01-16");
    }

    #[test]
    fn test_search_name_email_role() {
        let users = vec![
            user(1, "Dr. Sarah Johnson", "sarah.johnson@vetclinic.com", UserRole::Veterinarian),
            user(2, "John Smith", "john.smith@email.com", UserRole::PetOwner),
            user(5, "Admin User", "admin@vetinsure.com", UserRole::Admin),
        ];
        assert_eq!(filter_users(&users, "JOHN").len(), 2);
        assert_eq!(filter_users(&users, "pet_owner")[0].name, "John Smith");
        assert_eq!(filter_users(&users, "vetinsure.com")[0].id, UserId::new(5));
        assert_eq!(filter_users(&users, "").len(), 3);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&UserRole::ClaimsProcessor).unwrap();
        assert_eq!(json, "\"claims_processor\"");
    }
}

// ============================================================================
// Veterinarian Tests
// ============================================================================

mod veterinarian_tests {
    use super::*;

    #[test]
    fn test_every_vet_transition() {
        for &from in VetStatus::all() {
            for &to in VetStatus::all() {
                let mut v = vet(1, "Dr. Lisa Anderson", "Animal Health Clinic", "Emergency Medicine");
                v.status = from;
                assert_eq!(v.update_status(to).is_ok(), from.can_transition_to(to));
            }
        }
    }

    #[test]
    fn test_search_name_clinic_specialization() {
        let vets = vec![
            vet(1, "Dr. Sarah Johnson", "City Veterinary Clinic", "General Practice"),
            vet(4, "Dr. James Wilson", "Westside Vet", "Cardiology"),
        ];
        assert_eq!(filter_veterinarians(&vets, "cardio")[0].id, VetId::new(4));
        assert_eq!(filter_veterinarians(&vets, "city")[0].id, VetId::new(1));
        assert!(filter_veterinarians(&vets, "vet2").is_empty());
    }
}

// ============================================================================
// Account Tests
// ============================================================================

mod account_tests {
    use super::*;

    #[test]
    fn test_whitespace_email_is_blank() {
        let result = LoginRequest {
            email: "   ".to_string(),
            password: "secret".to_string(),
        }
        .authenticate();
        assert!(matches!(result, Err(PartyError::MissingCredentials)));
    }

    #[test]
    fn test_admin_login_session() {
        let session = LoginRequest {
            email: "admin@vetinsure.com".to_string(),
            password: "anything".to_string(),
        }
        .authenticate()
        .unwrap();
        assert_eq!(session.email, "admin@vetinsure.com");
        assert!(session.is_admin());
    }
}
