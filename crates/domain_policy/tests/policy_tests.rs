//! Tests for domain_policy

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ApplicationId, Lifecycle, Money};

use domain_policy::{
    filter_applications, Application, ApplicationError, ApplicationStatus, ApplicationTab,
    DocumentStatus, NewApplication, PolicyType, Species, TermsDocument, TermsError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn form(pet: &str, owner: &str) -> NewApplication {
    NewApplication {
        pet_name: pet.to_string(),
        species: Species::Cat,
        breed: Some("Persian".to_string()),
        pet_age: Some(2),
        owner_name: owner.to_string(),
        owner_email: "owner@email.com".to_string(),
        owner_phone: Some("(555) 987-6543".to_string()),
        owner_address: None,
        clinic_name: "Pet Care Center".to_string(),
        veterinarian: "Dr. Michael Brown".to_string(),
        policy_type: PolicyType::Basic,
        medical_history: None,
        pre_existing_conditions: Some("None".to_string()),
    }
}

// ============================================================================
// Application Tests
// ============================================================================

mod application_tests {
    use super::*;

    fn submitted(seq: u32, pet: &str, owner: &str) -> Application {
        Application::submit(ApplicationId::new(seq), form(pet, owner), date(2024, 1, 14)).unwrap()
    }

    #[test]
    fn test_review_then_approve() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        app.start_review().unwrap();
        app.approve().unwrap();
        assert_eq!(app.status, ApplicationStatus::Approved);
        assert!(app.status.is_terminal());
    }

    #[test]
    fn test_review_then_reject() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        app.start_review().unwrap();
        app.reject().unwrap();
        assert_eq!(app.status, ApplicationStatus::Rejected);
    }

    #[test]
    fn test_cannot_approve_pending_application() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        match app.approve() {
            Err(ApplicationError::InvalidStatusTransition { from, to }) => {
                assert_eq!(from, "pending");
                assert_eq!(to, "approved");
            }
            other => panic!("expected invalid transition, got {:?}", other),
        }
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_submit_to_client_requires_received_quote() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        app.start_review().unwrap();
        assert!(app.submit_to_client().is_err());
        assert_eq!(app.status, ApplicationStatus::UnderReview);
    }

    #[test]
    fn test_quote_is_rounded_to_cents() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        app.start_review().unwrap();
        app.request_quote().unwrap();
        app.record_quote(Money::usd(dec!(45.499))).unwrap();
        assert_eq!(app.estimated_premium.unwrap().amount(), dec!(45.50));
    }

    #[test]
    fn test_available_actions_follow_status() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        let actions: Vec<_> = app.available_actions().iter().map(|t| t.action).collect();
        assert_eq!(actions, vec!["start_review"]);

        app.start_review().unwrap();
        let actions: Vec<_> = app.available_actions().iter().map(|t| t.action).collect();
        assert_eq!(actions, vec!["request_quote", "approve", "reject"]);
    }

    #[test]
    fn test_review_notes_blank_clears() {
        let mut app = submitted(2, "Luna", "Emily Davis");
        app.set_review_notes("Needs vaccination record");
        assert_eq!(app.review_notes.as_deref(), Some("Needs vaccination record"));
        app.set_review_notes("  ");
        assert!(app.review_notes.is_none());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ApplicationStatus::QuoteRequested).unwrap();
        assert_eq!(json, "\"quote_requested\"");
        assert_eq!(ApplicationStatus::QuoteRequested.to_string(), "Quote Requested");
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filter_tests {
    use super::*;

    fn list() -> Vec<Application> {
        let mut max = Application::submit(ApplicationId::new(1), form("Max", "John Smith"), date(2024, 1, 15)).unwrap();
        max.species = Species::Dog;
        let mut luna = Application::submit(ApplicationId::new(2), form("Luna", "Emily Davis"), date(2024, 1, 14)).unwrap();
        luna.start_review().unwrap();
        vec![max, luna]
    }

    #[test]
    fn test_search_by_owner_pet_and_id() {
        let apps = list();
        assert_eq!(filter_applications(&apps, "emily", ApplicationTab::All).len(), 1);
        assert_eq!(filter_applications(&apps, "MAX", ApplicationTab::All).len(), 1);
        assert_eq!(filter_applications(&apps, "app-00", ApplicationTab::All).len(), 2);
        assert!(filter_applications(&apps, "rocky", ApplicationTab::All).is_empty());
    }

    #[test]
    fn test_search_and_tab_combine() {
        let apps = list();
        assert!(filter_applications(&apps, "luna", ApplicationTab::Pending).is_empty());
        assert_eq!(filter_applications(&apps, "luna", ApplicationTab::Review)[0].pet_name, "Luna");
    }
}

// ============================================================================
// Terms Tests
// ============================================================================

mod terms_tests {
    use super::*;

    #[test]
    fn test_archive_draft() {
        let mut doc = TermsDocument::draft("DOC-003", "Cookie Policy", "COOKIES", "Legal Team", date(2024, 2, 1)).unwrap();
        doc.archive().unwrap();
        assert_eq!(doc.status, DocumentStatus::Archived);
    }

    #[test]
    fn test_draft_requires_title_and_content() {
        match TermsDocument::draft("DOC-003", "", "", "Legal Team", date(2024, 2, 1)) {
            Err(TermsError::MissingRequiredFields(fields)) => assert_eq!(fields.len(), 2),
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_successive_edits() {
        let mut doc = TermsDocument::draft("DOC-003", "Cookie Policy", "v1", "Legal Team", date(2024, 2, 1)).unwrap();
        doc.revise("v2", "Admin User", date(2024, 2, 2)).unwrap();
        doc.revise("v3", "Admin User", date(2024, 2, 3)).unwrap();
        assert_eq!(doc.version.to_string(), "1.2");
        assert_eq!(doc.content, "v3");
        assert_eq!(doc.last_updated, date(2024, 2, 3));
    }

    #[test]
    fn test_invalid_version_text() {
        assert!("two".parse::<domain_policy::DocumentVersion>().is_err());
        assert!("-1.0".parse::<domain_policy::DocumentVersion>().is_err());
    }
}
