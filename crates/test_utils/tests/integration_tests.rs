//! Integration Tests
//!
//! Cross-crate workflows: domain records moving through the in-memory
//! store the way the back-office screens drive them.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ApplicationId, Lifecycle, Money, PortError, Repository};
use domain_billing::{Payment, PaymentStatus};
use domain_claims::{filter_claims, Claim, ClaimStatus, ClaimTab};
use domain_party::{User, UserStatus, VetStatus};
use domain_policy::{Application, ApplicationStatus, DocumentStatus};
use infra_store::Store;
use test_utils::*;

/// Reports a refused domain operation as a store conflict
fn domain<E: std::fmt::Display>(result: Result<(), E>) -> Result<(), PortError> {
    result.map_err(|e| PortError::conflict(e.to_string()))
}

mod application_workflow {
    use super::*;

    #[tokio::test]
    async fn test_application_from_submission_to_approval() {
        let store = seeded_store();
        let id = store.applications.next_id().await;
        assert_eq!(id.to_string(), "APP-005");

        let application = Application::submit(id, fake_application(), DateFixtures::today()).unwrap();
        store.applications.insert(application).await.unwrap();

        for step in [
            ApplicationStatus::UnderReview,
            ApplicationStatus::QuoteRequested,
        ] {
            store
                .applications
                .modify(&id, |a| domain(a.update_status(step)))
                .await
                .unwrap();
        }
        store
            .applications
            .modify(&id, |a| domain(a.record_quote(MoneyFixtures::usd_premium())))
            .await
            .unwrap();
        let approved = store
            .applications
            .modify(&id, |a| domain(a.submit_to_client()))
            .await
            .unwrap();

        assert_eq!(approved.status, ApplicationStatus::Approved);
        assert_money_eq(&approved.estimated_premium.unwrap(), &Money::usd(dec!(89.99)));
        assert!(approved.status.is_terminal());
    }

    #[tokio::test]
    async fn test_failed_transition_leaves_record_untouched() {
        let store = seeded_store();
        let id = ApplicationId::new(1);

        let result = store
            .applications
            .modify(&id, |a| {
                a.set_review_notes("looked at it");
                domain(a.approve())
            })
            .await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));

        let stored = store.applications.get(&id).await.unwrap();
        assert_eq!(stored.status, ApplicationStatus::Pending);
        assert!(stored.review_notes.is_none());
    }
}

mod claim_to_payment_workflow {
    use super::*;

    #[tokio::test]
    async fn test_processed_claim_is_paid_and_closed() {
        let store = seeded_store();
        let claim_id = store.claims.next_id().await;
        let claim = Claim::file(claim_id, fake_claim(), DateFixtures::today()).unwrap();
        let amount = claim.claim_amount;
        store.claims.insert(claim).await.unwrap();

        store.claims.modify(&claim_id, |c| domain(c.start_review())).await.unwrap();
        store.claims.modify(&claim_id, |c| domain(c.process(Some(amount)))).await.unwrap();
        let claim = store.claims.modify(&claim_id, |c| domain(c.submit_to_client(None))).await.unwrap();
        assert_eq!(claim.status, ClaimStatus::PaymentPending);

        let payment_id = store.payments.next_id().await;
        assert_eq!(payment_id.to_string(), "PAY-006");
        let payment = PaymentBuilder::new()
            .with_id(payment_id.sequence())
            .with_claim(claim_id.to_string())
            .with_amount(amount)
            .build();
        store.payments.insert(payment).await.unwrap();

        store.payments.modify(&payment_id, |p| domain(p.process())).await.unwrap();
        let paid: Payment = store
            .payments
            .modify(&payment_id, |p| domain(p.mark_completed(None, DateFixtures::today())))
            .await
            .unwrap();
        assert!(paid.transaction_id.as_deref().unwrap().starts_with("TXN-"));
        assert_eq!(paid.payment_date, Some(DateFixtures::today()));

        let closed = store.claims.modify(&claim_id, |c| domain(c.mark_completed())).await.unwrap();
        assert_eq!(closed.status, ClaimStatus::Completed);
        assert_money_eq(&closed.approved_amount.unwrap(), &amount);

        let claims = store.claims.list().await.unwrap();
        let approved_tab = filter_claims(&claims, "", ClaimTab::Approved);
        assert!(approved_tab.iter().any(|c| c.id == claim_id));
    }

    #[tokio::test]
    async fn test_failed_payment_retry() {
        let store = seeded_store();
        let failed = store
            .payments
            .find(&|p: &Payment| p.status == PaymentStatus::Failed)
            .await
            .unwrap();
        assert_eq!(failed.len(), 1);

        let retried = store.payments.modify(&failed[0].id, |p| domain(p.retry())).await.unwrap();
        assert_eq!(retried.status, PaymentStatus::Processing);
    }
}

mod lifecycle_tables {
    use super::*;
    use domain_billing::BatchStatus;

    #[test]
    fn test_application_table() {
        use ApplicationStatus::*;
        assert_transition_table(&[
            (Pending, UnderReview),
            (UnderReview, Approved),
            (UnderReview, Rejected),
            (UnderReview, QuoteRequested),
            (QuoteRequested, QuoteReceived),
            (QuoteReceived, Approved),
        ]);
        assert_terminal_statuses(&[Approved, Rejected]);
    }

    #[test]
    fn test_claim_table() {
        use ClaimStatus::*;
        assert_transition_table(&[
            (Pending, UnderReview),
            (UnderReview, Processing),
            (UnderReview, Approved),
            (UnderReview, Rejected),
            (Processing, PaymentPending),
            (PaymentPending, Completed),
        ]);
    }

    #[test]
    fn test_payment_table() {
        use PaymentStatus::*;
        assert_transition_table(&[
            (Pending, Processing),
            (Processing, Completed),
            (Processing, Failed),
            (Failed, Processing),
            (Failed, Cancelled),
        ]);
        assert_terminal_statuses(&[Completed, Cancelled]);
    }

    #[test]
    fn test_party_and_document_tables() {
        assert_transition_table(&[
            (UserStatus::Active, UserStatus::Inactive),
            (UserStatus::Active, UserStatus::Suspended),
            (UserStatus::Inactive, UserStatus::Active),
            (UserStatus::Inactive, UserStatus::Suspended),
            (UserStatus::Suspended, UserStatus::Active),
        ]);
        assert_transition_table(&[
            (VetStatus::Active, VetStatus::Inactive),
            (VetStatus::Inactive, VetStatus::Active),
            (VetStatus::Pending, VetStatus::Active),
        ]);
        assert_transition_table(&[
            (DocumentStatus::Active, DocumentStatus::Archived),
            (DocumentStatus::Draft, DocumentStatus::Active),
            (DocumentStatus::Draft, DocumentStatus::Archived),
        ]);
        assert_terminal_statuses(&[BatchStatus::Completed, BatchStatus::Failed]);
    }
}

mod id_allocation {
    use super::*;

    #[tokio::test]
    async fn test_ids_unique_across_deletes() {
        let store = Store::empty();
        let mut created = Vec::new();

        for round in 0..6 {
            let id = store.users.next_id().await;
            let user = User::create(id, fake_user(), DateFixtures::today()).unwrap();
            store.users.insert(user).await.unwrap();
            created.push(id);
            if round % 2 == 1 {
                store.users.remove(&id).await.unwrap();
            }
        }

        assert_unique_ids(created.iter());
        assert_eq!(store.users.count().await.unwrap(), 3);
        assert_eq!(store.users.next_id().await.to_string(), "USR-007");
    }

    #[tokio::test]
    async fn test_user_status_through_store() {
        let store = seeded_store();
        let inactive = store
            .users
            .find(&|u: &User| u.status == UserStatus::Inactive)
            .await
            .unwrap();
        let reactivated = store
            .users
            .modify(&inactive[0].id, |u| domain(u.activate()))
            .await
            .unwrap();
        assert_eq!(reactivated.status.as_str(), "active");
    }
}

proptest! {
    #[test]
    fn search_ignores_case(name in pet_name_strategy()) {
        let claims = vec![
            ClaimBuilder::new().with_id(1).with_pet_name(name.clone()).build(),
            ClaimBuilder::new().with_id(2).with_pet_name("Zz").build(),
        ];
        let upper = filter_claims(&claims, &name.to_uppercase(), ClaimTab::All);
        let lower = filter_claims(&claims, &name.to_lowercase(), ClaimTab::All);
        prop_assert!(upper.iter().any(|c| c.id.sequence() == 1));
        prop_assert_eq!(upper.len(), lower.len());
    }

    #[test]
    fn any_status_round_trips_through_its_name(status in status_strategy::<ClaimStatus>()) {
        prop_assert_eq!(ClaimStatus::parse(status.as_str()).unwrap(), status);
    }
}
