//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::validation::missing_fields;
use core_kernel::{lifecycle, ClaimId, Lifecycle, Money, Record, Searchable, Transition};

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Filed, not yet looked at
    Pending,
    UnderReview,
    Approved,
    Rejected,
    /// Approved work being prepared for payment
    Processing,
    /// Sent to the client, waiting on payment
    PaymentPending,
    /// Paid and closed
    Completed,
}

lifecycle! {
    ClaimStatus, "claim";
    Pending => "pending", "Pending", [("start_review", UnderReview)];
    UnderReview => "under_review", "Under Review", [
        ("process", Processing),
        ("approve", Approved),
        ("reject", Rejected),
    ];
    Approved => "approved", "Approved", [];
    Rejected => "rejected", "Rejected", [];
    Processing => "processing", "Processing", [("submit_to_client", PaymentPending)];
    PaymentPending => "payment_pending", "Payment Pending", [("mark_completed", Completed)];
    Completed => "completed", "Completed", [];
}

/// Kind of treatment claimed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Emergency,
    Routine,
    Accident,
    Illness,
    Surgery,
    Dental,
}

impl ClaimType {
    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::Emergency => "Emergency Treatment",
            ClaimType::Routine => "Routine Treatment",
            ClaimType::Accident => "Accident",
            ClaimType::Illness => "Illness Treatment",
            ClaimType::Surgery => "Surgery",
            ClaimType::Dental => "Dental Care",
        }
    }
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Data entered on the new-claim form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClaim {
    pub pet_name: String,
    /// Display string such as `Dog - Labrador`
    pub pet_type: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    pub incident_date: NaiveDate,
    pub claim_type: ClaimType,
    pub claim_amount: Money,
    pub description: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl NewClaim {
    pub fn validate(&self) -> Result<(), ClaimError> {
        let missing = missing_fields(&[
            ("pet_name", self.pet_name.as_str()),
            ("pet_type", self.pet_type.as_str()),
            ("owner_name", self.owner_name.as_str()),
            ("owner_email", self.owner_email.as_str()),
            ("clinic_name", self.clinic_name.as_str()),
            ("veterinarian", self.veterinarian.as_str()),
            ("description", self.description.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(ClaimError::MissingRequiredFields(missing));
        }
        if !self.claim_amount.is_positive() {
            return Err(ClaimError::InvalidClaimAmount(self.claim_amount.to_string()));
        }
        Ok(())
    }
}

/// A treatment claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub pet_name: String,
    pub pet_type: String,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    /// Date the claim was filed
    pub claim_date: NaiveDate,
    /// Date of the accident or illness
    pub incident_date: NaiveDate,
    pub status: ClaimStatus,
    pub claim_type: ClaimType,
    pub claim_amount: Money,
    /// Set when an agent approves the claim
    pub approved_amount: Option<Money>,
    pub description: String,
    /// Supporting document file names
    pub documents: Vec<String>,
    pub review_notes: Option<String>,
}

impl Claim {
    /// Files a pending claim from a validated form
    pub fn file(id: ClaimId, form: NewClaim, today: NaiveDate) -> Result<Self, ClaimError> {
        form.validate()?;

        Ok(Self {
            id,
            pet_name: form.pet_name.trim().to_string(),
            pet_type: form.pet_type.trim().to_string(),
            owner_name: form.owner_name.trim().to_string(),
            owner_email: form.owner_email.trim().to_string(),
            owner_phone: form.owner_phone,
            clinic_name: form.clinic_name.trim().to_string(),
            veterinarian: form.veterinarian.trim().to_string(),
            claim_date: today,
            incident_date: form.incident_date,
            status: ClaimStatus::Pending,
            claim_type: form.claim_type,
            claim_amount: form.claim_amount.round_to_currency(),
            approved_amount: None,
            description: form.description.trim().to_string(),
            documents: form.documents,
            review_notes: None,
        })
    }

    pub fn available_actions(&self) -> &'static [Transition<ClaimStatus>] {
        self.status.transitions()
    }

    /// Updates the status
    ///
    /// Moving to `approved`, `processing` or `payment_pending` through this
    /// method pays out the full claimed amount unless one is already on
    /// record; use the dedicated methods to pay a different amount.
    pub fn update_status(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        match target {
            ClaimStatus::Approved => self.approve(None),
            ClaimStatus::Processing => self.process(None),
            ClaimStatus::PaymentPending => self.submit_to_client(None),
            _ => self.apply(target),
        }
    }

    fn ensure_can_move(&self, target: ClaimStatus) -> Result<(), ClaimError> {
        if self.status.can_transition_to(target) {
            Ok(())
        } else {
            Err(ClaimError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }

    /// Checks a payout against the claimed amount
    ///
    /// Without an explicit amount the one already approved is kept, falling
    /// back to the full claimed amount.
    fn payout(&self, amount: Option<Money>) -> Result<Money, ClaimError> {
        let payout = amount
            .or(self.approved_amount)
            .unwrap_or(self.claim_amount)
            .round_to_currency();
        if !payout.is_positive() {
            return Err(ClaimError::InvalidClaimAmount(payout.to_string()));
        }
        if payout.checked_sub(&self.claim_amount)?.is_positive() {
            return Err(ClaimError::ApprovedExceedsClaimed {
                approved: payout.to_string(),
                claimed: self.claim_amount.to_string(),
            });
        }
        Ok(payout)
    }

    fn apply(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        info!(
            claim_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Claim status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn start_review(&mut self) -> Result<(), ClaimError> {
        self.apply(ClaimStatus::UnderReview)
    }

    /// Hands the claim to processing for `amount`, or the full claimed
    /// amount, and notifies the clinic
    pub fn process(&mut self, amount: Option<Money>) -> Result<(), ClaimError> {
        self.ensure_can_move(ClaimStatus::Processing)?;
        let payout = self.payout(amount)?;
        self.approved_amount = Some(payout);
        self.apply(ClaimStatus::Processing)?;
        info!(
            claim_id = %self.id,
            clinic = %self.clinic_name,
            "Processing notification email queued"
        );
        Ok(())
    }

    /// Approves the claim for `amount`, or the full claimed amount
    pub fn approve(&mut self, amount: Option<Money>) -> Result<(), ClaimError> {
        self.ensure_can_move(ClaimStatus::Approved)?;
        let approved = self.payout(amount)?;
        self.approved_amount = Some(approved);
        self.apply(ClaimStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), ClaimError> {
        self.apply(ClaimStatus::Rejected)
    }

    /// Sends the processed claim to the client for payment
    ///
    /// `amount` replaces the payout recorded when processing started.
    pub fn submit_to_client(&mut self, amount: Option<Money>) -> Result<(), ClaimError> {
        self.ensure_can_move(ClaimStatus::PaymentPending)?;
        let payout = self.payout(amount)?;
        self.approved_amount = Some(payout);
        self.apply(ClaimStatus::PaymentPending)?;
        info!(
            claim_id = %self.id,
            owner_email = %self.owner_email,
            "Claim submitted to client"
        );
        Ok(())
    }

    pub fn mark_completed(&mut self) -> Result<(), ClaimError> {
        self.apply(ClaimStatus::Completed)
    }

    pub fn set_review_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        self.review_notes = if notes.trim().is_empty() { None } else { Some(notes) };
    }
}

impl Record for Claim {
    type Id = ClaimId;
    const ENTITY: &'static str = "Claim";

    fn id(&self) -> ClaimId {
        self.id
    }
}

impl Searchable for Claim {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.pet_name.clone(),
            self.owner_name.clone(),
            self.id.to_string(),
            self.claim_type.label().to_string(),
        ]
    }
}

/// Tabs of the claims list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimTab {
    #[default]
    All,
    Pending,
    Review,
    /// Approved and completed claims
    Approved,
}

impl ClaimTab {
    pub fn includes(&self, claim: &Claim) -> bool {
        match self {
            ClaimTab::All => true,
            ClaimTab::Pending => claim.status == ClaimStatus::Pending,
            ClaimTab::Review => claim.status == ClaimStatus::UnderReview,
            ClaimTab::Approved => matches!(claim.status, ClaimStatus::Approved | ClaimStatus::Completed),
        }
    }
}

pub fn filter_claims<'a>(claims: &'a [Claim], search: &str, tab: ClaimTab) -> Vec<&'a Claim> {
    claims
        .iter()
        .filter(|c| c.matches(search) && tab.includes(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn form() -> NewClaim {
        NewClaim {
            pet_name: "Max".to_string(),
            pet_type: "Dog - Golden Retriever".to_string(),
            owner_name: "John Smith".to_string(),
            owner_email: "john.smith@email.com".to_string(),
            owner_phone: None,
            clinic_name: "City Veterinary Clinic".to_string(),
            veterinarian: "Dr. Sarah Johnson".to_string(),
            incident_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            claim_type: ClaimType::Emergency,
            claim_amount: Money::usd(dec!(1250)),
            description: "Emergency surgery for foreign object ingestion".to_string(),
            documents: vec!["invoice.pdf".to_string()],
        }
    }

    fn filed() -> Claim {
        Claim::file(ClaimId::new(5), form(), NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()).unwrap()
    }

    #[test]
    fn test_file_starts_pending() {
        let claim = filed();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.approved_amount.is_none());
        assert_eq!(claim.documents.len(), 1);
    }

    #[test]
    fn test_claim_amount_must_be_positive() {
        let mut f = form();
        f.claim_amount = Money::usd(dec!(0));
        assert!(matches!(f.validate(), Err(ClaimError::InvalidClaimAmount(_))));
    }

    #[test]
    fn test_approve_defaults_to_claimed_amount() {
        let mut claim = filed();
        claim.start_review().unwrap();
        claim.update_status(ClaimStatus::Approved).unwrap();
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(1250));
    }

    #[test]
    fn test_partial_approval() {
        let mut claim = filed();
        claim.start_review().unwrap();
        claim.approve(Some(Money::usd(dec!(1000)))).unwrap();
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(1000));
    }

    #[test]
    fn test_approval_cannot_exceed_claim() {
        let mut claim = filed();
        claim.start_review().unwrap();
        let result = claim.approve(Some(Money::usd(dec!(1250.01))));
        assert!(matches!(result, Err(ClaimError::ApprovedExceedsClaimed { .. })));
        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert!(claim.approved_amount.is_none());
    }

    #[test]
    fn test_processing_path() {
        let mut claim = filed();
        claim.start_review().unwrap();
        claim.process(None).unwrap();
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(1250));
        claim.submit_to_client(None).unwrap();
        assert_eq!(claim.status, ClaimStatus::PaymentPending);
        claim.mark_completed().unwrap();
        assert!(claim.status.is_terminal());
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(1250));
    }

    #[test]
    fn test_processing_records_partial_payout() {
        let mut claim = filed();
        claim.start_review().unwrap();
        claim.process(Some(Money::usd(dec!(400)))).unwrap();
        claim.submit_to_client(None).unwrap();
        claim.mark_completed().unwrap();
        assert_eq!(claim.status, ClaimStatus::Completed);
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(400));
    }

    #[test]
    fn test_processing_payout_cannot_exceed_claim() {
        let mut claim = filed();
        claim.start_review().unwrap();
        let result = claim.process(Some(Money::usd(dec!(1300))));
        assert!(matches!(result, Err(ClaimError::ApprovedExceedsClaimed { .. })));
        assert_eq!(claim.status, ClaimStatus::UnderReview);
        assert!(claim.approved_amount.is_none());
    }

    #[test]
    fn test_submit_can_revise_payout() {
        let mut claim = filed();
        claim.start_review().unwrap();
        claim.process(None).unwrap();
        claim.submit_to_client(Some(Money::usd(dec!(1100)))).unwrap();
        assert_eq!(claim.approved_amount.unwrap().amount(), dec!(1100));
    }
}
