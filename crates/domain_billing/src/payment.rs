//! Claim payments
//!
//! This module tracks payouts to pet owners for approved claims.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::{lifecycle, Currency, Lifecycle, Money, MoneyError, PaymentId, Record, Searchable, Transition};

use crate::error::PaymentError;

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    DirectDeposit,
    Check,
    CreditCard,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::DirectDeposit => "Direct Deposit",
            PaymentMethod::Check => "Check",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Scheduled, not yet sent
    Pending,
    /// Sent to the bank
    Processing,
    /// Payment completed successfully
    Completed,
    /// Payment failed
    Failed,
    Cancelled,
}

lifecycle! {
    PaymentStatus, "payment";
    Pending => "pending", "Pending", [("process", Processing)];
    Processing => "processing", "Processing", [
        ("mark_completed", Completed),
        ("mark_failed", Failed),
    ];
    Completed => "completed", "Completed", [];
    Failed => "failed", "Failed", [("retry", Processing), ("cancel", Cancelled)];
    Cancelled => "cancelled", "Cancelled", [];
}

/// A payout for a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    /// Claim reference, e.g. `CLM-004`; not checked against the claims list
    pub claim_id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub owner_email: String,
    pub amount: Money,
    /// Date the money was sent
    pub payment_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub payment_method: PaymentMethod,
    /// Bank transaction reference
    pub transaction_id: Option<String>,
    pub description: String,
    /// Claim type label, e.g. `Accident`
    pub claim_type: String,
    pub notes: Option<String>,
}

impl Payment {
    pub fn available_actions(&self) -> &'static [Transition<PaymentStatus>] {
        self.status.transitions()
    }

    /// True when the payment is still pending past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PaymentStatus::Pending && self.due_date < today
    }

    /// Updates the status
    ///
    /// Completing through this method generates a transaction id.
    pub fn update_status(&mut self, target: PaymentStatus, today: NaiveDate) -> Result<(), PaymentError> {
        if target == PaymentStatus::Completed {
            return self.mark_completed(None, today);
        }
        self.apply(target)
    }

    fn apply(&mut self, target: PaymentStatus) -> Result<(), PaymentError> {
        if !self.status.can_transition_to(target) {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        info!(
            payment_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Payment status changed"
        );
        self.status = target;
        Ok(())
    }

    /// Sends the payment to the bank
    pub fn process(&mut self) -> Result<(), PaymentError> {
        self.apply(PaymentStatus::Processing)?;
        info!(
            payment_id = %self.id,
            amount = %self.amount,
            method = self.payment_method.label(),
            "Payment submitted for processing"
        );
        Ok(())
    }

    /// Marks the payment as paid
    ///
    /// Without a bank reference a `TXN-{epoch millis}` id is generated. The
    /// payment date is set to `today` unless one was already recorded.
    pub fn mark_completed(&mut self, transaction_id: Option<String>, today: NaiveDate) -> Result<(), PaymentError> {
        if let Some(id) = &transaction_id {
            if id.trim().is_empty() {
                return Err(PaymentError::InvalidTransactionId(id.clone()));
            }
        }
        self.apply(PaymentStatus::Completed)?;

        let transaction_id = transaction_id
            .unwrap_or_else(|| format!("TXN-{}", Utc::now().timestamp_millis()));
        self.transaction_id = Some(transaction_id);
        if self.payment_date.is_none() {
            self.payment_date = Some(today);
        }
        Ok(())
    }

    pub fn mark_failed(&mut self) -> Result<(), PaymentError> {
        self.apply(PaymentStatus::Failed)?;
        warn!(payment_id = %self.id, claim_id = %self.claim_id, "Payment failed");
        Ok(())
    }

    /// Sends a failed payment again
    pub fn retry(&mut self) -> Result<(), PaymentError> {
        if self.status != PaymentStatus::Failed {
            return Err(PaymentError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: PaymentStatus::Processing.as_str().to_string(),
            });
        }
        self.apply(PaymentStatus::Processing)
    }

    pub fn cancel(&mut self) -> Result<(), PaymentError> {
        self.apply(PaymentStatus::Cancelled)
    }
}

impl Record for Payment {
    type Id = PaymentId;
    const ENTITY: &'static str = "Payment";

    fn id(&self) -> PaymentId {
        self.id
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.pet_name.clone(),
            self.owner_name.clone(),
            self.id.to_string(),
            self.claim_id.clone(),
        ]
    }
}

/// Tabs of the payments list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTab {
    #[default]
    All,
    Pending,
    Processing,
    Completed,
    Failed,
}

impl PaymentTab {
    pub fn includes(&self, payment: &Payment) -> bool {
        match self {
            PaymentTab::All => true,
            PaymentTab::Pending => payment.status == PaymentStatus::Pending,
            PaymentTab::Processing => payment.status == PaymentStatus::Processing,
            PaymentTab::Completed => payment.status == PaymentStatus::Completed,
            PaymentTab::Failed => payment.status == PaymentStatus::Failed,
        }
    }
}

pub fn filter_payments<'a>(payments: &'a [Payment], search: &str, tab: PaymentTab) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.matches(search) && tab.includes(p))
        .collect()
}

/// Headline figures shown above the payments list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub count: usize,
    pub total_amount: Money,
    pub completed_amount: Money,
    /// Pending and processing payments
    pub pending_amount: Money,
    /// Completed payments as a whole percentage of all payments
    pub success_rate: u32,
    pub overdue_count: usize,
}

impl PaymentSummary {
    pub fn from_payments<'a, I>(payments: I, today: NaiveDate) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let zero = Money::zero(Currency::USD);
        let mut summary = Self {
            count: 0,
            total_amount: zero,
            completed_amount: zero,
            pending_amount: zero,
            success_rate: 0,
            overdue_count: 0,
        };
        let mut completed = 0usize;

        for payment in payments {
            summary.count += 1;
            summary.total_amount = summary.total_amount.checked_add(&payment.amount)?;
            match payment.status {
                PaymentStatus::Completed => {
                    completed += 1;
                    summary.completed_amount = summary.completed_amount.checked_add(&payment.amount)?;
                }
                PaymentStatus::Pending | PaymentStatus::Processing => {
                    summary.pending_amount = summary.pending_amount.checked_add(&payment.amount)?;
                }
                PaymentStatus::Failed | PaymentStatus::Cancelled => {}
            }
            if payment.is_overdue(today) {
                summary.overdue_count += 1;
            }
        }

        // Round half up
        if summary.count > 0 {
            summary.success_rate = ((completed * 200 + summary.count) / (summary.count * 2)) as u32;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(status: PaymentStatus) -> Payment {
        Payment {
            id: PaymentId::new(2),
            claim_id: "CLM-003".to_string(),
            pet_name: "Charlie".to_string(),
            owner_name: "Robert Wilson".to_string(),
            owner_email: "robert.wilson@email.com".to_string(),
            amount: Money::usd(dec!(1890)),
            payment_date: None,
            due_date: date(2024, 1, 18),
            status,
            payment_method: PaymentMethod::BankTransfer,
            transaction_id: None,
            description: "Payment for fracture repair claim".to_string(),
            claim_type: "Accident".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_complete_generates_transaction_id() {
        let mut p = payment(PaymentStatus::Processing);
        p.mark_completed(None, date(2024, 1, 19)).unwrap();
        assert_eq!(p.status, PaymentStatus::Completed);
        assert!(p.transaction_id.as_deref().unwrap().starts_with("TXN-"));
        assert_eq!(p.payment_date, Some(date(2024, 1, 19)));
    }

    #[test]
    fn test_complete_keeps_existing_payment_date() {
        let mut p = payment(PaymentStatus::Processing);
        p.payment_date = Some(date(2024, 1, 15));
        p.mark_completed(Some("TXN-20240115-003".to_string()), date(2024, 1, 19)).unwrap();
        assert_eq!(p.payment_date, Some(date(2024, 1, 15)));
        assert_eq!(p.transaction_id.as_deref(), Some("TXN-20240115-003"));
    }

    #[test]
    fn test_cannot_complete_pending_payment() {
        let mut p = payment(PaymentStatus::Pending);
        assert!(p.mark_completed(None, date(2024, 1, 19)).is_err());
        assert!(p.transaction_id.is_none());
        assert!(p.payment_date.is_none());
    }

    #[test]
    fn test_retry_and_cancel_only_from_failed() {
        let mut p = payment(PaymentStatus::Processing);
        assert!(p.retry().is_err());
        p.mark_failed().unwrap();
        p.retry().unwrap();
        assert_eq!(p.status, PaymentStatus::Processing);
        p.mark_failed().unwrap();
        p.cancel().unwrap();
        assert!(p.status.is_terminal());
    }

    #[test]
    fn test_overdue() {
        let p = payment(PaymentStatus::Pending);
        assert!(!p.is_overdue(date(2024, 1, 18)));
        assert!(p.is_overdue(date(2024, 1, 19)));
        assert!(!payment(PaymentStatus::Processing).is_overdue(date(2024, 2, 1)));
    }

    #[test]
    fn test_success_rate_rounds() {
        let list = vec![
            payment(PaymentStatus::Completed),
            payment(PaymentStatus::Completed),
            payment(PaymentStatus::Failed),
        ];
        let summary = PaymentSummary::from_payments(&list, date(2024, 1, 1)).unwrap();
        assert_eq!(summary.success_rate, 67);
        assert!(summary.pending_amount.is_zero());
    }
}
