//! Headline figures shown above the claims list

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError};

use crate::claim::{Claim, ClaimStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub count: usize,
    pub total_claimed: Money,
    /// Sum of approved amounts over every claim that has one
    pub total_approved: Money,
    pub pending_count: usize,
}

impl ClaimSummary {
    pub fn from_claims<'a, I>(claims: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        let mut summary = Self {
            count: 0,
            total_claimed: Money::zero(Currency::USD),
            total_approved: Money::zero(Currency::USD),
            pending_count: 0,
        };

        for claim in claims {
            summary.count += 1;
            summary.total_claimed = summary.total_claimed.checked_add(&claim.claim_amount)?;
            if let Some(approved) = &claim.approved_amount {
                summary.total_approved = summary.total_approved.checked_add(approved)?;
            }
            if claim.status == ClaimStatus::Pending {
                summary.pending_count += 1;
            }
        }

        Ok(summary)
    }
}
