//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::Money;
use domain_claims::{ClaimType, NewClaim};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub pet_name: String,
    pub pet_type: String,
    pub owner_name: String,
    #[validate(email)]
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    pub incident_date: NaiveDate,
    pub claim_type: ClaimType,
    pub claim_amount: Decimal,
    pub description: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl From<CreateClaimRequest> for NewClaim {
    fn from(request: CreateClaimRequest) -> Self {
        NewClaim {
            pet_name: request.pet_name,
            pet_type: request.pet_type,
            owner_name: request.owner_name,
            owner_email: request.owner_email,
            owner_phone: request.owner_phone,
            clinic_name: request.clinic_name,
            veterinarian: request.veterinarian,
            incident_date: request.incident_date,
            claim_type: request.claim_type,
            claim_amount: Money::usd(request.claim_amount),
            description: request.description,
            documents: request.documents,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClaimStatusRequest {
    pub status: String,
    /// Amount to approve; defaults to the claimed amount
    pub approved_amount: Option<Decimal>,
}
