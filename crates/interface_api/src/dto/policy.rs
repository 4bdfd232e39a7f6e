//! Application and terms DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_policy::{NewApplication, PolicyType, Species};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    pub pet_name: String,
    pub species: Species,
    pub breed: Option<String>,
    #[validate(range(max = 40))]
    pub pet_age: Option<u32>,
    pub owner_name: String,
    #[validate(email)]
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub owner_address: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    pub policy_type: PolicyType,
    pub medical_history: Option<String>,
    pub pre_existing_conditions: Option<String>,
}

impl From<CreateApplicationRequest> for NewApplication {
    fn from(request: CreateApplicationRequest) -> Self {
        NewApplication {
            pet_name: request.pet_name,
            species: request.species,
            breed: request.breed,
            pet_age: request.pet_age,
            owner_name: request.owner_name,
            owner_email: request.owner_email,
            owner_phone: request.owner_phone,
            owner_address: request.owner_address,
            clinic_name: request.clinic_name,
            veterinarian: request.veterinarian,
            policy_type: request.policy_type,
            medical_history: request.medical_history,
            pre_existing_conditions: request.pre_existing_conditions,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationStatusRequest {
    pub status: String,
    /// Monthly premium, required when moving to `quote_received`
    pub quote_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviseDocumentRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

/// Terms document without its body
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub version: String,
    pub status: String,
    pub last_updated: chrono::NaiveDate,
    pub updated_by: String,
}
