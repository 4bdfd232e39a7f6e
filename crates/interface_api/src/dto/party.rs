//! User and veterinarian DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_party::{NewUser, NewVeterinarian, UserRole};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: UserRole,
    pub organization: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            role: request.role,
            organization: request.organization,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVeterinarianRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1))]
    pub clinic_name: String,
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub license_number: String,
    pub specialization: Option<String>,
}

impl From<CreateVeterinarianRequest> for NewVeterinarian {
    fn from(request: CreateVeterinarianRequest) -> Self {
        NewVeterinarian {
            name: request.name,
            email: request.email,
            phone: request.phone,
            clinic_name: request.clinic_name,
            address: request.address,
            license_number: request.license_number,
            specialization: request.specialization,
        }
    }
}

/// Headline counts of the admin dashboard
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: usize,
    pub active_users: usize,
    pub total_vets: usize,
    pub active_vets: usize,
    pub total_applications: usize,
    pub pending_applications: usize,
    pub total_claims: usize,
    pub pending_claims: usize,
    pub total_payments: usize,
    pub pending_payments: usize,
}
