//! Registered veterinarians

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::ValidateEmail;

use core_kernel::validation::missing_fields;
use core_kernel::{lifecycle, Lifecycle, Record, Searchable, Transition, VetId};

use crate::error::PartyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetStatus {
    Active,
    Inactive,
    /// Registered, waiting for an administrator
    Pending,
}

lifecycle! {
    VetStatus, "veterinarian";
    Active => "active", "Active", [("deactivate", Inactive)];
    Inactive => "inactive", "Inactive", [("reactivate", Active)];
    Pending => "pending", "Pending Approval", [("approve", Active)];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVeterinarian {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub clinic_name: String,
    pub address: Option<String>,
    pub license_number: String,
    pub specialization: Option<String>,
}

impl NewVeterinarian {
    pub fn validate(&self) -> Result<(), PartyError> {
        let missing = missing_fields(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("clinic_name", self.clinic_name.as_str()),
            ("license_number", self.license_number.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(PartyError::MissingRequiredFields(missing));
        }
        if !self.email.trim().validate_email() {
            return Err(PartyError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// A veterinarian working with the insurer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Veterinarian {
    pub id: VetId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub clinic_name: String,
    pub address: Option<String>,
    pub license_number: String,
    pub specialization: Option<String>,
    pub status: VetStatus,
    pub join_date: NaiveDate,
    /// Claims filed by this veterinarian
    pub total_claims: u32,
    /// Applications filed by this veterinarian
    pub total_applications: u32,
}

impl Veterinarian {
    /// Registers a veterinarian pending approval
    pub fn register(id: VetId, form: NewVeterinarian, today: NaiveDate) -> Result<Self, PartyError> {
        form.validate()?;

        let optional = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Ok(Self {
            id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: optional(form.phone),
            clinic_name: form.clinic_name.trim().to_string(),
            address: optional(form.address),
            license_number: form.license_number.trim().to_string(),
            specialization: optional(form.specialization),
            status: VetStatus::Pending,
            join_date: today,
            total_claims: 0,
            total_applications: 0,
        })
    }

    pub fn available_actions(&self) -> &'static [Transition<VetStatus>] {
        self.status.transitions()
    }

    pub fn update_status(&mut self, target: VetStatus) -> Result<(), PartyError> {
        if !self.status.can_transition_to(target) {
            return Err(PartyError::transition(self.status.as_str(), target.as_str()));
        }
        info!(
            vet_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Veterinarian status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn approve(&mut self) -> Result<(), PartyError> {
        if self.status != VetStatus::Pending {
            return Err(PartyError::transition(self.status.as_str(), VetStatus::Active.as_str()));
        }
        self.update_status(VetStatus::Active)
    }

    pub fn deactivate(&mut self) -> Result<(), PartyError> {
        self.update_status(VetStatus::Inactive)
    }

    pub fn reactivate(&mut self) -> Result<(), PartyError> {
        if self.status != VetStatus::Inactive {
            return Err(PartyError::transition(self.status.as_str(), VetStatus::Active.as_str()));
        }
        self.update_status(VetStatus::Active)
    }
}

impl Record for Veterinarian {
    type Id = VetId;
    const ENTITY: &'static str = "Veterinarian";

    fn id(&self) -> VetId {
        self.id
    }
}

impl Searchable for Veterinarian {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone(), self.clinic_name.clone()];
        fields.extend(self.specialization.clone());
        fields
    }
}

pub fn filter_veterinarians<'a>(vets: &'a [Veterinarian], search: &str) -> Vec<&'a Veterinarian> {
    vets.iter().filter(|v| v.matches(search)).collect()
}
