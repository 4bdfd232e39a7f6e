//! Back-office user accounts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::ValidateEmail;

use core_kernel::validation::missing_fields;
use core_kernel::{lifecycle, Lifecycle, Record, Searchable, Transition, UserId};

use crate::error::PartyError;

/// What a user does in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Veterinarian,
    InsuranceAgent,
    ClaimsProcessor,
    PetOwner,
    ClinicAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Veterinarian => "veterinarian",
            UserRole::InsuranceAgent => "insurance_agent",
            UserRole::ClaimsProcessor => "claims_processor",
            UserRole::PetOwner => "pet_owner",
            UserRole::ClinicAdmin => "clinic_admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Veterinarian => "Veterinarian",
            UserRole::InsuranceAgent => "Insurance Agent",
            UserRole::ClaimsProcessor => "Claims Processor",
            UserRole::PetOwner => "Pet Owner",
            UserRole::ClinicAdmin => "Clinic Administrator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

lifecycle! {
    UserStatus, "user";
    Active => "active", "Active", [("deactivate", Inactive), ("suspend", Suspended)];
    Inactive => "inactive", "Inactive", [("activate", Active), ("suspend", Suspended)];
    Suspended => "suspended", "Suspended", [("activate", Active)];
}

/// Data entered on the add-user dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub organization: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), PartyError> {
        let missing = missing_fields(&[("name", self.name.as_str()), ("email", self.email.as_str())]);
        if !missing.is_empty() {
            return Err(PartyError::MissingRequiredFields(missing));
        }
        if !self.email.trim().validate_email() {
            return Err(PartyError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// `None` until the first sign-in
    pub last_login: Option<NaiveDate>,
    pub created_date: NaiveDate,
    pub organization: Option<String>,
}

impl User {
    /// Creates an active user who has never signed in
    pub fn create(id: UserId, form: NewUser, today: NaiveDate) -> Result<Self, PartyError> {
        form.validate()?;

        Ok(Self {
            id,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            role: form.role,
            status: UserStatus::Active,
            last_login: None,
            created_date: today,
            organization: form.organization.filter(|o| !o.trim().is_empty()),
        })
    }

    /// Last sign-in date as displayed, `Never` when there is none
    pub fn last_login_label(&self) -> String {
        self.last_login
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Never".to_string())
    }

    pub fn available_actions(&self) -> &'static [Transition<UserStatus>] {
        self.status.transitions()
    }

    pub fn update_status(&mut self, target: UserStatus) -> Result<(), PartyError> {
        if !self.status.can_transition_to(target) {
            return Err(PartyError::transition(self.status.as_str(), target.as_str()));
        }
        info!(
            user_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "User status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn activate(&mut self) -> Result<(), PartyError> {
        self.update_status(UserStatus::Active)
    }

    pub fn deactivate(&mut self) -> Result<(), PartyError> {
        self.update_status(UserStatus::Inactive)
    }

    pub fn suspend(&mut self) -> Result<(), PartyError> {
        self.update_status(UserStatus::Suspended)
    }

    pub fn record_login(&mut self, today: NaiveDate) {
        self.last_login = Some(today);
    }
}

impl Record for User {
    type Id = UserId;
    const ENTITY: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.as_str().to_string(),
            self.role.label().to_string(),
        ]
    }
}

pub fn filter_users<'a>(users: &'a [User], search: &str) -> Vec<&'a User> {
    users.iter().filter(|u| u.matches(search)).collect()
}
