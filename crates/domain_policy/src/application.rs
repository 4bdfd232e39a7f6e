//! Insurance applications
//!
//! An application is submitted by a clinic on behalf of a pet owner and is
//! reviewed by an insurance agent, optionally after requesting a quote from
//! the underwriter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::validation::missing_fields;
use core_kernel::{lifecycle, ApplicationId, Lifecycle, Money, Record, Searchable, Transition};

use crate::error::ApplicationError;

/// Application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at
    Pending,
    /// Being reviewed by an agent
    UnderReview,
    Approved,
    Rejected,
    /// Quote requested from the underwriter by email
    QuoteRequested,
    /// Underwriter quote recorded
    QuoteReceived,
}

lifecycle! {
    ApplicationStatus, "application";
    Pending => "pending", "Pending", [("start_review", UnderReview)];
    UnderReview => "under_review", "Under Review", [
        ("request_quote", QuoteRequested),
        ("approve", Approved),
        ("reject", Rejected),
    ];
    Approved => "approved", "Approved", [];
    Rejected => "rejected", "Rejected", [];
    QuoteRequested => "quote_requested", "Quote Requested", [("record_quote", QuoteReceived)];
    QuoteReceived => "quote_received", "Quote Received", [("submit_to_client", Approved)];
}

/// Species of the insured pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl Species {
    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
            Species::Rabbit => "Rabbit",
            Species::Other => "Other",
        }
    }
}

/// Coverage level applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Basic,
    Comprehensive,
    Premium,
}

impl PolicyType {
    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Basic => "Basic Coverage",
            PolicyType::Comprehensive => "Comprehensive Coverage",
            PolicyType::Premium => "Premium Coverage",
        }
    }
}

/// Data entered on the new-application form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewApplication {
    pub pet_name: String,
    pub species: Species,
    pub breed: Option<String>,
    /// Age in years
    pub pet_age: Option<u32>,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub owner_address: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    pub policy_type: PolicyType,
    pub medical_history: Option<String>,
    pub pre_existing_conditions: Option<String>,
}

impl NewApplication {
    /// Checks the fields marked required on the form
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let missing = missing_fields(&[
            ("pet_name", self.pet_name.as_str()),
            ("owner_name", self.owner_name.as_str()),
            ("owner_email", self.owner_email.as_str()),
            ("clinic_name", self.clinic_name.as_str()),
            ("veterinarian", self.veterinarian.as_str()),
        ]);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::MissingRequiredFields(missing))
        }
    }
}

/// A pet insurance application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub pet_name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub pet_age: Option<u32>,
    pub owner_name: String,
    pub owner_email: String,
    pub owner_phone: Option<String>,
    pub owner_address: Option<String>,
    pub clinic_name: String,
    pub veterinarian: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub policy_type: PolicyType,
    /// Monthly premium quoted by the underwriter
    pub estimated_premium: Option<Money>,
    pub medical_history: Option<String>,
    pub pre_existing_conditions: Option<String>,
    pub review_notes: Option<String>,
}

impl Application {
    /// Creates a pending application from a validated form
    pub fn submit(id: ApplicationId, form: NewApplication, today: NaiveDate) -> Result<Self, ApplicationError> {
        form.validate()?;

        Ok(Self {
            id,
            pet_name: form.pet_name.trim().to_string(),
            species: form.species,
            breed: form.breed.filter(|b| !b.trim().is_empty()),
            pet_age: form.pet_age,
            owner_name: form.owner_name.trim().to_string(),
            owner_email: form.owner_email.trim().to_string(),
            owner_phone: form.owner_phone,
            owner_address: form.owner_address,
            clinic_name: form.clinic_name.trim().to_string(),
            veterinarian: form.veterinarian.trim().to_string(),
            application_date: today,
            status: ApplicationStatus::Pending,
            policy_type: form.policy_type,
            estimated_premium: None,
            medical_history: form.medical_history,
            pre_existing_conditions: form.pre_existing_conditions,
            review_notes: None,
        })
    }

    /// Display form of the pet, e.g. `Dog - Golden Retriever`
    pub fn pet_type(&self) -> String {
        match &self.breed {
            Some(breed) => format!("{} - {}", self.species.label(), breed),
            None => self.species.label().to_string(),
        }
    }

    /// Actions an agent can take from the current status
    pub fn available_actions(&self) -> &'static [Transition<ApplicationStatus>] {
        self.status.transitions()
    }

    /// Moves to `target` if the transition table allows it
    ///
    /// `quote_received` is only reachable once a quote has been recorded.
    pub fn update_status(&mut self, target: ApplicationStatus) -> Result<(), ApplicationError> {
        if !self.status.can_transition_to(target) {
            return Err(ApplicationError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        if target == ApplicationStatus::QuoteReceived && self.estimated_premium.is_none() {
            return Err(ApplicationError::QuoteAmountRequired);
        }

        info!(
            application_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Application status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn start_review(&mut self) -> Result<(), ApplicationError> {
        self.update_status(ApplicationStatus::UnderReview)
    }

    /// Requests a quote from the underwriter
    pub fn request_quote(&mut self) -> Result<(), ApplicationError> {
        self.update_status(ApplicationStatus::QuoteRequested)?;
        info!(
            application_id = %self.id,
            owner_email = %self.owner_email,
            "Quote request email queued for underwriter"
        );
        Ok(())
    }

    /// Records the underwriter's quoted premium
    pub fn record_quote(&mut self, premium: Money) -> Result<(), ApplicationError> {
        if !self.status.can_transition_to(ApplicationStatus::QuoteReceived) {
            return Err(ApplicationError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: ApplicationStatus::QuoteReceived.as_str().to_string(),
            });
        }
        if !premium.is_positive() {
            return Err(ApplicationError::InvalidQuoteAmount(premium.to_string()));
        }
        self.estimated_premium = Some(premium.round_to_currency());
        self.update_status(ApplicationStatus::QuoteReceived)
    }

    pub fn approve(&mut self) -> Result<(), ApplicationError> {
        self.update_status(ApplicationStatus::Approved)
    }

    pub fn reject(&mut self) -> Result<(), ApplicationError> {
        self.update_status(ApplicationStatus::Rejected)
    }

    /// Sends the received quote to the pet owner, which approves the application
    pub fn submit_to_client(&mut self) -> Result<(), ApplicationError> {
        if self.status != ApplicationStatus::QuoteReceived {
            return Err(ApplicationError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: ApplicationStatus::Approved.as_str().to_string(),
            });
        }
        self.update_status(ApplicationStatus::Approved)?;
        info!(
            application_id = %self.id,
            owner_email = %self.owner_email,
            "Quote submitted to client"
        );
        Ok(())
    }

    pub fn set_review_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        self.review_notes = if notes.trim().is_empty() { None } else { Some(notes) };
    }
}

impl Record for Application {
    type Id = ApplicationId;
    const ENTITY: &'static str = "Application";

    fn id(&self) -> ApplicationId {
        self.id
    }
}

impl Searchable for Application {
    fn search_fields(&self) -> Vec<String> {
        vec![self.pet_name.clone(), self.owner_name.clone(), self.id.to_string()]
    }
}

/// Tabs of the applications list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationTab {
    #[default]
    All,
    Pending,
    Review,
    Approved,
}

impl ApplicationTab {
    pub fn includes(&self, application: &Application) -> bool {
        match self {
            ApplicationTab::All => true,
            ApplicationTab::Pending => application.status == ApplicationStatus::Pending,
            ApplicationTab::Review => application.status == ApplicationStatus::UnderReview,
            ApplicationTab::Approved => application.status == ApplicationStatus::Approved,
        }
    }
}

/// Applies the search box and the active tab to a list
pub fn filter_applications<'a>(
    applications: &'a [Application],
    search: &str,
    tab: ApplicationTab,
) -> Vec<&'a Application> {
    applications
        .iter()
        .filter(|a| a.matches(search) && tab.includes(a))
        .collect()
}
