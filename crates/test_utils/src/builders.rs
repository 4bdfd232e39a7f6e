//! Test Data Builders
//!
//! Build records directly in the status a test needs. Only the fields a
//! test cares about have setters; everything else comes from the fixtures.

use chrono::NaiveDate;

use core_kernel::{ApplicationId, ClaimId, Money, PaymentId, UserId};
use domain_billing::{Payment, PaymentMethod, PaymentStatus};
use domain_claims::{Claim, ClaimStatus, NewClaim};
use domain_party::{NewUser, User, UserStatus};
use domain_policy::{Application, ApplicationStatus, NewApplication};
use infra_store::Store;

use crate::fixtures::{DateFixtures, FormFixtures, MoneyFixtures};

/// The seeded store, for tests that need the mock records
pub fn seeded_store() -> Store {
    Store::seeded().expect("seed records are valid")
}

/// Builder for applications
pub struct ApplicationBuilder {
    id: ApplicationId,
    form: NewApplication,
    status: ApplicationStatus,
    estimated_premium: Option<Money>,
    submitted_on: NaiveDate,
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            id: ApplicationId::new(1),
            form: FormFixtures::new_application(),
            status: ApplicationStatus::Pending,
            estimated_premium: None,
            submitted_on: DateFixtures::today(),
        }
    }

    pub fn with_id(mut self, sequence: u32) -> Self {
        self.id = ApplicationId::new(sequence);
        self
    }

    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.form.pet_name = name.into();
        self
    }

    pub fn with_owner(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.form.owner_name = name.into();
        self.form.owner_email = email.into();
        self
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Records a quote; the status is left as set
    pub fn with_quote(mut self, premium: Money) -> Self {
        self.estimated_premium = Some(premium);
        self
    }

    pub fn build(self) -> Application {
        let mut application = Application::submit(self.id, self.form, self.submitted_on)
            .expect("builder form is valid");
        application.status = self.status;
        application.estimated_premium = self.estimated_premium;
        application
    }
}

/// Builder for claims
pub struct ClaimBuilder {
    id: ClaimId,
    form: NewClaim,
    status: ClaimStatus,
    approved_amount: Option<Money>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            form: FormFixtures::new_claim(),
            status: ClaimStatus::Pending,
            approved_amount: None,
        }
    }

    pub fn with_id(mut self, sequence: u32) -> Self {
        self.id = ClaimId::new(sequence);
        self
    }

    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.form.pet_name = name.into();
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.form.claim_amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_approved_amount(mut self, amount: Money) -> Self {
        self.approved_amount = Some(amount);
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::file(self.id, self.form, DateFixtures::today())
            .expect("builder form is valid");
        claim.status = self.status;
        claim.approved_amount = self.approved_amount;
        claim
    }
}

/// Builder for payments
pub struct PaymentBuilder {
    payment: Payment,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    pub fn new() -> Self {
        Self {
            payment: Payment {
                id: PaymentId::new(1),
                claim_id: "CLM-001".to_string(),
                pet_name: "Max".to_string(),
                owner_name: "John Smith".to_string(),
                owner_email: "john.smith@email.com".to_string(),
                amount: MoneyFixtures::usd_claim(),
                payment_date: None,
                due_date: DateFixtures::next_week(),
                status: PaymentStatus::Pending,
                payment_method: PaymentMethod::BankTransfer,
                transaction_id: None,
                description: "Claim payment for emergency treatment".to_string(),
                claim_type: "Accident".to_string(),
                notes: None,
            },
        }
    }

    pub fn with_id(mut self, sequence: u32) -> Self {
        self.payment.id = PaymentId::new(sequence);
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.payment.amount = amount;
        self
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment.status = status;
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.payment.due_date = due;
        self
    }

    pub fn with_claim(mut self, claim_id: impl Into<String>) -> Self {
        self.payment.claim_id = claim_id.into();
        self
    }

    pub fn build(self) -> Payment {
        self.payment
    }
}

/// Builder for users
pub struct UserBuilder {
    id: UserId,
    form: NewUser,
    status: UserStatus,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: UserId::new(1),
            form: FormFixtures::new_user(),
            status: UserStatus::Active,
        }
    }

    pub fn with_id(mut self, sequence: u32) -> Self {
        self.id = UserId::new(sequence);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.form.email = email.into();
        self
    }

    pub fn with_status(mut self, status: UserStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> User {
        let mut user = User::create(self.id, self.form, DateFixtures::today())
            .expect("builder form is valid");
        user.status = self.status;
        user
    }
}
