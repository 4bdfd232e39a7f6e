//! Mock records loaded when the service starts

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;

use core_kernel::{
    ApplicationId, BatchId, ClaimId, Money, PaymentId, PortError, UserId, VetId,
};
use domain_billing::{BatchStatus, Payment, PaymentBatch, PaymentMethod, PaymentStatus};
use domain_claims::{Claim, ClaimStatus, ClaimType};
use domain_party::{User, UserRole, UserStatus, Veterinarian, VetStatus};
use domain_policy::{
    Application, ApplicationStatus, DocumentStatus, PolicyType, Species, TermsDocument,
};

const TERMS_AND_CONDITIONS: &str = include_str!("../seed/terms_and_conditions.txt");
const PRIVACY_POLICY: &str = include_str!("../seed/privacy_policy.txt");

type Seed<T> = Result<Vec<T>, PortError>;

fn date(value: &str) -> Result<NaiveDate, PortError> {
    value
        .parse()
        .map_err(|e| PortError::internal(format!("bad seed date {}: {}", value, e)))
}

fn timestamp(value: &str) -> Result<DateTime<Utc>, PortError> {
    value
        .parse()
        .map_err(|e| PortError::internal(format!("bad seed timestamp {}: {}", value, e)))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn application(
    seq: u32,
    pet: &str,
    species: Species,
    breed: &str,
    owner: &str,
    email: &str,
    clinic: &str,
    vet: &str,
    applied: &str,
    status: ApplicationStatus,
    policy_type: PolicyType,
    premium: Option<Money>,
) -> Result<Application, PortError> {
    Ok(Application {
        id: ApplicationId::new(seq),
        pet_name: pet.to_string(),
        species,
        breed: Some(breed.to_string()),
        pet_age: None,
        owner_name: owner.to_string(),
        owner_email: email.to_string(),
        owner_phone: None,
        owner_address: None,
        clinic_name: clinic.to_string(),
        veterinarian: vet.to_string(),
        application_date: date(applied)?,
        status,
        policy_type,
        estimated_premium: premium,
        medical_history: None,
        pre_existing_conditions: None,
        review_notes: None,
    })
}

pub fn applications() -> Seed<Application> {
    Ok(vec![
        application(
            1, "Max", Species::Dog, "Golden Retriever", "John Smith", "john.smith@email.com",
            "City Veterinary Clinic", "Dr. Sarah Johnson", "2024-01-15",
            ApplicationStatus::Pending, PolicyType::Comprehensive, None,
        )?,
        application(
            2, "Luna", Species::Cat, "Persian", "Emily Davis", "emily.davis@email.com",
            "Pet Care Center", "Dr. Michael Brown", "2024-01-14",
            ApplicationStatus::UnderReview, PolicyType::Basic, None,
        )?,
        application(
            3, "Charlie", Species::Dog, "Labrador", "Robert Wilson", "robert.wilson@email.com",
            "Animal Health Clinic", "Dr. Lisa Anderson", "2024-01-13",
            ApplicationStatus::QuoteRequested, PolicyType::Premium, Some(Money::usd(dec!(89.99))),
        )?,
        application(
            4, "Bella", Species::Dog, "German Shepherd", "Maria Garcia", "maria.garcia@email.com",
            "Westside Vet", "Dr. James Wilson", "2024-01-12",
            ApplicationStatus::Approved, PolicyType::Comprehensive, Some(Money::usd(dec!(124.99))),
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn claim(
    seq: u32,
    pet: (&str, &str),
    owner: (&str, &str),
    clinic: (&str, &str),
    dates: (&str, &str),
    status: ClaimStatus,
    claim_type: ClaimType,
    amounts: (Money, Option<Money>),
    description: &str,
    documents: &[&str],
) -> Result<Claim, PortError> {
    Ok(Claim {
        id: ClaimId::new(seq),
        pet_name: pet.0.to_string(),
        pet_type: pet.1.to_string(),
        owner_name: owner.0.to_string(),
        owner_email: owner.1.to_string(),
        owner_phone: None,
        clinic_name: clinic.0.to_string(),
        veterinarian: clinic.1.to_string(),
        claim_date: date(dates.0)?,
        incident_date: date(dates.1)?,
        status,
        claim_type,
        claim_amount: amounts.0,
        approved_amount: amounts.1,
        description: description.to_string(),
        documents: owned(documents),
        review_notes: None,
    })
}

pub fn claims() -> Seed<Claim> {
    Ok(vec![
        claim(
            1,
            ("Max", "Dog - Golden Retriever"),
            ("John Smith", "john.smith@email.com"),
            ("City Veterinary Clinic", "Dr. Sarah Johnson"),
            ("2024-01-15", "2024-01-10"),
            ClaimStatus::Pending,
            ClaimType::Emergency,
            (Money::usd(dec!(1250.00)), None),
            "Emergency surgery for foreign object ingestion",
            &["medical_report.pdf", "invoice.pdf", "xray_images.pdf"],
        )?,
        claim(
            2,
            ("Luna", "Cat - Persian"),
            ("Emily Davis", "emily.davis@email.com"),
            ("Pet Care Center", "Dr. Michael Brown"),
            ("2024-01-14", "2024-01-12"),
            ClaimStatus::UnderReview,
            ClaimType::Routine,
            (Money::usd(dec!(450.00)), None),
            "Dental cleaning and tooth extraction",
            &["dental_report.pdf", "treatment_invoice.pdf"],
        )?,
        claim(
            3,
            ("Charlie", "Dog - Labrador"),
            ("Robert Wilson", "robert.wilson@email.com"),
            ("Animal Health Clinic", "Dr. Lisa Anderson"),
            ("2024-01-13", "2024-01-08"),
            ClaimStatus::Processing,
            ClaimType::Accident,
            (Money::usd(dec!(2100.00)), Some(Money::usd(dec!(1890.00)))),
            "Fracture repair after car accident",
            &["emergency_report.pdf", "surgery_notes.pdf", "recovery_plan.pdf"],
        )?,
        claim(
            4,
            ("Bella", "Dog - German Shepherd"),
            ("Maria Garcia", "maria.garcia@email.com"),
            ("Westside Vet", "Dr. James Wilson"),
            ("2024-01-12", "2024-01-05"),
            ClaimStatus::Completed,
            ClaimType::Illness,
            (Money::usd(dec!(850.00)), Some(Money::usd(dec!(850.00)))),
            "Treatment for gastroenteritis",
            &["diagnosis_report.pdf", "treatment_summary.pdf"],
        )?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn payment(
    seq: u32,
    claim_id: &str,
    pet: &str,
    owner: (&str, &str),
    amount: Money,
    dates: (Option<&str>, &str),
    status: PaymentStatus,
    method: PaymentMethod,
    transaction_id: Option<&str>,
    description: &str,
    claim_type: ClaimType,
) -> Result<Payment, PortError> {
    Ok(Payment {
        id: PaymentId::new(seq),
        claim_id: claim_id.to_string(),
        pet_name: pet.to_string(),
        owner_name: owner.0.to_string(),
        owner_email: owner.1.to_string(),
        amount,
        payment_date: dates.0.map(date).transpose()?,
        due_date: date(dates.1)?,
        status,
        payment_method: method,
        transaction_id: transaction_id.map(str::to_string),
        description: description.to_string(),
        claim_type: claim_type.label().to_string(),
        notes: None,
    })
}

/// Payments for CLM-005 to CLM-007 refer to claims that are not on file
pub fn payments() -> Seed<Payment> {
    Ok(vec![
        payment(
            1, "CLM-004", "Bella", ("Maria Garcia", "maria.garcia@email.com"),
            Money::usd(dec!(850.00)), (Some("2024-01-16"), "2024-01-20"),
            PaymentStatus::Completed, PaymentMethod::BankTransfer, Some("TXN-20240116-001"),
            "Payment for gastroenteritis treatment claim", ClaimType::Illness,
        )?,
        payment(
            2, "CLM-003", "Charlie", ("Robert Wilson", "robert.wilson@email.com"),
            Money::usd(dec!(1890.00)), (None, "2024-01-18"),
            PaymentStatus::Pending, PaymentMethod::BankTransfer, None,
            "Payment for fracture repair claim", ClaimType::Accident,
        )?,
        payment(
            3, "CLM-005", "Rocky", ("David Johnson", "david.johnson@email.com"),
            Money::usd(dec!(675.00)), (Some("2024-01-15"), "2024-01-19"),
            PaymentStatus::Processing, PaymentMethod::DirectDeposit, Some("TXN-20240115-003"),
            "Payment for routine surgery claim", ClaimType::Surgery,
        )?,
        payment(
            4, "CLM-006", "Milo", ("Sarah Thompson", "sarah.thompson@email.com"),
            Money::usd(dec!(320.00)), (None, "2024-01-22"),
            PaymentStatus::Failed, PaymentMethod::BankTransfer, None,
            "Payment for dental treatment claim", ClaimType::Dental,
        )?,
        payment(
            5, "CLM-007", "Luna", ("Michael Brown", "michael.brown@email.com"),
            Money::usd(dec!(1250.00)), (Some("2024-01-14"), "2024-01-17"),
            PaymentStatus::Completed, PaymentMethod::DirectDeposit, Some("TXN-20240114-005"),
            "Payment for emergency treatment claim", ClaimType::Emergency,
        )?,
    ])
}

pub fn batches() -> Seed<PaymentBatch> {
    let mut completed = PaymentBatch::new(
        BatchId::new(1),
        Money::usd(dec!(15750.00)),
        12,
        timestamp("2024-01-15T10:30:00Z")?,
    );
    completed.status = BatchStatus::Completed;
    completed.progress = 100;

    let mut processing = PaymentBatch::new(
        BatchId::new(2),
        Money::usd(dec!(8920.50)),
        7,
        timestamp("2024-01-15T14:15:00Z")?,
    );
    processing.status = BatchStatus::Processing;
    processing.progress = 65;

    Ok(vec![completed, processing])
}

#[allow(clippy::too_many_arguments)]
fn user(
    seq: u32,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    last_login: &str,
    created: &str,
    organization: Option<&str>,
) -> Result<User, PortError> {
    Ok(User {
        id: UserId::new(seq),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login: Some(date(last_login)?),
        created_date: date(created)?,
        organization: organization.map(str::to_string),
    })
}

pub fn users() -> Seed<User> {
    Ok(vec![
        user(1, "Dr. Sarah Johnson", "sarah.johnson@vetclinic.com", UserRole::Veterinarian,
            UserStatus::Active, "2024-01-16", "2023-12-01", Some("City Veterinary Clinic"))?,
        user(2, "John Smith", "john.smith@email.com", UserRole::PetOwner,
            UserStatus::Active, "2024-01-15", "2023-11-15", None)?,
        user(3, "Emily Davis", "emily.davis@insurance.com", UserRole::InsuranceAgent,
            UserStatus::Active, "2024-01-16", "2023-10-20", Some("VetInsure Pro"))?,
        user(4, "Dr. Michael Brown", "michael.brown@petcare.com", UserRole::Veterinarian,
            UserStatus::Inactive, "2024-01-10", "2023-09-05", Some("Pet Care Center"))?,
        user(5, "Admin User", "admin@vetinsure.com", UserRole::Admin,
            UserStatus::Active, "2024-01-16", "2023-08-01", Some("VetInsure Pro"))?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn veterinarian(
    seq: u32,
    name: &str,
    contact: (&str, &str),
    clinic: (&str, &str),
    specialization: &str,
    status: VetStatus,
    joined: &str,
    totals: (u32, u32),
) -> Result<Veterinarian, PortError> {
    Ok(Veterinarian {
        id: VetId::new(seq),
        name: name.to_string(),
        email: contact.0.to_string(),
        phone: Some(contact.1.to_string()),
        clinic_name: clinic.0.to_string(),
        address: Some(clinic.1.to_string()),
        license_number: format!("VET-2023-{:03}", seq),
        specialization: Some(specialization.to_string()),
        status,
        join_date: date(joined)?,
        total_claims: totals.0,
        total_applications: totals.1,
    })
}

pub fn veterinarians() -> Seed<Veterinarian> {
    Ok(vec![
        veterinarian(1, "Dr. Sarah Johnson", ("sarah.johnson@cityvets.com", "(555) 123-4567"),
            ("City Veterinary Clinic", "123 Main St, City, State 12345"), "General Practice",
            VetStatus::Active, "2023-12-01", (45, 67))?,
        veterinarian(2, "Dr. Michael Brown", ("michael.brown@petcare.com", "(555) 234-5678"),
            ("Pet Care Center", "456 Oak Ave, City, State 12345"), "Surgery",
            VetStatus::Active, "2023-11-15", (32, 48))?,
        veterinarian(3, "Dr. Lisa Anderson", ("lisa.anderson@animalhealth.com", "(555) 345-6789"),
            ("Animal Health Clinic", "789 Pine St, City, State 12345"), "Emergency Medicine",
            VetStatus::Active, "2023-10-20", (28, 35))?,
        veterinarian(4, "Dr. James Wilson", ("james.wilson@westvet.com", "(555) 456-7890"),
            ("Westside Vet", "321 Elm St, City, State 12345"), "Cardiology",
            VetStatus::Pending, "2024-01-10", (0, 2))?,
    ])
}

fn document(
    id: &str,
    title: &str,
    content: &str,
    version: &str,
    updated: (&str, &str),
) -> Result<TermsDocument, PortError> {
    Ok(TermsDocument {
        id: id.to_string(),
        title: title.to_string(),
        content: content.trim_end().to_string(),
        version: version
            .parse()
            .map_err(|e| PortError::internal(format!("bad seed version {}: {}", version, e)))?,
        last_updated: date(updated.0)?,
        updated_by: updated.1.to_string(),
        status: DocumentStatus::Active,
    })
}

pub fn terms_documents() -> Seed<TermsDocument> {
    Ok(vec![
        document("TERMS-001", "Terms and Conditions", TERMS_AND_CONDITIONS, "2.1", ("2024-01-15", "Admin User"))?,
        document("PRIVACY-001", "Privacy Policy", PRIVACY_POLICY, "1.3", ("2024-01-10", "Legal Team"))?,
    ])
}

