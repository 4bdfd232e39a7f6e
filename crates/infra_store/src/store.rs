//! One repository per record kind

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tracing::info;

use core_kernel::{HealthCheckResult, HealthCheckable, PortError};
use domain_billing::{Payment, PaymentBatch};
use domain_claims::Claim;
use domain_party::{User, Veterinarian};
use domain_policy::{Application, TermsDocument};

use crate::memory::InMemoryRepository;
use crate::seed;

/// All back-office records
#[derive(Debug, Clone)]
pub struct Store {
    pub applications: InMemoryRepository<Application>,
    pub claims: InMemoryRepository<Claim>,
    pub payments: InMemoryRepository<Payment>,
    pub batches: InMemoryRepository<PaymentBatch>,
    pub users: InMemoryRepository<User>,
    pub veterinarians: InMemoryRepository<Veterinarian>,
    pub terms: InMemoryRepository<TermsDocument>,
    documents_created: Arc<AtomicU32>,
}

impl Store {
    /// An empty store
    pub fn empty() -> Self {
        Self {
            applications: InMemoryRepository::new(),
            claims: InMemoryRepository::new(),
            payments: InMemoryRepository::new(),
            batches: InMemoryRepository::new(),
            users: InMemoryRepository::new(),
            veterinarians: InMemoryRepository::new(),
            terms: InMemoryRepository::new(),
            documents_created: Arc::new(AtomicU32::new(0)),
        }
    }

    /// A store loaded with the mock records
    pub fn seeded() -> Result<Self, PortError> {
        let store = Self {
            applications: InMemoryRepository::seeded(seed::applications()?),
            claims: InMemoryRepository::seeded(seed::claims()?),
            payments: InMemoryRepository::seeded(seed::payments()?),
            batches: InMemoryRepository::seeded(seed::batches()?),
            users: InMemoryRepository::seeded(seed::users()?),
            veterinarians: InMemoryRepository::seeded(seed::veterinarians()?),
            terms: InMemoryRepository::with_records(seed::terms_documents()?),
            documents_created: Arc::new(AtomicU32::new(0)),
        };
        info!("Store seeded with mock records");
        Ok(store)
    }

    /// Allocates an id for a new terms document, e.g. `DOC-001`
    pub fn next_document_id(&self) -> String {
        let sequence = self.documents_created.fetch_add(1, Ordering::SeqCst) + 1;
        format!("DOC-{:03}", sequence)
    }

    /// Health of every repository
    pub async fn health(&self) -> Vec<HealthCheckResult> {
        vec![
            self.applications.health_check().await,
            self.claims.health_check().await,
            self.payments.health_check().await,
            self.batches.health_check().await,
            self.users.health_check().await,
            self.veterinarians.health_check().await,
            self.terms.health_check().await,
        ]
    }
}
