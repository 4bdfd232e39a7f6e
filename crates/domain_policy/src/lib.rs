//! Policy Domain
//!
//! Everything that happens before a pet is insured: applications submitted
//! by clinics, the quote round-trip with the underwriter, and the terms and
//! privacy documents the policy is issued under.
//!
//! # Application Lifecycle
//!
//! ```text
//! Pending -> Under Review -> Approved
//!                        \-> Rejected
//!                        \-> Quote Requested -> Quote Received -> Approved
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{Application, NewApplication};
//!
//! let mut application = Application::submit(id, form, today)?;
//! application.start_review()?;
//! application.request_quote()?;
//! application.record_quote(Money::usd(dec!(89.99)))?;
//! application.submit_to_client()?;
//! ```

pub mod application;
pub mod terms;
pub mod error;

pub use application::{
    Application, ApplicationStatus, ApplicationTab, NewApplication, PolicyType, Species,
    filter_applications,
};
pub use terms::{DocumentStatus, DocumentVersion, TermsDocument};
pub use error::{ApplicationError, TermsError};
