//! Party Management Domain
//!
//! This crate manages the people the back office deals with: staff and
//! partner user accounts, registered veterinarians, and the mock rules
//! used when someone signs in or registers.
//!
//! # User Lifecycle
//!
//! ```text
//! Active <-> Inactive
//!    \          /
//!     Suspended -> Active
//! ```
//!
//! # Veterinarian Lifecycle
//!
//! ```text
//! Pending Approval -> Active <-> Inactive
//! ```
//!
//! # Examples
//!
//! ```rust
//! use domain_party::account::LoginRequest;
//!
//! let session = LoginRequest {
//!     email: "admin@vetinsure.com".to_string(),
//!     password: "secret".to_string(),
//! }
//! .authenticate()
//! .unwrap();
//!
//! assert_eq!(session.role, "admin");
//! assert!(session.is_admin());
//! ```

pub mod user;
pub mod veterinarian;
pub mod account;
pub mod error;

pub use user::{filter_users, NewUser, User, UserRole, UserStatus};
pub use veterinarian::{filter_veterinarians, NewVeterinarian, Veterinarian, VetStatus};
pub use account::{LoginRequest, Registration, SessionUser, MIN_PASSWORD_LENGTH};
pub use error::PartyError;
