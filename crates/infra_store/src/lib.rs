//! In-memory storage
//!
//! This crate implements the [`core_kernel::Repository`] port on top of
//! tokio `RwLock`-guarded vectors and loads the mock back-office records.
//! Nothing is persisted; every restart begins from the seed data.
//!
//! # Example
//!
//! ```rust,ignore
//! use core_kernel::Repository;
//! use infra_store::Store;
//!
//! let store = Store::seeded()?;
//! let claims = store.claims.list().await?;
//! let id = store.claims.next_id().await;
//! ```

pub mod memory;
pub mod seed;
pub mod store;

pub use memory::InMemoryRepository;
pub use store::Store;
