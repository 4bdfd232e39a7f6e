//! Request and response bodies

pub mod auth;
pub mod policy;
pub mod claims;
pub mod billing;
pub mod party;

use serde::{Deserialize, Serialize};

use core_kernel::Transition;

/// Query string of the list screens
#[derive(Debug, Default, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ListQuery<T> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub tab: T,
}

/// Search box only
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// A list together with the figures shown above it
#[derive(Debug, Serialize)]
pub struct SummarizedList<T, S> {
    pub total: usize,
    pub items: Vec<T>,
    pub summary: S,
}

/// Current status and the actions offered from it
#[derive(Debug, Serialize)]
pub struct ActionsResponse<S: 'static> {
    pub status: S,
    pub label: &'static str,
    pub actions: &'static [Transition<S>],
}

/// Plain status change
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}
