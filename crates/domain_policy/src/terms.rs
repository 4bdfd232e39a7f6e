//! Terms and conditions documents
//!
//! Policy wording (terms and conditions, privacy policy) is maintained by
//! administrators. Each saved edit bumps the minor version.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use core_kernel::validation::missing_fields;
use core_kernel::{lifecycle, Lifecycle, Record, Transition};

use crate::error::TermsError;

/// Publication status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Active,
    Draft,
    Archived,
}

lifecycle! {
    DocumentStatus, "document";
    Active => "active", "Active", [("archive", Archived)];
    Draft => "draft", "Draft", [("publish", Active), ("archive", Archived)];
    Archived => "archived", "Archived", [];
}

/// A `major.minor` document version such as `2.1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(Decimal);

impl DocumentVersion {
    pub fn initial() -> Self {
        Self(dec!(1.0))
    }

    /// The version after one more edit
    pub fn bump(&self) -> Self {
        Self((self.0 + dec!(0.1)).round_dp(1))
    }
}

impl fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl FromStr for DocumentVersion {
    type Err = TermsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| TermsError::InvalidVersion(s.to_string()))?;
        if value.is_sign_negative() {
            return Err(TermsError::InvalidVersion(s.to_string()));
        }
        Ok(Self(value.round_dp(1)))
    }
}

/// A policy document shown to customers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsDocument {
    /// Slug such as `TERMS-001`
    pub id: String,
    pub title: String,
    pub content: String,
    pub version: DocumentVersion,
    pub last_updated: NaiveDate,
    pub updated_by: String,
    pub status: DocumentStatus,
}

impl TermsDocument {
    /// Creates a new draft at version 1.0
    pub fn draft(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        today: NaiveDate,
    ) -> Result<Self, TermsError> {
        let title = title.into();
        let content = content.into();
        let missing = missing_fields(&[("title", title.as_str()), ("content", content.as_str())]);
        if !missing.is_empty() {
            return Err(TermsError::MissingRequiredFields(missing));
        }

        Ok(Self {
            id: id.into(),
            title,
            content,
            version: DocumentVersion::initial(),
            last_updated: today,
            updated_by: author.into(),
            status: DocumentStatus::Draft,
        })
    }

    /// Saves an edit of the document body
    pub fn revise(&mut self, content: impl Into<String>, editor: impl Into<String>, today: NaiveDate) -> Result<(), TermsError> {
        if self.status == DocumentStatus::Archived {
            return Err(TermsError::Archived(self.id.clone()));
        }
        let content = content.into();
        if content.trim().is_empty() {
            return Err(TermsError::MissingRequiredFields(vec!["content".to_string()]));
        }

        self.content = content;
        self.version = self.version.bump();
        self.last_updated = today;
        self.updated_by = editor.into();

        info!(document_id = %self.id, version = %self.version, "Terms document revised");
        Ok(())
    }

    pub fn available_actions(&self) -> &'static [Transition<DocumentStatus>] {
        self.status.transitions()
    }

    pub fn update_status(&mut self, target: DocumentStatus) -> Result<(), TermsError> {
        if !self.status.can_transition_to(target) {
            return Err(TermsError::InvalidStatusTransition {
                from: self.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        info!(
            document_id = %self.id,
            from = self.status.as_str(),
            to = target.as_str(),
            "Document status changed"
        );
        self.status = target;
        Ok(())
    }

    pub fn publish(&mut self) -> Result<(), TermsError> {
        self.update_status(DocumentStatus::Active)
    }

    pub fn archive(&mut self) -> Result<(), TermsError> {
        self.update_status(DocumentStatus::Archived)
    }
}

impl Record for TermsDocument {
    type Id = String;
    const ENTITY: &'static str = "Document";

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn document(version: &str) -> TermsDocument {
        TermsDocument {
            id: "TERMS-001".to_string(),
            title: "Terms and Conditions".to_string(),
            content: "1. DEFINITIONS".to_string(),
            version: version.parse().unwrap(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            updated_by: "Admin User".to_string(),
            status: DocumentStatus::Active,
        }
    }

    #[test]
    fn test_revise_bumps_minor_version() {
        let mut doc = document("2.1");
        doc.revise("1. DEFINITIONS (updated)", "admin@vetinsure.com", today()).unwrap();
        assert_eq!(doc.version.to_string(), "2.2");
        assert_eq!(doc.last_updated, today());
        assert_eq!(doc.updated_by, "admin@vetinsure.com");
    }

    #[test]
    fn test_version_rolls_over_to_next_major() {
        let mut doc = document("1.9");
        doc.revise("text", "Legal Team", today()).unwrap();
        assert_eq!(doc.version.to_string(), "2.0");
    }

    #[test]
    fn test_archived_documents_are_read_only() {
        let mut doc = document("1.3");
        doc.archive().unwrap();
        assert!(matches!(doc.revise("x", "Admin", today()), Err(TermsError::Archived(_))));
        assert!(doc.publish().is_err());
    }

    #[test]
    fn test_draft_publish() {
        let mut doc = TermsDocument::draft("DOC-003", "Refund Policy", "Refunds...", "Admin", today()).unwrap();
        assert_eq!(doc.version.to_string(), "1.0");
        assert_eq!(doc.status, DocumentStatus::Draft);
        doc.publish().unwrap();
        assert_eq!(doc.status, DocumentStatus::Active);
    }

    #[test]
    fn test_version_serializes_as_string() {
        let json = serde_json::to_string(&document("2.1").version).unwrap();
        assert_eq!(json, "\"2.1\"");
    }
}
