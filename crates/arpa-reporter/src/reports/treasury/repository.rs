//! Collaborator contracts consumed by the report engine.
//!
//! The database, template source, object store, and mail transport are all
//! external; the engine sees them only through these traits so it can be
//! exercised in isolation.

use serde::{Deserialize, Serialize};

use super::domain::Record;
use super::projector::Row;

/// Requesting user resolved from the job message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}

/// Per-tenant settings; `title` names the tenant in the report filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    pub title: String,
}

/// One subrecipient row as stored: the payload is a serialized object that
/// must be parsed before projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubrecipientRow {
    pub record: String,
}

/// Read access to the grants database for one report run.
pub trait GrantsReadStore: Send + Sync {
    fn records_for_reporting_period(
        &self,
        period_id: &str,
        tenant_id: &str,
    ) -> Result<Vec<Record>, StoreError>;

    fn list_recipients_for_reporting_period(
        &self,
        period_id: &str,
    ) -> Result<Vec<SubrecipientRow>, StoreError>;

    fn application_settings(&self, tenant_id: &str) -> Result<ApplicationSettings, StoreError>;
}

/// User lookup for the delivery pipeline.
pub trait UserDirectory: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<Option<User>, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("no settings found for tenant {0}")]
    MissingSettings(String),
}

/// Static regulator header rows for one category.
pub trait TemplateStore: Send + Sync {
    fn get_template(&self, category: &str) -> Result<Vec<Row>, TemplateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("no template registered for category {0}")]
    NotFound(String),
    #[error("template for category {category} is unreadable: {detail}")]
    Unreadable { category: String, detail: String },
}

/// Object storage for finished archives. Implementations are responsible
/// for at-rest encryption of everything written through this trait.
pub trait ObjectStore: Send + Sync {
    fn put_encrypted(&self, key: &str, body: &[u8]) -> Result<(), ObjectStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("object store transport failed: {0}")]
    Transport(String),
}

/// Kinds of asynchronously generated reports referenced in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Treasury,
}

impl ReportKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Treasury => "treasury",
        }
    }
}

/// Outbound notification hooks for the delivery pipeline.
pub trait ReportMailer: Send + Sync {
    /// Success notice carrying the download link for the stored archive.
    fn send_report_link(&self, recipient: &str, url: &str) -> Result<(), MailError>;

    /// Failure notice; carries no link, only the report kind.
    fn send_report_error(&self, user: &User, kind: ReportKind) -> Result<(), MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport failed: {0}")]
    Transport(String),
}
