use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use arpa_reporter::error::AppError;
use arpa_reporter::reports::treasury::{
    ApplicationSettings, GrantsReadStore, MailError, ObjectStore, ObjectStoreError, Record,
    ReportKind, ReportMailer, Row, StoreError, SubrecipientRow, TemplateError, TemplateStore, User,
    UserDirectory,
};

/// On-disk fixture consumed by the worker commands. One file carries the
/// tenant settings, period records, subrecipients and the user directory.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeedFile {
    #[serde(default)]
    pub(crate) settings: HashMap<String, ApplicationSettings>,
    #[serde(default)]
    pub(crate) records: Vec<Record>,
    #[serde(default)]
    pub(crate) subrecipients: Vec<SubrecipientRow>,
    #[serde(default)]
    pub(crate) users: Vec<User>,
}

/// Read store and user directory backed by a seed file. The seed holds one
/// reporting period's data, so the period arguments only scope logging.
pub(crate) struct JsonSeedStore {
    seed: SeedFile,
}

impl JsonSeedStore {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let seed = serde_json::from_str(&raw)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(Self { seed })
    }
}

impl GrantsReadStore for JsonSeedStore {
    fn records_for_reporting_period(
        &self,
        _period_id: &str,
        _tenant_id: &str,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(self.seed.records.clone())
    }

    fn list_recipients_for_reporting_period(
        &self,
        _period_id: &str,
    ) -> Result<Vec<SubrecipientRow>, StoreError> {
        Ok(self.seed.subrecipients.clone())
    }

    fn application_settings(&self, tenant_id: &str) -> Result<ApplicationSettings, StoreError> {
        self.seed
            .settings
            .get(tenant_id)
            .cloned()
            .ok_or_else(|| StoreError::MissingSettings(tenant_id.to_string()))
    }
}

impl UserDirectory for JsonSeedStore {
    fn get_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .seed
            .users
            .iter()
            .find(|user| user.id == user_id)
            .cloned())
    }
}

/// Template store reading `<root>/<category>.csv`. Empty cells become
/// blanks so reserved columns survive the round trip.
pub(crate) struct CsvTemplateDir {
    root: PathBuf,
}

impl CsvTemplateDir {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TemplateStore for CsvTemplateDir {
    fn get_template(&self, category: &str) -> Result<Vec<Row>, TemplateError> {
        let path = self.root.join(format!("{category}.csv"));
        if !path.is_file() {
            return Err(TemplateError::NotFound(category.to_string()));
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|err| TemplateError::Unreadable {
                category: category.to_string(),
                detail: err.to_string(),
            })?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| TemplateError::Unreadable {
                category: category.to_string(),
                detail: err.to_string(),
            })?;
            rows.push(
                record
                    .iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            None
                        } else {
                            Some(cell.to_string())
                        }
                    })
                    .collect(),
            );
        }
        Ok(rows)
    }
}

/// Filesystem-backed archive store for local runs. At-rest encryption is
/// the volume's concern here, not this adapter's.
pub(crate) struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn object_path(&self, key: &str) -> PathBuf {
        key.split('/').fold(self.root.clone(), |path, part| {
            path.join(part)
        })
    }
}

impl ObjectStore for FsObjectStore {
    fn put_encrypted(&self, key: &str, body: &[u8]) -> Result<(), ObjectStoreError> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| ObjectStoreError::Transport(err.to_string()))?;
        }
        fs::write(&path, body).map_err(|err| ObjectStoreError::Transport(err.to_string()))
    }
}

/// Mailer that records outbound notices in the log stream instead of
/// sending them. Stands in for the SES client outside production.
pub(crate) struct LogMailer;

impl ReportMailer for LogMailer {
    fn send_report_link(&self, recipient: &str, url: &str) -> Result<(), MailError> {
        info!(recipient, url, "report ready notice");
        Ok(())
    }

    fn send_report_error(&self, user: &User, kind: ReportKind) -> Result<(), MailError> {
        info!(recipient = %user.email, kind = kind.label(), "report failure notice");
        Ok(())
    }
}
