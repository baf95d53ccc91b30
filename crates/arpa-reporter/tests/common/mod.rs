#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use arpa_reporter::config::ReportConfig;
use arpa_reporter::reports::treasury::{
    ApplicationSettings, GrantsReadStore, MailError, ObjectStore, ObjectStoreError, Record,
    ReportDelivery, ReportKind, ReportMailer, Row, StoreError, SubrecipientRow, TemplateError,
    TemplateStore, TreasuryReportService, User, UserDirectory, CATEGORIES,
};

/// Record-set-backed read store; settings default to a single tenant "1"
/// titled "State of Iowa".
#[derive(Default)]
pub struct InMemoryGrantsStore {
    pub records: Vec<Record>,
    pub subrecipients: Vec<SubrecipientRow>,
    pub settings: HashMap<String, ApplicationSettings>,
}

impl InMemoryGrantsStore {
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut settings = HashMap::new();
        settings.insert(
            "1".to_string(),
            ApplicationSettings {
                title: "State of Iowa".to_string(),
            },
        );
        Self {
            records,
            subrecipients: Vec::new(),
            settings,
        }
    }
}

impl GrantsReadStore for InMemoryGrantsStore {
    fn records_for_reporting_period(
        &self,
        _period_id: &str,
        _tenant_id: &str,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.clone())
    }

    fn list_recipients_for_reporting_period(
        &self,
        _period_id: &str,
    ) -> Result<Vec<SubrecipientRow>, StoreError> {
        Ok(self.subrecipients.clone())
    }

    fn application_settings(&self, tenant_id: &str) -> Result<ApplicationSettings, StoreError> {
        self.settings
            .get(tenant_id)
            .cloned()
            .ok_or_else(|| StoreError::MissingSettings(tenant_id.to_string()))
    }
}

/// Single header row per category, sized to the category schema.
pub struct StubTemplates;

impl TemplateStore for StubTemplates {
    fn get_template(&self, category: &str) -> Result<Vec<Row>, TemplateError> {
        let def = CATEGORIES
            .iter()
            .find(|def| def.name == category)
            .ok_or_else(|| TemplateError::NotFound(category.to_string()))?;
        let header: Row = (0..def.columns.len())
            .map(|index| Some(format!("{category} header {index}")))
            .collect();
        Ok(vec![header])
    }
}

/// Template store whose headers never match any schema width.
pub struct MisconfiguredTemplates;

impl TemplateStore for MisconfiguredTemplates {
    fn get_template(&self, _category: &str) -> Result<Vec<Row>, TemplateError> {
        Ok(vec![vec![Some("lonely header".to_string())]])
    }
}

#[derive(Default)]
pub struct RecordingObjectStore {
    pub puts: Mutex<Vec<(String, Vec<u8>)>>,
    pub fail: bool,
}

impl ObjectStore for RecordingObjectStore {
    fn put_encrypted(&self, key: &str, body: &[u8]) -> Result<(), ObjectStoreError> {
        if self.fail {
            return Err(ObjectStoreError::Transport("bucket unreachable".to_string()));
        }
        self.puts
            .lock()
            .expect("object store mutex poisoned")
            .push((key.to_string(), body.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub links: Mutex<Vec<(String, String)>>,
    pub failures: Mutex<Vec<(String, &'static str)>>,
    pub fail_link: bool,
}

impl ReportMailer for RecordingMailer {
    fn send_report_link(&self, recipient: &str, url: &str) -> Result<(), MailError> {
        if self.fail_link {
            return Err(MailError::Transport("smtp refused".to_string()));
        }
        self.links
            .lock()
            .expect("mailer mutex poisoned")
            .push((recipient.to_string(), url.to_string()));
        Ok(())
    }

    fn send_report_error(&self, user: &User, kind: ReportKind) -> Result<(), MailError> {
        self.failures
            .lock()
            .expect("mailer mutex poisoned")
            .push((user.email.clone(), kind.label()));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUsers {
    pub users: HashMap<String, User>,
}

impl InMemoryUsers {
    pub fn single(id: &str, email: &str) -> Self {
        let mut users = HashMap::new();
        users.insert(
            id.to_string(),
            User {
                id: id.to_string(),
                email: email.to_string(),
            },
        );
        Self { users }
    }
}

impl UserDirectory for InMemoryUsers {
    fn get_user(&self, user_id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(user_id).cloned())
    }
}

pub fn report_config() -> ReportConfig {
    ReportConfig {
        api_domain: "https://grants.example.gov".to_string(),
    }
}

pub fn service(
    store: Arc<InMemoryGrantsStore>,
) -> TreasuryReportService<InMemoryGrantsStore, StubTemplates> {
    TreasuryReportService::new(store, Arc::new(StubTemplates))
}

#[allow(clippy::type_complexity)]
pub fn delivery(
    store: Arc<InMemoryGrantsStore>,
    objects: Arc<RecordingObjectStore>,
    mailer: Arc<RecordingMailer>,
    users: Arc<InMemoryUsers>,
) -> ReportDelivery<
    InMemoryGrantsStore,
    StubTemplates,
    RecordingObjectStore,
    RecordingMailer,
    InMemoryUsers,
> {
    ReportDelivery::new(service(store), objects, mailer, users, report_config())
}

/// Build a record from inline JSON, the same shape the wire carries.
pub fn record_from_json(value: serde_json::Value) -> Record {
    serde_json::from_value(value).expect("record fixture parses")
}
