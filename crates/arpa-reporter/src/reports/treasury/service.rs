use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::archive::{build_archive, ArchiveError};
use super::categories::{CategoryDef, Membership, CATEGORIES};
use super::domain::FieldValue;
use super::projector::{project_records, project_subrecipient, Row};
use super::repository::{GrantsReadStore, StoreError, TemplateError, TemplateStore};
use super::sheet::{serialize_sheet, SheetError};

/// Per-call ambient context threaded explicitly through the engine. Carries
/// the tenant the request was made under, used when a call does not name a
/// tenant itself.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub tenant_id: String,
}

/// Finished report package; ephemeral, produced and consumed within one
/// invocation.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("must specify periodId")]
    MissingPeriodId,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Orchestrates one report run: fetch records once, walk all categories in
/// table order, and assemble the archive.
pub struct TreasuryReportService<R, T> {
    store: Arc<R>,
    templates: Arc<T>,
}

impl<R, T> TreasuryReportService<R, T>
where
    R: GrantsReadStore,
    T: TemplateStore,
{
    pub fn new(store: Arc<R>, templates: Arc<T>) -> Self {
        Self { store, templates }
    }

    /// Generate the package for one (period, tenant) pair. When `tenant_id`
    /// is absent the request context's tenant applies.
    pub fn generate_report(
        &self,
        period_id: &str,
        tenant_id: Option<&str>,
        ctx: &RequestContext,
    ) -> Result<GeneratedReport, ReportError> {
        self.generate_report_at(period_id, tenant_id, ctx, Utc::now())
    }

    /// Same as [`generate_report`](Self::generate_report) with an explicit
    /// generation instant, so callers and tests can pin the filename
    /// timestamp.
    pub fn generate_report_at(
        &self,
        period_id: &str,
        tenant_id: Option<&str>,
        ctx: &RequestContext,
        generated_at: DateTime<Utc>,
    ) -> Result<GeneratedReport, ReportError> {
        if period_id.trim().is_empty() {
            return Err(ReportError::MissingPeriodId);
        }
        let tenant_id = tenant_id.unwrap_or(&ctx.tenant_id);

        info!(period_id, tenant_id, "generating treasury report");

        let records = self
            .store
            .records_for_reporting_period(period_id, tenant_id)?;
        let settings = self.store.application_settings(tenant_id)?;
        let report_name = report_filename(&settings.title, period_id, generated_at);

        // Categories are processed strictly in sequence: a failure is then
        // attributable to exactly one category and no partial output
        // interleaves.
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();
        for def in CATEGORIES {
            let rows = self.rows_for_category(def, &records, period_id)?;
            if rows.is_empty() {
                info!(category = def.name, "no data for csv");
                continue;
            }

            let template = self.templates.get_template(def.name)?;
            let bytes = serialize_sheet(def, &template, &rows)?;
            info!(category = def.name, rows = rows.len(), "generated csv");
            entries.push((def.name.to_string(), bytes));
        }

        let content = build_archive(&entries)?;
        info!(
            entries = entries.len(),
            filename = %report_name,
            "treasury report assembled"
        );

        Ok(GeneratedReport {
            filename: format!("{report_name}.zip"),
            content,
        })
    }

    fn rows_for_category(
        &self,
        def: &CategoryDef,
        records: &[super::domain::Record],
        period_id: &str,
    ) -> Result<Vec<Row>, ReportError> {
        if !matches!(def.membership, Membership::Subrecipient) {
            return Ok(project_records(def, records));
        }

        // Subrecipients come from their own collaborator; each row carries a
        // serialized payload that has to be parsed before projection.
        // Unparseable payloads are upstream data defects, excluded like any
        // other malformed value.
        let mut rows = Vec::new();
        for subrecipient in self.store.list_recipients_for_reporting_period(period_id)? {
            match serde_json::from_str::<BTreeMap<String, FieldValue>>(&subrecipient.record) {
                Ok(content) => rows.push(project_subrecipient(def, &content)),
                Err(err) => {
                    warn!(category = def.name, %err, "skipping unparseable subrecipient record");
                }
            }
        }
        Ok(rows)
    }
}

/// `<tenant-title-with-dashes>-Period-<id>-ARPA-Treasury-Report-generated-<ts>`
/// with a UTC, second-precision timestamp. The `.zip` suffix is appended by
/// the orchestrator.
pub fn report_filename(title: &str, period_id: &str, generated_at: DateTime<Utc>) -> String {
    [
        title.replace(' ', "-"),
        "Period".to_string(),
        period_id.to_string(),
        "ARPA-Treasury-Report-generated".to_string(),
        generated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    ]
    .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_replaces_spaces_and_embeds_utc_timestamp() {
        let generated_at = Utc.with_ymd_and_hms(2023, 4, 1, 12, 30, 5).unwrap();
        assert_eq!(
            report_filename("State of Iowa", "5", generated_at),
            "State-of-Iowa-Period-5-ARPA-Treasury-Report-generated-2023-04-01T12:30:05"
        );
    }

    #[test]
    fn filename_keeps_already_dashed_titles() {
        let generated_at = Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(
            report_filename("Dubuque", "12", generated_at),
            "Dubuque-Period-12-ARPA-Treasury-Report-generated-2023-04-01T00:00:00"
        );
    }
}
