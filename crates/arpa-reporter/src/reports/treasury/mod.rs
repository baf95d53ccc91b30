//! Quarterly ARPA Treasury bulk-upload package generation.
//!
//! One report run classifies the tenant's records into up to 19 regulator
//! categories, projects each category into its fixed-schema rows, merges the
//! static template headers, serializes BOM+CRLF CSV files, and collects them
//! into a single zip archive. The delivery pipeline wraps a run with object
//! storage and email notification.

pub mod archive;
pub mod categories;
pub mod delivery;
pub mod domain;
pub mod format;
pub mod projector;
pub mod repository;
pub mod service;
pub mod sheet;

pub use archive::{build_archive, ArchiveError};
pub use categories::{CategoryDef, Column, Membership, CATEGORIES, PAYMENTS_TO_INDIVIDUALS};
pub use delivery::{DeliveryError, JobOutcome, ReportDelivery, ReportJobRequest};
pub use domain::{FieldValue, Record, RecordKind};
pub use projector::{classify, project_records, project_subrecipient, Row};
pub use repository::{
    ApplicationSettings, GrantsReadStore, MailError, ObjectStore, ObjectStoreError, ReportKind,
    ReportMailer, StoreError, SubrecipientRow, TemplateError, TemplateStore, User, UserDirectory,
};
pub use service::{
    report_filename, GeneratedReport, ReportError, RequestContext, TreasuryReportService,
};
pub use sheet::{serialize_sheet, SheetError};
