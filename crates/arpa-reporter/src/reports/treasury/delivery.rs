//! Async-job delivery pipeline: consume one report request, orchestrate the
//! report, upload the archive, and notify the requesting user.
//!
//! The pipeline performs no retries and no deduplication; redelivery of the
//! same message deliberately regenerates and re-mails the report. Backoff
//! and redelivery policy belong to the external message transport.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info};

use crate::config::ReportConfig;

use super::repository::{
    GrantsReadStore, MailError, ObjectStore, ObjectStoreError, ReportKind, ReportMailer,
    TemplateStore, UserDirectory,
};
use super::service::{ReportError, RequestContext, TreasuryReportService};

/// Inbound job message body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportJobRequest {
    pub user_id: String,
    pub period_id: String,
    pub tenant_id: String,
}

/// Terminal state of one consumed message. `Failed` means the job was
/// handled and abandoned here; whether it is redelivered is the transport's
/// decision, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Failed,
}

impl JobOutcome {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Upload(#[from] ObjectStoreError),
    #[error(transparent)]
    Email(#[from] MailError),
}

/// Consumes one report job end-to-end: orchestrator, object storage, mail.
pub struct ReportDelivery<R, T, S, M, U> {
    service: TreasuryReportService<R, T>,
    objects: Arc<S>,
    mailer: Arc<M>,
    users: Arc<U>,
    config: ReportConfig,
}

impl<R, T, S, M, U> ReportDelivery<R, T, S, M, U>
where
    R: GrantsReadStore,
    T: TemplateStore,
    S: ObjectStore,
    M: ReportMailer,
    U: UserDirectory,
{
    pub fn new(
        service: TreasuryReportService<R, T>,
        objects: Arc<S>,
        mailer: Arc<M>,
        users: Arc<U>,
        config: ReportConfig,
    ) -> Self {
        Self {
            service,
            objects,
            mailer,
            users,
            config,
        }
    }

    /// Generate the report, store it under
    /// `<tenantId>/<periodId>/<filename>`, and mail the download link.
    /// Upload and mail failures are logged in full and propagated.
    pub fn generate_and_send(
        &self,
        recipient_email: &str,
        period_id: &str,
        tenant_id: Option<&str>,
        ctx: &RequestContext,
    ) -> Result<(), DeliveryError> {
        let effective_tenant = tenant_id.unwrap_or(&ctx.tenant_id);

        info!(tenant_id = effective_tenant, "generating ARPA treasury report");
        let report = self.service.generate_report(period_id, tenant_id, ctx)?;
        info!("finished generating ARPA treasury report");

        let storage_key = format!("{effective_tenant}/{period_id}/{}", report.filename);

        info!(key = %storage_key, "uploading ARPA treasury report");
        if let Err(err) = self.objects.put_encrypted(&storage_key, &report.content) {
            error!(%err, "failed to upload ARPA treasury report");
            return Err(err.into());
        }

        info!("sending ARPA treasury report email");
        let url = self.config.export_url(&storage_key);
        if let Err(err) = self.mailer.send_report_link(recipient_email, &url) {
            error!(%err, "failed to send ARPA treasury report email");
            return Err(err.into());
        }

        Ok(())
    }

    /// Handle one inbound message body. Every early exit is logged; a
    /// failure past user resolution additionally triggers a best-effort
    /// failure notice to the requester.
    pub fn process_message(&self, body: &str) -> JobOutcome {
        let request: ReportJobRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(err) => {
                error!(%err, "error parsing report job request");
                return JobOutcome::Failed;
            }
        };

        let user = match self.users.get_user(&request.user_id) {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!(user_id = %request.user_id, "treasury report requested by an unknown user");
                return JobOutcome::Failed;
            }
            Err(err) => {
                error!(%err, "failed to resolve requesting user");
                return JobOutcome::Failed;
            }
        };

        let ctx = RequestContext {
            tenant_id: request.tenant_id.clone(),
        };
        match self.generate_and_send(
            &user.email,
            &request.period_id,
            Some(&request.tenant_id),
            &ctx,
        ) {
            Ok(()) => {
                info!("successfully completed treasury report job");
                JobOutcome::Completed
            }
            Err(err) => {
                error!(%err, "failed to generate and send treasury report");
                // best effort only; a second failure is logged and dropped
                if let Err(mail_err) = self.mailer.send_report_error(&user, ReportKind::Treasury) {
                    error!(%mail_err, "failed to send report failure notice");
                }
                JobOutcome::Failed
            }
        }
    }
}
