use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use arpa_reporter::config::AppConfig;
use arpa_reporter::error::AppError;
use arpa_reporter::reports::treasury::{
    JobOutcome, ReportDelivery, RequestContext, TreasuryReportService,
};
use arpa_reporter::telemetry;

use crate::infra::{CsvTemplateDir, FsObjectStore, JsonSeedStore, LogMailer};

#[derive(Parser, Debug)]
#[command(
    name = "ARPA Treasury Report Worker",
    about = "Generate and deliver quarterly ARPA Treasury bulk-upload packages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one report package and write the archive to disk
    Generate(GenerateArgs),
    /// Consume one report job message the way the queue worker does
    Process(ProcessArgs),
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Seed file with settings, records and subrecipients
    #[arg(long)]
    pub(crate) seed: PathBuf,
    /// Directory of per-category template CSVs
    #[arg(long)]
    pub(crate) templates: PathBuf,
    /// Reporting period identifier
    #[arg(long)]
    pub(crate) period: String,
    /// Tenant to generate for
    #[arg(long)]
    pub(crate) tenant: String,
    /// Directory the archive is written into
    #[arg(long, default_value = ".")]
    pub(crate) out: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ProcessArgs {
    /// Seed file with settings, records, subrecipients and users
    #[arg(long)]
    pub(crate) seed: PathBuf,
    /// Directory of per-category template CSVs
    #[arg(long)]
    pub(crate) templates: PathBuf,
    /// Directory standing in for the report bucket
    #[arg(long)]
    pub(crate) bucket: PathBuf,
    /// Inline JSON job message body
    #[arg(long, conflicts_with = "message_file")]
    pub(crate) message: Option<String>,
    /// File containing the JSON job message body
    #[arg(long)]
    pub(crate) message_file: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "starting report worker");

    match Cli::parse().command {
        Command::Generate(args) => run_generate(args),
        Command::Process(args) => run_process(args, config),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let store = Arc::new(JsonSeedStore::load(&args.seed)?);
    let templates = Arc::new(CsvTemplateDir::new(args.templates));
    let service = TreasuryReportService::new(store, templates);

    let ctx = RequestContext {
        tenant_id: args.tenant.clone(),
    };
    let report = service.generate_report(&args.period, None, &ctx)?;

    fs::create_dir_all(&args.out)?;
    let path = args.out.join(&report.filename);
    fs::write(&path, &report.content)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn run_process(args: ProcessArgs, config: AppConfig) -> Result<(), AppError> {
    let body = match (args.message, args.message_file) {
        (Some(body), None) => body,
        (None, Some(path)) => fs::read_to_string(path)?,
        _ => {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "provide exactly one of --message or --message-file",
            )))
        }
    };

    let store = Arc::new(JsonSeedStore::load(&args.seed)?);
    let templates = Arc::new(CsvTemplateDir::new(args.templates));
    let service = TreasuryReportService::new(store.clone(), templates);
    let delivery = ReportDelivery::new(
        service,
        Arc::new(FsObjectStore::new(args.bucket)),
        Arc::new(LogMailer),
        store,
        config.reports,
    );

    // Failed is a terminal state for the message, not for the worker, so
    // the process still exits cleanly. Redelivery is the queue's call.
    match delivery.process_message(&body) {
        JobOutcome::Completed => println!("report job completed"),
        JobOutcome::Failed => eprintln!("report job failed, see log output"),
    }
    Ok(())
}
