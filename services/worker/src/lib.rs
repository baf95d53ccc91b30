mod cli;
mod infra;

use arpa_reporter::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
