use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fair_assignment_config::get_config;
use fair_assignment_database::PgRunStore;
use fair_assignment_engine::MemoryRunStore;
use fair_assignment_service::error::AppError;
use fair_assignment_service::{execute, read_request, setup_logging, Options};
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(name = "assign")]
#[command(about = "Hand out classroom jobs from a request file", long_about = None)]
struct Cli {
    /// Request JSON file
    request: PathBuf,

    /// Compute rotating runs without recording them
    #[arg(long)]
    dry_run: bool,

    /// Seed for random assignment
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match program(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "assignment failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn program(cli: Cli) -> Result<(), AppError> {
    let config = get_config()?;
    setup_logging(&config.log)?;

    let request = read_request(&cli.request).await?;
    let options = Options {
        dry_run: cli.dry_run,
        seed: cli.seed,
    };
    let report = if let Some(database_url) = config.database_url.as_deref() {
        execute(request, PgRunStore::connect(database_url)?, options).await?
    } else {
        warn!("no database_url configured, runs are kept in memory only");
        execute(request, MemoryRunStore::new(), options).await?
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
