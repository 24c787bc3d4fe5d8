//! Wiring between a request file, the configured run store and the engine.

pub mod error;
pub mod request;

use std::io;

use fair_assignment_engine::orchestrator::run_random;
use fair_assignment_engine::{AssignmentResult, Orchestrator, RunStore};
use rand::rngs::StdRng;
use rand::SeedableRng as _;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _};

use crate::error::AppError;
use crate::request::{AssignRequest, StrategyRequest};

/// Logs go to stderr so stdout only carries the report. `RUST_LOG` takes
/// precedence over the configured directive.
pub fn setup_logging(directive: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directive)?,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(filter),
        )
        .try_init()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Stage rotating runs without writing them.
    pub dry_run: bool,
    /// Seed for random runs, fresh entropy otherwise.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub target_id: String,
    pub total_runs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub results: Vec<AssignmentResult>,
    /// Rotating runs only.
    pub runs: Vec<RunSummary>,
    pub committed: bool,
}

pub async fn execute<S: RunStore>(
    request: AssignRequest,
    store: S,
    options: Options,
) -> Result<Report, AppError> {
    let roster = request.roster();
    match request.strategy {
        StrategyRequest::Random { assigner } => {
            let mut rng = options
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
            let results = run_random(&assigner, &request.targets, &roster, &mut rng);
            info!(assigner.id = %assigner.id, results = results.len(), "random assignment done");
            Ok(Report {
                results,
                runs: Vec::new(),
                committed: false,
            })
        }
        StrategyRequest::Rotating { assigner } => {
            let orchestrator = Orchestrator::new(store);
            let staged = orchestrator
                .stage_rotating(&assigner, &request.targets, &roster)
                .await?;
            let runs = staged
                .records
                .iter()
                .map(|record| RunSummary {
                    target_id: record.target_id.clone(),
                    total_runs: record.total_runs,
                })
                .collect();
            if options.dry_run {
                warn!(assigner.id = %assigner.id, "dry run, nothing is written");
                return Ok(Report {
                    results: staged.results,
                    runs,
                    committed: false,
                });
            }
            let results = orchestrator.commit(staged).await?;
            Ok(Report {
                results,
                runs,
                committed: true,
            })
        }
    }
}

pub async fn read_request(path: &std::path::Path) -> Result<AssignRequest, AppError> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(AssignRequest::from_json(&json)?)
}
