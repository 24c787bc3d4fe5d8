use chrono::Utc;
use itertools::Itertools as _;
use rand::Rng;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::assigner::{RandomAssigner, RotatingAssigner};
use crate::error::AssignmentError;
use crate::history::{derive_offsets, RunRecord};
use crate::model::{AssignmentResult, Roster, Target};
use crate::store::{RunStore, StoreError};
use crate::strategy::{random, rotating};

#[derive(thiserror::Error, Debug)]
pub enum OrchestrationError {
    /// A target could not be assigned, nothing was written.
    #[error("{source}")]
    Assignment {
        target_id: Option<String>,
        source: AssignmentError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to serialize run results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Computed rotating runs that have not been written yet. Dropping this
/// instead of committing it leaves the rotation where it was.
#[derive(Debug, Clone, Default)]
pub struct StagedRun {
    pub results: Vec<AssignmentResult>,
    pub records: Vec<RunRecord>,
}

/// Runs an assigner over a selection of targets and records the outcome.
#[derive(Debug)]
pub struct Orchestrator<S> {
    store: S,
}

impl<S: RunStore> Orchestrator<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Computes every target's next rotation step from the stored history.
    ///
    /// Stops at the first target that fails. One run record is staged per
    /// distinct target that produced results, repeated targets are skipped.
    #[instrument(skip_all, fields(assigner.id = %assigner.id, targets = targets.len()))]
    pub async fn stage_rotating(
        &self,
        assigner: &RotatingAssigner,
        targets: &[Target],
        roster: &Roster,
    ) -> Result<StagedRun, OrchestrationError> {
        if targets.is_empty() {
            return Err(OrchestrationError::Assignment {
                target_id: None,
                source: AssignmentError::NoTarget,
            });
        }

        let history = self.store.load_history(&assigner.id).await?;
        let offsets = derive_offsets(&history);
        let run_date = Utc::now();

        let mut staged = StagedRun::default();
        // a target listed twice still advances by one
        for target in targets.iter().unique_by(|target| target.id().to_owned()) {
            let offset = offsets.get(target.id()).copied().unwrap_or(0);
            let results = rotating::assign(assigner, Some(target), roster, offset).map_err(
                |source| {
                    warn!(target.id = target.id(), %source, "rotating assignment failed");
                    OrchestrationError::Assignment {
                        target_id: Some(target.id().to_owned()),
                        source,
                    }
                },
            )?;
            if results.is_empty() {
                continue;
            }
            staged.records.push(RunRecord {
                id: Uuid::new_v4(),
                run_date,
                results: serde_json::to_string(&results)?,
                total_runs: offset + 1,
                target_id: target.id().to_owned(),
                assigner_id: assigner.id.clone(),
                class_id: assigner.class_id.clone(),
            });
            staged.results.extend(results);
        }
        Ok(staged)
    }

    /// Writes all staged records in one batch.
    pub async fn commit(&self, staged: StagedRun) -> Result<Vec<AssignmentResult>, OrchestrationError> {
        if !staged.records.is_empty() {
            let runs = staged.records.len();
            self.store.write_batch(staged.records).await?;
            info!(runs, "recorded rotating runs");
        }
        Ok(staged.results)
    }

    pub async fn run_rotating(
        &self,
        assigner: &RotatingAssigner,
        targets: &[Target],
        roster: &Roster,
    ) -> Result<Vec<AssignmentResult>, OrchestrationError> {
        let staged = self.stage_rotating(assigner, targets, roster).await?;
        self.commit(staged).await
    }
}

/// Random runs keep no history, persisting them is up to the caller.
pub fn run_random<R>(
    assigner: &RandomAssigner,
    targets: &[Target],
    roster: &Roster,
    rng: &mut R,
) -> Vec<AssignmentResult>
where
    R: Rng + ?Sized,
{
    random::assign(&assigner.items, targets, roster, rng)
}
