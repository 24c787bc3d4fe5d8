use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A past run as read back from the run store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRun {
    #[serde(default)]
    pub target_id: Option<String>,
    /// Serialized `AssignmentResult` array.
    #[serde(default)]
    pub results: Option<String>,
}

/// A new run, staged for the batched write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub id: Uuid,
    pub run_date: DateTime<Utc>,
    pub results: String,
    pub total_runs: usize,
    pub target_id: String,
    pub assigner_id: String,
    pub class_id: String,
}

impl From<&RunRecord> for HistoricalRun {
    fn from(record: &RunRecord) -> Self {
        Self {
            target_id: Some(record.target_id.clone()),
            results: Some(record.results.clone()),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultTarget {
    #[serde(default, alias = "groupOrTeamId")]
    target_id: Option<String>,
}

/// Distinct target ids named in one run's results, or `None` if the results
/// can't be read.
fn referenced_targets(run: &HistoricalRun) -> Option<BTreeSet<String>> {
    let Some(results) = run.results.as_deref() else {
        return Some(BTreeSet::new());
    };
    match serde_json::from_str::<Vec<ResultTarget>>(results) {
        Ok(parsed) => Some(
            parsed
                .into_iter()
                .filter_map(|result| result.target_id)
                .filter(|id| !id.is_empty())
                .collect(),
        ),
        Err(error) => {
            tracing::error!(
                %error,
                run.target_id = ?run.target_id,
                "failed to parse run results, skipping run"
            );
            None
        }
    }
}

/// Number of earlier runs that included each target.
///
/// Targets are counted independently, a team that was left out of a run
/// keeps its count.
pub fn derive_offsets<'a, I>(runs: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a HistoricalRun>,
{
    runs.into_iter()
        .filter_map(referenced_targets)
        .flatten()
        .fold(HashMap::new(), |mut acc, target_id| {
            *acc.entry(target_id).or_default() += 1;
            acc
        })
}
