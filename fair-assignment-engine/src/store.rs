use std::error::Error;

use tokio::sync::Mutex;

use crate::history::{HistoricalRun, RunRecord};

#[derive(thiserror::Error, Debug)]
#[error("run store failed: {0}")]
pub struct StoreError(#[source] Box<dyn Error + Send + Sync>);

impl StoreError {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Box::new(error))
    }
}

/// Where rotating runs are kept between invocations.
#[allow(async_fn_in_trait)]
pub trait RunStore {
    /// Every run recorded for the assigner, oldest first.
    async fn load_history(&self, assigner_id: &str) -> Result<Vec<HistoricalRun>, StoreError>;

    /// Writes all records or none of them.
    async fn write_batch(&self, records: Vec<RunRecord>) -> Result<(), StoreError>;
}

impl<S: RunStore> RunStore for &S {
    async fn load_history(&self, assigner_id: &str) -> Result<Vec<HistoricalRun>, StoreError> {
        (**self).load_history(assigner_id).await
    }

    async fn write_batch(&self, records: Vec<RunRecord>) -> Result<(), StoreError> {
        (**self).write_batch(records).await
    }
}

/// Append-only store kept in memory.
#[derive(Debug, Default)]
pub struct MemoryRunStore {
    runs: Mutex<Vec<RunRecord>>,
}

impl MemoryRunStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_runs(runs: Vec<RunRecord>) -> Self {
        Self {
            runs: Mutex::new(runs),
        }
    }

    pub async fn runs(&self) -> Vec<RunRecord> {
        self.runs.lock().await.clone()
    }
}

impl RunStore for MemoryRunStore {
    async fn load_history(&self, assigner_id: &str) -> Result<Vec<HistoricalRun>, StoreError> {
        Ok(self
            .runs
            .lock()
            .await
            .iter()
            .filter(|run| run.assigner_id == assigner_id)
            .map(HistoricalRun::from)
            .collect())
    }

    async fn write_batch(&self, records: Vec<RunRecord>) -> Result<(), StoreError> {
        self.runs.lock().await.extend(records);
        Ok(())
    }
}
