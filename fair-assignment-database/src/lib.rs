//! PostgreSQL backed [`RunStore`].

pub mod error;
pub mod models;
pub mod schema;

use diesel::prelude::*;
use diesel_async::pooled_connection::deadpool;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use error::DatabaseError;
use fair_assignment_engine::{HistoricalRun, RunRecord, RunStore, StoreError};
use schema::rotating_assigner_runs;
use tracing::debug;

use crate::models::{NewRunRow, RunRow};

pub type Pool = deadpool::Pool<AsyncPgConnection>;

// https://github.com/tokio-rs/axum/tree/main/examples/diesel-async-postgres

pub fn get_database_connection(database_url: &str) -> Result<Pool, DatabaseError> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Ok(Pool::builder(config).build()?)
}

#[derive(Clone)]
pub struct PgRunStore {
    pool: Pool,
}

impl PgRunStore {
    #[must_use]
    pub const fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        Ok(Self::new(get_database_connection(database_url)?))
    }

    pub async fn history(&self, assigner_id: &str) -> Result<Vec<HistoricalRun>, DatabaseError> {
        let mut connection = self.pool.get().await?;
        let rows = rotating_assigner_runs::table
            .filter(rotating_assigner_runs::assigner_id.eq(assigner_id))
            .order(rotating_assigner_runs::run_date.asc())
            .select(RunRow::as_select())
            .load(&mut connection)
            .await?;
        debug!(assigner.id = assigner_id, runs = rows.len(), "loaded run history");
        Ok(rows.into_iter().map(HistoricalRun::from).collect())
    }

    /// Inserts every record in one statement.
    pub async fn insert(&self, records: Vec<RunRecord>) -> Result<usize, DatabaseError> {
        if records.is_empty() {
            return Ok(0);
        }
        let rows = records
            .into_iter()
            .map(NewRunRow::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut connection = self.pool.get().await?;
        let inserted = diesel::insert_into(rotating_assigner_runs::table)
            .values(&rows)
            .execute(&mut connection)
            .await?;
        debug!(inserted, "stored rotating runs");
        Ok(inserted)
    }
}

impl RunStore for PgRunStore {
    async fn load_history(&self, assigner_id: &str) -> Result<Vec<HistoricalRun>, StoreError> {
        self.history(assigner_id).await.map_err(StoreError::new)
    }

    async fn write_batch(&self, records: Vec<RunRecord>) -> Result<(), StoreError> {
        self.insert(records).await.map(drop).map_err(StoreError::new)
    }
}
