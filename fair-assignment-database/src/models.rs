use chrono::{DateTime, Utc};
use diesel::prelude::*;
use fair_assignment_engine::{HistoricalRun, RunRecord};

use crate::error::DatabaseError;
use crate::schema::rotating_assigner_runs;

/// The part of a stored run the rotation needs.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = rotating_assigner_runs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RunRow {
    pub target_id: String,
    pub results: String,
}

impl From<RunRow> for HistoricalRun {
    fn from(row: RunRow) -> Self {
        Self {
            target_id: Some(row.target_id),
            results: Some(row.results),
        }
    }
}

#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = rotating_assigner_runs)]
pub struct NewRunRow {
    pub id: String,
    pub assigner_id: String,
    pub class_id: String,
    pub target_id: String,
    pub run_date: DateTime<Utc>,
    pub results: String,
    pub total_runs: i64,
}

impl TryFrom<RunRecord> for NewRunRow {
    type Error = DatabaseError;

    fn try_from(record: RunRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id.to_string(),
            assigner_id: record.assigner_id,
            class_id: record.class_id,
            target_id: record.target_id,
            run_date: record.run_date,
            results: record.results,
            total_runs: i64::try_from(record.total_runs)?,
        })
    }
}
