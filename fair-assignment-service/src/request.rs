use fair_assignment_engine::{RandomAssigner, Roster, RosterEntry, RotatingAssigner, Target};
use serde::Deserialize;

/// Everything one `assign` invocation needs, read from a JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignRequest {
    #[serde(flatten)]
    pub strategy: StrategyRequest,
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub roster: Vec<RosterRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum StrategyRequest {
    Random { assigner: RandomAssigner },
    Rotating { assigner: RotatingAssigner },
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterRow {
    pub id: String,
    #[serde(flatten)]
    pub entry: RosterEntry,
}

impl AssignRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Later rows win when an id is listed twice.
    #[must_use]
    pub fn roster(&self) -> Roster {
        self.roster
            .iter()
            .map(|row| (row.id.clone(), row.entry.clone()))
            .collect()
    }
}
