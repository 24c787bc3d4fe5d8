//! Decides which student gets which classroom job.
//!
//! Two strategies are available. [`strategy::random`] shuffles the items for
//! every target and keeps no state. [`strategy::rotating`] walks every target
//! through a fixed rotation, one step per recorded run, so that over enough
//! runs every student holds every job. The rotation position of a target is
//! never stored, it is recounted from the run history each time
//! ([`history::derive_offsets`]).
//!
//! [`orchestrator::Orchestrator`] ties a strategy to a [`store::RunStore`] and
//! writes all runs of one invocation at once, or none of them.

pub mod assigner;
pub mod error;
pub mod gender;
pub mod history;
pub mod model;
pub mod orchestrator;
pub mod randomizer;
pub mod rotate;
pub mod shuffle;
pub mod store;
pub mod strategy;

pub use assigner::{RandomAssigner, RotatingAssigner};
pub use error::{AssignmentError, GenderCounts};
pub use history::{HistoricalRun, RunRecord};
pub use model::{AssignmentResult, Gender, Group, Roster, RosterEntry, Student, Target, Team};
pub use orchestrator::{OrchestrationError, Orchestrator, StagedRun};
pub use rotate::Direction;
pub use store::{MemoryRunStore, RunStore, StoreError};
