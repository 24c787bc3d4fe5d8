pub mod random;
pub mod rotating;

use crate::model::{AssignmentResult, Roster, Student, Target};

/// Pairs items and students by index, stopping at the shorter sequence.
fn pair<I>(items: I, students: &[&Student], roster: &Roster, target: &Target) -> Vec<AssignmentResult>
where
    I: IntoIterator<Item = String>,
{
    items
        .into_iter()
        .zip(students)
        .map(|(item, student)| AssignmentResult::new(item, student, roster, target))
        .collect()
}
