use tracing::debug;

use super::pair;
use crate::assigner::{parse_items, RotatingAssigner};
use crate::error::AssignmentError;
use crate::gender::GenderPartition;
use crate::model::{AssignmentResult, Roster, Student, Target};
use crate::rotate::{rotate_by_n, Direction};

/// Rotates the longer of the two sequences by `offset` and pairs by index.
/// With equal lengths the students rotate.
fn rotate_and_pair(
    items: &[String],
    students: &[&Student],
    offset: usize,
    direction: Direction,
    roster: &Roster,
    target: &Target,
) -> Vec<AssignmentResult> {
    if students.len() >= items.len() {
        let rotated = rotate_by_n(students, offset, direction);
        pair(items.iter().cloned(), &rotated, roster, target)
    } else {
        pair(rotate_by_n(items, offset, direction), students, roster, target)
    }
}

/// Assigns items to one target, continuing the rotation `offset` runs in.
///
/// Only students on the live roster take part, ordered by roster number.
/// With gender balancing every bucket rotates with the same offset: the
/// buckets sharing a size first, then any other nonzero bucket.
pub fn assign(
    assigner: &RotatingAssigner,
    target: Option<&Target>,
    roster: &Roster,
    offset: usize,
) -> Result<Vec<AssignmentResult>, AssignmentError> {
    let target = target.ok_or(AssignmentError::NoTarget)?;
    let items = parse_items(&assigner.items)?;

    let mut students: Vec<&Student> = target
        .students()
        .into_iter()
        .filter(|student| roster.contains_key(&student.id))
        .collect();
    if items.is_empty() || students.is_empty() {
        return Err(AssignmentError::EmptyInput {
            items: items.len(),
            students: students.len(),
        });
    }
    students.sort_by_key(|student| {
        roster
            .get(&student.id)
            .and_then(|entry| entry.number)
            .unwrap_or(0)
    });

    let direction = assigner.direction;
    if !assigner.balance_gender {
        return Ok(rotate_and_pair(
            &items, &students, offset, direction, roster, target,
        ));
    }

    let partition = GenderPartition::new(&students, roster);
    let plan = partition.balance_plan()?;
    debug!(
        target.id = target.id(),
        matching_count = plan.matching_count,
        matching = ?plan.matching,
        remaining = ?plan.remaining,
        "balancing genders"
    );
    Ok(plan
        .matching
        .iter()
        .chain(&plan.remaining)
        .flat_map(|gender| {
            rotate_and_pair(
                &items,
                partition.bucket(*gender),
                offset,
                direction,
                roster,
                target,
            )
        })
        .collect())
}
