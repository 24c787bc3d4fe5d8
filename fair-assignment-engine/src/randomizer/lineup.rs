use std::collections::{BTreeMap, HashMap};

use rand::seq::SliceRandom as _;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::AssignmentError;
use crate::model::{display_name, Roster, Student};
use crate::shuffle::shuffle_with;

const UNKNOWN: &str = "Unknown";

/// One saved line-up shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleRun {
    pub scope_type: String,
    pub scope_id: String,
    pub first_student_id: String,
    pub last_student_id: String,
    /// Serialized [`LineupEntry`] array.
    pub results: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupEntry {
    pub student_id: String,
    pub student_name: String,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentShuffleStats {
    pub student_id: String,
    pub student_name: String,
    pub first_count: usize,
    pub last_count: usize,
    pub total_shuffles: usize,
}

fn stats_entry<'m>(
    stats: &'m mut BTreeMap<String, StudentShuffleStats>,
    names: &HashMap<String, String>,
    student_id: &str,
    stored_name: Option<&str>,
) -> &'m mut StudentShuffleStats {
    stats
        .entry(student_id.to_owned())
        .or_insert_with(|| StudentShuffleStats {
            student_id: student_id.to_owned(),
            student_name: names
                .get(student_id)
                .map(String::as_str)
                .or(stored_name)
                .unwrap_or(UNKNOWN)
                .to_owned(),
            first_count: 0,
            last_count: 0,
            total_shuffles: 0,
        })
}

/// How often each student was first, last, or shuffled at all within one
/// scope. Sorted by student id.
#[must_use]
pub fn shuffle_stats(
    runs: &[ShuffleRun],
    scope_type: &str,
    scope_id: &str,
    names: &HashMap<String, String>,
) -> Vec<StudentShuffleStats> {
    let mut stats: BTreeMap<String, StudentShuffleStats> = BTreeMap::new();

    for run in runs
        .iter()
        .filter(|run| run.scope_type == scope_type && run.scope_id == scope_id)
    {
        match serde_json::from_str::<Vec<LineupEntry>>(&run.results) {
            Ok(lineup) => {
                for position in &lineup {
                    stats_entry(&mut stats, names, &position.student_id, Some(&position.student_name))
                        .total_shuffles += 1;
                }
            }
            Err(error) => tracing::error!(%error, "failed to parse shuffle results"),
        }
        stats_entry(&mut stats, names, &run.first_student_id, None).first_count += 1;
        stats_entry(&mut stats, names, &run.last_student_id, None).last_count += 1;
    }

    stats.into_values().collect()
}

/// Shuffles a line-up so the least-often-first student goes first and the
/// least-often-last student goes last. Ties are broken at random.
pub fn shuffle_with_constraints<'a, R>(
    students: &[&'a Student],
    stats: &[StudentShuffleStats],
    rng: &mut R,
) -> Vec<&'a Student>
where
    R: Rng + ?Sized,
{
    if students.len() <= 1 {
        return students.to_vec();
    }
    let by_id: HashMap<&str, &StudentShuffleStats> = stats
        .iter()
        .map(|stat| (stat.student_id.as_str(), stat))
        .collect();
    let first_count = |student: &Student| by_id.get(student.id.as_str()).map_or(0, |s| s.first_count);
    let last_count = |student: &Student| by_id.get(student.id.as_str()).map_or(0, |s| s.last_count);

    let Some(&first) = least_by(students, first_count).choose(&mut *rng) else {
        return students.to_vec();
    };
    let others: Vec<&Student> = students
        .iter()
        .copied()
        .filter(|student| student.id != first.id)
        .collect();
    let Some(&last) = least_by(&others, last_count).choose(&mut *rng) else {
        return students.to_vec();
    };
    let middle: Vec<&Student> = others
        .into_iter()
        .filter(|student| student.id != last.id)
        .collect();

    let mut lineup = Vec::with_capacity(students.len());
    lineup.push(first);
    lineup.extend(shuffle_with(middle, rng));
    lineup.push(last);
    lineup
}

fn least_by<'a, F>(students: &[&'a Student], count: F) -> Vec<&'a Student>
where
    F: Fn(&Student) -> usize,
{
    let min = students.iter().map(|student| count(*student)).min().unwrap_or(0);
    students
        .iter()
        .copied()
        .filter(|student| count(*student) == min)
        .collect()
}

/// Numbers an ordered line-up from 1 so it can be saved.
pub fn lineup_results(
    lineup: &[&Student],
    roster: &Roster,
) -> Result<Vec<LineupEntry>, AssignmentError> {
    if lineup.is_empty() {
        return Err(AssignmentError::EmptyInput {
            items: 0,
            students: 0,
        });
    }
    Ok(lineup
        .iter()
        .enumerate()
        .map(|(index, student)| LineupEntry {
            student_id: student.id.clone(),
            student_name: display_name(student, roster.get(&student.id)),
            position: index + 1,
        })
        .collect())
}
