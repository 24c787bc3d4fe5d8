use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom as _;
use rand::Rng;
use serde::Deserialize;

use crate::model::Student;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub student_id: String,
    pub student_name: String,
    pub position: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PickerRound {
    #[serde(default)]
    pub picks: Vec<Pick>,
}

impl PickerRound {
    /// Students not yet picked in this round, in their original order.
    #[must_use]
    pub fn unpicked<'a>(&self, students: &[&'a Student]) -> Vec<&'a Student> {
        let picked: HashSet<&str> = self.picks.iter().map(|pick| pick.student_id.as_str()).collect();
        students
            .iter()
            .copied()
            .filter(|student| !picked.contains(student.id.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPickStats {
    pub student_id: String,
    pub student_name: String,
    /// position -> times picked there
    pub position_counts: BTreeMap<u32, usize>,
    pub total_picks: usize,
}

pub fn pick_random<'a, T, R>(available: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    available.choose(rng)
}

/// Sorted by student id.
#[must_use]
pub fn pick_stats(rounds: &[PickerRound]) -> Vec<StudentPickStats> {
    rounds
        .iter()
        .flat_map(|round| &round.picks)
        .fold(BTreeMap::new(), |mut acc: BTreeMap<&str, StudentPickStats>, pick| {
            let stats = acc.entry(&pick.student_id).or_insert_with(|| StudentPickStats {
                student_id: pick.student_id.clone(),
                student_name: pick.student_name.clone(),
                position_counts: BTreeMap::new(),
                total_picks: 0,
            });
            *stats.position_counts.entry(pick.position).or_default() += 1;
            stats.total_picks += 1;
            acc
        })
        .into_values()
        .collect()
}
