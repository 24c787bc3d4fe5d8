use itertools::Itertools;

use crate::error::{AssignmentError, GenderCounts};
use crate::model::{Gender, Roster, Student};

/// Students split into the four gender buckets, in [`Gender::ALL`] order.
/// Students without a recognized gender are not in any bucket.
#[derive(Debug, Clone, Default)]
pub struct GenderPartition<'a> {
    buckets: [Vec<&'a Student>; 4],
}

/// Which buckets rotate in lockstep this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePlan {
    pub matching_count: usize,
    pub matching: Vec<Gender>,
    /// Nonzero buckets of some other size, assigned best-effort afterwards.
    pub remaining: Vec<Gender>,
}

const fn bucket_index(gender: Gender) -> usize {
    match gender {
        Gender::Male => 0,
        Gender::Female => 1,
        Gender::Other => 2,
        Gender::PreferNotToSay => 3,
    }
}

impl<'a> GenderPartition<'a> {
    /// Keeps the order of `students` inside each bucket.
    #[must_use]
    pub fn new(students: &[&'a Student], roster: &Roster) -> Self {
        let mut partition = Self::default();
        for &student in students {
            if let Some(gender) = roster.get(&student.id).and_then(|entry| entry.gender) {
                partition.buckets[bucket_index(gender)].push(student);
            }
        }
        partition
    }

    #[must_use]
    pub fn bucket(&self, gender: Gender) -> &[&'a Student] {
        &self.buckets[bucket_index(gender)]
    }

    #[must_use]
    pub fn counts(&self) -> GenderCounts {
        GenderCounts {
            male: self.bucket(Gender::Male).len(),
            female: self.bucket(Gender::Female).len(),
            other: self.bucket(Gender::Other).len(),
            prefer_not_to_say: self.bucket(Gender::PreferNotToSay).len(),
        }
    }

    pub fn balance_plan(&self) -> Result<BalancePlan, AssignmentError> {
        balance_plan(self.counts())
    }
}

/// Finds the first bucket size, in scan order, that two or more nonzero
/// buckets share. The first shared size wins even if a larger one is also
/// shared.
pub fn balance_plan(counts: GenderCounts) -> Result<BalancePlan, AssignmentError> {
    let nonzero = || {
        Gender::ALL
            .into_iter()
            .filter(move |gender| counts.get(*gender) > 0)
    };
    let matching_count = nonzero()
        .map(|gender| counts.get(gender))
        .unique()
        .find(|size| nonzero().filter(|gender| counts.get(*gender) == *size).count() >= 2)
        .ok_or(AssignmentError::GenderBalanceInfeasible(counts))?;
    let (matching, remaining) =
        nonzero().partition(|gender| counts.get(*gender) == matching_count);
    Ok(BalancePlan {
        matching_count,
        matching,
        remaining,
    })
}
