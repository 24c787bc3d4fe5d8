use core::fmt::{self, Display};

use thiserror::Error;

use crate::model::Gender;

/// Per-bucket student counts reported when genders cannot be balanced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
    pub other: usize,
    pub prefer_not_to_say: usize,
}

impl GenderCounts {
    #[must_use]
    pub const fn get(&self, gender: Gender) -> usize {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other => self.other,
            Gender::PreferNotToSay => self.prefer_not_to_say,
        }
    }
}

impl Display for GenderCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, gender) in Gender::ALL.into_iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", self.get(gender), gender.label())?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Failed to parse assigner items: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No items or students to assign ({items} items, {students} students)")]
    EmptyInput { items: usize, students: usize },
    #[error("No group or team was selected")]
    NoTarget,
    #[error(
        "Cannot balance genders with {0}. At least two genders need the same number of \
         students. Equalize two genders or turn off gender balancing."
    )]
    GenderBalanceInfeasible(GenderCounts),
}
