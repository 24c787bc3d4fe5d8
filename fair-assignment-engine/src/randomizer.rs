//! Classroom randomizer tools built on the same primitives as the assigners.

pub mod lineup;
pub mod picker;
