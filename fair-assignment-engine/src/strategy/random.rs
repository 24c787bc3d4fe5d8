use rand::Rng;
use tracing::debug;

use super::pair;
use crate::assigner::parse_items_or_empty;
use crate::model::{AssignmentResult, Roster, Target};
use crate::shuffle::shuffle_with;

/// Hands out items uniformly at random within every target.
///
/// Items are reshuffled for each target. Malformed items give an empty
/// result instead of an error.
pub fn assign<R>(items: &str, targets: &[Target], roster: &Roster, rng: &mut R) -> Vec<AssignmentResult>
where
    R: Rng + ?Sized,
{
    let items = parse_items_or_empty(items);
    if items.is_empty() {
        return Vec::new();
    }

    targets
        .iter()
        .flat_map(|target| {
            let students = target.students();
            let shuffled = shuffle_with(items.clone(), &mut *rng);
            debug!(
                target.id = target.id(),
                items = shuffled.len(),
                students = students.len(),
                "random assignment"
            );
            pair(shuffled, &students, roster, target)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng as _;

    use super::*;
    use crate::model::{Group, Student, Team};

    fn students(ids: &[&str]) -> Vec<Student> {
        ids.iter().copied().map(Student::new).collect()
    }

    fn group(id: &str, ids: &[&str]) -> Target {
        Target::Group(Group {
            id: id.to_owned(),
            name: format!("Group {id}"),
            students: students(ids),
            teams: Vec::new(),
        })
    }

    #[test]
    fn truncates_to_shorter_side() {
        let mut rng = StdRng::seed_from_u64(1);
        let targets = [group("g1", &["a", "b", "c"]), group("g2", &["d"])];
        let results = assign(r#"["x", "y"]"#, &targets, &Roster::new(), &mut rng);
        assert_eq!(results.iter().filter(|r| r.target_id == "g1").count(), 2);
        assert_eq!(results.iter().filter(|r| r.target_id == "g2").count(), 1);
        let g1: Vec<&str> = results
            .iter()
            .filter(|r| r.target_id == "g1")
            .map(|r| r.student_id.as_str())
            .collect();
        assert_eq!(g1, ["a", "b"]);
        let items: HashSet<&str> = results
            .iter()
            .filter(|r| r.target_id == "g1")
            .map(|r| r.item.as_str())
            .collect();
        assert_eq!(items, HashSet::from(["x", "y"]));
    }

    #[test]
    fn malformed_or_empty_items_give_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let targets = [group("g1", &["a"])];
        assert!(assign("[\"x\"", &targets, &Roster::new(), &mut rng).is_empty());
        assert!(assign("{}", &targets, &Roster::new(), &mut rng).is_empty());
        assert!(assign("[]", &targets, &Roster::new(), &mut rng).is_empty());
        assert!(assign("", &targets, &Roster::new(), &mut rng).is_empty());
    }

    #[test]
    fn team_results_carry_parent_group() {
        let mut rng = StdRng::seed_from_u64(3);
        let team = Target::Team(Team {
            id: "t1".to_owned(),
            name: "Red".to_owned(),
            students: students(&["a", "b"]),
            parent_group_name: Some("Reading".to_owned()),
        });
        let orphan = Target::Team(Team {
            id: "t2".to_owned(),
            name: "Blue".to_owned(),
            students: students(&["c"]),
            parent_group_name: None,
        });
        let results = assign(r#"["x", "y", "z"]"#, &[team, orphan], &Roster::new(), &mut rng);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.is_team));
        assert_eq!(results[0].parent_group_name.as_deref(), Some("Reading"));
        assert_eq!(results[2].parent_group_name, None);
    }
}
