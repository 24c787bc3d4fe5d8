use std::collections::HashSet;

use fair_assignment_engine::rotate::rotate_by_n;
use fair_assignment_engine::shuffle::shuffle_with;
use fair_assignment_engine::strategy::{random, rotating};
use fair_assignment_engine::{Direction, Group, Roster, RosterEntry, RotatingAssigner, Student, Target, Team};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng as _;

fn items_json(count: usize) -> String {
    let items: Vec<String> = (0..count).map(|index| format!("item-{index}")).collect();
    serde_json::to_string(&items).unwrap()
}

fn class(count: usize) -> (Target, Roster) {
    let ids: Vec<String> = (0..count).map(|index| format!("s{index}")).collect();
    let roster = ids
        .iter()
        .zip(1..)
        .map(|(id, number)| {
            (id.clone(), RosterEntry {
                number: Some(number),
                ..RosterEntry::default()
            })
        })
        .collect();
    let target = Target::Group(Group {
        id: "g".to_owned(),
        name: "Group".to_owned(),
        students: ids.into_iter().map(Student::new).collect(),
        teams: Vec::new(),
    });
    (target, roster)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn shuffle_is_a_permutation(values in proptest::collection::vec(any::<u16>(), 0..40), seed in any::<u64>()) {
        let mut shuffled = shuffle_with(values.clone(), &mut StdRng::seed_from_u64(seed));
        let mut expected = values;
        shuffled.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn rotating_back_undoes_rotating_forward(values in proptest::collection::vec(any::<u8>(), 0..20), n in 0usize..64) {
        let forward = rotate_by_n(&values, n, Direction::FrontToBack);
        prop_assert_eq!(forward.len(), values.len());
        prop_assert_eq!(rotate_by_n(&forward, n, Direction::BackToFront), values);
    }

    #[test]
    fn completing_the_cycle_restores_the_order(values in proptest::collection::vec(any::<u8>(), 1..20), step in any::<prop::sample::Index>()) {
        let n = step.index(values.len() + 1);
        let forward = rotate_by_n(&values, n, Direction::FrontToBack);
        prop_assert_eq!(&rotate_by_n(&forward, values.len() - n, Direction::FrontToBack), &values);
        prop_assert_eq!(rotate_by_n(&values, values.len() - n, Direction::BackToFront), forward);
    }

    #[test]
    fn random_runs_pair_each_student_at_most_once(items in 1usize..8, students in 1usize..8, seed in any::<u64>()) {
        let (target, roster) = class(students);
        let results = random::assign(&items_json(items), &[target], &roster, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(results.len(), items.min(students));
        let distinct: HashSet<&str> = results.iter().map(|result| result.student_id.as_str()).collect();
        prop_assert_eq!(distinct.len(), results.len());
    }

    #[test]
    fn a_full_cycle_gives_everyone_every_item(
        items in 1usize..7,
        students in 1usize..7,
        back_to_front in any::<bool>(),
    ) {
        let (target, roster) = class(students);
        let assigner = RotatingAssigner {
            id: "a".to_owned(),
            class_id: "c".to_owned(),
            items: items_json(items),
            direction: if back_to_front { Direction::BackToFront } else { Direction::FrontToBack },
            balance_gender: false,
        };

        let mut held = HashSet::new();
        for offset in 0..items.max(students) {
            let results = rotating::assign(&assigner, Some(&target), &roster, offset).unwrap();
            prop_assert_eq!(results.len(), items.min(students));
            held.extend(results.into_iter().map(|result| (result.student_id, result.item)));
        }
        prop_assert_eq!(held.len(), items * students);
    }

    #[test]
    fn group_students_ignore_team_membership(own in 0usize..6, in_teams in 0usize..6) {
        let own_students: Vec<Student> = (0..own).map(|index| Student::new(format!("own-{index}"))).collect();
        let team = Team {
            id: "t".to_owned(),
            name: "Team".to_owned(),
            students: (0..in_teams).map(|index| Student::new(format!("team-{index}"))).collect(),
            parent_group_name: Some("Group".to_owned()),
        };
        let target = Target::Group(Group {
            id: "g".to_owned(),
            name: "Group".to_owned(),
            students: own_students.iter().chain(&own_students).cloned().collect(),
            teams: vec![team],
        });
        let ids: Vec<&str> = target.students().into_iter().map(|student| student.id.as_str()).collect();
        let expected: Vec<&str> = own_students.iter().map(|student| student.id.as_str()).collect();
        prop_assert_eq!(ids, expected);
    }
}
