use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

const UNKNOWN_STUDENT: &str = "Unknown Student";

/// Account-level identity of a student. Names here are whatever the student
/// entered on their account, the roster may override them per class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Student {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            email: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Bucket scan order used everywhere genders are compared.
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    /// Lenient parse of the free-form gender column. Unknown spellings are
    /// treated as unset.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Some(Self::Male),
            "female" | "f" | "girl" => Some(Self::Female),
            "other" => Some(Self::Other),
            "prefer-not-to-say" | "prefer_not_to_say" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer not to say",
        }
    }
}

fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Gender::parse))
}

/// Class-scoped view of a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
}

/// The live class roster, keyed by student id.
pub type Roster = HashMap<String, RosterEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub parent_group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    /// Every student of the group, including those also placed on a team.
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Something selected to receive assignments in one run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Target {
    Group(Group),
    Team(Team),
}

impl Target {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Group(group) => &group.id,
            Self::Team(team) => &team.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Group(group) => &group.name,
            Self::Team(team) => &team.name,
        }
    }

    #[must_use]
    pub const fn is_team(&self) -> bool {
        match self {
            Self::Group(_) => false,
            Self::Team(_) => true,
        }
    }

    #[must_use]
    pub fn parent_group_name(&self) -> Option<&str> {
        match self {
            Self::Group(_) => None,
            Self::Team(team) => team.parent_group_name.as_deref(),
        }
    }

    /// Students a run over this target works on, duplicates removed.
    ///
    /// A group always yields all of its students, its teams are ignored.
    #[must_use]
    pub fn students(&self) -> Vec<&Student> {
        let students = match self {
            Self::Group(group) => &group.students,
            Self::Team(team) => {
                if team.parent_group_name.is_none() {
                    tracing::warn!(
                        team.id = %team.id,
                        team.name = %team.name,
                        "team has no parent group name, exported documents will lack it"
                    );
                }
                &team.students
            }
        };
        students
            .iter()
            .unique_by(|student| student.id.clone())
            .collect()
    }
}

/// One item handed to one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub item: String,
    pub student_id: String,
    pub student_number: Option<i64>,
    pub student_name: String,
    #[serde(alias = "groupOrTeamId")]
    pub target_id: String,
    #[serde(alias = "groupOrTeamName")]
    pub target_name: String,
    pub is_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group_name: Option<String>,
}

impl AssignmentResult {
    pub(crate) fn new(
        item: String,
        student: &Student,
        roster: &Roster,
        target: &Target,
    ) -> Self {
        let entry = roster.get(&student.id);
        Self {
            item,
            student_id: student.id.clone(),
            student_number: entry.and_then(|entry| entry.number),
            student_name: display_name(student, entry),
            target_id: target.id().to_owned(),
            target_name: target.name().to_owned(),
            is_team: target.is_team(),
            parent_group_name: target.parent_group_name().map(ToOwned::to_owned),
        }
    }
}

fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default());
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Roster name, then account name, then email, then a placeholder.
#[must_use]
pub fn display_name(student: &Student, entry: Option<&RosterEntry>) -> String {
    entry
        .and_then(|entry| join_name(entry.first_name.as_deref(), entry.last_name.as_deref()))
        .or_else(|| join_name(student.first_name.as_deref(), student.last_name.as_deref()))
        .or_else(|| student.email.clone().filter(|email| !email.is_empty()))
        .unwrap_or_else(|| UNKNOWN_STUDENT.to_owned())
}
