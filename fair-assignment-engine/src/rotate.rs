use serde::{Deserialize, Serialize};

/// Which end of the sequence moves on each rotation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "&'static str")]
pub enum Direction {
    /// First element moves to the end.
    #[default]
    FrontToBack,
    /// Last element moves to the front.
    BackToFront,
}

impl Direction {
    /// Never fails: unknown or missing values mean front-to-back. `left` and
    /// `right` are the names older assigners were saved with.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("back-to-front" | "left") => Self::BackToFront,
            Some("front-to-back" | "right") | None => Self::FrontToBack,
            Some(other) => {
                tracing::debug!(direction = other, "unknown rotation direction, using front-to-back");
                Self::FrontToBack
            }
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FrontToBack => "front-to-back",
            Self::BackToFront => "back-to-front",
        }
    }
}

impl From<Option<String>> for Direction {
    fn from(value: Option<String>) -> Self {
        Self::parse(value.as_deref())
    }
}

impl From<Direction> for &'static str {
    fn from(value: Direction) -> Self {
        value.as_str()
    }
}

#[must_use]
pub fn rotate_one<T: Clone>(items: &[T], direction: Direction) -> Vec<T> {
    rotate_by_n(items, 1, direction)
}

/// Same result as applying [`rotate_one`] `n` times, computed from indices.
#[must_use]
pub fn rotate_by_n<T: Clone>(items: &[T], n: usize, direction: Direction) -> Vec<T> {
    let len = items.len();
    if len == 0 {
        return Vec::new();
    }
    let shift = n % len;
    let start = match direction {
        Direction::FrontToBack => shift,
        Direction::BackToFront => (len - shift) % len,
    };
    items[start..].iter().chain(&items[..start]).cloned().collect()
}
