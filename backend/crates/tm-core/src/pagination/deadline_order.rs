use serde::{Deserialize, Serialize};

/// Ordering applied before a page is cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineOrder {
    /// Earliest deadline first. Projects without a deadline come first.
    Ascending,
    /// Latest deadline first. Projects without a deadline come last.
    Descending,
    /// Insertion order
    #[default]
    Natural,
}

impl DeadlineOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Natural => "natural",
        }
    }
}

impl From<Option<bool>> for DeadlineOrder {
    fn from(ascending: Option<bool>) -> Self {
        match ascending {
            Some(true) => Self::Ascending,
            Some(false) => Self::Descending,
            None => Self::Natural,
        }
    }
}

impl std::fmt::Display for DeadlineOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
