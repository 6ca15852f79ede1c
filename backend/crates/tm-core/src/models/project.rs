//! Project entity - the unit of tracked work.

use crate::DEFAULT_DEVELOPER_ID;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted project.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `time_spend` is in minutes and only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub developer_id: i64,
    pub deadline: Option<DateTime<Utc>>,
    pub time_spend: i64,
    /// true = completed, false = active
    pub project_is_completed: bool,
}

impl Project {
    /// Add minutes to the accumulated time.
    pub fn add_time_spend(&mut self, minutes: i64) {
        self.time_spend = self.time_spend.saturating_add(minutes);
    }
}

/// Insert payload. The store assigns `id` when it is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub id: Option<i64>,
    pub name: String,
    pub developer_id: i64,
    pub deadline: Option<DateTime<Utc>>,
    pub time_spend: i64,
    pub project_is_completed: bool,
}

impl NewProject {
    /// Create a fresh, active project with no time recorded
    pub fn new(name: String, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: None,
            name,
            developer_id: DEFAULT_DEVELOPER_ID,
            deadline,
            time_spend: 0,
            project_is_completed: false,
        }
    }

    /// Attach the id the store assigned.
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            name: self.name,
            developer_id: self.developer_id,
            deadline: self.deadline,
            time_spend: self.time_spend,
            project_is_completed: self.project_is_completed,
        }
    }
}
