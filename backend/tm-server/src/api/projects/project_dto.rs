use tm_core::{Project, default_deadline};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project as clients see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub developer_id: i64,
    pub deadline: DateTime<Utc>,
    pub time_spend: i64,
    pub project_is_completed: bool,
}

impl ProjectDto {
    /// A project stored without a deadline is shown as due twelve months
    /// from `now`. The stored record is left alone.
    pub fn from_project(project: Project, now: DateTime<Utc>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            developer_id: project.developer_id,
            deadline: project.deadline.unwrap_or_else(|| default_deadline(now)),
            time_spend: project.time_spend,
            project_is_completed: project.project_is_completed,
        }
    }
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self::from_project(project, Utc::now())
    }
}
