use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    /// Absent or past deadlines keep the stored one
    #[serde(
        default,
        alias = "deadLine",
        deserialize_with = "crate::api::projects::deadline_format::deserialize"
    )]
    pub deadline: Option<DateTime<Utc>>,

    /// Keeps the stored developer when absent
    #[serde(default)]
    pub developer_id: Option<i64>,

    #[serde(default)]
    pub project_is_completed: bool,

    /// Accepted for compatibility, never applied
    #[serde(default)]
    pub time_spend: Option<i64>,
}
