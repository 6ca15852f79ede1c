use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Required; a missing field deserializes as empty and fails validation
    #[serde(default)]
    pub name: String,

    /// Absent or past deadlines are replaced with now + 12 months
    #[serde(
        default,
        alias = "deadLine",
        deserialize_with = "crate::api::projects::deadline_format::deserialize"
    )]
    pub deadline: Option<DateTime<Utc>>,

    #[serde(default)]
    pub developer_id: Option<i64>,
}
