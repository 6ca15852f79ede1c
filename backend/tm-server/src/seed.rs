use tm_core::{DEFAULT_DEVELOPER_ID, NewProject, Project};
use tm_db::{ProjectStore, Result as DbErrorResult};

use chrono::{Duration, Utc};
use log::info;

pub const SEED_PROJECT_NAME: &str = "Kit-ar Interview";
const SEED_DEADLINE_DAYS: i64 = 60;
const SEED_TIME_SPEND_MINUTES: i64 = 1124;

/// Insert the demo project when the store holds nothing yet.
/// Returns the inserted project, or None when the store was not empty.
pub async fn seed_if_empty(store: &dyn ProjectStore) -> DbErrorResult<Option<Project>> {
    if store.count().await? > 0 {
        return Ok(None);
    }

    let project = NewProject {
        id: None,
        name: SEED_PROJECT_NAME.to_string(),
        developer_id: DEFAULT_DEVELOPER_ID,
        deadline: Some(Utc::now() + Duration::days(SEED_DEADLINE_DAYS)),
        time_spend: SEED_TIME_SPEND_MINUTES,
        project_is_completed: true,
    };

    let seeded = store.insert(project).await?;
    info!("Seeded empty store with project {} ({})", seeded.id, seeded.name);

    Ok(Some(seeded))
}
