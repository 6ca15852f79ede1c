use tm_core::{NewProject, Project};
use tm_db::ProjectStore;

use chrono::{Duration, Utc};

/// Creates a test NewProject due `days` from now
pub fn create_test_project(name: &str, days: i64) -> NewProject {
    NewProject::new(name.to_string(), Some(Utc::now() + Duration::days(days)))
}

/// Inserts four projects (ids 1..=4) whose deadlines are out of id order:
/// +30d, +60d, +90d, +20d
pub async fn seed_four_projects(store: &dyn ProjectStore) -> Vec<Project> {
    let mut stored = Vec::new();
    for (name, days, minutes, completed) in [
        ("teste", 30, 60, false),
        ("teste2", 60, 150, false),
        ("teste3", 90, 180, false),
        ("teste4", 20, 40, true),
    ] {
        let mut project = create_test_project(name, days);
        project.time_spend = minutes;
        project.project_is_completed = completed;
        stored.push(store.insert(project).await.expect("Failed to seed project"));
    }
    stored
}
