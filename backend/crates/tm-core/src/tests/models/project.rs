use crate::{DEFAULT_DEVELOPER_ID, NewProject};

use chrono::{Duration, Utc};

#[test]
fn test_new_project_defaults() {
    let deadline = Utc::now() + Duration::days(120);
    let project = NewProject::new("New project".to_string(), Some(deadline));

    assert_eq!(project.id, None);
    assert_eq!(project.name, "New project");
    assert_eq!(project.developer_id, DEFAULT_DEVELOPER_ID);
    assert_eq!(project.deadline, Some(deadline));
    assert_eq!(project.time_spend, 0);
    assert!(!project.project_is_completed);
}

#[test]
fn test_into_project_keeps_fields_and_sets_id() {
    let new_project = NewProject::new("Tracked".to_string(), None);
    let project = new_project.clone().into_project(7);

    assert_eq!(project.id, 7);
    assert_eq!(project.name, new_project.name);
    assert_eq!(project.deadline, None);
    assert_eq!(project.time_spend, 0);
}

#[test]
fn test_add_time_spend_accumulates() {
    let mut project = NewProject::new("Tracked".to_string(), None).into_project(1);

    project.add_time_spend(30);
    project.add_time_spend(45);

    assert_eq!(project.time_spend, 75);
}

#[test]
fn test_add_time_spend_saturates() {
    let mut project = NewProject::new("Tracked".to_string(), None).into_project(1);
    project.time_spend = i64::MAX - 1;

    project.add_time_spend(30);

    assert_eq!(project.time_spend, i64::MAX);
}
