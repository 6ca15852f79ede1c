use crate::{DbError, InMemoryProjectStore, ProjectStore};

use tm_core::{DeadlineOrder, NewProject, PageRequest};

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn new_project(name: &str, days: i64) -> NewProject {
    NewProject::new(name.to_string(), Some(Utc::now() + Duration::days(days)))
}

#[tokio::test]
async fn given_empty_store_when_inserting_then_ids_start_at_one_and_increase() {
    let store = InMemoryProjectStore::new();

    let first = store.insert(new_project("first", 10)).await.unwrap();
    let second = store.insert(new_project("second", 20)).await.unwrap();

    assert_that!(first.id, eq(1));
    assert_that!(second.id, eq(2));
    assert_that!(store.count().await.unwrap(), eq(2));
}

#[tokio::test]
async fn given_explicit_id_when_inserting_then_later_ids_skip_past_it() {
    let store = InMemoryProjectStore::new();
    let mut seeded = new_project("seeded", 10);
    seeded.id = Some(10);

    store.insert(seeded).await.unwrap();
    let next = store.insert(new_project("next", 10)).await.unwrap();

    assert_that!(next.id, eq(11));
}

#[tokio::test]
async fn given_existing_id_when_inserting_again_then_duplicate_error() {
    let store = InMemoryProjectStore::new();
    let stored = store.insert(new_project("first", 10)).await.unwrap();
    let mut clash = new_project("clash", 10);
    clash.id = Some(stored.id);

    let result = store.insert(clash).await;

    assert!(matches!(result, Err(DbError::DuplicateId { id: 1, .. })));
    assert_that!(store.count().await.unwrap(), eq(1));
}

#[tokio::test]
async fn given_missing_project_when_updating_then_not_found() {
    let store = InMemoryProjectStore::new();
    let ghost = new_project("ghost", 1).into_project(99);

    let result = store.update(&ghost).await;

    assert!(matches!(result, Err(DbError::NotFound { id: 99, .. })));
}

#[tokio::test]
async fn given_stored_project_when_updated_then_lookup_sees_change() {
    let store = InMemoryProjectStore::new();
    let mut project = store.insert(new_project("before", 5)).await.unwrap();

    project.name = "after".to_string();
    project.project_is_completed = true;
    store.update(&project).await.unwrap();

    let found = store.find_by_id(project.id).await.unwrap();
    assert_that!(found, some(eq(&project)));
}

#[tokio::test]
async fn given_unknown_id_when_finding_then_none() {
    let store = InMemoryProjectStore::new();

    assert_that!(store.find_by_id(42).await.unwrap(), none());
}

#[tokio::test]
async fn given_projects_when_paging_descending_then_latest_deadline_first() {
    let store = InMemoryProjectStore::new();
    for (name, days) in [("a", 30), ("b", 60), ("c", 90), ("d", 20)] {
        store.insert(new_project(name, days)).await.unwrap();
    }

    let page = store
        .page(&PageRequest::new(0, 3, DeadlineOrder::Descending))
        .await
        .unwrap();

    let names: Vec<&str> = page.records.iter().map(|p| p.name.as_str()).collect();
    assert_that!(names, eq(&vec!["c", "b", "a"]));
    assert_that!(page.has_more, eq(true));
}
