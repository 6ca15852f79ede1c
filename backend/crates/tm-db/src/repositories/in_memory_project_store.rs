//! Process-local project store.
//!
//! Natural order is insertion order. Paging goes through the same
//! `tm_core::paginate` engine the tests pin down.

use crate::{DbError, ProjectStore, Result as DbErrorResult};

use tm_core::{NewProject, Page, PageRequest, Project, paginate};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;

#[derive(Debug)]
struct State {
    projects: Vec<Project>,
    next_id: i64,
}

#[derive(Debug)]
pub struct InMemoryProjectStore {
    state: RwLock<State>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                projects: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, project: NewProject) -> DbErrorResult<Project> {
        let mut state = self.state.write().await;

        let id = project.id.unwrap_or(state.next_id);
        if state.projects.iter().any(|p| p.id == id) {
            return Err(DbError::DuplicateId {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Ids are never handed out twice, even after an explicit high id
        state.next_id = state.next_id.max(id.saturating_add(1));

        let persisted = project.into_project(id);
        state.projects.push(persisted.clone());

        Ok(persisted)
    }

    async fn update(&self, project: &Project) -> DbErrorResult<Project> {
        let mut state = self.state.write().await;

        let stored = state
            .projects
            .iter_mut()
            .find(|p| p.id == project.id)
            .ok_or_else(|| DbError::NotFound {
                id: project.id,
                location: ErrorLocation::from(Location::caller()),
            })?;
        *stored = project.clone();

        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let state = self.state.read().await;

        Ok(state.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn page(&self, request: &PageRequest) -> DbErrorResult<Page<Project>> {
        let snapshot = self.state.read().await.projects.clone();

        Ok(paginate(snapshot, request))
    }

    async fn count(&self) -> DbErrorResult<i64> {
        Ok(self.state.read().await.projects.len() as i64)
    }
}
