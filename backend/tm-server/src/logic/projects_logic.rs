//! Business operations on projects.
//!
//! Each public operation runs to completion and folds any failure into a
//! failed [`ProjectResponse`]; the `try_*` halves carry the actual rules and
//! report failures as [`LogicError`].

use crate::logic::error::{LogicError, Result as LogicResult};
use crate::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

use tm_core::{
    DeadlineOrder, MIN_TIME_SPEND_MINUTES, NewProject, Page, PageRequest, Project,
    default_deadline, normalize_deadline, require_request, validate_name,
};
use tm_db::ProjectStore;

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, warn};

#[derive(Clone)]
pub struct ProjectsLogic {
    store: Arc<dyn ProjectStore>,
}

impl ProjectsLogic {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        &self.store
    }

    /// First page with default size, natural order.
    pub async fn get_projects(&self) -> ProjectResponse {
        self.page_response("get_projects", PageRequest::default())
            .await
    }

    pub async fn get_projects_by_pagination(
        &self,
        page_index: i64,
        page_size: i64,
        ascending: Option<bool>,
    ) -> ProjectResponse {
        let request = PageRequest::clamped(page_index, page_size, DeadlineOrder::from(ascending));
        self.page_response("get_projects_by_pagination", request)
            .await
    }

    pub async fn get_order_by_deadline_projects(
        &self,
        ascending: bool,
        page_index: i64,
        page_size: i64,
    ) -> ProjectResponse {
        let request = PageRequest::clamped(
            page_index,
            page_size,
            DeadlineOrder::from(Some(ascending)),
        );
        self.page_response("get_order_by_deadline_projects", request)
            .await
    }

    pub async fn insert_project(&self, request: Option<CreateProjectRequest>) -> ProjectResponse {
        Self::single("insert_project", self.try_insert_project(request).await)
    }

    pub async fn update_project(&self, request: Option<UpdateProjectRequest>) -> ProjectResponse {
        Self::single("update_project", self.try_update_project(request).await)
    }

    pub async fn update_status_project(&self, id: i64, completed: bool) -> ProjectResponse {
        Self::single(
            "update_status_project",
            self.try_update_status_project(id, completed).await,
        )
    }

    pub async fn update_time_used_on_project(&self, id: i64, time_used: i64) -> ProjectResponse {
        Self::single(
            "update_time_used_on_project",
            self.try_update_time_used_on_project(id, time_used).await,
        )
    }

    pub async fn try_page(&self, request: &PageRequest) -> LogicResult<Page<Project>> {
        debug!(
            "Paging projects: index={}, size={}, order={}",
            request.page_index, request.page_size, request.order
        );
        Ok(self.store.page(request).await?)
    }

    pub async fn try_insert_project(
        &self,
        request: Option<CreateProjectRequest>,
    ) -> LogicResult<Project> {
        let request = require_request(request, "projectRequest")?;
        validate_name(&request.name)?;

        let now = Utc::now();
        let deadline = normalize_deadline(request.deadline, Some(default_deadline(now)), now);

        let mut project = NewProject::new(request.name, deadline);
        if let Some(developer_id) = request.developer_id {
            project.developer_id = developer_id;
        }

        Ok(self.store.insert(project).await?)
    }

    pub async fn try_update_project(
        &self,
        request: Option<UpdateProjectRequest>,
    ) -> LogicResult<Project> {
        let request = require_request(request, "updateProjectRequest")?;
        validate_name(&request.name)?;

        let existing = self.find_existing(request.id).await?;
        let now = Utc::now();

        // Stored time always wins; only add-time may change it
        let project = Project {
            id: existing.id,
            name: request.name,
            developer_id: request.developer_id.unwrap_or(existing.developer_id),
            deadline: normalize_deadline(request.deadline, existing.deadline, now),
            time_spend: existing.time_spend,
            project_is_completed: request.project_is_completed,
        };

        Ok(self.store.update(&project).await?)
    }

    pub async fn try_update_status_project(
        &self,
        id: i64,
        completed: bool,
    ) -> LogicResult<Project> {
        let mut project = self.find_existing(id).await?;
        project.project_is_completed = completed;
        Ok(self.store.update(&project).await?)
    }

    pub async fn try_update_time_used_on_project(
        &self,
        id: i64,
        time_used: i64,
    ) -> LogicResult<Project> {
        if time_used < MIN_TIME_SPEND_MINUTES {
            return Err(LogicError::TimeSpendBelowMinimum {
                time_used,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut project = self.find_existing(id).await?;
        project.add_time_spend(time_used);
        Ok(self.store.update(&project).await?)
    }

    #[track_caller]
    fn not_found(id: i64) -> LogicError {
        LogicError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    async fn find_existing(&self, id: i64) -> LogicResult<Project> {
        match self.store.find_by_id(id).await? {
            Some(project) => Ok(project),
            None => Err(Self::not_found(id)),
        }
    }

    async fn page_response(&self, operation: &str, request: PageRequest) -> ProjectResponse {
        match self.try_page(&request).await {
            Ok(page) => ProjectResponse::paged(page),
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                ProjectResponse::paged_failure(e.message())
            }
        }
    }

    fn single(operation: &str, result: LogicResult<Project>) -> ProjectResponse {
        match result {
            Ok(project) => ProjectResponse::success(vec![project]),
            Err(e) => {
                warn!("{} failed: {}", operation, e);
                ProjectResponse::from_error(&e)
            }
        }
    }
}
