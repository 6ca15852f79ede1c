//! Storage seam between the business operations and whatever holds projects.

use crate::Result as DbErrorResult;

use tm_core::{NewProject, Page, PageRequest, Project};

use async_trait::async_trait;

/// Persistence for projects.
///
/// Every mutating call has completed durably by the time it returns. There is
/// no versioning: a lookup followed by an update from two concurrent callers
/// can interleave, and the last write wins.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Short name of the backend, for logs and health output
    fn backend(&self) -> &'static str;

    /// Persist a new project, assigning an id when none is given.
    async fn insert(&self, project: NewProject) -> DbErrorResult<Project>;

    /// Overwrite the stored record with the same id.
    /// Fails with `DbError::NotFound` when there is none.
    async fn update(&self, project: &Project) -> DbErrorResult<Project>;

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>>;

    /// One page of projects in the requested order.
    async fn page(&self, request: &PageRequest) -> DbErrorResult<Page<Project>>;

    async fn count(&self) -> DbErrorResult<i64>;
}
