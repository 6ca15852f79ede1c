//! SQLite-backed project store.
//!
//! Deadlines are stored as epoch milliseconds so that ordering by deadline is
//! a plain integer sort. SQLite sorts NULL before any integer, which matches
//! `Option` ordering in the in-memory store: projects without a deadline come
//! first ascending and last descending. Ties fall back to `id ASC`.

use crate::{DbError, ProjectStore, Result as DbErrorResult};

use tm_core::{DeadlineOrder, NewProject, Page, PageRequest, Project};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const SELECT_COLUMNS: &str =
    "SELECT id, name, developer_id, deadline, time_spend, project_is_completed FROM tm_projects";

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    developer_id: i64,
    deadline: Option<i64>,
    time_spend: i64,
    project_is_completed: bool,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        let deadline = r
            .deadline
            .map(|ms| {
                DateTime::<Utc>::from_timestamp_millis(ms).ok_or_else(|| DbError::Corrupt {
                    message: format!("Invalid timestamp in tm_projects.deadline: {}", ms),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(Project {
            id: r.id,
            name: r.name,
            developer_id: r.developer_id,
            deadline,
            time_spend: r.time_spend,
            project_is_completed: r.project_is_completed,
        })
    }
}

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn order_clause(order: DeadlineOrder) -> &'static str {
        match order {
            DeadlineOrder::Ascending => "ORDER BY deadline ASC, id ASC",
            DeadlineOrder::Descending => "ORDER BY deadline DESC, id ASC",
            DeadlineOrder::Natural => "ORDER BY id ASC",
        }
    }

    /// Read back a row that was just written.
    async fn fetch_persisted(&self, id: i64) -> DbErrorResult<Project> {
        self.find_by_id(id).await?.ok_or_else(|| DbError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn insert(&self, project: NewProject) -> DbErrorResult<Project> {
        let deadline = project.deadline.map(|dt| dt.timestamp_millis());

        // A NULL id lets SQLite assign the next AUTOINCREMENT value
        let result = sqlx::query(
            r#"
                INSERT INTO tm_projects (
                    id, name, developer_id, deadline, time_spend, project_is_completed
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(project.developer_id)
        .bind(deadline)
        .bind(project.time_spend)
        .bind(project.project_is_completed)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
            match project.id {
                Some(id) if duplicate => DbError::DuplicateId {
                    id,
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => DbError::from(e),
            }
        })?;

        self.fetch_persisted(result.last_insert_rowid()).await
    }

    async fn update(&self, project: &Project) -> DbErrorResult<Project> {
        let deadline = project.deadline.map(|dt| dt.timestamp_millis());

        let result = sqlx::query(
            r#"
                UPDATE tm_projects
                SET name = ?, developer_id = ?, deadline = ?,
                    time_spend = ?, project_is_completed = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(project.developer_id)
        .bind(deadline)
        .bind(project.time_spend)
        .bind(project.project_is_completed)
        .bind(project.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                id: project.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.fetch_persisted(project.id).await
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Project::try_from).transpose()
    }

    async fn page(&self, request: &PageRequest) -> DbErrorResult<Page<Project>> {
        let total = self.count().await?;
        if total == 0 {
            return Ok(Page::empty());
        }

        let has_more = request.has_more(total as u64);
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{} {} LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            Self::order_clause(request.order)
        ))
        .bind(i64::from(request.page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Page { records, has_more })
    }

    async fn count(&self) -> DbErrorResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tm_projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
