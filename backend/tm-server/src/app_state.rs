use crate::ProjectsLogic;
use crate::error::Result as ServerErrorResult;

use tm_config::{Config, StoreBackend};
use tm_db::{InMemoryProjectStore, ProjectRepository, ProjectStore};

use std::sync::Arc;

use log::info;

/// Shared handler state. Cloned per request; clones share one store.
#[derive(Clone)]
pub struct AppState {
    pub logic: ProjectsLogic,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            logic: ProjectsLogic::new(store),
        }
    }

    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        self.logic.store()
    }
}

/// Open the store selected by `database.backend`.
pub async fn build_store(config: &Config) -> ServerErrorResult<Arc<dyn ProjectStore>> {
    match config.database.backend {
        StoreBackend::Sqlite => {
            let path = config.database_path()?;
            let pool = tm_db::connect(&path, config.database.max_connections).await?;
            info!("SQLite store ready at {}", path.display());
            Ok(Arc::new(ProjectRepository::new(pool)))
        }
        StoreBackend::Memory => {
            info!("In-memory store ready (data is lost on shutdown)");
            Ok(Arc::new(InMemoryProjectStore::new()))
        }
    }
}
