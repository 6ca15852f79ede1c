pub mod connection;
pub mod error;
pub mod project_store;
pub mod repositories;


pub use connection::database::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use project_store::ProjectStore;
pub use repositories::in_memory_project_store::InMemoryProjectStore;
pub use repositories::project_repository::ProjectRepository;
