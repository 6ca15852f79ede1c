pub mod in_memory_project_store;
pub mod project_repository;
