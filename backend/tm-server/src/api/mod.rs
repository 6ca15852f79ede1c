pub mod error;
pub mod projects;
