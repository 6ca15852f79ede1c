#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_project, seed_four_projects};
pub use test_db::create_test_pool;
