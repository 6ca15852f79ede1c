pub mod error;
pub mod projects_logic;
