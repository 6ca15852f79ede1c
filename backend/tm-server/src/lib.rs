pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod logic;
pub mod routes;
pub mod seed;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_response::{ProjectResponse, ResponseError},
        update_project_request::UpdateProjectRequest,
    },
};
pub use app_state::{AppState, build_store};
pub use logic::{
    error::{LogicError, Result as LogicResult},
    projects_logic::ProjectsLogic,
};
pub use seed::seed_if_empty;

pub use crate::routes::build_router;
