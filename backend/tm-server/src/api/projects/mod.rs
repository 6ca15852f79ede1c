pub mod create_project_request;
pub mod deadline_format;
pub mod project_dto;
pub mod project_response;
pub mod projects;
pub mod update_project_request;
