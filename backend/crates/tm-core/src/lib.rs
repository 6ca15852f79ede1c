pub mod error;
pub mod models;
pub mod pagination;
pub mod validation;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::project::{NewProject, Project};
pub use pagination::{
    deadline_order::DeadlineOrder,
    page::Page,
    page_request::{PageRequest, clamp_page_index, clamp_page_size},
    paginate,
};
pub use validation::{
    default_deadline, needs_default_deadline, normalize_deadline, require_request, validate_name,
};

/// Largest page a caller can request; bigger requests are clamped.
pub const MAX_PAGE_SIZE: u32 = 50;
/// Smallest page; zero or negative requests are clamped up to this.
pub const MIN_PAGE_SIZE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = MAX_PAGE_SIZE;

pub const DEFAULT_DEVELOPER_ID: i64 = 1;
pub const DEFAULT_DEADLINE_MONTHS: u32 = 12;

/// Smallest amount of time (minutes) that can be logged against a project at once.
pub const MIN_TIME_SPEND_MINUTES: i64 = 30;
