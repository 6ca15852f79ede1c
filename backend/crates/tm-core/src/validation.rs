//! Request validation and deadline defaulting shared by insert and update.

use crate::{CoreError, DEFAULT_DEADLINE_MONTHS, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Months, Utc};
use error_location::ErrorLocation;

/// Unwrap a request body, failing when the caller sent none at all.
#[track_caller]
pub fn require_request<T>(request: Option<T>, name: &str) -> CoreErrorResult<T> {
    request.ok_or_else(|| CoreError::MissingRequest {
        message: format!("Value cannot be null. (Parameter '{}')", name),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Project names must contain something other than whitespace.
#[track_caller]
pub fn validate_name(name: &str) -> CoreErrorResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::MissingField {
            field: "name",
            message: "Name of project is null or empty.".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Deadline used when a new project has none, or one in the past.
pub fn default_deadline(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(DEFAULT_DEADLINE_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Whether a supplied deadline has to be replaced: absent, unset (epoch or
/// earlier) or already passed.
pub fn needs_default_deadline(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match deadline {
        None => true,
        Some(d) => d.timestamp_millis() <= 0 || d < now,
    }
}

/// Keep `deadline` when usable, otherwise fall back silently.
pub fn normalize_deadline(
    deadline: Option<DateTime<Utc>>,
    fallback: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if needs_default_deadline(deadline, now) {
        fallback
    } else {
        deadline
    }
}
