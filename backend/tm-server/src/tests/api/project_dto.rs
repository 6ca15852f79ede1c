use crate::ProjectDto;

use tm_core::{Project, default_deadline};

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn project(deadline: Option<chrono::DateTime<Utc>>) -> Project {
    Project {
        id: 9,
        name: "Dashboard".to_string(),
        developer_id: 3,
        deadline,
        time_spend: 90,
        project_is_completed: false,
    }
}

#[test]
fn given_stored_deadline_when_from_project_then_deadline_shown_as_is() {
    let now = Utc::now();
    let deadline = now + Duration::days(15);

    let dto = ProjectDto::from_project(project(Some(deadline)), now);

    assert_that!(dto.deadline, eq(deadline));
    assert_that!(dto.time_spend, eq(90));
}

#[test]
fn given_no_deadline_when_from_project_then_twelve_months_from_now() {
    let now = Utc::now();

    let dto = ProjectDto::from_project(project(None), now);

    assert_that!(dto.deadline, eq(default_deadline(now)));
}

#[test]
fn given_dto_when_serialized_then_camel_case_keys() {
    let dto = ProjectDto::from_project(project(None), Utc::now());

    let json = serde_json::to_value(&dto).unwrap();

    assert_that!(json["id"].as_i64(), some(eq(9)));
    assert_that!(json["developerId"].as_i64(), some(eq(3)));
    assert_that!(json["timeSpend"].as_i64(), some(eq(90)));
    assert_that!(json["projectIsCompleted"].as_bool(), some(eq(false)));
    assert!(json["deadline"].is_string());
}
