use crate::api::projects::deadline_format::parse_deadline;
use crate::{CreateProjectRequest, UpdateProjectRequest};

use chrono::{TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_rfc3339_with_offset_when_parse_deadline_then_converted_to_utc() {
    let parsed = parse_deadline("2030-05-01T12:00:00+02:00").unwrap();

    assert_that!(
        parsed,
        eq(Utc.with_ymd_and_hms(2030, 5, 1, 10, 0, 0).unwrap())
    );
}

#[test]
fn given_naive_date_time_when_parse_deadline_then_taken_as_utc() {
    let plain = parse_deadline("2030-05-01T08:30:00").unwrap();
    let fractional = parse_deadline("2030-05-01T08:30:00.250").unwrap();

    assert_that!(plain, eq(Utc.with_ymd_and_hms(2030, 5, 1, 8, 30, 0).unwrap()));
    assert_that!(fractional.timestamp(), eq(plain.timestamp()));
}

#[test]
fn given_bare_date_when_parse_deadline_then_midnight_utc() {
    let parsed = parse_deadline("2030-05-01").unwrap();

    assert_that!(parsed, eq(Utc.with_ymd_and_hms(2030, 5, 1, 0, 0, 0).unwrap()));
}

#[test]
fn given_garbage_when_parse_deadline_then_error() {
    assert!(parse_deadline("next tuesday").is_err());
}

#[test]
fn given_create_body_with_legacy_keys_when_deserialized_then_fields_filled() {
    let request: CreateProjectRequest = serde_json::from_str(
        r#"{"name":"Mobile app","deadLine":"2031-01-15","developerId":4}"#,
    )
    .unwrap();

    assert_that!(request.name.as_str(), eq("Mobile app"));
    assert_that!(
        request.deadline,
        some(eq(Utc.with_ymd_and_hms(2031, 1, 15, 0, 0, 0).unwrap()))
    );
    assert_that!(request.developer_id, some(eq(4)));
}

#[test]
fn given_create_body_without_name_when_deserialized_then_name_empty() {
    let request: CreateProjectRequest =
        serde_json::from_str(r#"{"deadline":null}"#).unwrap();

    assert!(request.name.is_empty());
    assert_that!(request.deadline, none());
    assert_that!(request.developer_id, none());
}

#[test]
fn given_update_body_when_deserialized_then_optional_fields_default() {
    let request: UpdateProjectRequest =
        serde_json::from_str(r#"{"id":3,"name":"Renamed","timeSpend":500}"#).unwrap();

    assert_that!(request.id, eq(3));
    assert_that!(request.project_is_completed, eq(false));
    assert_that!(request.time_spend, some(eq(500)));
    assert_that!(request.deadline, none());
}

#[test]
fn given_update_body_without_id_when_deserialized_then_error() {
    let result = serde_json::from_str::<UpdateProjectRequest>(r#"{"name":"No id"}"#);

    assert!(result.is_err());
}
