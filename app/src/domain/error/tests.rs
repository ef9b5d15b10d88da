//! Regression coverage for shell error construction.

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
#[case(ErrorCode::InvalidRequest, "invalid request")]
#[case(ErrorCode::Unauthorized, "authentication required")]
#[case(ErrorCode::Forbidden, "not permitted")]
#[case(ErrorCode::NotFound, "not found")]
#[case(ErrorCode::InternalError, "internal error")]
fn blank_messages_fall_back_to_generic_text(#[case] code: ErrorCode, #[case] expected: &str) {
    let err = ShellError::new(code, "   ");
    assert_eq!(err.message(), expected);
    assert_eq!(err.code(), code);
}

#[test]
fn display_uses_the_message() {
    let err = ShellError::forbidden("administrators only");
    assert_eq!(err.to_string(), "administrators only");
}

#[test]
fn details_round_through_the_builder() {
    let err = ShellError::invalid_request("bad draft").with_details(json!({ "field": "name" }));
    assert_eq!(err.details(), Some(&json!({ "field": "name" })));
}

#[test]
fn serialises_with_snake_case_codes() {
    let err = ShellError::not_found("no such facility");
    let value = serde_json::to_value(&err).expect("serialisable error");
    assert_eq!(value["code"], "not_found");
    assert_eq!(value["message"], "no such facility");
    assert!(value.get("details").is_none());
}
