use super::*;

#[test]
fn envelope_without_data_deserializes() {
    let resp: ApiResponse<Vec<i64>> =
        serde_json::from_str(r#"{"success":true,"message":"Contact form submitted successfully"}"#).expect("envelope");
    assert!(resp.success);
    assert_eq!(resp.data, None);
    assert_eq!(resp.message_or("Saved"), "Contact form submitted successfully");
}

#[test]
fn error_text_prefers_error_then_message_then_generic() {
    let with_error: ApiResponse<()> = ApiResponse::failure("Resource not found");
    assert_eq!(with_error.error_text(), "Resource not found");

    let with_message = ApiResponse::<()> { success: false, data: None, error: None, message: Some("nope".into()) };
    assert_eq!(with_message.error_text(), "nope");

    let bare = ApiResponse::<()> { success: false, data: None, error: Some(String::new()), message: None };
    assert_eq!(bare.error_text(), GENERIC_ERROR);
}

#[test]
fn into_result_requires_success_and_data() {
    assert_eq!(ApiResponse::ok(3).into_result(), Ok(3));
    assert_eq!(ApiResponse::<i32>::failure("boom").into_result(), Err("boom".to_owned()));
    let empty = ApiResponse::<i32> { success: true, data: None, error: None, message: None };
    assert!(empty.into_result().is_err());
}

#[test]
fn failed_envelope_yields_no_data() {
    let resp = ApiResponse { success: false, data: Some(1), error: None, message: None };
    assert_eq!(resp.into_data(), None);
}

#[test]
fn map_keeps_status_and_message() {
    let resp = ApiResponse::ok(2).with_message("done").map(|n| n * 10);
    assert_eq!(resp.data, Some(20));
    assert_eq!(resp.message.as_deref(), Some("done"));
}

#[test]
fn failure_text_only_for_failures() {
    assert_eq!(ApiResponse::ok(1).failure_text(), None);
    assert_eq!(ApiResponse::<i32>::failure("down").failure_text().as_deref(), Some("down"));
}
