use super::*;

#[test]
fn login_request_sends_invitation_code_as_password() {
    let req = LoginRequest {
        username: "rk01".to_owned(),
        invitation_code: "INV-42".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "rk01", "password": "INV-42" }));
}

#[test]
fn login_request_keeps_empty_fields() {
    let req = LoginRequest {
        username: String::new(),
        invitation_code: String::new(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "", "password": "" }));
}

#[test]
fn login_response_reads_access_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"accessToken":"tok-abc"}"#).unwrap();
    assert_eq!(resp.access_token, "tok-abc");
    assert_eq!(resp.message, None);
}

#[test]
fn login_response_tolerates_message_field() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"message":"Login successful","accessToken":"tok-abc"}"#).unwrap();
    assert_eq!(resp.access_token, "tok-abc");
    assert_eq!(resp.message.as_deref(), Some("Login successful"));
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"message":"nope"}"#).is_err());
}

#[test]
fn room_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Room::Ambient).unwrap(), serde_json::json!("ambient"));
}
