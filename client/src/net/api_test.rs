use super::*;

#[test]
fn me_success_statuses_yield_user() {
    assert_eq!(classify_me_status(200), MeOutcome::User);
    assert_eq!(classify_me_status(204), MeOutcome::User);
}

#[test]
fn me_auth_statuses_are_unauthenticated_not_errors() {
    assert_eq!(classify_me_status(401), MeOutcome::Unauthenticated);
    assert_eq!(classify_me_status(403), MeOutcome::Unauthenticated);
}

#[test]
fn me_other_statuses_are_failures() {
    assert_eq!(classify_me_status(500), MeOutcome::Failed);
    assert_eq!(classify_me_status(502), MeOutcome::Failed);
    assert_eq!(classify_me_status(404), MeOutcome::Failed);
}

#[test]
fn login_rejection_surfaces_server_detail() {
    let err = login_rejection(401, r#"{"detail":"Invalid email or password"}"#);
    assert_eq!(err, ApiError::Rejected { status: 401, detail: "Invalid email or password".to_owned() });
    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn login_rejection_falls_back_to_status_message() {
    let err = login_rejection(500, "<html>oops</html>");
    assert_eq!(err.to_string(), "Login failed (status 500)");
    let empty = login_rejection(400, "");
    assert_eq!(empty.to_string(), "Login failed (status 400)");
}

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(ME_ENDPOINT, "/api/v1/users/me");
    assert_eq!(LOGIN_ENDPOINT, "/api/v1/users/login");
    assert_eq!(LOGOUT_ENDPOINT, "/api/v1/users/logout");
    assert_eq!(NOTIFICATIONS_ENDPOINT, "/api/notifications");
}

#[test]
fn api_error_display_is_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}
