use super::*;

// =============================================================
// Error-body extraction
// =============================================================

#[test]
fn server_error_message_is_preferred() {
    assert_eq!(
        error_from_body(
            r#"{"error":"Registration number already exists"}"#,
            REGISTER_FALLBACK
        ),
        "Registration number already exists"
    );
}

#[test]
fn body_without_an_error_field_falls_back() {
    assert_eq!(
        error_from_body(r#"{"message":"nope"}"#, VOTE_FALLBACK),
        VOTE_FALLBACK
    );
}

#[test]
fn non_json_body_falls_back() {
    assert_eq!(
        error_from_body("<html>502 Bad Gateway</html>", LOGIN_FALLBACK),
        LOGIN_FALLBACK
    );
    assert_eq!(error_from_body("", LOGIN_FALLBACK), LOGIN_FALLBACK);
}

#[test]
fn non_string_error_field_falls_back() {
    assert_eq!(
        error_from_body(r#"{"error":42}"#, CANDIDATES_FALLBACK),
        CANDIDATES_FALLBACK
    );
}

// =============================================================
// Workflow fallbacks
// =============================================================

#[test]
fn signin_fallback_is_the_documented_literal() {
    assert_eq!(LOGIN_FALLBACK, "Login failed. Please check your credentials.");
}

#[test]
fn each_workflow_has_a_distinct_fallback() {
    let fallbacks = [
        REGISTER_FALLBACK,
        LOGIN_FALLBACK,
        CANDIDATES_FALLBACK,
        VOTE_FALLBACK,
    ];
    for (i, a) in fallbacks.iter().enumerate() {
        for b in &fallbacks[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
