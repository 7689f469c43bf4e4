use super::*;

// =============================================================
// Wire field names
// =============================================================

#[test]
fn candidate_deserializes_from_camel_case() {
    let candidate: Candidate = serde_json::from_str(
        r#"{"id":7,"fullName":"Jane Doe","registrationNumber":"REG-007","school":"School of Education Arts"}"#,
    )
    .expect("candidate json");

    assert_eq!(candidate.id, 7);
    assert_eq!(candidate.full_name, "Jane Doe");
    assert_eq!(candidate.registration_number, "REG-007");
    assert_eq!(candidate.school, "School of Education Arts");
}

#[test]
fn vote_submission_serializes_to_camel_case() {
    let value = serde_json::to_value(VoteSubmission {
        voter_reg_number: "REG-001".to_owned(),
        candidate_id: 7,
    })
    .expect("vote json");

    assert_eq!(
        value,
        serde_json::json!({"voterRegNumber": "REG-001", "candidateId": 7})
    );
}

#[test]
fn register_request_has_no_confirmation_field() {
    let value = serde_json::to_value(RegisterRequest {
        full_name: "Jane Doe".to_owned(),
        email_or_phone: "jane@example.com".to_owned(),
        registration_number: "REG-001".to_owned(),
        password: "Abcdef1!".to_owned(),
        school: "School of Education Arts".to_owned(),
        is_candidate: true,
    })
    .expect("register json");

    let keys: Vec<&str> = value
        .as_object()
        .expect("object body")
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.contains(&"fullName"));
    assert!(keys.contains(&"isCandidate"));
    assert!(!keys.contains(&"confirmPassword"));
}

#[test]
fn login_response_ignores_the_student_object() {
    let response: LoginResponse = serde_json::from_str(
        r#"{"token":"jwt-abc","student":{"id":1,"fullName":"Jane Doe"}}"#,
    )
    .expect("login json");

    assert_eq!(response.token, "jwt-abc");
}

#[test]
fn credentials_serialize_to_camel_case() {
    let value = serde_json::to_value(Credentials {
        registration_number: "REG-001".to_owned(),
        password: "Abcdef1!".to_owned(),
    })
    .expect("credentials json");

    assert_eq!(
        value,
        serde_json::json!({"registrationNumber": "REG-001", "password": "Abcdef1!"})
    );
}
