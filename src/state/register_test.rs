use super::*;

fn filled_form() -> RegisterFormState {
    let mut form = RegisterFormState::default();
    form.set_full_name("Jane Doe".to_owned());
    form.set_email_or_phone("jane@example.com".to_owned());
    form.set_registration_number("REG-001".to_owned());
    form.set_school(Some(School::EducationArts));
    form.set_password("Abcdef1!".to_owned());
    form.set_confirm_password("Abcdef1!".to_owned());
    form
}

// =============================================================
// School
// =============================================================

#[test]
fn there_are_four_schools() {
    assert_eq!(School::ALL.len(), 4);
}

#[test]
fn school_labels_round_trip() {
    for school in School::ALL {
        assert_eq!(School::from_label(school.label()), Some(school));
    }
}

#[test]
fn unknown_school_label_is_none() {
    assert_eq!(School::from_label("School of Rock"), None);
    assert_eq!(School::from_label(""), None);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_form_pre_ticks_the_candidate_box() {
    assert!(RegisterFormState::default().is_candidate);
}

#[test]
fn default_form_shows_no_warnings_and_allows_submit() {
    let form = RegisterFormState::default();
    assert!(form.password_errors.is_empty());
    assert!(form.error.is_none());
    assert!(!form.success);
    assert!(form.can_submit());
}

// =============================================================
// Password keystrokes
// =============================================================

#[test]
fn set_password_recomputes_warnings() {
    let mut form = RegisterFormState::default();
    form.set_password("abc".to_owned());
    assert_eq!(form.password_errors.len(), 4);

    form.set_password("Abcdef1!".to_owned());
    assert!(form.password_errors.is_empty());
}

#[test]
fn weak_password_disables_submit() {
    let mut form = RegisterFormState::default();
    form.set_password("abc".to_owned());
    assert!(!form.can_submit());
}

// =============================================================
// Submission gate
// =============================================================

#[test]
fn mismatched_confirmation_aborts_with_message() {
    let mut form = filled_form();
    form.set_confirm_password("Xbcdef1!".to_owned());

    assert!(form.try_submit().is_none());
    assert_eq!(form.error.as_deref(), Some("Passwords don't match"));
}

#[test]
fn weak_password_aborts_with_generic_message() {
    let mut form = filled_form();
    form.set_password("abc".to_owned());
    form.set_confirm_password("abc".to_owned());

    assert!(form.try_submit().is_none());
    assert_eq!(
        form.error.as_deref(),
        Some("Password doesn't meet requirements")
    );
}

#[test]
fn mismatch_is_checked_before_strength() {
    let mut form = filled_form();
    form.set_password("abc".to_owned());
    form.set_confirm_password("xyz".to_owned());

    assert!(form.try_submit().is_none());
    assert_eq!(form.error.as_deref(), Some("Passwords don't match"));
}

#[test]
fn valid_form_builds_the_wire_request() {
    let mut form = filled_form();
    let request = form.try_submit().expect("gate should pass");

    assert_eq!(request.full_name, "Jane Doe");
    assert_eq!(request.email_or_phone, "jane@example.com");
    assert_eq!(request.registration_number, "REG-001");
    assert_eq!(request.password, "Abcdef1!");
    assert_eq!(request.school, "School of Education Arts");
    assert!(request.is_candidate);
    assert!(form.error.is_none());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_raises_banner_and_clears_error() {
    let mut form = filled_form();
    form.apply_failure("Registration number already exists".to_owned());

    form.apply_success();
    assert!(form.success);
    assert!(form.error.is_none());
}

#[test]
fn failure_leaves_the_form_recoverable() {
    let mut form = filled_form();
    form.apply_failure("Registration number already exists".to_owned());

    assert_eq!(
        form.error.as_deref(),
        Some("Registration number already exists")
    );
    // A corrected resubmission still passes the gate.
    assert!(form.try_submit().is_some());
}
