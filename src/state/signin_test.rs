use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = SigninState::default();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.submit_label(), "Sign In");
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn begin_submit_snapshots_credentials_and_raises_loading() {
    let mut state = SigninState::default();
    state.set_registration_number("REG-001".to_owned());
    state.set_password("Abcdef1!".to_owned());

    let credentials = state.begin_submit();
    assert_eq!(credentials.registration_number, "REG-001");
    assert_eq!(credentials.password, "Abcdef1!");
    assert!(state.loading);
}

#[test]
fn begin_submit_clears_the_previous_error() {
    let mut state = SigninState::default();
    state.finish_failure("Invalid credentials".to_owned());

    state.begin_submit();
    assert!(state.error.is_none());
}

#[test]
fn label_swaps_while_loading() {
    let mut state = SigninState::default();
    state.begin_submit();
    assert_eq!(state.submit_label(), "Signing In...");

    state.finish_success();
    assert_eq!(state.submit_label(), "Sign In");
}

#[test]
fn finish_failure_lowers_loading_and_keeps_the_message() {
    let mut state = SigninState::default();
    state.begin_submit();
    state.finish_failure("Invalid credentials".to_owned());

    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn finish_success_lowers_loading() {
    let mut state = SigninState::default();
    state.begin_submit();
    state.finish_success();

    assert!(!state.loading);
    assert!(state.error.is_none());
}
