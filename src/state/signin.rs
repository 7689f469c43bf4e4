#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use crate::net::types::Credentials;

/// Sign-in form state.
///
/// `loading` disables the submit control and swaps its label while the
/// login request is in flight; it is the only re-entrancy guard this form
/// has or needs.
#[derive(Clone, Debug, Default)]
pub struct SigninState {
    pub registration_number: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl SigninState {
    pub fn set_registration_number(&mut self, value: String) {
        self.registration_number = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Start a login attempt: clear the previous error, raise the loading
    /// flag, and snapshot the credentials for the request.
    pub fn begin_submit(&mut self) -> Credentials {
        self.loading = true;
        self.error = None;
        Credentials {
            registration_number: self.registration_number.clone(),
            password: self.password.clone(),
        }
    }

    /// Login accepted; the page stores the token and navigates away.
    pub fn finish_success(&mut self) {
        self.loading = false;
    }

    /// Login rejected; surface the message and re-enable the form.
    pub fn finish_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Label for the submit control in the current state.
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Signing In..." } else { "Sign In" }
    }
}
