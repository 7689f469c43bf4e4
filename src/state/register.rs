#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::types::RegisterRequest;
use crate::state::password;

/// The four fixed schools a delegate registers under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum School {
    BusinessAndEconomics,
    PureAndAppliedScience,
    EducationArts,
    EducationScience,
}

impl School {
    pub const ALL: [School; 4] = [
        School::BusinessAndEconomics,
        School::PureAndAppliedScience,
        School::EducationArts,
        School::EducationScience,
    ];

    /// Full name sent on the wire and stored by the backend.
    pub fn label(self) -> &'static str {
        match self {
            School::BusinessAndEconomics => "School of Business and Economics",
            School::PureAndAppliedScience => "School of Pure and Applied Science",
            School::EducationArts => "School of Education Arts",
            School::EducationScience => "School of Education Science",
        }
    }

    /// Shorter name used as the option text in the form.
    pub fn short_label(self) -> &'static str {
        match self {
            School::BusinessAndEconomics => "Business and Economics",
            School::PureAndAppliedScience => "Pure and Applied Science",
            School::EducationArts => "Education Arts",
            School::EducationScience => "Education Science",
        }
    }

    /// Inverse of [`School::label`], for binding the form's `<select>`.
    pub fn from_label(value: &str) -> Option<School> {
        School::ALL.into_iter().find(|s| s.label() == value)
    }
}

/// Registration form state, mutated only through the named transitions.
///
/// `password_errors` is derived state: [`RegisterFormState::set_password`]
/// recomputes it so the warning list and the submit gate stay in sync with
/// the field.
#[derive(Clone, Debug)]
pub struct RegisterFormState {
    pub full_name: String,
    pub email_or_phone: String,
    pub registration_number: String,
    pub password: String,
    pub confirm_password: String,
    pub school: Option<School>,
    pub is_candidate: bool,
    pub password_errors: Vec<&'static str>,
    pub error: Option<String>,
    pub success: bool,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email_or_phone: String::new(),
            registration_number: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            school: None,
            // The candidate box starts ticked; most registrants are running.
            is_candidate: true,
            password_errors: Vec::new(),
            error: None,
            success: false,
        }
    }
}

impl RegisterFormState {
    pub fn set_full_name(&mut self, value: String) {
        self.full_name = value;
    }

    pub fn set_email_or_phone(&mut self, value: String) {
        self.email_or_phone = value;
    }

    pub fn set_registration_number(&mut self, value: String) {
        self.registration_number = value;
    }

    /// Update the password and recompute the strength warnings.
    pub fn set_password(&mut self, value: String) {
        self.password_errors = password::validate(&value);
        self.password = value;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
    }

    pub fn set_school(&mut self, school: Option<School>) {
        self.school = school;
    }

    pub fn set_is_candidate(&mut self, value: bool) {
        self.is_candidate = value;
    }

    /// Whether the submit control is enabled. Submission stays disabled
    /// while any strength warning is showing.
    pub fn can_submit(&self) -> bool {
        self.password_errors.is_empty()
    }

    /// Client-side gate run on submit, before any network call.
    ///
    /// The confirmation check runs first, then the strength rules; either
    /// failure records an inline error and aborts. On pass, returns the
    /// wire request (without the confirmation field).
    pub fn try_submit(&mut self) -> Option<RegisterRequest> {
        if self.password != self.confirm_password {
            self.error = Some("Passwords don't match".to_owned());
            return None;
        }
        if !password::validate(&self.password).is_empty() {
            self.error = Some("Password doesn't meet requirements".to_owned());
            return None;
        }
        Some(RegisterRequest {
            full_name: self.full_name.clone(),
            email_or_phone: self.email_or_phone.clone(),
            registration_number: self.registration_number.clone(),
            password: self.password.clone(),
            school: self
                .school
                .map(|s| s.label().to_owned())
                .unwrap_or_default(),
            is_candidate: self.is_candidate,
        })
    }

    /// Successful registration: raise the banner, drop any stale error.
    /// The page schedules the redirect to sign-in.
    pub fn apply_success(&mut self) {
        self.success = true;
        self.error = None;
    }

    /// Failed registration: surface the message, leave the form editable.
    pub fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
    }
}
