#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Check a password against the registration strength rules.
///
/// Returns the violated-rule messages in declaration order, or an empty
/// vector when the password passes. All five rules are evaluated
/// independently (no short-circuit) so the form can list every problem at
/// once. Pure function; the page re-runs it on every keystroke.
pub fn validate(password: &str) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if password.chars().count() < 8 {
        errors.push("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push("Password must contain at least one special character");
    }
    errors
}
