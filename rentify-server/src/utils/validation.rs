//! Input validation helpers

use validator::Validate;

use crate::utils::AppError;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Run derive-based validation, turning failures into a 400
pub fn validated<T: Validate>(payload: T) -> Result<T, AppError> {
    payload.validate()?;
    Ok(payload)
}

/// Validate an email taken from a path or query string
///
/// Only emptiness and length are checked; the identity gate compares the
/// value verbatim against the token afterwards.
pub fn validate_email_param(email: &str) -> Result<(), AppError> {
    if email.trim().is_empty() {
        return Err(AppError::validation("email must not be empty").with_detail("field", "email"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation(format!(
            "email is too long ({} chars, max {MAX_EMAIL_LEN})",
            email.len()
        ))
        .with_detail("field", "email"));
    }
    Ok(())
}
