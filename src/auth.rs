//! Validation for login-flow input. The OTP itself is delivered out of band;
//! the driver fills the form fields.

/// OTPs are exactly this many digits
pub const OTP_LENGTH: usize = 5;

/// Whether the text is a well-formed OTP: exactly five ASCII digits
pub fn is_valid_otp(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.len() == OTP_LENGTH && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Whether the text is usable as a phone number: non-empty, digits with an
/// optional leading `+`
pub fn is_valid_phone(text: &str) -> bool {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
