//! Email address checks.
//!
//! Intentionally shallow: real deliverability is proven by the OTP flow, so
//! these checks only reject obviously malformed input before it reaches the
//! database.

/// Plausibility check for an email address: exactly one `@`, non-empty local
/// part, and a domain containing a dot.
pub fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Whether `email` belongs to the institution, i.e. ends with the configured
/// domain suffix (e.g. `@gla.ac.in`). Comparison is case-insensitive on the
/// suffix.
pub fn is_institutional_email(email: &str, domain_suffix: &str) -> bool {
    is_plausible_email(email) && email.to_ascii_lowercase().ends_with(&domain_suffix.to_ascii_lowercase())
}
