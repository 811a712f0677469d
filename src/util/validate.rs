//! Input validation helpers for form-style request bodies.

use crate::error::AppError;

/// Checks the minimal email shape `local@domain.tld`.
///
/// Local part and domain must be non-empty and free of whitespace and extra
/// `@` signs, and the domain must contain a dot with characters on both
/// sides.
pub fn is_valid_email(email: &str) -> bool {
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

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// Normalizes and validates an application URL.
///
/// Trims the input, prefixes `https://` when no scheme is present, and then
/// requires the result to parse as a URL.
///
/// # Returns
/// - `Ok(String)` - Normalized absolute URL
/// - `Err(AppError::BadRequest)` - Input does not form a valid URL
pub fn normalize_application_url(raw: &str) -> Result<String, AppError> {
    let mut normalized = raw.trim().to_string();

    if !normalized.starts_with("http://") && !normalized.starts_with("https://") {
        normalized = format!("https://{}", normalized);
    }

    url::Url::parse(&normalized).map_err(|_| {
        AppError::BadRequest(
            "Invalid application URL. Please enter a valid URL (e.g., https://company.com/apply)"
                .to_string(),
        )
    })?;

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("a@acme.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("acme.com"));
        assert!(!is_valid_email("a@acme"));
        assert!(!is_valid_email("a b@acme.com"));
        assert!(!is_valid_email("a@@acme.com"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("a@.com"));
    }

    #[test]
    fn prefixes_https_when_scheme_missing() {
        let url = normalize_application_url("acme.com/apply").unwrap();
        assert_eq!(url, "https://acme.com/apply");
    }

    #[test]
    fn keeps_existing_scheme() {
        let url = normalize_application_url("http://acme.com/apply").unwrap();
        assert_eq!(url, "http://acme.com/apply");
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(normalize_application_url("https://").is_err());
    }
}
