//! Administrative access guard.
//!
//! Admin endpoints are gated by a capability-style shared secret carried in
//! the `X-Admin-Key` header of each request. Nothing is stored server-side
//! between requests and no session exists to hijack; rotating the key in the
//! environment revokes all access.

use axum::http::HeaderMap;

use crate::error::AppError;

/// Header carrying the admin capability key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub struct AdminGuard<'a> {
    admin_api_key: &'a str,
}

impl<'a> AdminGuard<'a> {
    pub fn new(admin_api_key: &'a str) -> Self {
        Self { admin_api_key }
    }

    /// Checks whether the request carries the admin key.
    ///
    /// Non-fatal variant for endpoints that elevate rather than reject, like
    /// the jobs listing.
    pub fn is_admin(&self, headers: &HeaderMap) -> bool {
        headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|key| !self.admin_api_key.is_empty() && key == self.admin_api_key)
    }

    /// Requires the request to carry the admin key.
    ///
    /// # Returns
    /// - `Ok(())` - Request is authorized
    /// - `Err(AppError::Unauthorized)` - Key missing or wrong
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AppError> {
        if self.is_admin(headers) {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}
