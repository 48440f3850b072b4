use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Verified caller identity for `GET /profile`.
///
/// Authentication is terminated upstream; the auth layer forwards the
/// verified email in this header. No header means the caller is
/// unauthenticated.
#[derive(Debug)]
pub struct AuthedEmail(pub String);

const AUTH_EMAIL_HEADER: &str = "x-auth-email";

#[async_trait]
impl<S> FromRequestParts<S> for AuthedEmail
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(AUTH_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Unauthenticated("Missing authenticated identity".into()))?;

        Ok(AuthedEmail(email.to_lowercase()))
    }
}
