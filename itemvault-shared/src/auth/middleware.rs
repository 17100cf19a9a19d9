/// Request authentication for Axum
///
/// The API's auth layer calls [`authenticate`] on each protected request,
/// which reads the `Authorization: Bearer <token>` header and verifies the
/// token. On success the resulting [`AuthContext`] is attached to the request
/// and handlers receive it as an ordinary extractor argument:
///
/// ```no_run
/// use itemvault_shared::auth::middleware::AuthContext;
///
/// async fn protected_handler(auth: AuthContext) -> String {
///     format!("Hello, {}!", auth.username)
/// }
/// ```
///
/// Extraction fails closed: a handler that takes `AuthContext` but is mounted
/// without the auth layer answers 401 instead of running anonymously.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use super::jwt::{Claims, JwtError};
use super::service::AuthService;

/// Identity of the caller, derived from a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: i64,

    /// Username at the time the token was issued
    pub username: String,

    /// Email at the time the token was issued
    pub email: Option<String>,
}

impl AuthContext {
    /// Builds the context from validated claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
        }
    }
}

/// Error type for request authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header
    MissingCredentials,

    /// Header present but not `Bearer <token>`
    InvalidFormat,

    /// Signature, format, or expiry check failed
    InvalidToken,
}

impl AuthError {
    /// Client-facing message; never includes validation details
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Missing authorization header",
            AuthError::InvalidFormat => "Expected Bearer token",
            AuthError::InvalidToken => "Invalid or expired token",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: "unauthorized",
            message: self.message(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

/// Extracts the raw token from a `Bearer` Authorization header
///
/// The scheme name is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat)?;

    let (scheme, token) = auth_header
        .split_once(' ')
        .ok_or(AuthError::InvalidFormat)?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::InvalidFormat);
    }
    let token = token.trim();

    if token.is_empty() {
        return Err(AuthError::InvalidFormat);
    }

    Ok(token)
}

/// Verifies the request's bearer token and returns the caller's identity
pub fn authenticate(auth: &AuthService, headers: &HeaderMap) -> Result<AuthContext, AuthError> {
    let token = bearer_token(headers)?;

    let claims = auth.verify_token(token).map_err(|e| {
        match e {
            JwtError::Expired => debug!("Rejected expired token"),
            other => debug!(error = %other, "Rejected invalid token"),
        }
        AuthError::InvalidToken
    })?;

    Ok(AuthContext::from_claims(claims))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::MissingCredentials)
    }
}
