/// JWT token generation and validation module
///
/// Tokens are signed with HS256 (HMAC-SHA256) using the server-held secret
/// and carry the user's identity so the API can authenticate requests
/// without a session table.
///
/// # Security
///
/// - **Algorithm**: HS256 only; tokens declaring any other algorithm are rejected
/// - **Lifetime**: exactly 24 hours from issuance
/// - **Expiry**: checked with zero leeway; a token is valid in `[iat, exp)`
/// - **Issuer**: must be `"itemvault"`
///
/// # Example
///
/// ```
/// use itemvault_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(42, "alice", Some("alice@example.com".to_string()));
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.sub, 42);
/// assert_eq!(validated.username, "alice");
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issuer claim written into and required from every token
pub const ISSUER: &str = "itemvault";

/// How long a token stays valid after issuance
pub fn token_lifetime() -> Duration {
    Duration::hours(24)
}

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature, format, algorithm, or issuer check failed
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// JWT claims structure
///
/// # Standard Claims
///
/// - `sub`: Subject (user ID)
/// - `iss`: Issuer (always "itemvault")
/// - `iat`: Issued at timestamp
/// - `exp`: Expiration timestamp (`iat` + 24h)
///
/// # Custom Claims
///
/// - `username`: Login name of the subject
/// - `email`: Email of the subject, if registered with one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - User ID
    pub sub: i64,

    /// Username (custom claim)
    pub username: String,

    /// Email (custom claim)
    pub email: Option<String>,

    /// Issuer - Always "itemvault"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued now
    pub fn new(user_id: i64, username: impl Into<String>, email: Option<String>) -> Self {
        Self::issued_at(user_id, username, email, Utc::now())
    }

    /// Creates claims issued at a given instant, expiring 24 hours later
    pub fn issued_at(
        user_id: i64,
        username: impl Into<String>,
        email: Option<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: user_id,
            username: username.into(),
            email,
            iss: ISSUER.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + token_lifetime()).timestamp(),
        }
    }

    /// Checks whether the token is expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks if token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Creates a signed JWT from claims
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a JWT against the current time and extracts its claims
///
/// # Errors
///
/// - `JwtError::Expired` if the current time is at or past `exp`
/// - `JwtError::ValidationError` for a bad signature, malformed token,
///   wrong algorithm, or wrong issuer
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    validate_token_at(token, secret, Utc::now())
}

/// Validates a JWT as of `now`
///
/// The library's own expiry check uses the system clock and a default
/// leeway, so expiry is evaluated here against `now` instead.
pub fn validate_token_at(
    token: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss"]);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(token, &key, &validation)
        .map_err(|e| JwtError::ValidationError(format!("Token validation failed: {}", e)))?
        .claims;

    if claims.is_expired_at(now) {
        return Err(JwtError::Expired);
    }

    Ok(claims)
}
