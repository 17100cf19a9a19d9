/// Authentication utilities
///
/// This module provides the authentication primitives for ItemVault:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: HS256 token issuance and validation
/// - [`service`]: Register/login/verify flow over a `UserStore`
/// - [`middleware`]: Bearer-token request authentication for Axum
///
/// # Example
///
/// ```no_run
/// use itemvault_shared::auth::password::{hash_password, verify_password};
/// use itemvault_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(1, "alice", None);
/// let token = create_token(&claims, "secret-key")?;
/// let validated = validate_token(&token, "secret-key")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod service;
