//! Registration, login, and token verification
//!
//! `AuthService` owns the signing secret and a handle to the credential
//! store. It is cheap to clone and is shared by every request.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use itemvault_shared::auth::service::AuthService;
//! use itemvault_shared::db::PgStore;
//!
//! # async fn example(store: PgStore) -> Result<(), Box<dyn std::error::Error>> {
//! let auth = AuthService::new(Arc::new(store), "secret-key-at-least-32-bytes-long!");
//!
//! let (user, token) = auth.register("alice", "alice@example.com", "hunter2").await?;
//! let claims = auth.verify_token(&token)?;
//! assert_eq!(claims.sub, user.id);
//!
//! let token = auth.login("alice", "hunter2").await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use super::jwt::{self, Claims, JwtError};
use super::password::{self, PasswordError};
use crate::models::{CreateUser, StoreError, User, UserStore};

/// Error type for auth service operations
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    /// A required field was empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Username or email already registered
    #[error("Username or email already exists")]
    Conflict,

    /// Unknown user or wrong password; the two are never distinguished
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Credential store failure
    #[error("Store error: {0}")]
    Store(#[source] StoreError),

    /// Hashing or hash verification failure
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token signing failure
    #[error(transparent)]
    Token(#[from] JwtError),

    /// Blocking hash task did not complete
    #[error("Hashing task failed: {0}")]
    Task(String),
}

impl From<StoreError> for AuthServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => AuthServiceError::Conflict,
            StoreError::Validation(msg) => AuthServiceError::Validation(msg),
            other => AuthServiceError::Store(other),
        }
    }
}

/// Issues and verifies credentials against a `UserStore`
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    secret: Arc<str>,
}

impl AuthService {
    /// Creates a service signing tokens with `secret`
    pub fn new(users: Arc<dyn UserStore>, secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            users,
            secret: Arc::from(secret),
        }
    }

    /// Registers a user and returns it with a freshly issued token
    ///
    /// # Errors
    ///
    /// - `Validation` if username, email, or password is empty
    /// - `Conflict` if the username or email is taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AuthServiceError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthServiceError::Validation(
                "Username, email, and password are required".to_string(),
            ));
        }

        let password_hash = hash_off_thread(password.to_string()).await?;

        let user = self
            .users
            .create_user(CreateUser {
                username: username.to_string(),
                email: Some(email.to_string()),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    /// Checks credentials and returns a token on success
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` whether the user is unknown or the password is
    /// wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthServiceError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!("Login rejected: unknown username");
            return Err(AuthServiceError::InvalidCredentials);
        };

        let valid = verify_off_thread(password.to_string(), user.password_hash.clone()).await?;
        if !valid {
            debug!(user_id = user.id, "Login rejected: password mismatch");
            return Err(AuthServiceError::InvalidCredentials);
        }

        info!(user_id = user.id, "User logged in");
        self.issue_token(&user)
    }

    /// Signs a 24-hour token for `user`
    pub fn issue_token(&self, user: &User) -> Result<String, AuthServiceError> {
        let claims = Claims::new(user.id, user.username.clone(), user.email.clone());
        Ok(jwt::create_token(&claims, &self.secret)?)
    }

    /// Validates a token and returns its claims; any failure rejects
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        jwt::validate_token(token, &self.secret)
    }
}

async fn hash_off_thread(password: String) -> Result<String, AuthServiceError> {
    tokio::task::spawn_blocking(move || password::hash_password(&password))
        .await
        .map_err(|e| AuthServiceError::Task(e.to_string()))?
        .map_err(AuthServiceError::from)
}

async fn verify_off_thread(password: String, hash: String) -> Result<bool, AuthServiceError> {
    tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
        .await
        .map_err(|e| AuthServiceError::Task(e.to_string()))?
        .map_err(AuthServiceError::from)
}
