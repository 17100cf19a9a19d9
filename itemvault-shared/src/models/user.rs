//! User model and credential store
//!
//! This module provides the User model, the `UserStore` contract used by the
//! auth service, and its PostgreSQL implementation.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id BIGSERIAL PRIMARY KEY,
//!     username TEXT NOT NULL UNIQUE CHECK (username <> ''),
//!     password TEXT NOT NULL CHECK (password <> ''),
//!     email TEXT UNIQUE
//! );
//! ```
//!
//! # Example
//!
//! ```no_run
//! use itemvault_shared::db::PgStore;
//! use itemvault_shared::models::user::{CreateUser, UserStore};
//!
//! # async fn example(store: PgStore) -> Result<(), Box<dyn std::error::Error>> {
//! let user = store
//!     .create_user(CreateUser {
//!         username: "alice".to_string(),
//!         email: Some("alice@example.com".to_string()),
//!         password_hash: "$argon2id$...".to_string(),
//!     })
//!     .await?;
//!
//! let found = store.find_by_username("alice").await?;
//! assert_eq!(found.map(|u| u.id), Some(user.id));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use super::error::{StoreError, StoreResult};
use crate::db::PgStore;

/// User model representing a registered account
///
/// The `password_hash` column holds an Argon2id PHC string and is never
/// serialized.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (assigned by the database)
    pub id: i64,

    /// Login name, unique across all users
    pub username: String,

    /// Argon2id password hash
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,

    /// Optional email address, unique when present
    pub email: Option<String>,
}

/// Input for creating a new user
///
/// Carries the password hash, never the plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login name
    pub username: String,

    /// Optional email address
    pub email: Option<String>,

    /// Argon2id password hash (NOT plaintext password!)
    pub password_hash: String,
}

impl CreateUser {
    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.username.is_empty() {
            return Err(StoreError::Validation("Username is required".to_string()));
        }
        if self.password_hash.is_empty() {
            return Err(StoreError::Validation("Password is required".to_string()));
        }
        Ok(())
    }
}

/// Credential store contract
///
/// Implementations must enforce uniqueness of `username` and of `email`
/// (when present) and report violations as `StoreError::Conflict` without
/// persisting anything.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user and returns it with its assigned ID
    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    /// Looks up a user by exact username
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        data.validate()?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, email)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, email
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .bind(data.email)
        .fetch_one(self.pool())
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, email
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_omits_password_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            email: Some("alice@example.com".to_string()),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_create_user_requires_username_and_hash() {
        let missing_name = CreateUser {
            username: String::new(),
            email: None,
            password_hash: "hash".to_string(),
        };
        assert!(matches!(missing_name.validate(), Err(StoreError::Validation(_))));

        let missing_hash = CreateUser {
            username: "bob".to_string(),
            email: None,
            password_hash: String::new(),
        };
        assert!(matches!(missing_hash.validate(), Err(StoreError::Validation(_))));
    }
}
