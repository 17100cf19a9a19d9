//! # ItemVault Shared Library
//!
//! This crate contains the domain types, persistence contracts, and
//! authentication primitives used by the ItemVault API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing, JWT issuance/validation, the auth service and
//!   request authentication helpers
//! - `models`: User and item records plus their store traits
//! - `db`: Connection pool, migrations, and startup seeding

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the ItemVault shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
