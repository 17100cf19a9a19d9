//! # ItemVault API Server Library
//!
//! HTTP surface for ItemVault: registration, login, and token-protected
//! item CRUD over the stores defined in `itemvault-shared`.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
