/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `items`: Item CRUD (token required)

pub mod auth;
pub mod health;
pub mod items;
