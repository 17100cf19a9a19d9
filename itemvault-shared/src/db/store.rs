//! PostgreSQL-backed store handle
//!
//! `PgStore` is constructed once at startup from a pool and passed by
//! `Arc` to whoever needs persistence. The SQL for each entity lives next to
//! its model in `crate::models`.

use sqlx::PgPool;

/// Store handle wrapping a connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
