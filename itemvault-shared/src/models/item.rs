//! Item model and item store
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE items (
//!     id BIGSERIAL PRIMARY KEY,
//!     name TEXT NOT NULL CHECK (name <> ''),
//!     price BIGINT NOT NULL,
//!     description TEXT
//! );
//! ```
//!
//! Item IDs are assigned by the database and never change. Updates replace
//! every mutable field at once; there is no partial update.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use crate::db::PgStore;

/// Item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    /// Unique item ID (assigned by the database, immutable)
    pub id: i64,

    /// Display name, never empty
    pub name: String,

    /// Price in the smallest currency unit
    pub price: i64,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Mutable item fields, used for both create and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    /// Display name
    pub name: String,

    /// Price
    pub price: i64,

    /// Optional description
    pub description: Option<String>,
}

impl ItemInput {
    /// Builds an input from its parts
    pub fn new(name: impl Into<String>, price: i64, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description,
        }
    }

    /// Checks the domain rules every store enforces before writing
    pub fn validate(&self) -> StoreResult<()> {
        if self.name.is_empty() {
            return Err(StoreError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}

/// Item store contract
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns every item ordered by ID
    async fn list_items(&self) -> StoreResult<Vec<Item>>;

    /// Fetches one item, `StoreError::NotFound` if absent
    async fn get_item(&self, id: i64) -> StoreResult<Item>;

    /// Inserts an item and returns it with its assigned ID
    async fn create_item(&self, input: ItemInput) -> StoreResult<Item>;

    /// Replaces name, price, and description of an existing item
    async fn update_item(&self, id: i64, input: ItemInput) -> StoreResult<Item>;

    /// Removes an item, `StoreError::NotFound` if absent
    async fn delete_item(&self, id: i64) -> StoreResult<()>;

    /// Number of stored items
    async fn count_items(&self) -> StoreResult<i64>;
}

#[async_trait]
impl ItemStore for PgStore {
    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, description
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }

    async fn get_item(&self, id: i64) -> StoreResult<Item> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn create_item(&self, input: ItemInput) -> StoreResult<Item> {
        input.validate()?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, description
            "#,
        )
        .bind(input.name)
        .bind(input.price)
        .bind(input.description)
        .fetch_one(self.pool())
        .await?;

        Ok(item)
    }

    async fn update_item(&self, id: i64, input: ItemInput) -> StoreResult<Item> {
        input.validate()?;

        sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, price = $3, description = $4
            WHERE id = $1
            RETURNING id, name, price, description
            "#,
        )
        .bind(id)
        .bind(input.name)
        .bind(input.price)
        .bind(input.description)
        .fetch_optional(self.pool())
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete_item(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn count_items(&self) -> StoreResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(self.pool())
            .await?;

        Ok(count)
    }
}
