//! In-memory store for tests
//!
//! `MemoryStore` implements both `UserStore` and `ItemStore` with the same
//! observable semantics as `PgStore`: sequential IDs starting at 1,
//! uniqueness on username and (present) email, and `NotFound` for missing
//! records. It can be switched into an "unavailable" mode to exercise the
//! internal-error path.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::{StoreError, StoreResult};
use super::item::{Item, ItemInput, ItemStore};
use super::user::{CreateUser, User, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    items: BTreeMap<i64, Item>,
    next_user_id: i64,
    next_item_id: i64,
}

/// Process-local store backed by ordinary collections
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with `StoreError::Database`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        self.check_available()?;
        data.validate()?;

        let mut tables = self.tables.write().await;
        let taken = tables.users.iter().any(|u| {
            u.username == data.username
                || (data.email.is_some() && u.email.as_deref() == data.email.as_deref())
        });
        if taken {
            return Err(StoreError::Conflict);
        }

        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: data.username,
            password_hash: data.password_hash,
            email: data.email,
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.check_available()?;

        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_items(&self) -> StoreResult<Vec<Item>> {
        self.check_available()?;

        let tables = self.tables.read().await;
        Ok(tables.items.values().cloned().collect())
    }

    async fn get_item(&self, id: i64) -> StoreResult<Item> {
        self.check_available()?;

        let tables = self.tables.read().await;
        tables.items.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create_item(&self, input: ItemInput) -> StoreResult<Item> {
        self.check_available()?;
        input.validate()?;

        let mut tables = self.tables.write().await;
        tables.next_item_id += 1;
        let item = Item {
            id: tables.next_item_id,
            name: input.name,
            price: input.price,
            description: input.description,
        };
        tables.items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn update_item(&self, id: i64, input: ItemInput) -> StoreResult<Item> {
        self.check_available()?;
        input.validate()?;

        let mut tables = self.tables.write().await;
        let item = tables.items.get_mut(&id).ok_or(StoreError::NotFound)?;
        item.name = input.name;
        item.price = input.price;
        item.description = input.description;

        Ok(item.clone())
    }

    async fn delete_item(&self, id: i64) -> StoreResult<()> {
        self.check_available()?;

        let mut tables = self.tables.write().await;
        tables
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn count_items(&self) -> StoreResult<i64> {
        self.check_available()?;

        let tables = self.tables.read().await;
        Ok(tables.items.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: Option<&str>) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: email.map(str::to_string),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts_without_partial_insert() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice", Some("a@example.com"))).await.unwrap();

        let result = store.create_user(new_user("alice", Some("other@example.com"))).await;
        assert!(matches!(result, Err(StoreError::Conflict)));

        let tables = store.tables.read().await;
        assert_eq!(tables.users.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice", Some("a@example.com"))).await.unwrap();

        let result = store.create_user(new_user("bob", Some("a@example.com"))).await;
        assert!(matches!(result, Err(StoreError::Conflict)));
    }

    #[tokio::test]
    async fn test_missing_emails_do_not_conflict() {
        let store = MemoryStore::new();
        store.create_user(new_user("alice", None)).await.unwrap();
        store.create_user(new_user("bob", None)).await.unwrap();

        assert!(store.find_by_username("bob").await.unwrap().is_some());
        assert!(store.find_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let store = MemoryStore::new();

        let created = store
            .create_item(ItemInput::new("Mouse", 50, Some("wireless".to_string())))
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.get_item(created.id).await.unwrap(), created);

        let updated = store
            .update_item(created.id, ItemInput::new("Mouse", 45, None))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, 45);
        assert_eq!(updated.description, None);

        store.delete_item(created.id).await.unwrap();
        assert!(matches!(store.delete_item(created.id).await, Err(StoreError::NotFound)));
        assert!(matches!(store.get_item(created.id).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create_item(ItemInput::new("A", 1, None)).await.unwrap();
        store.delete_item(first.id).await.unwrap();

        let second = store.create_item(ItemInput::new("B", 2, None)).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert!(matches!(store.count_items().await, Err(StoreError::Database(_))));
        assert!(matches!(
            store.find_by_username("alice").await,
            Err(StoreError::Database(_))
        ));

        store.set_unavailable(false);
        assert_eq!(store.count_items().await.unwrap(), 0);
    }
}
