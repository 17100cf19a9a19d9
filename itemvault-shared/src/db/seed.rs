//! First-boot sample data
//!
//! Seeding only happens against an empty item table, so running it on every
//! start is safe.

use tracing::{debug, info};

use crate::models::{ItemInput, ItemStore, StoreResult};

/// Items inserted into an empty store: (name, price, description)
pub const SAMPLE_ITEMS: [(&str, i64, &str); 4] = [
    ("Keyboard", 199, "A mechanical keyboard"),
    ("Screen", 299, "A 24-inch monitor"),
    ("Server", 599, "A high-performance server"),
    ("Printer", 399, "A color laser printer"),
];

/// Inserts the sample items if the store holds no items yet
///
/// Returns the number of items inserted (0 when the store was already
/// populated).
pub async fn seed_items(store: &dyn ItemStore) -> StoreResult<usize> {
    let count = store.count_items().await?;
    if count > 0 {
        debug!(existing_items = count, "Item store already populated, skipping seed");
        return Ok(0);
    }

    for (name, price, description) in SAMPLE_ITEMS {
        store
            .create_item(ItemInput::new(name, price, Some(description.to_string())))
            .await?;
    }

    info!(seeded_items = SAMPLE_ITEMS.len(), "Successfully seeded items");
    Ok(SAMPLE_ITEMS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::memory::MemoryStore;

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let store = MemoryStore::new();

        let inserted = seed_items(&store).await.unwrap();
        assert_eq!(inserted, 4);

        let names: Vec<String> = store
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Keyboard", "Screen", "Server", "Printer"]);
    }

    #[tokio::test]
    async fn test_seed_twice_does_not_duplicate() {
        let store = MemoryStore::new();

        seed_items(&store).await.unwrap();
        let inserted = seed_items(&store).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(store.count_items().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_seed_skips_store_with_existing_items() {
        let store = MemoryStore::new();
        store
            .create_item(ItemInput::new("Mouse", 50, None))
            .await
            .unwrap();

        assert_eq!(seed_items(&store).await.unwrap(), 0);
        assert_eq!(store.count_items().await.unwrap(), 1);
    }
}
