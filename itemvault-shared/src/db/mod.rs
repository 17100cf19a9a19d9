/// Database layer for ItemVault
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
/// - `migrations`: Embedded schema migrations
/// - `seed`: First-boot sample data
/// - `store`: `PgStore`, the PostgreSQL implementation of the store traits
///
/// # Example
///
/// ```no_run
/// use itemvault_shared::db::{pool::{create_pool, DatabaseConfig}, migrations, seed, PgStore};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         connect: std::env::var("DATABASE_URL")?.parse()?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     migrations::run_migrations(&pool).await?;
///
///     let store = PgStore::new(pool);
///     seed::seed_items(&store).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
pub mod seed;
pub mod store;

pub use store::PgStore;
