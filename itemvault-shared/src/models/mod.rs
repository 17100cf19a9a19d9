/// Domain models and store contracts for ItemVault
///
/// # Models
///
/// - `user`: Registered accounts and the `UserStore` credential store
/// - `item`: Item records and the `ItemStore` contract
/// - `error`: `StoreError`, shared by every store backend
/// - `memory`: In-memory store (tests and the `test-util` feature)
///
/// Both stores are implemented for `db::PgStore`; handlers and services only
/// ever see the traits.

pub mod error;
pub mod item;
pub mod user;

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use item::{Item, ItemInput, ItemStore};
pub use user::{CreateUser, User, UserStore};
