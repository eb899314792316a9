//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`UserStore`](crate::domain::ports::UserStore) implementation
//! backed by PostgreSQL through `diesel-async` and a `bb8` connection pool.
//!
//! - **Thin adapter**: `DieselUserStore` only translates between Diesel rows
//!   and domain users.
//! - **Internal models**: `schema.rs` and `models.rs` are never exposed to the
//!   domain layer.
//! - **Read-only**: the `"user"` table is owned and migrated elsewhere.
//! - **Strongly typed errors**: pool and Diesel failures are mapped to
//!   [`UserStoreError`](crate::domain::ports::UserStoreError) variants.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/algobowl")).await?;
//! let store = DieselUserStore::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_store;
mod models;
mod pool;
mod schema;

pub use diesel_user_store::DieselUserStore;
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
