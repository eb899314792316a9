//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed [`UserStore`](crate::domain::ports::UserStore)
//!   using Diesel ORM.
//! - **fixture_file**: JSON seed files for the in-memory fixture store.
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod fixture_file;
pub mod persistence;
