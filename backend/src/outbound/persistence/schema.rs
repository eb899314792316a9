//! Diesel table definition for the consumed user schema.
//!
//! The table is created and migrated outside this service; this definition
//! must match it column for column. `user` is a reserved word in PostgreSQL,
//! so the Rust-side name is `users` and the SQL name is set explicitly.

diesel::table! {
    /// Registered users.
    #[sql_name = "user"]
    users (id) {
        /// Primary key assigned at creation.
        id -> Int8,
        /// Unique login name.
        username -> Text,
        email -> Text,
        /// Exposed to clients as the display name.
        full_name -> Text,
        admin -> Bool,
    }
}
