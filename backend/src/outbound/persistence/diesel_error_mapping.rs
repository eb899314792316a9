//! Translate pool and Diesel failures into user store errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserStoreError;

use super::pool::PoolError;

/// Pool failures mean the database could not be reached.
pub(super) fn map_pool_error(error: PoolError) -> UserStoreError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    UserStoreError::connection(message)
}

/// Map a Diesel failure, logging driver detail at `debug` only.
pub(super) fn map_diesel_error(error: DieselError) -> UserStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserStoreError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => UserStoreError::query("database query error"),
        DieselError::DeserializationError(_) => UserStoreError::query("malformed user row"),
        _ => UserStoreError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out waiting for connection"))]
    #[case(PoolError::build("invalid connection string"))]
    fn pool_failures_are_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            UserStoreError::Connection { .. }
        ));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            UserStoreError::connection("database connection error")
        );
    }

    #[rstest]
    #[case(DieselError::DatabaseError(
        DatabaseErrorKind::Unknown,
        Box::new("relation \"user\" does not exist".to_owned()),
    ))]
    #[case(DieselError::QueryBuilderError("bad filter".into()))]
    #[case(DieselError::NotFound)]
    #[case(DieselError::RollbackTransaction)]
    fn other_failures_are_query_errors_without_driver_text(#[case] error: DieselError) {
        let mapped = map_diesel_error(error);
        assert!(matches!(mapped, UserStoreError::Query { .. }));
        assert!(!mapped.to_string().contains("relation"));
    }
}
