//! Translation of pool and Diesel failures into document store errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::DocumentStoreError;

pub(crate) fn map_pool_error(error: PoolError) -> DocumentStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DocumentStoreError::connection(message)
        }
    }
}

pub(crate) fn map_diesel_error(error: DieselError) -> DocumentStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DocumentStoreError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => DocumentStoreError::query(info.message()),
        other => DocumentStoreError::query(other.to_string()),
    }
}
