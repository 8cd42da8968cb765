//! Shared Diesel error mapping for the catalogue repositories.
//!
//! Database detail is logged at debug level and never copied into the
//! repository error, so nothing from PostgreSQL reaches clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map common Diesel error variants into query/connection constructors.
pub fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    log_diesel_error(&error);

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// Like [`map_basic_diesel_error`], but routes foreign key violations to a
/// dedicated constructor that receives the violated constraint name.
pub fn map_diesel_error_with_foreign_keys<E, Q, C, F>(
    error: DieselError,
    query: Q,
    connection: C,
    foreign_key: F,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
    F: FnOnce(String) -> E,
{
    if let DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) = &error {
        log_diesel_error(&error);
        let constraint = info
            .constraint_name()
            .unwrap_or("unknown constraint")
            .to_owned();
        return foreign_key(constraint);
    }
    map_basic_diesel_error(error, query, connection)
}
