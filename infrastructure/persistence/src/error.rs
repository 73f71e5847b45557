use sqlx::postgres::PgDatabaseError;

use business::domain::errors::{DriverError, RepositoryError};

/// Decodes a sqlx failure into a typed repository error.
///
/// Database-reported errors keep their SQLSTATE and metadata; transport and
/// pool failures collapse into `RepositoryError::Connection`.
pub fn into_repository_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) => {
            RepositoryError::from_driver(driver_error(db_err.as_ref()))
        }
        other => {
            tracing::warn!(error = %other, "database unavailable");
            RepositoryError::Connection
        }
    }
}

fn driver_error(db_err: &dyn sqlx::error::DatabaseError) -> DriverError {
    let pg = db_err.try_downcast_ref::<PgDatabaseError>();

    DriverError {
        code: db_err.code().map(|c| c.into_owned()).unwrap_or_default(),
        message: db_err.message().to_string(),
        constraint: db_err.constraint().map(str::to_string),
        detail: pg.and_then(|e| e.detail()).map(str::to_string),
        table: db_err.table().map(str::to_string),
        column: pg.and_then(|e| e.column()).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_row_not_found_as_not_found() {
        assert_eq!(
            into_repository_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn should_decode_pool_failures_as_connection_errors() {
        assert_eq!(
            into_repository_error(sqlx::Error::PoolTimedOut),
            RepositoryError::Connection
        );
        assert_eq!(
            into_repository_error(sqlx::Error::PoolClosed),
            RepositoryError::Connection
        );
    }

    #[test]
    fn should_decode_column_decode_failures_as_connection_errors() {
        let err = sqlx::Error::ColumnNotFound("slug".to_string());

        assert_eq!(into_repository_error(err), RepositoryError::Connection);
    }
}
