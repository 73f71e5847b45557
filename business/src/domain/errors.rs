/// SQLSTATE codes the data layer knows how to classify.
pub mod sqlstate {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
}

/// Error reported by the database engine, detached from the driver types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverError {
    pub code: String,
    pub message: String,
    pub constraint: Option<String>,
    pub detail: Option<String>,
    pub table: Option<String>,
    pub column: Option<String>,
}

impl DriverError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.unique_violation")]
    UniqueViolation(DriverError),
    #[error("repository.foreign_key_violation")]
    ForeignKeyViolation(DriverError),
    #[error("repository.not_null_violation")]
    NotNullViolation(DriverError),
    #[error("repository.string_truncation")]
    StringTruncation(DriverError),
    #[error("repository.database_error")]
    Driver(DriverError),
    #[error("repository.connection_error")]
    Connection,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }

    pub fn connection() -> Self {
        RepositoryError::Connection
    }

    /// Decodes an engine error into the closed set of repository variants.
    pub fn from_driver(error: DriverError) -> Self {
        match error.code.as_str() {
            sqlstate::UNIQUE_VIOLATION => RepositoryError::UniqueViolation(error),
            sqlstate::FOREIGN_KEY_VIOLATION => RepositoryError::ForeignKeyViolation(error),
            sqlstate::NOT_NULL_VIOLATION => RepositoryError::NotNullViolation(error),
            sqlstate::STRING_DATA_RIGHT_TRUNCATION => RepositoryError::StringTruncation(error),
            _ => RepositoryError::Driver(error),
        }
    }

    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            RepositoryError::UniqueViolation(e)
            | RepositoryError::ForeignKeyViolation(e)
            | RepositoryError::NotNullViolation(e)
            | RepositoryError::StringTruncation(e)
            | RepositoryError::Driver(e) => Some(e),
            RepositoryError::NotFound | RepositoryError::Connection => None,
        }
    }
}
