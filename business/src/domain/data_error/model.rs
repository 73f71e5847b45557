use crate::domain::entity::EntityName;

/// Stable client-facing codes, kept identical to the ones the API has always
/// returned so existing clients keep matching on them.
pub mod app_code {
    pub const STRING_TOO_LONG: &str = "P2000";
    pub const UNIQUE_CONSTRAINT: &str = "P2002";
    pub const FOREIGN_KEY_CONSTRAINT: &str = "P2003";
    pub const NULL_CONSTRAINT: &str = "P2011";
    pub const RECORD_NOT_FOUND: &str = "P2025";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataErrorKind {
    NotFound,
    UniqueViolation,
    ForeignKeyViolation,
    NotNullViolation,
    StringTruncation,
    Unhandled,
}

/// A data-access failure translated for API consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub kind: DataErrorKind,
    pub entity: EntityName,
    pub field: Option<String>,
    pub table: Option<String>,
    pub constraint: Option<String>,
    pub code: String,
    pub message: String,
}
