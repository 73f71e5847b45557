use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::data_error::model::{ClassifiedError, DataErrorKind, app_code};
use crate::domain::data_error::services::DataErrorTranslator;
use crate::domain::entity::EntityName;
use crate::domain::errors::{DriverError, RepositoryError};
use crate::domain::logger::Logger;

static CONSTRAINT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<stem>.+?)_(?:key|unique)$").unwrap());
static MISSING_REFERENCE_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"is not present in table "(?P<table>[^"]+)""#).unwrap());
static STILL_REFERENCED_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"is still referenced from table "(?P<table>[^"]+)""#).unwrap());
static DETAIL_KEY_COLUMN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Key \((?P<column>[^)]+)\)=").unwrap());

/// Translates repository failures into stable API errors.
///
/// Only unhandled engine errors are logged; constraint violations are
/// routine and go back to the client as-is.
pub struct DatabaseErrorTranslator {
    pub logger: Arc<dyn Logger>,
}

impl DatabaseErrorTranslator {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl DataErrorTranslator for DatabaseErrorTranslator {
    fn translate(&self, error: &RepositoryError, entity: EntityName) -> Option<ClassifiedError> {
        let classified = match error {
            RepositoryError::NotFound => ClassifiedError {
                kind: DataErrorKind::NotFound,
                entity,
                field: None,
                table: None,
                constraint: None,
                code: app_code::RECORD_NOT_FOUND.to_string(),
                message: format!("{entity} not found"),
            },
            RepositoryError::UniqueViolation(driver) => unique_violation(driver, entity),
            RepositoryError::ForeignKeyViolation(driver) => foreign_key_violation(driver, entity),
            RepositoryError::NotNullViolation(driver) => {
                let message = match &driver.column {
                    Some(column) => format!("{column} is required for {entity}"),
                    None => format!("A required field is missing for {entity}"),
                };
                column_error(
                    driver,
                    entity,
                    DataErrorKind::NotNullViolation,
                    app_code::NULL_CONSTRAINT,
                    message,
                )
            }
            RepositoryError::StringTruncation(driver) => {
                let message = match &driver.column {
                    Some(column) => format!("{column} is too long for {entity}"),
                    None => format!("A value is too long for {entity}"),
                };
                column_error(
                    driver,
                    entity,
                    DataErrorKind::StringTruncation,
                    app_code::STRING_TOO_LONG,
                    message,
                )
            }
            RepositoryError::Driver(driver) => {
                self.logger.error(&format!(
                    "Unhandled database error on {entity}: code={} message={}",
                    driver.code, driver.message
                ));
                ClassifiedError {
                    kind: DataErrorKind::Unhandled,
                    entity,
                    field: None,
                    table: None,
                    constraint: None,
                    code: driver.code.clone(),
                    message: "An unexpected database error occurred".to_string(),
                }
            }
            RepositoryError::Connection => return None,
        };

        Some(classified)
    }
}

fn unique_violation(driver: &DriverError, entity: EntityName) -> ClassifiedError {
    let field = driver
        .constraint
        .as_deref()
        .and_then(|constraint| field_from_constraint(constraint, driver.table.as_deref()));
    let message = match &field {
        Some(field) => format!("{entity} with this {field} already exists"),
        None => format!("{entity} already exists"),
    };

    ClassifiedError {
        kind: DataErrorKind::UniqueViolation,
        entity,
        field,
        table: driver.table.clone(),
        constraint: driver.constraint.clone(),
        code: app_code::UNIQUE_CONSTRAINT.to_string(),
        message,
    }
}

fn foreign_key_violation(driver: &DriverError, entity: EntityName) -> ClassifiedError {
    let detail = driver.detail.as_deref().unwrap_or_default();

    // Deleting a parent row: the detail names the child table and the
    // parent's own key, which is not a field the client sent.
    if let Some(dependent) = referencing_table(detail) {
        return ClassifiedError {
            kind: DataErrorKind::ForeignKeyViolation,
            entity,
            field: None,
            message: format!("{entity} is still referenced by {dependent}"),
            table: Some(dependent),
            constraint: driver.constraint.clone(),
            code: app_code::FOREIGN_KEY_CONSTRAINT.to_string(),
        };
    }

    let referenced = referenced_table(detail);
    let field = referenced.as_ref().and_then(|_| {
        DETAIL_KEY_COLUMN
            .captures(detail)
            .map(|caps| caps["column"].to_string())
    });
    let message = match &referenced {
        Some(table) => format!("{entity} references a missing record in {table}"),
        None => format!("{entity} references a record that does not exist"),
    };

    ClassifiedError {
        kind: DataErrorKind::ForeignKeyViolation,
        entity,
        field,
        table: referenced,
        constraint: driver.constraint.clone(),
        code: app_code::FOREIGN_KEY_CONSTRAINT.to_string(),
        message,
    }
}

fn column_error(
    driver: &DriverError,
    entity: EntityName,
    kind: DataErrorKind,
    code: &str,
    message: String,
) -> ClassifiedError {
    ClassifiedError {
        kind,
        entity,
        field: driver.column.clone(),
        table: driver.table.clone(),
        constraint: driver.constraint.clone(),
        code: code.to_string(),
        message,
    }
}

/// Pulls the column out of a Postgres-style unique constraint name
/// (`<table>_<field>_key` or `<table>_<field>_unique`).
pub fn field_from_constraint(constraint: &str, table: Option<&str>) -> Option<String> {
    let caps = CONSTRAINT_SUFFIX.captures(constraint)?;
    let stem = caps.name("stem")?.as_str();

    let field = table
        .and_then(|t| stem.strip_prefix(t))
        .and_then(|rest| rest.strip_prefix('_'))
        .or_else(|| stem.split_once('_').map(|(_, rest)| rest))?;

    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Table named in a foreign key violation detail, e.g.
/// `Key (category_id)=(5) is not present in table "categories".`
pub fn referenced_table(detail: &str) -> Option<String> {
    MISSING_REFERENCE_TABLE
        .captures(detail)
        .map(|caps| caps["table"].to_string())
}

/// Child table named when a delete or key update would orphan rows, e.g.
/// `Key (id)=(…) is still referenced from table "products".`
pub fn referencing_table(detail: &str) -> Option<String> {
    STILL_REFERENCED_TABLE
        .captures(detail)
        .map(|caps| caps["table"].to_string())
}
