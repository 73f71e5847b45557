use crate::domain::entity::EntityName;
use crate::domain::errors::RepositoryError;

use super::model::ClassifiedError;

pub trait DataErrorTranslator: Send + Sync {
    /// Returns `None` when the error did not come from the database engine,
    /// leaving it to the caller's default handling.
    fn translate(&self, error: &RepositoryError, entity: EntityName) -> Option<ClassifiedError>;
}
