use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;
use business::domain::entity::EntityName;

use crate::api::data_error::DataErrorRenderer;
use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(
        self,
        renderer: &DataErrorRenderer,
    ) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CategoryError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(self.to_string())),
            ),
            CategoryError::NotFound => renderer.not_found(EntityName::Category),
            CategoryError::Repository(err) => renderer.render(&err, EntityName::Category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::application::data_error::translator::DatabaseErrorTranslator;
    use business::domain::errors::{DriverError, RepositoryError};
    use logger::TracingLogger;

    use crate::config::error_config::ErrorScheme;

    fn renderer() -> DataErrorRenderer {
        DataErrorRenderer::new(
            Arc::new(DatabaseErrorTranslator::new(Arc::new(TracingLogger))),
            ErrorScheme::Driver,
        )
    }

    #[test]
    fn should_map_blank_name_to_validation_error() {
        let (status, Json(body)) = CategoryError::NameEmpty.into_error_response(&renderer());

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "category.name_empty");
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[test]
    fn should_translate_not_found_with_category_entity() {
        let (status, Json(body)) = CategoryError::NotFound.into_error_response(&renderer());

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Category not found");
        assert_eq!(body.code, "P2025");
    }

    #[test]
    fn should_translate_duplicate_name() {
        let error = CategoryError::Repository(RepositoryError::from_driver(
            DriverError::new("23505", "duplicate key value")
                .with_constraint("categories_name_key")
                .with_table("categories"),
        ));

        let (status, Json(body)) = error.into_error_response(&renderer());

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.message, "Category with this name already exists");
    }
}
