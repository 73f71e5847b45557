use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::entity::EntityName;
use business::domain::product::errors::ProductError;

use crate::api::data_error::DataErrorRenderer;
use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(
        self,
        renderer: &DataErrorRenderer,
    ) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::NameEmpty
            | ProductError::SlugInvalid
            | ProductError::NegativePrice
            | ProductError::InvalidPrice
            | ProductError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(self.to_string())),
            ),
            ProductError::NotFound => renderer.not_found(EntityName::Product),
            ProductError::Repository(err) => renderer.render(&err, EntityName::Product),
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

    fn renderer(scheme: ErrorScheme) -> DataErrorRenderer {
        DataErrorRenderer::new(
            Arc::new(DatabaseErrorTranslator::new(Arc::new(TracingLogger))),
            scheme,
        )
    }

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, Json(body)) =
            ProductError::NegativePrice.into_error_response(&renderer(ErrorScheme::Driver));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "product.negative_price");
        assert_eq!(body.code, "VALIDATION_ERROR");
    }

    #[test]
    fn should_map_out_of_range_price_to_bad_request() {
        let (status, Json(body)) =
            ProductError::InvalidPrice.into_error_response(&renderer(ErrorScheme::Driver));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "product.invalid_price");
    }

    #[test]
    fn should_translate_not_found_with_product_entity() {
        let (status, Json(body)) =
            ProductError::NotFound.into_error_response(&renderer(ErrorScheme::Driver));

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Product not found");
        assert_eq!(body.code, "P2025");
    }

    #[test]
    fn should_translate_missing_category_reference() {
        let error = ProductError::Repository(RepositoryError::from_driver(
            DriverError::new("23503", "insert or update violates foreign key constraint")
                .with_detail(r#"Key (category_id)=(5) is not present in table "categories"."#),
        ));

        let (status, Json(body)) = error.into_error_response(&renderer(ErrorScheme::Legacy));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "P2003");
        assert_eq!(
            body.error.map(|detail| detail.error),
            Some("Bad Request".to_string())
        );
    }

    #[test]
    fn should_fall_back_to_internal_error_for_connection_failures() {
        let error = ProductError::Repository(RepositoryError::Connection);

        let (status, Json(body)) = error.into_error_response(&renderer(ErrorScheme::Driver));

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");
    }
}
