use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::data_error::model::{ClassifiedError, DataErrorKind};
use business::domain::data_error::services::DataErrorTranslator;
use business::domain::entity::EntityName;
use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, LegacyErrorDetail};
use crate::config::error_config::ErrorScheme;

pub fn status_for(kind: DataErrorKind) -> StatusCode {
    match kind {
        DataErrorKind::NotFound => StatusCode::NOT_FOUND,
        DataErrorKind::UniqueViolation => StatusCode::CONFLICT,
        DataErrorKind::ForeignKeyViolation
        | DataErrorKind::NotNullViolation
        | DataErrorKind::StringTruncation => StatusCode::BAD_REQUEST,
        DataErrorKind::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Scoped error handler for data-access routes.
///
/// Runs the translator and renders its result in the configured scheme.
/// Errors the translator does not recognize get the generic 500 body.
#[derive(Clone)]
pub struct DataErrorRenderer {
    translator: Arc<dyn DataErrorTranslator>,
    scheme: ErrorScheme,
}

impl DataErrorRenderer {
    pub fn new(translator: Arc<dyn DataErrorTranslator>, scheme: ErrorScheme) -> Self {
        Self { translator, scheme }
    }

    pub fn render(
        &self,
        error: &RepositoryError,
        entity: EntityName,
    ) -> (StatusCode, Json<ErrorResponse>) {
        match self.translator.translate(error, entity) {
            Some(classified) => self.render_classified(&classified),
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            ),
        }
    }

    pub fn not_found(&self, entity: EntityName) -> (StatusCode, Json<ErrorResponse>) {
        self.render(&RepositoryError::NotFound, entity)
    }

    pub fn render_classified(
        &self,
        classified: &ClassifiedError,
    ) -> (StatusCode, Json<ErrorResponse>) {
        let status = status_for(classified.kind);
        let mut body = ErrorResponse::new(classified.message.clone(), classified.code.clone());

        if self.scheme == ErrorScheme::Legacy {
            body.error = Some(LegacyErrorDetail {
                error: status.canonical_reason().unwrap_or("Error").to_string(),
                message: classified.message.clone(),
                code: classified.code.clone(),
            });
        }

        (status, Json(body))
    }
}
