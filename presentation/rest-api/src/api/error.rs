use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use crate::api::data_error::DataErrorRenderer;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    /// Only present when the legacy error scheme is enabled
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<LegacyErrorDetail>,
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct LegacyErrorDetail {
    pub error: String,
    pub message: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            error: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message, VALIDATION_ERROR)
    }

    pub fn internal() -> Self {
        Self::new("Internal server error", INTERNAL_ERROR)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(
        self,
        renderer: &DataErrorRenderer,
    ) -> (StatusCode, Json<ErrorResponse>);
}
