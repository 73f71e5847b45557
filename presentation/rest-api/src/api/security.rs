use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use crate::config::admin_config::AdminConfig;

/// Admin API key passed in the `x-api-key` header
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "x-api-key",
    key_in = "header",
    checker = "admin_api_key_checker"
)]
#[allow(dead_code)]
pub struct AdminApiKey(pub String);

async fn admin_api_key_checker(req: &Request, api_key: ApiKey) -> Option<String> {
    let Some(config) = req.data::<AdminConfig>() else {
        tracing::error!("Admin configuration missing from request data");
        return None;
    };

    if config.accepts(&api_key.key) {
        Some("admin".to_string())
    } else {
        tracing::warn!(path = %req.uri().path(), "Rejected admin request");
        None
    }
}
