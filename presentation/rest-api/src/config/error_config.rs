use std::env;
use std::str::FromStr;

/// Layout of translated database error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorScheme {
    /// `{ "message", "code" }`
    #[default]
    Driver,
    /// Same body plus a nested `"error": { "error", "message", "code" }`
    /// object for clients built against the older API.
    Legacy,
}

impl FromStr for ErrorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driver" => Ok(ErrorScheme::Driver),
            "legacy" => Ok(ErrorScheme::Legacy),
            other => Err(format!("Invalid error response scheme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ErrorConfig {
    pub scheme: ErrorScheme,
}

impl ErrorConfig {
    /// Environment variables:
    /// - ERROR_RESPONSE_SCHEME: "driver" or "legacy" (default: "driver")
    pub fn from_env() -> Self {
        let scheme = match env::var("ERROR_RESPONSE_SCHEME") {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{e}, falling back to driver scheme");
                ErrorScheme::default()
            }),
            Err(_) => ErrorScheme::default(),
        };

        Self { scheme }
    }
}
