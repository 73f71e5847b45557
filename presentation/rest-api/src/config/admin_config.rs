use std::env;

/// Credentials for admin-gated routes
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    api_key: Option<String>,
}

impl AdminConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Environment variables:
    /// - ADMIN_API_KEY: Key expected in the `x-api-key` header. When unset,
    ///   every admin route rejects.
    pub fn from_env() -> Self {
        let config = Self::new(env::var("ADMIN_API_KEY").ok());
        if config.api_key.is_none() {
            tracing::warn!("ADMIN_API_KEY is not set, admin routes are disabled");
        }
        config
    }

    pub fn accepts(&self, provided: &str) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|expected| expected == provided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_matching_key() {
        let config = AdminConfig::new(Some("s3cret".to_string()));

        assert!(config.accepts("s3cret"));
        assert!(!config.accepts("guess"));
    }

    #[test]
    fn should_reject_everything_without_configured_key() {
        assert!(!AdminConfig::new(None).accepts(""));
        assert!(!AdminConfig::new(Some(String::new())).accepts(""));
    }
}
