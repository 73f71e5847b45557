use super::{
    admin_config::AdminConfig, cors_config, database_config::DatabaseSettings,
    error_config::ErrorConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub errors: ErrorConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            errors: ErrorConfig::from_env(),
            admin: AdminConfig::from_env(),
        })
    }
}
