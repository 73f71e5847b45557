use std::env;
use std::num::NonZeroUsize;
use std::thread;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    pub workers: usize,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - SERVER_WORKERS: Runtime worker threads (default: one per CPU core)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let workers = resolve_workers(env::var("SERVER_WORKERS").ok().as_deref());

        Self { ip, port, workers }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn resolve_workers(requested: Option<&str>) -> usize {
    requested
        .and_then(|value| value.trim().parse::<NonZeroUsize>().ok())
        .or_else(|| thread::available_parallelism().ok())
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
