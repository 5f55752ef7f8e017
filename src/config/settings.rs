use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_API_BASE_PATH: &str = "/api/v1";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub api_base_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_optional(EnvKey::DatabaseUrl),
            database_max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 20),
            api_base_path: normalize_base_path(&env::get_or(
                EnvKey::ApiBasePath,
                DEFAULT_API_BASE_PATH,
            )),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            database_url: None,
            database_max_connections: 20,
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
        }
    }
}

/// Leading slash, no trailing slash. A blank value falls back to the default.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_PATH.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
