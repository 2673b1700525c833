use crate::config::constants;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Read(#[from] io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub app: AppInfo,
    pub server: Server,
    pub database: Database,
    pub environment: String,
    pub platform: String,
    pub static_dir: String,
    pub templates_dir: String,
    pub cors: Cors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Database {
    pub url: String,
}

/// Cross-origin policy. Origins are matched exactly; an empty list rejects
/// every cross-origin request.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppInfo::default(),
            server: Server::default(),
            database: Database::default(),
            environment: "vercel".to_string(),
            platform: "serverless".to_string(),
            static_dir: "static".to_string(),
            templates_dir: "templates".to_string(),
            cors: Cors::default(),
        }
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        AppInfo {
            name: "Jubair Boot House".to_string(),
            description: "Professional footwear store with admin management".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Server {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Database {
            url: constants::DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new(input_file: &str) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(input_file)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads `input_file` if it exists, falling back to defaults, then applies
    /// environment overrides.
    pub fn load(input_file: &str) -> Result<Config, ConfigError> {
        let config = if Path::new(input_file).exists() {
            info!("loading configuration from {}", input_file);
            Config::new(input_file)?
        } else {
            warn!("{} not found - using default configuration", input_file);
            Config::default()
        };

        Ok(config.with_database_url(env::var(constants::DATABASE_URL_ENV).ok()))
    }

    pub fn with_database_url(mut self, url: Option<String>) -> Config {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_reads_partial_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
environment: production
server:
  port: 3000
cors:
  allowed_origins:
    - https://shop.example.com
  allow_credentials: true
"#
        )
        .unwrap();

        let config = Config::new(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.platform, "serverless");
        assert_eq!(config.app.name, "Jubair Boot House");
        assert_eq!(config.cors.allowed_origins, vec!["https://shop.example.com"]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_new_rejects_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server: [not, a, map").unwrap();

        let result = Config::new(file.path().to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let config = Config::load(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.app.version, env!("CARGO_PKG_VERSION"));
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_with_database_url() {
        let config = Config::default().with_database_url(Some("sqlite::memory:".to_string()));
        assert_eq!(config.database.url, "sqlite::memory:");

        let config = Config::default().with_database_url(Some("  ".to_string()));
        assert_eq!(config.database.url, constants::DEFAULT_DATABASE_URL);

        let config = Config::default().with_database_url(None);
        assert_eq!(config.database.url, constants::DEFAULT_DATABASE_URL);
    }
}
