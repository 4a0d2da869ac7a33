//! Configuration module for the storefront admin service.
//!
//! This module provides structures and utilities for managing service
//! configuration. It supports loading configuration from TOML files and
//! provides validation to ensure all required values are properly set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the storefront admin service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration specific to this store instance.
	pub store: StoreConfig,
	/// Configuration for the storage backend.
	pub storage: StorageConfig,
	/// Configuration for the HTTP API server.
	#[serde(default)]
	pub api: ApiConfig,
	/// Configuration for admin authentication.
	pub admin: AdminConfig,
}

/// Configuration specific to the store instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
	/// Unique identifier for this store instance.
	pub id: String,
}

/// Configuration for the storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
	/// Which implementation to use as primary.
	pub primary: String,
	/// Map of storage implementation names to their configurations.
	#[serde(default)]
	pub implementations: HashMap<String, toml::Value>,
}

/// Configuration for the HTTP API server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
	/// Host address to bind to.
	#[serde(default = "default_host")]
	pub host: String,
	/// Port to listen on.
	#[serde(default = "default_port")]
	pub port: u16,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			host: default_host(),
			port: default_port(),
		}
	}
}

fn default_host() -> String {
	"127.0.0.1".to_string()
}

fn default_port() -> u16 {
	3000
}

/// Configuration for admin authentication.
///
/// The storefront's original admin login shipped its credentials to the
/// browser; here the password lives server-side in the config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
	/// Password required by the admin login endpoint.
	pub password: String,
}

impl Config {
	/// Loads configuration from a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Loads configuration from a TOML file without blocking the runtime.
	pub async fn from_file_async<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		Self::from_toml_str(&content)
	}

	/// Parses and validates configuration from a TOML string.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Config = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Validates the configuration values.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.store.id.is_empty() {
			return Err(ConfigError::Validation("store.id must not be empty".into()));
		}
		if !self
			.storage
			.implementations
			.contains_key(&self.storage.primary)
		{
			return Err(ConfigError::Validation(format!(
				"storage.primary '{}' has no matching [storage.implementations.{}] section",
				self.storage.primary, self.storage.primary
			)));
		}
		if self.api.port == 0 {
			return Err(ConfigError::Validation("api.port must be nonzero".into()));
		}
		if self.admin.password.is_empty() {
			return Err(ConfigError::Validation(
				"admin.password must not be empty".into(),
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	const VALID_CONFIG: &str = r#"
[store]
id = "demo-store"

[storage]
primary = "memory"

[storage.implementations.memory]

[api]
host = "0.0.0.0"
port = 8080

[admin]
password = "hunter2"
"#;

	#[test]
	fn parses_valid_config() {
		let config = Config::from_toml_str(VALID_CONFIG).unwrap();
		assert_eq!(config.store.id, "demo-store");
		assert_eq!(config.storage.primary, "memory");
		assert_eq!(config.api.host, "0.0.0.0");
		assert_eq!(config.api.port, 8080);
		assert_eq!(config.admin.password, "hunter2");
	}

	#[test]
	fn api_section_is_optional() {
		let config = Config::from_toml_str(
			r#"
[store]
id = "demo-store"

[storage]
primary = "memory"

[storage.implementations.memory]

[admin]
password = "hunter2"
"#,
		)
		.unwrap();

		assert_eq!(config.api.host, "127.0.0.1");
		assert_eq!(config.api.port, 3000);
	}

	#[test]
	fn rejects_unconfigured_primary() {
		let result = Config::from_toml_str(
			r#"
[store]
id = "demo-store"

[storage]
primary = "file"

[storage.implementations.memory]

[admin]
password = "hunter2"
"#,
		);

		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn rejects_empty_admin_password() {
		let result = Config::from_toml_str(
			r#"
[store]
id = "demo-store"

[storage]
primary = "memory"

[storage.implementations.memory]

[admin]
password = ""
"#,
		);

		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn loads_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(VALID_CONFIG.as_bytes()).unwrap();

		let config = Config::from_file(file.path()).unwrap();
		assert_eq!(config.store.id, "demo-store");
	}

	#[tokio::test]
	async fn loads_from_file_async() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(VALID_CONFIG.as_bytes()).unwrap();

		let config = Config::from_file_async(file.path()).await.unwrap();
		assert_eq!(config.storage.primary, "memory");
	}

	#[test]
	fn parse_error_is_reported() {
		let result = Config::from_toml_str("store = 12");
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}
}
