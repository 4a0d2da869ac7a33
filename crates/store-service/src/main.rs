//! Main entry point for the storefront admin service.
//!
//! This binary wires the order dashboard view-model to a storage backend
//! and exposes it over HTTP for the admin front end. Storage backends are
//! pluggable and selected through configuration.

use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use store_admin::{AdminGate, AutoConfirm, Dashboard, StorageOrderRepository};
use store_config::{Config, StorageConfig};
use store_storage::{StorageError, StorageFactory, StorageService};
use tokio::sync::RwLock;

mod server;

/// Command-line arguments for the admin service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Main entry point for the admin service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration from file
/// 4. Builds the storage backend and loads the order collection
/// 5. Serves the admin API until interrupted
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_target(true)
		.init();

	tracing::info!("Started storefront admin service");

	let config = Config::from_file_async(&args.config).await?;
	tracing::info!("Loaded configuration [{}]", config.store.id);

	let storage = Arc::new(build_storage(&config.storage)?);
	let gate = Arc::new(AdminGate::new(Arc::clone(&storage)));

	let repository = Arc::new(StorageOrderRepository::new(storage));
	// Issuing a DELETE request is the confirmation step over HTTP.
	let mut dashboard = Dashboard::new(repository, Arc::new(AutoConfirm));
	dashboard.load().await;

	server::start_server(config, Arc::new(RwLock::new(dashboard)), gate).await?;

	tracing::info!("Stopped storefront admin service");
	Ok(())
}

/// Builds the configured storage backend.
///
/// The primary implementation named in the configuration is looked up in
/// the factory registry and fed its own configuration table.
fn build_storage(config: &StorageConfig) -> Result<StorageService, StorageError> {
	let factories: HashMap<&'static str, StorageFactory> =
		store_storage::get_all_implementations().into_iter().collect();

	let factory = factories.get(config.primary.as_str()).ok_or_else(|| {
		StorageError::Configuration(format!(
			"Unknown storage implementation '{}'",
			config.primary
		))
	})?;

	let implementation_config = config
		.implementations
		.get(&config.primary)
		.cloned()
		.unwrap_or_else(|| toml::Value::Table(toml::map::Map::new()));

	let backend = factory(&implementation_config)?;
	Ok(StorageService::new(backend))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use store_types::StorageKey;
	use tempfile::NamedTempFile;

	#[test]
	fn test_args_default_values() {
		let args = Args {
			config: PathBuf::from("config.toml"),
			log_level: "info".to_string(),
		};

		assert_eq!(args.config, PathBuf::from("config.toml"));
		assert_eq!(args.log_level, "info");
	}

	#[tokio::test]
	async fn build_storage_with_memory_backend() {
		let config = StorageConfig {
			primary: "memory".to_string(),
			implementations: {
				let mut map = HashMap::new();
				map.insert(
					"memory".to_string(),
					toml::Value::Table(toml::map::Map::new()),
				);
				map
			},
		};

		let storage = build_storage(&config).unwrap();
		storage
			.store(StorageKey::Orders, &Vec::<String>::new())
			.await
			.unwrap();
		assert!(storage.exists(StorageKey::Orders).await.unwrap());
	}

	#[test]
	fn build_storage_rejects_unknown_implementation() {
		let config = StorageConfig {
			primary: "redis".to_string(),
			implementations: HashMap::new(),
		};

		let result = build_storage(&config);
		assert!(matches!(result, Err(StorageError::Configuration(_))));
	}

	#[tokio::test]
	async fn loads_config_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(
			br#"
[store]
id = "test-store"

[storage]
primary = "memory"

[storage.implementations.memory]

[admin]
password = "secret"
"#,
		)
		.unwrap();

		let config = Config::from_file_async(file.path()).await.unwrap();
		assert_eq!(config.store.id, "test-store");
		assert_eq!(config.storage.primary, "memory");

		let storage = build_storage(&config.storage).unwrap();
		assert!(!storage.exists(StorageKey::Orders).await.unwrap());
	}
}
