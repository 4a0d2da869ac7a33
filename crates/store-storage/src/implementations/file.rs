//! File-based storage backend for the admin service.
//!
//! Stores each key as one JSON document on the filesystem, providing simple
//! persistence without requiring an external database. This mirrors the
//! single-document-per-key model the browser storefront used: every write
//! replaces the whole document.

use crate::{StorageError, StorageInterface};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// File-based storage implementation.
///
/// Writes are atomic at the key level (temp file + rename), but there is no
/// cross-process locking: two writers racing on the same key end with
/// whichever write renamed last.
pub struct FileStorage {
	/// Base directory path for storing documents.
	base_path: PathBuf,
}

impl FileStorage {
	/// Creates a new FileStorage instance rooted at the specified base path.
	pub fn new(base_path: PathBuf) -> Self {
		Self { base_path }
	}

	/// Converts a storage key to a filesystem-safe file path.
	///
	/// Sanitizes the key by replacing problematic characters and appending
	/// a .json extension.
	fn get_file_path(&self, key: &str) -> PathBuf {
		let safe_key = key.replace(['/', ':'], "_");
		self.base_path.join(format!("{}.json", safe_key))
	}
}

#[async_trait]
impl StorageInterface for FileStorage {
	async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
		let path = self.get_file_path(key);

		match fs::read(&path).await {
			Ok(data) => Ok(data),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		// Create parent directory if it doesn't exist
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)
				.await
				.map_err(|e| StorageError::Backend(e.to_string()))?;
		}

		// Write atomically by writing to temp file then renaming
		let temp_path = path.with_extension("tmp");
		fs::write(&temp_path, value)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		fs::rename(&temp_path, &path)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		match fs::remove_file(&path).await {
			Ok(_) => Ok(()),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn exists(&self, key: &str) -> Result<bool, StorageError> {
		let path = self.get_file_path(key);
		Ok(path.exists())
	}
}

/// Factory function to create a file storage backend from configuration.
///
/// Configuration parameters:
/// - `storage_path`: Base directory for stored documents (default: "./data/storage")
pub fn create_storage(config: &toml::Value) -> Result<Box<dyn StorageInterface>, StorageError> {
	let storage_path = config
		.get("storage_path")
		.and_then(|v| v.as_str())
		.unwrap_or("./data/storage")
		.to_string();

	Ok(Box::new(FileStorage::new(PathBuf::from(storage_path))))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::tempdir;

	#[tokio::test]
	async fn round_trip_on_disk() {
		let dir = tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());

		storage
			.set_bytes("orders", br#"[{"id":"1"}]"#.to_vec())
			.await
			.unwrap();
		assert!(storage.exists("orders").await.unwrap());

		let data = storage.get_bytes("orders").await.unwrap();
		assert_eq!(data, br#"[{"id":"1"}]"#.to_vec());

		storage.delete("orders").await.unwrap();
		assert!(matches!(
			storage.get_bytes("orders").await,
			Err(StorageError::NotFound)
		));
	}

	#[tokio::test]
	async fn overwrite_replaces_document() {
		let dir = tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());

		storage.set_bytes("orders", b"[]".to_vec()).await.unwrap();
		storage
			.set_bytes("orders", b"[1,2]".to_vec())
			.await
			.unwrap();

		assert_eq!(storage.get_bytes("orders").await.unwrap(), b"[1,2]");
	}

	#[tokio::test]
	async fn delete_missing_key_is_ok() {
		let dir = tempdir().unwrap();
		let storage = FileStorage::new(dir.path().to_path_buf());

		storage.delete("admin_session").await.unwrap();
	}

	#[test]
	fn keys_are_sanitized() {
		let storage = FileStorage::new(PathBuf::from("/tmp/store"));
		let path = storage.get_file_path("admin:session/flag");
		assert_eq!(path, PathBuf::from("/tmp/store/admin_session_flag.json"));
	}
}
