//! Storage module for the storefront admin system.
//!
//! This module provides abstractions for persistent storage of the order
//! collection and the admin session flag, supporting different backend
//! implementations such as in-memory or file-based stores.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use store_types::StorageKey;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod file;
	pub mod memory;
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
	/// Error that occurs when a requested key is not found.
	#[error("Not found")]
	NotFound,
	/// Error that occurs during serialization/deserialization.
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// Error that occurs in the storage backend.
	#[error("Backend error: {0}")]
	Backend(String),
	/// Error that occurs during backend configuration.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Trait defining the low-level interface for storage backends.
///
/// This trait must be implemented by any storage backend that wants to
/// integrate with the admin service. It provides basic key-value operations
/// over raw bytes; typed access goes through [`StorageService`].
#[async_trait]
pub trait StorageInterface: Send + Sync {
	/// Retrieves raw bytes for the given key.
	async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError>;

	/// Stores raw bytes under the given key, replacing any previous value.
	async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError>;

	/// Deletes the value associated with the given key.
	async fn delete(&self, key: &str) -> Result<(), StorageError>;

	/// Checks if a key exists in storage.
	async fn exists(&self, key: &str) -> Result<bool, StorageError>;
}

/// Type alias for storage factory functions.
///
/// This is the function signature that all storage implementations must
/// provide to create instances of their storage interface from TOML
/// configuration.
pub type StorageFactory = fn(&toml::Value) -> Result<Box<dyn StorageInterface>, StorageError>;

/// Get all registered storage implementations.
///
/// Returns a vector of (name, factory) tuples for all available storage
/// implementations.
pub fn get_all_implementations() -> Vec<(&'static str, StorageFactory)> {
	use implementations::{file, memory};

	vec![
		("file", file::create_storage as StorageFactory),
		("memory", memory::create_storage as StorageFactory),
	]
}

/// High-level storage service that provides typed operations.
///
/// The StorageService wraps a low-level storage backend and provides
/// convenient methods for storing and retrieving typed data with automatic
/// JSON serialization. Keys are the typed [`StorageKey`] variants; each key
/// holds exactly one document, so writers replace the whole value on every
/// store. Two concurrent writers race with last-write-wins semantics.
pub struct StorageService {
	/// The underlying storage backend implementation.
	backend: Box<dyn StorageInterface>,
}

impl StorageService {
	/// Creates a new StorageService with the specified backend.
	pub fn new(backend: Box<dyn StorageInterface>) -> Self {
		Self { backend }
	}

	/// Stores a serializable value under the given key.
	///
	/// The data is serialized to JSON before storage, replacing whatever
	/// was previously held under the key.
	pub async fn store<T: Serialize>(&self, key: StorageKey, data: &T) -> Result<(), StorageError> {
		let bytes =
			serde_json::to_vec(data).map_err(|e| StorageError::Serialization(e.to_string()))?;
		self.backend.set_bytes(key.as_str(), bytes).await
	}

	/// Retrieves and deserializes a value from storage.
	pub async fn retrieve<T: DeserializeOwned>(&self, key: StorageKey) -> Result<T, StorageError> {
		let bytes = self.backend.get_bytes(key.as_str()).await?;
		serde_json::from_slice(&bytes).map_err(|e| StorageError::Serialization(e.to_string()))
	}

	/// Removes a value from storage. Removing an absent key is not an error.
	pub async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
		self.backend.delete(key.as_str()).await
	}

	/// Checks if a value exists in storage.
	pub async fn exists(&self, key: StorageKey) -> Result<bool, StorageError> {
		self.backend.exists(key.as_str()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::implementations::memory::MemoryStorage;
	use store_types::StorageKey;

	#[tokio::test]
	async fn typed_round_trip() {
		let service = StorageService::new(Box::new(MemoryStorage::new()));

		let value = vec!["a".to_string(), "b".to_string()];
		service.store(StorageKey::Orders, &value).await.unwrap();

		let loaded: Vec<String> = service.retrieve(StorageKey::Orders).await.unwrap();
		assert_eq!(loaded, value);

		service.remove(StorageKey::Orders).await.unwrap();
		assert!(!service.exists(StorageKey::Orders).await.unwrap());
	}

	#[tokio::test]
	async fn retrieve_missing_key_is_not_found() {
		let service = StorageService::new(Box::new(MemoryStorage::new()));

		let result: Result<Vec<String>, _> = service.retrieve(StorageKey::Orders).await;
		assert!(matches!(result, Err(StorageError::NotFound)));
	}

	#[tokio::test]
	async fn retrieve_rejects_malformed_payload() {
		let backend = MemoryStorage::new();
		backend
			.set_bytes(StorageKey::Orders.as_str(), b"not json".to_vec())
			.await
			.unwrap();

		let service = StorageService::new(Box::new(backend));
		let result: Result<Vec<String>, _> = service.retrieve(StorageKey::Orders).await;
		assert!(matches!(result, Err(StorageError::Serialization(_))));
	}
}
