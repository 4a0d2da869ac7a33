//! Repository abstraction over the persisted order collection.
//!
//! The collection as a whole is the unit of persistence: loads read the
//! full array, saves rewrite it. There is no per-order persistence boundary
//! and no coordination between concurrent writers; two processes saving at
//! once end with whichever write landed last. That race is inherited from
//! the original storefront's design and is deliberately left in place.

use async_trait::async_trait;
use std::sync::Arc;
use store_storage::{StorageError, StorageService};
use store_types::{Order, StorageKey};

/// Access to the persisted order collection.
///
/// Injected into the dashboard so the view-model can be exercised without a
/// real storage backend.
#[async_trait]
pub trait OrderRepository: Send + Sync {
	/// Loads the full order collection.
	///
	/// Missing or unreadable data loads as the empty collection; load never
	/// surfaces an error to the caller.
	async fn load(&self) -> Vec<Order>;

	/// Persists the full order collection, replacing the previous one.
	async fn save(&self, orders: &[Order]) -> Result<(), StorageError>;
}

/// Repository backed by a [`StorageService`] under the `orders` key.
pub struct StorageOrderRepository {
	storage: Arc<StorageService>,
}

impl StorageOrderRepository {
	/// Creates a repository over the given storage service.
	pub fn new(storage: Arc<StorageService>) -> Self {
		Self { storage }
	}
}

#[async_trait]
impl OrderRepository for StorageOrderRepository {
	async fn load(&self) -> Vec<Order> {
		match self.storage.retrieve::<Vec<Order>>(StorageKey::Orders).await {
			Ok(orders) => orders,
			Err(StorageError::NotFound) => {
				tracing::debug!("No persisted orders found, starting empty");
				Vec::new()
			}
			Err(e) => {
				tracing::warn!("Failed to load order collection, treating as empty: {}", e);
				Vec::new()
			}
		}
	}

	async fn save(&self, orders: &[Order]) -> Result<(), StorageError> {
		self.storage.store(StorageKey::Orders, &orders).await
	}
}
