//! Admin session flag helper.
//!
//! The storefront gated its admin pages behind a single boolean flag in
//! browser storage. The same contract is kept here: one flag under a fixed
//! key, set on login, removed on logout, absent or falsy means not
//! authenticated. There are no sessions, tokens, or expiry.

use std::sync::Arc;
use store_storage::{StorageError, StorageService};
use store_types::StorageKey;

/// Checks and maintains the admin authentication flag.
pub struct AdminGate {
	storage: Arc<StorageService>,
}

impl AdminGate {
	/// Creates a gate over the given storage service.
	pub fn new(storage: Arc<StorageService>) -> Self {
		Self { storage }
	}

	/// Returns true only when the flag is present and set.
	///
	/// Storage faults read as not authenticated rather than erroring.
	pub async fn is_authenticated(&self) -> bool {
		self.storage
			.retrieve::<bool>(StorageKey::AdminSession)
			.await
			.unwrap_or(false)
	}

	/// Sets the authentication flag.
	pub async fn login(&self) -> Result<(), StorageError> {
		self.storage.store(StorageKey::AdminSession, &true).await
	}

	/// Removes the authentication flag.
	pub async fn logout(&self) -> Result<(), StorageError> {
		self.storage.remove(StorageKey::AdminSession).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use store_storage::implementations::memory::MemoryStorage;

	fn gate() -> AdminGate {
		AdminGate::new(Arc::new(StorageService::new(Box::new(
			MemoryStorage::new(),
		))))
	}

	#[tokio::test]
	async fn absent_flag_is_not_authenticated() {
		assert!(!gate().is_authenticated().await);
	}

	#[tokio::test]
	async fn login_then_logout_round_trip() {
		let gate = gate();

		gate.login().await.unwrap();
		assert!(gate.is_authenticated().await);

		gate.logout().await.unwrap();
		assert!(!gate.is_authenticated().await);
	}

	#[tokio::test]
	async fn falsy_flag_is_not_authenticated() {
		let storage = Arc::new(StorageService::new(Box::new(MemoryStorage::new())));
		storage
			.store(StorageKey::AdminSession, &false)
			.await
			.unwrap();

		let gate = AdminGate::new(storage);
		assert!(!gate.is_authenticated().await);
	}
}
