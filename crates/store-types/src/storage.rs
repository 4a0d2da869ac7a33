//! Storage-related types for the storefront admin system.

use std::str::FromStr;

/// Storage keys for the persisted data collections.
///
/// This enum provides type safety for storage operations by replacing
/// string literals with strongly typed variants. Each key holds one JSON
/// document: the order collection is a single array rewritten wholesale on
/// every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
	/// Key for the full order collection.
	Orders,
	/// Key for the admin authentication flag.
	AdminSession,
}

impl StorageKey {
	/// Returns the string representation of the storage key.
	pub fn as_str(&self) -> &'static str {
		match self {
			StorageKey::Orders => "orders",
			StorageKey::AdminSession => "admin_session",
		}
	}

	/// Returns an iterator over all StorageKey variants.
	pub fn all() -> impl Iterator<Item = Self> {
		[Self::Orders, Self::AdminSession].into_iter()
	}
}

impl FromStr for StorageKey {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"orders" => Ok(Self::Orders),
			"admin_session" => Ok(Self::AdminSession),
			_ => Err(()),
		}
	}
}

impl From<StorageKey> for &'static str {
	fn from(key: StorageKey) -> Self {
		key.as_str()
	}
}
