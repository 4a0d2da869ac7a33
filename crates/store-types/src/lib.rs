//! Common types module for the storefront admin system.
//!
//! This module defines the core data types and structures shared by the
//! storage, view-model, and service crates. It provides a centralized
//! location for shared types to ensure consistency across all components.

/// API types for HTTP endpoints and request/response structures.
pub mod api;
/// Order domain types including line items, customers, and statuses.
pub mod order;
/// Storage types for managing persistent data.
pub mod storage;

// Re-export all types for convenient access
pub use api::*;
pub use order::*;
pub use storage::*;
