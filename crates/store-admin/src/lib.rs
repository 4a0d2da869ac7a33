//! Order administration module for the storefront system.
//!
//! This module implements the admin dashboard's view-model: it derives
//! filtered, sorted, and aggregated views over the persisted order
//! collection and applies status changes and deletions back through a
//! pluggable repository. Presentation and catalog concerns live elsewhere;
//! this crate holds the logic the dashboard runs on.

/// Confirmation capability for destructive actions.
pub mod confirm;
/// The order dashboard view-model.
pub mod dashboard;
/// Repository abstraction over the persisted order collection.
pub mod repository;
/// Admin session flag helper.
pub mod session;
/// Filter, range, and sort options for the order view.
pub mod view;

pub use confirm::{AutoConfirm, ConfirmPrompt};
pub use dashboard::Dashboard;
pub use repository::{OrderRepository, StorageOrderRepository};
pub use session::AdminGate;
pub use view::{DateRange, SortDirection, StatusFilter, ViewOptions};
