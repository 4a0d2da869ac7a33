//! The order dashboard view-model.
//!
//! Holds the in-memory order collection together with the at-most-one
//! selection, derives filtered/sorted views and summary statistics, and
//! applies status changes and deletions back through the repository. Every
//! mutation rewrites the whole persisted collection.

use crate::confirm::ConfirmPrompt;
use crate::repository::OrderRepository;
use crate::view::{SortDirection, ViewOptions};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use store_storage::StorageError;
use store_types::{Order, OrderStats, OrderStatus};
use uuid::Uuid;

/// View-model over the persisted order collection.
pub struct Dashboard {
	/// Repository holding the persisted collection.
	repository: Arc<dyn OrderRepository>,
	/// Capability consulted before deletions.
	confirm: Arc<dyn ConfirmPrompt>,
	/// The in-memory collection, loaded via [`Dashboard::load`].
	orders: Vec<Order>,
	/// Identifier of the order currently selected for detail display.
	selected: Option<String>,
}

impl Dashboard {
	/// Creates an empty dashboard over the given repository.
	pub fn new(repository: Arc<dyn OrderRepository>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
		Self {
			repository,
			confirm,
			orders: Vec::new(),
			selected: None,
		}
	}

	/// Loads the persisted collection, normalizing legacy records.
	///
	/// Records without an identifier get a fresh unique one; statuses were
	/// already defaulted to pending during deserialization. The normalized
	/// collection is written back immediately so legacy records are healed
	/// in place. Absent or unreadable data loads as the empty collection.
	pub async fn load(&mut self) {
		let mut orders = self.repository.load().await;
		for order in &mut orders {
			if order.id.is_empty() {
				order.id = Uuid::new_v4().to_string();
			}
		}
		self.orders = orders;

		if !self.orders.is_empty() {
			// Self-healing write-back is best effort; the in-memory view is
			// usable either way.
			if let Err(e) = self.repository.save(&self.orders).await {
				tracing::warn!("Failed to write back normalized orders: {}", e);
			}
		}
		tracing::info!(count = self.orders.len(), "Loaded order collection");
	}

	/// The full in-memory collection, unfiltered and unsorted.
	pub fn orders(&self) -> &[Order] {
		&self.orders
	}

	/// Looks up an order by identifier.
	pub fn find(&self, id: &str) -> Option<&Order> {
		self.orders.iter().find(|o| o.id == id)
	}

	/// Orders passing both view predicates, sorted by order date.
	///
	/// `now` anchors the date-range predicate. Relative order among equal
	/// timestamps is unspecified.
	pub fn filtered(&self, view: ViewOptions, now: DateTime<Utc>) -> Vec<Order> {
		let mut orders: Vec<Order> = self.matching(view, now).cloned().collect();
		match view.sort {
			SortDirection::Descending => orders.sort_by(|a, b| b.order_date.cmp(&a.order_date)),
			SortDirection::Ascending => orders.sort_by(|a, b| a.order_date.cmp(&b.order_date)),
		}
		orders
	}

	/// Summary statistics over the filtered set.
	///
	/// Revenue counts completed orders only; pending and returned orders
	/// contribute nothing regardless of their totals.
	pub fn stats(&self, view: ViewOptions, now: DateTime<Utc>) -> OrderStats {
		let mut stats = OrderStats {
			total: 0,
			pending: 0,
			completed: 0,
			returned: 0,
			total_revenue: Decimal::ZERO,
		};
		for order in self.matching(view, now) {
			stats.total += 1;
			match order.status {
				OrderStatus::Pending => stats.pending += 1,
				OrderStatus::Completed => {
					stats.completed += 1;
					stats.total_revenue += order.total;
				}
				OrderStatus::Returned => stats.returned += 1,
			}
		}
		stats
	}

	/// Replaces the status of the matching order and persists the
	/// collection.
	///
	/// An unknown identifier changes nothing but still persists, matching
	/// the dashboard's original map-then-save behavior.
	pub async fn update_status(
		&mut self,
		id: &str,
		status: OrderStatus,
	) -> Result<(), StorageError> {
		if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
			order.status = status;
			tracing::info!(order_id = %id, status = %status, "Updated order status");
		} else {
			tracing::debug!(order_id = %id, "Status update for unknown order");
		}
		self.repository.save(&self.orders).await
	}

	/// Deletes the matching order after confirmation and persists the
	/// collection.
	///
	/// Returns false without touching anything when the confirmation
	/// capability declines. Deleting the currently selected order clears
	/// the selection.
	pub async fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
		if !self
			.confirm
			.confirm("Are you sure you want to delete this order?")
		{
			tracing::debug!(order_id = %id, "Order deletion cancelled");
			return Ok(false);
		}

		self.orders.retain(|o| o.id != id);
		if self.selected.as_deref() == Some(id) {
			self.selected = None;
		}
		self.repository.save(&self.orders).await?;
		tracing::info!(order_id = %id, "Deleted order");
		Ok(true)
	}

	/// Appends a checkout-created order to the collection and persists it.
	///
	/// The total is trusted as computed by the checkout flow. Returns the
	/// stored record, with an identifier assigned when the caller left it
	/// empty.
	pub async fn append(&mut self, mut order: Order) -> Result<Order, StorageError> {
		if order.id.is_empty() {
			order.id = Uuid::new_v4().to_string();
		}
		self.orders.push(order.clone());
		self.repository.save(&self.orders).await?;
		tracing::info!(order_id = %order.id, "Appended order");
		Ok(order)
	}

	/// Selects an order for detail display. Unknown identifiers leave the
	/// selection unchanged and return None.
	pub fn select(&mut self, id: &str) -> Option<&Order> {
		if self.orders.iter().any(|o| o.id == id) {
			self.selected = Some(id.to_string());
			self.find(id)
		} else {
			None
		}
	}

	/// The currently selected order, if any.
	pub fn selected(&self) -> Option<&Order> {
		self.selected.as_deref().and_then(|id| self.find(id))
	}

	/// Clears the detail selection.
	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	fn matching(
		&self,
		view: ViewOptions,
		now: DateTime<Utc>,
	) -> impl Iterator<Item = &Order> + '_ {
		self.orders
			.iter()
			.filter(move |o| view.status.matches(o.status) && view.range.contains(now, o.order_date))
	}
}
