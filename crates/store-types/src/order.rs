//! Order domain types for the storefront admin system.
//!
//! This module defines the persisted order record and its nested structures.
//! The serde representation matches the JSON array the storefront checkout
//! writes: camelCase field names, lowercase statuses, RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted customer order.
///
/// Orders are created by the storefront checkout flow and appended to the
/// persisted collection. The admin view-model only reads, re-statuses, or
/// removes them; it never creates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Unique identifier for this order.
	///
	/// Legacy records may lack one; deserialization leaves it empty and the
	/// view-model assigns a fresh identifier at load time.
	#[serde(default)]
	pub id: String,
	/// Contact details captured at checkout.
	pub customer: CustomerDetails,
	/// Line items that make up the order.
	pub items: Vec<LineItem>,
	/// Order total, computed by the checkout flow and stored redundantly.
	/// Never recomputed from the line items.
	pub total: Decimal,
	/// Timestamp when the order was placed.
	pub order_date: DateTime<Utc>,
	/// Current lifecycle status. Missing or unrecognized values deserialize
	/// as [`OrderStatus::Pending`].
	#[serde(default, deserialize_with = "status_or_pending")]
	pub status: OrderStatus,
}

/// Customer contact details attached to an order.
///
/// Plain strings throughout; the checkout flow does not validate beyond
/// presence and neither does the admin side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetails {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	pub city: String,
	/// Optional free-text delivery notes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// A single line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
	/// Product identifier.
	pub id: String,
	/// Product display name.
	pub name: String,
	/// Unit price at the time of purchase.
	pub price: Decimal,
	/// Number of units ordered.
	pub quantity: u32,
}

/// Lifecycle status of an order.
///
/// Orders start as pending and are marked completed or returned from the
/// admin dashboard. No further states or transitions exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
	/// Order has been placed but not yet fulfilled.
	#[default]
	Pending,
	/// Order has been fulfilled. Only completed orders count towards revenue.
	Completed,
	/// Order was sent back by the customer.
	Returned,
}

impl OrderStatus {
	/// Returns the lowercase wire representation of the status.
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Pending => "pending",
			OrderStatus::Completed => "completed",
			OrderStatus::Returned => "returned",
		}
	}

	/// Returns an iterator over all status variants.
	pub fn all() -> impl Iterator<Item = Self> {
		[Self::Pending, Self::Completed, Self::Returned].into_iter()
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OrderStatus {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pending" => Ok(Self::Pending),
			"completed" => Ok(Self::Completed),
			"returned" => Ok(Self::Returned),
			_ => Err(()),
		}
	}
}

/// Deserializes a status field leniently.
///
/// Persisted collections predate the status field, and hand-edited records
/// have been seen with arbitrary strings in it. Anything that is not a known
/// status reads as pending rather than failing the whole collection.
fn status_or_pending<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<String>::deserialize(deserializer)?;
	Ok(raw
		.as_deref()
		.and_then(|s| s.parse().ok())
		.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_status_defaults_to_pending() {
		let json = r#"{
			"id": "ord-1",
			"customer": {
				"name": "Ada",
				"email": "ada@example.com",
				"phone": "555-0100",
				"address": "1 Oak St",
				"city": "Lahore"
			},
			"items": [],
			"total": "120.00",
			"orderDate": "2025-06-01T10:30:00Z"
		}"#;

		let order: Order = serde_json::from_str(json).unwrap();
		assert_eq!(order.status, OrderStatus::Pending);
		assert!(order.customer.notes.is_none());
	}

	#[test]
	fn unrecognized_status_reads_as_pending() {
		let json = r#"{
			"customer": {
				"name": "Ada",
				"email": "ada@example.com",
				"phone": "555-0100",
				"address": "1 Oak St",
				"city": "Lahore"
			},
			"items": [],
			"total": 75,
			"orderDate": "2025-06-01T10:30:00Z",
			"status": "shipped"
		}"#;

		let order: Order = serde_json::from_str(json).unwrap();
		assert_eq!(order.status, OrderStatus::Pending);
		// Missing id is tolerated too; the view-model assigns one at load.
		assert!(order.id.is_empty());
	}

	#[test]
	fn status_round_trips_lowercase() {
		for status in OrderStatus::all() {
			let encoded = serde_json::to_string(&status).unwrap();
			assert_eq!(encoded, format!("\"{}\"", status));
			let parsed: OrderStatus = status.as_str().parse().unwrap();
			assert_eq!(parsed, status);
		}
		assert!("cancelled".parse::<OrderStatus>().is_err());
	}
}
