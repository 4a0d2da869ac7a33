//! Filter, date-range, and sort options for the order view.
//!
//! Date classification is a pure function of a caller-supplied "now" so the
//! view-model stays deterministic under test; nothing in this module reads
//! the wall clock. Serde representations match the dashboard's query-string
//! values (`thisWeek`, `desc`, ...).

use chrono::{DateTime, Months, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use store_types::OrderStatus;

/// Status predicate for the order view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
	/// Pass-through: every status matches.
	#[default]
	All,
	Pending,
	Completed,
	Returned,
}

impl StatusFilter {
	/// Returns true if an order with the given status passes this filter.
	pub fn matches(&self, status: OrderStatus) -> bool {
		match self {
			StatusFilter::All => true,
			StatusFilter::Pending => status == OrderStatus::Pending,
			StatusFilter::Completed => status == OrderStatus::Completed,
			StatusFilter::Returned => status == OrderStatus::Returned,
		}
	}
}

/// Date-range predicate for the order view, evaluated against an explicit
/// reference moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
	/// Pass-through: every timestamp matches.
	#[default]
	All,
	/// From the start of `now`'s calendar day onward.
	Today,
	/// Rolling 7 days back from the start of `now`'s calendar day.
	ThisWeek,
	/// Rolling one calendar month back from the start of `now`'s calendar day.
	ThisMonth,
}

impl DateRange {
	/// Returns true if `timestamp` falls inside this range relative to `now`.
	///
	/// Day boundaries are computed in UTC; callers wanting local-day
	/// semantics pass a `now` already shifted into their zone.
	pub fn contains(&self, now: DateTime<Utc>, timestamp: DateTime<Utc>) -> bool {
		let day_start = day_start(now);
		match self {
			DateRange::All => true,
			DateRange::Today => timestamp >= day_start,
			DateRange::ThisWeek => timestamp >= day_start - TimeDelta::days(7),
			DateRange::ThisMonth => {
				let month_ago = day_start
					.checked_sub_months(Months::new(1))
					.unwrap_or(day_start);
				timestamp >= month_ago
			}
		}
	}
}

/// Sort direction over `orderDate`.
///
/// Equal timestamps carry no further tie-break; their relative order is
/// unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Newest first (the dashboard default).
	#[default]
	#[serde(rename = "desc")]
	Descending,
	/// Oldest first.
	#[serde(rename = "asc")]
	Ascending,
}

/// The full set of view options the presentation layer selects.
///
/// Doubles as the query-string structure for the list endpoint; every field
/// defaults so a bare request shows everything, newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
	/// Status predicate; combines with the date range by logical AND.
	#[serde(default)]
	pub status: StatusFilter,
	/// Date-range predicate.
	#[serde(default)]
	pub range: DateRange,
	/// Sort direction over the order date.
	#[serde(default)]
	pub sort: SortDirection,
}

/// Midnight at the start of `now`'s UTC calendar day.
fn day_start(now: DateTime<Utc>) -> DateTime<Utc> {
	now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(s: &str) -> DateTime<Utc> {
		s.parse().unwrap()
	}

	#[test]
	fn today_excludes_yesterday() {
		let now = at("2025-06-15T14:30:00Z");

		assert!(!DateRange::Today.contains(now, at("2025-06-14T23:59:59Z")));
		assert!(DateRange::Today.contains(now, at("2025-06-15T00:00:00Z")));
		assert!(DateRange::Today.contains(now, at("2025-06-15T18:00:00Z")));
	}

	#[test]
	fn week_is_rolling_seven_days_from_day_start() {
		let now = at("2025-06-15T14:30:00Z");

		assert!(DateRange::ThisWeek.contains(now, at("2025-06-08T00:00:00Z")));
		assert!(!DateRange::ThisWeek.contains(now, at("2025-06-07T23:59:59Z")));
	}

	#[test]
	fn month_is_one_calendar_month_back() {
		let now = at("2025-06-15T14:30:00Z");

		assert!(DateRange::ThisMonth.contains(now, at("2025-05-15T00:00:00Z")));
		assert!(!DateRange::ThisMonth.contains(now, at("2025-05-14T23:59:59Z")));
	}

	#[test]
	fn month_clamps_at_short_months() {
		// One calendar month back from March 31 lands on the end of February.
		let now = at("2025-03-31T09:00:00Z");

		assert!(DateRange::ThisMonth.contains(now, at("2025-02-28T00:00:00Z")));
		assert!(!DateRange::ThisMonth.contains(now, at("2025-02-27T12:00:00Z")));
	}

	#[test]
	fn all_passes_everything() {
		let now = at("2025-06-15T14:30:00Z");

		assert!(DateRange::All.contains(now, at("1999-01-01T00:00:00Z")));
		assert!(StatusFilter::All.matches(OrderStatus::Pending));
		assert!(StatusFilter::All.matches(OrderStatus::Returned));
	}

	#[test]
	fn status_filter_matches_exactly() {
		assert!(StatusFilter::Completed.matches(OrderStatus::Completed));
		assert!(!StatusFilter::Completed.matches(OrderStatus::Pending));
		assert!(!StatusFilter::Returned.matches(OrderStatus::Completed));
	}

	#[test]
	fn view_options_parse_query_values() {
		let options: ViewOptions =
			serde_json::from_str(r#"{"status":"completed","range":"thisWeek","sort":"asc"}"#)
				.unwrap();
		assert_eq!(options.status, StatusFilter::Completed);
		assert_eq!(options.range, DateRange::ThisWeek);
		assert_eq!(options.sort, SortDirection::Ascending);

		let defaults: ViewOptions = serde_json::from_str("{}").unwrap();
		assert_eq!(defaults, ViewOptions::default());
	}
}
