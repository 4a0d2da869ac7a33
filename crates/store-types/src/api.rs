//! API types for the storefront admin HTTP endpoints.
//!
//! Request and response structures plus the error type shared by all
//! handlers. Field names follow the camelCase convention of the persisted
//! order format so the dashboard front end consumes responses unchanged.

use crate::order::{Order, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics over the currently filtered order set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
	/// Number of orders in the filtered set.
	pub total: usize,
	/// Number of pending orders.
	pub pending: usize,
	/// Number of completed orders.
	pub completed: usize,
	/// Number of returned orders.
	pub returned: usize,
	/// Sum of `total` over completed orders only. Pending and returned
	/// orders contribute nothing regardless of their totals.
	pub total_revenue: Decimal,
}

/// Response for the order list endpoint: the filtered, sorted collection
/// together with the statistics computed over the same filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
	pub orders: Vec<Order>,
	pub stats: OrderStats,
}

/// Request body for the status update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
	pub status: OrderStatus,
}

/// Request body for the admin login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
	pub password: String,
}

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Error type/code
	pub error: String,
	/// Human-readable description
	pub message: String,
}

/// Structured API error type with appropriate HTTP status mapping.
#[derive(Debug)]
pub enum ApiError {
	/// Bad request with validation errors (400)
	BadRequest { error_type: String, message: String },
	/// Missing or falsy admin session flag (401)
	Unauthorized { message: String },
	/// Requested order does not exist (404)
	NotFound { message: String },
	/// Internal server error (500)
	InternalServerError { error_type: String, message: String },
}

impl ApiError {
	/// Get the HTTP status code for this error.
	pub fn status_code(&self) -> u16 {
		match self {
			ApiError::BadRequest { .. } => 400,
			ApiError::Unauthorized { .. } => 401,
			ApiError::NotFound { .. } => 404,
			ApiError::InternalServerError { .. } => 500,
		}
	}

	/// Convert to ErrorResponse for JSON serialization.
	pub fn to_error_response(&self) -> ErrorResponse {
		match self {
			ApiError::BadRequest {
				error_type,
				message,
			} => ErrorResponse {
				error: error_type.clone(),
				message: message.clone(),
			},
			ApiError::Unauthorized { message } => ErrorResponse {
				error: "unauthorized".to_string(),
				message: message.clone(),
			},
			ApiError::NotFound { message } => ErrorResponse {
				error: "not_found".to_string(),
				message: message.clone(),
			},
			ApiError::InternalServerError {
				error_type,
				message,
			} => ErrorResponse {
				error: error_type.clone(),
				message: message.clone(),
			},
		}
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiError::BadRequest { message, .. } => write!(f, "Bad Request: {}", message),
			ApiError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
			ApiError::NotFound { message } => write!(f, "Not Found: {}", message),
			ApiError::InternalServerError { message, .. } => {
				write!(f, "Internal Server Error: {}", message)
			}
		}
	}
}

impl std::error::Error for ApiError {}

impl axum::response::IntoResponse for ApiError {
	fn into_response(self) -> axum::response::Response {
		use axum::{http::StatusCode, response::Json};

		let status = match self.status_code() {
			400 => StatusCode::BAD_REQUEST,
			401 => StatusCode::UNAUTHORIZED,
			404 => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};

		let error_response = self.to_error_response();
		(status, Json(error_response)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stats_serialize_camel_case() {
		let stats = OrderStats {
			total: 2,
			pending: 1,
			completed: 1,
			returned: 0,
			total_revenue: Decimal::new(10050, 2),
		};

		let json = serde_json::to_value(&stats).unwrap();
		assert_eq!(json["totalRevenue"], serde_json::json!("100.50"));
		assert_eq!(json["total"], serde_json::json!(2));
	}

	#[test]
	fn error_status_codes() {
		let err = ApiError::NotFound {
			message: "no such order".to_string(),
		};
		assert_eq!(err.status_code(), 404);
		assert_eq!(err.to_error_response().error, "not_found");
	}
}
