//! HTTP server for the storefront admin API.
//!
//! Exposes the dashboard view-model's commands to the admin front end:
//! order listing with statistics, detail selection, status updates,
//! deletion, and the session flag endpoints. The checkout flow appends
//! orders through the one unauthenticated endpoint.

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::Json,
	routing::{get, post},
	Router,
};
use chrono::Utc;
use std::sync::Arc;
use store_admin::{AdminGate, Dashboard, ViewOptions};
use store_config::Config;
use store_storage::StorageError;
use store_types::{
	ApiError, LoginRequest, Order, OrderListResponse, UpdateStatusRequest,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state for the admin API.
#[derive(Clone)]
pub struct AppState {
	/// The order dashboard view-model.
	pub dashboard: Arc<RwLock<Dashboard>>,
	/// Admin session flag gate.
	pub gate: Arc<AdminGate>,
	/// Complete service configuration.
	pub config: Config,
}

/// Starts the HTTP server for the admin API.
pub async fn start_server(
	config: Config,
	dashboard: Arc<RwLock<Dashboard>>,
	gate: Arc<AdminGate>,
) -> Result<(), Box<dyn std::error::Error>> {
	let bind_address = format!("{}:{}", config.api.host, config.api.port);

	let app_state = AppState {
		dashboard,
		gate,
		config,
	};

	let app = Router::new()
		.nest(
			"/api",
			Router::new()
				.route("/admin/login", post(handle_login))
				.route("/admin/logout", post(handle_logout))
				.route("/orders", get(handle_list_orders).post(handle_create_order))
				.route(
					"/orders/{id}",
					get(handle_get_order).delete(handle_delete_order),
				)
				.route("/orders/{id}/status", post(handle_update_status)),
		)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(CorsLayer::permissive()),
		)
		.with_state(app_state);

	let listener = TcpListener::bind(&bind_address).await?;
	tracing::info!("Storefront admin API listening on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}

/// Handles POST /api/admin/login requests.
///
/// Sets the session flag when the configured password matches.
async fn handle_login(
	State(state): State<AppState>,
	Json(request): Json<LoginRequest>,
) -> Result<StatusCode, ApiError> {
	if request.password != state.config.admin.password {
		tracing::warn!("Rejected admin login attempt");
		return Err(ApiError::Unauthorized {
			message: "Invalid password".to_string(),
		});
	}

	state.gate.login().await.map_err(storage_error)?;
	tracing::info!("Admin logged in");
	Ok(StatusCode::NO_CONTENT)
}

/// Handles POST /api/admin/logout requests.
async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
	state.gate.logout().await.map_err(storage_error)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Handles GET /api/orders requests.
///
/// Query parameters select the status filter, date range, and sort
/// direction; the response carries the filtered, sorted collection together
/// with statistics computed over the same filter.
async fn handle_list_orders(
	State(state): State<AppState>,
	Query(view): Query<ViewOptions>,
) -> Result<Json<OrderListResponse>, ApiError> {
	require_auth(&state).await?;

	let now = Utc::now();
	let dashboard = state.dashboard.read().await;
	let response = OrderListResponse {
		orders: dashboard.filtered(view, now),
		stats: dashboard.stats(view, now),
	};
	Ok(Json(response))
}

/// Handles POST /api/orders requests.
///
/// The checkout flow's entry point: appends a caller-built order record to
/// the collection. Unauthenticated, like the storefront checkout itself.
async fn handle_create_order(
	State(state): State<AppState>,
	Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
	let mut dashboard = state.dashboard.write().await;
	let stored = dashboard.append(order).await.map_err(storage_error)?;
	Ok((StatusCode::CREATED, Json(stored)))
}

/// Handles GET /api/orders/{id} requests.
///
/// Returns the order detail and marks it as the current selection.
async fn handle_get_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<Order>, ApiError> {
	require_auth(&state).await?;

	let mut dashboard = state.dashboard.write().await;
	match dashboard.select(&id) {
		Some(order) => Ok(Json(order.clone())),
		None => Err(ApiError::NotFound {
			message: format!("Order '{}' does not exist", id),
		}),
	}
}

/// Handles POST /api/orders/{id}/status requests.
///
/// Unknown identifiers answer 404, but the collection is persisted either
/// way, matching the dashboard's map-then-save behavior.
async fn handle_update_status(
	Path(id): Path<String>,
	State(state): State<AppState>,
	Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ApiError> {
	require_auth(&state).await?;

	let mut dashboard = state.dashboard.write().await;
	dashboard
		.update_status(&id, request.status)
		.await
		.map_err(storage_error)?;

	if dashboard.find(&id).is_none() {
		return Err(ApiError::NotFound {
			message: format!("Order '{}' does not exist", id),
		});
	}
	Ok(StatusCode::NO_CONTENT)
}

/// Handles DELETE /api/orders/{id} requests.
async fn handle_delete_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
	require_auth(&state).await?;

	let mut dashboard = state.dashboard.write().await;
	let existed = dashboard.find(&id).is_some();
	dashboard.delete(&id).await.map_err(storage_error)?;

	if existed {
		Ok(StatusCode::NO_CONTENT)
	} else {
		Err(ApiError::NotFound {
			message: format!("Order '{}' does not exist", id),
		})
	}
}

/// Rejects requests made without the admin session flag.
async fn require_auth(state: &AppState) -> Result<(), ApiError> {
	if state.gate.is_authenticated().await {
		Ok(())
	} else {
		Err(ApiError::Unauthorized {
			message: "Admin login required".to_string(),
		})
	}
}

fn storage_error(e: StorageError) -> ApiError {
	ApiError::InternalServerError {
		error_type: "storage".to_string(),
		message: e.to_string(),
	}
}
