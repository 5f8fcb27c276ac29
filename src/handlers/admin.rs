use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::admin_service::DashboardStats;
use crate::domain::board::{AdminOrder, OrderFilter, OrderStatus};
use crate::domain::validation::ValidationErrors;
use crate::errors::AppError;
use crate::handlers::auth::AdminToken;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.username.is_empty() {
            errors.add("username", "Username is required");
        }
        if self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersParams {
    /// `all`, `pending`, `ready` or `completed`. Defaults to `all`.
    pub status: Option<String>,
    /// Matches customer, phone or items.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

// ── Session ──────────────────────────────────────────────────────────────────

/// POST /admin/login
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid username or password"),
        (status = 422, description = "Username or password missing"),
    ),
    tag = "admin"
)]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate().map_err(AppError::Validation)?;
    let token = state.admin.login(&body.username, &body.password)?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// POST /admin/logout
#[utoipa::path(
    post,
    path = "/admin/logout",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
    ),
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "Not logged in"),
    ),
    tag = "admin"
)]
pub async fn logout(
    token: AdminToken,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.admin.logout(token.0)?;
    Ok(HttpResponse::NoContent().finish())
}

// ── Dashboard & orders ───────────────────────────────────────────────────────

/// GET /admin/dashboard
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
    ),
    responses(
        (status = 200, description = "Order and menu counts", body = DashboardStats),
        (status = 401, description = "Not logged in"),
    ),
    tag = "admin"
)]
pub async fn dashboard(
    _token: AdminToken,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.admin.dashboard()?))
}

/// GET /admin/orders
///
/// Orders matching both the status filter and the search text, newest first.
#[utoipa::path(
    get,
    path = "/admin/orders",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("status" = Option<String>, Query, description = "all, pending, ready or completed"),
        ("q" = Option<String>, Query, description = "Search by name, phone, or items"),
    ),
    responses(
        (status = 200, description = "Matching orders", body = [AdminOrder]),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Not logged in"),
    ),
    tag = "admin"
)]
pub async fn list_orders(
    _token: AdminToken,
    state: web::Data<AppState>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let filter = OrderFilter::from_params(query.status.as_deref(), query.q.as_deref())?;
    Ok(HttpResponse::Ok().json(state.admin.list_orders(&filter)?))
}

/// GET /admin/orders/{id}
#[utoipa::path(
    get,
    path = "/admin/orders/{id}",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("id" = u32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = AdminOrder),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Order not found"),
    ),
    tag = "admin"
)]
pub async fn get_order(
    _token: AdminToken,
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.admin.get_order(path.into_inner())?))
}

/// PATCH /admin/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/admin/orders/{id}/status",
    request_body = UpdateStatusRequest,
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("id" = u32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Status changed", body = AdminOrder),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Order not found"),
    ),
    tag = "admin"
)]
pub async fn update_status(
    _token: AdminToken,
    state: web::Data<AppState>,
    path: web::Path<u32>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order = state.admin.update_status(path.into_inner(), body.status)?;
    Ok(HttpResponse::Ok().json(order))
}
