use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::{Category, MenuDraft, MenuFilter, MenuItem};
use crate::errors::AppError;
use crate::handlers::auth::AdminToken;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListMenuParams {
    /// `all` or a category id such as `milk-tea`.
    pub category: Option<String>,
    pub q: Option<String>,
}

impl ListMenuParams {
    fn filter(&self) -> Result<MenuFilter, AppError> {
        Ok(MenuFilter::from_params(
            self.category.as_deref(),
            self.q.as_deref(),
        )?)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Category,
    pub name: String,
}

// ── Public handlers ──────────────────────────────────────────────────────────

/// GET /menu
#[utoipa::path(
    get,
    path = "/menu",
    params(
        ("category" = Option<String>, Query, description = "`all` or a category id"),
        ("q" = Option<String>, Query, description = "Search in name and description"),
    ),
    responses(
        (status = 200, description = "Menu items", body = [MenuItem]),
        (status = 400, description = "Unknown category"),
    ),
    tag = "menu"
)]
pub async fn list_menu(
    state: web::Data<AppState>,
    query: web::Query<ListMenuParams>,
) -> Result<HttpResponse, AppError> {
    let items = state.menu.list(&query.filter()?)?;
    Ok(HttpResponse::Ok().json(items))
}

/// GET /menu/categories
#[utoipa::path(
    get,
    path = "/menu/categories",
    responses(
        (status = 200, description = "Menu categories", body = [CategoryResponse]),
    ),
    tag = "menu"
)]
pub async fn list_categories() -> HttpResponse {
    let categories: Vec<CategoryResponse> = [Category::MilkTea, Category::FruitTea, Category::Specialty]
        .into_iter()
        .map(|c| CategoryResponse {
            id: c,
            name: c.display_name().to_string(),
        })
        .collect();
    HttpResponse::Ok().json(categories)
}

// ── Admin handlers ───────────────────────────────────────────────────────────

/// GET /admin/menu
#[utoipa::path(
    get,
    path = "/admin/menu",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("category" = Option<String>, Query, description = "`all` or a category id"),
        ("q" = Option<String>, Query, description = "Search in name and description"),
    ),
    responses(
        (status = 200, description = "Menu items", body = [MenuItem]),
        (status = 401, description = "Not logged in"),
    ),
    tag = "admin"
)]
pub async fn admin_list_menu(
    _token: AdminToken,
    state: web::Data<AppState>,
    query: web::Query<ListMenuParams>,
) -> Result<HttpResponse, AppError> {
    let items = state.menu.list(&query.filter()?)?;
    Ok(HttpResponse::Ok().json(items))
}

/// POST /admin/menu
#[utoipa::path(
    post,
    path = "/admin/menu",
    request_body = MenuDraft,
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
    ),
    responses(
        (status = 201, description = "Item added", body = MenuItem),
        (status = 401, description = "Not logged in"),
        (status = 422, description = "Required fields missing"),
    ),
    tag = "admin"
)]
pub async fn create_menu_item(
    _token: AdminToken,
    state: web::Data<AppState>,
    body: web::Json<MenuDraft>,
) -> Result<HttpResponse, AppError> {
    let item = state.menu.create(body.into_inner())?;
    Ok(HttpResponse::Created().json(item))
}

/// PUT /admin/menu/{id}
#[utoipa::path(
    put,
    path = "/admin/menu/{id}",
    request_body = MenuDraft,
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("id" = u32, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, description = "Item updated", body = MenuItem),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such item"),
        (status = 422, description = "Required fields missing"),
    ),
    tag = "admin"
)]
pub async fn update_menu_item(
    _token: AdminToken,
    state: web::Data<AppState>,
    path: web::Path<u32>,
    body: web::Json<MenuDraft>,
) -> Result<HttpResponse, AppError> {
    let item = state.menu.update(path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /admin/menu/{id}
#[utoipa::path(
    delete,
    path = "/admin/menu/{id}",
    params(
        ("Authorization" = String, Header, description = "Bearer session token"),
        ("id" = u32, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, description = "Item removed", body = MenuItem),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such item"),
    ),
    tag = "admin"
)]
pub async fn delete_menu_item(
    _token: AdminToken,
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let item = state.menu.delete(path.into_inner())?;
    Ok(HttpResponse::Ok().json(item))
}
