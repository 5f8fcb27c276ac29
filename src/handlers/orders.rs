use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::order_service::OrderPlaced;
use crate::domain::catalog::{Catalog, Drink, Topping};
use crate::domain::order::OrderConfiguration;
use crate::domain::pricing::OrderSummary;
use crate::errors::AppError;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub drinks: Vec<Drink>,
    pub toppings: Vec<Topping>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PickupSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewOrderParams {
    /// Drink to preselect, as linked from the menu.
    pub item: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NewOrderResponse {
    pub form: OrderConfiguration,
    pub pickup_slots: Vec<String>,
    pub summary: OrderSummary,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /catalog
#[utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "Orderable drinks and toppings", body = CatalogResponse),
    ),
    tag = "orders"
)]
pub async fn get_catalog(state: web::Data<AppState>) -> HttpResponse {
    let catalog = state.orders.catalog();
    HttpResponse::Ok().json(CatalogResponse {
        drinks: catalog.drinks().to_vec(),
        toppings: catalog.toppings().to_vec(),
    })
}

/// GET /orders/pickup-slots
///
/// Pickup times for the next two hours, computed from the server clock.
#[utoipa::path(
    get,
    path = "/orders/pickup-slots",
    responses(
        (status = 200, description = "Selectable pickup times", body = PickupSlotsResponse),
    ),
    tag = "orders"
)]
pub async fn pickup_slots(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PickupSlotsResponse {
        slots: state.orders.pickup_slots(),
    })
}

/// GET /orders/new
///
/// A fresh order form with its pickup options and an empty summary.
#[utoipa::path(
    get,
    path = "/orders/new",
    params(
        ("item" = Option<u32>, Query, description = "Drink id to preselect"),
    ),
    responses(
        (status = 200, description = "Default order form", body = NewOrderResponse),
    ),
    tag = "orders"
)]
pub async fn new_order(
    state: web::Data<AppState>,
    query: web::Query<NewOrderParams>,
) -> HttpResponse {
    let form = state.orders.new_form(query.item);
    let summary = state.orders.quote(form.config());
    HttpResponse::Ok().json(NewOrderResponse {
        form: form.config().clone(),
        pickup_slots: form.pickup_options().to_vec(),
        summary,
    })
}

/// POST /orders/quote
///
/// Prices the configuration as it currently stands. Unknown ids price at zero
/// and a quantity that is not a whole number counts as one cup.
#[utoipa::path(
    post,
    path = "/orders/quote",
    request_body = OrderConfiguration,
    responses(
        (status = 200, description = "Order summary with total", body = OrderSummary),
        (status = 400, description = "Malformed configuration"),
    ),
    tag = "orders"
)]
pub async fn quote_order(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let config = quote_configuration(body.into_inner())?;
    Ok(HttpResponse::Ok().json(state.orders.quote(&config)))
}

fn quote_configuration(mut body: Value) -> Result<OrderConfiguration, AppError> {
    if let Some(quantity) = body.get_mut("quantity") {
        *quantity = lenient_quantity(quantity);
    }
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// `2` and `"2"` read as two; anything else non-null reads as one.
fn lenient_quantity(raw: &Value) -> Value {
    let parsed = match raw {
        Value::Null => return Value::Null,
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Value::from(parsed.and_then(|n| u8::try_from(n).ok()).unwrap_or(1))
}

/// POST /orders
///
/// Validates and places the order. The response carries the confirmation and
/// the reset form.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderConfiguration,
    responses(
        (status = 201, description = "Order placed", body = OrderPlaced),
        (status = 400, description = "Malformed configuration"),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<OrderConfiguration>,
) -> Result<HttpResponse, AppError> {
    let placed = state.orders.place_order(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(placed))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn quantity_strings_are_read_as_numbers() {
        let config = quote_configuration(json!({ "drink_id": 1, "quantity": " 3 " }))
            .expect("valid quote");
        assert_eq!(config.quantity, Some(3));
    }

    #[test]
    fn non_numeric_quantity_counts_as_one() {
        for raw in [json!("abc"), json!(-2), json!(2.5), json!(300), json!([2])] {
            let config = quote_configuration(json!({ "quantity": raw.clone() }))
                .expect("valid quote");
            assert_eq!(config.quantity, Some(1), "quantity {raw}");
        }
    }

    #[test]
    fn absent_or_null_quantity_is_left_alone() {
        let config = quote_configuration(json!({ "drink_id": 2 })).expect("valid quote");
        assert_eq!(config.quantity, Some(1));
        let config = quote_configuration(json!({ "quantity": null })).expect("valid quote");
        assert_eq!(config.quantity, None);
    }

    #[test]
    fn other_malformed_fields_still_fail() {
        let err = quote_configuration(json!({ "sweetness": 30 })).expect_err("bad sweetness");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
