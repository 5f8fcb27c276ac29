use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::{Catalog, Drink, Topping};
use super::order::OrderConfiguration;

/// `(drink + toppings) * quantity`.
///
/// Ids that do not resolve against the catalog contribute nothing, and a
/// missing quantity counts as one. Sweetness, ice and notes are free.
pub fn compute_total(config: &OrderConfiguration, drinks: &[Drink], toppings: &[Topping]) -> u32 {
    let drink_price = config
        .drink_id
        .and_then(|id| drinks.iter().find(|d| d.id == id))
        .map_or(0, |d| d.price);

    let toppings_price: u32 = config
        .topping_ids
        .iter()
        .filter_map(|id| toppings.iter().find(|t| t.id == *id))
        .map(|t| t.price)
        .sum();

    let quantity = u32::from(config.quantity.unwrap_or(1));

    (drink_price + toppings_price) * quantity
}

/// What the order page shows next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderSummary {
    pub drink: String,
    pub toppings_selected: usize,
    pub quantity: u8,
    pub total: u32,
}

impl OrderSummary {
    pub fn of<C: Catalog + ?Sized>(config: &OrderConfiguration, catalog: &C) -> Self {
        let drink = config
            .drink_id
            .and_then(|id| catalog.drink(id))
            .map_or_else(|| "None selected".to_string(), |d| d.name.clone());

        Self {
            drink,
            toppings_selected: config.topping_ids.len(),
            quantity: config.quantity.unwrap_or(1),
            total: compute_total(config, catalog.drinks(), catalog.toppings()),
        }
    }
}
