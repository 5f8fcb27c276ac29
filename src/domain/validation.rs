use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use super::catalog::{Catalog, Drink, Topping};
use super::order::{IceLevel, OrderConfiguration, Sweetness, MAX_QUANTITY, MIN_QUANTITY};
use super::pricing::compute_total;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field-level failure of one form, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// A configuration that passed validation, with every reference resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    pub phone: String,
    pub pickup_time: String,
    pub drink: Drink,
    pub toppings: Vec<Topping>,
    pub sweetness: Sweetness,
    pub ice: IceLevel,
    pub quantity: u8,
    pub notes: Option<String>,
    pub total: u32,
}

impl ValidatedOrder {
    /// Line shown on the admin board, e.g. `Thai Milk Tea, Pudding x3`.
    pub fn items_description(&self) -> String {
        let mut parts = vec![self.drink.name.clone()];
        parts.extend(self.toppings.iter().map(|t| t.name.clone()));
        let items = parts.join(", ");
        if self.quantity > 1 {
            format!("{items} x{}", self.quantity)
        } else {
            items
        }
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Checks whether `config` may be submitted. Any non-empty pickup time passes;
/// see [`validate_for_pickup`] to restrict it to the offered slots.
pub fn validate<C: Catalog + ?Sized>(
    config: &OrderConfiguration,
    catalog: &C,
) -> Result<ValidatedOrder, ValidationErrors> {
    check(config, catalog, None)
}

/// Like [`validate`], and the pickup time must be one of `offered`.
pub fn validate_for_pickup<C: Catalog + ?Sized>(
    config: &OrderConfiguration,
    catalog: &C,
    offered: &[String],
) -> Result<ValidatedOrder, ValidationErrors> {
    check(config, catalog, Some(offered))
}

fn check<C: Catalog + ?Sized>(
    config: &OrderConfiguration,
    catalog: &C,
    offered: Option<&[String]>,
) -> Result<ValidatedOrder, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if char_len(&config.customer_name) < 2 {
        errors.add("customer_name", "Name is required");
    }
    if char_len(&config.phone) < 10 {
        errors.add("phone", "Valid phone number is required");
    }
    if config.pickup_time.is_empty() {
        errors.add("pickup_time", "Pickup time is required");
    } else if offered.is_some_and(|slots| !slots.contains(&config.pickup_time)) {
        errors.add("pickup_time", "Please select an available pickup time");
    }

    let drink = match config.drink_id {
        None => {
            errors.add("drink_id", "Please select a drink");
            None
        }
        Some(id) => {
            let drink = catalog.drink(id).cloned();
            if drink.is_none() {
                errors.add("drink_id", "Please select a drink from the menu");
            }
            drink
        }
    };

    let mut toppings = Vec::with_capacity(config.topping_ids.len());
    for id in &config.topping_ids {
        match catalog.topping(*id) {
            Some(t) => toppings.push(t.clone()),
            None => {
                errors.add("topping_ids", "Unknown topping");
                break;
            }
        }
    }

    if config.sweetness.is_none() {
        errors.add("sweetness", "Sweetness level is required");
    }
    if config.ice.is_none() {
        errors.add("ice", "Ice level is required");
    }
    match config.quantity {
        None => errors.add("quantity", "Quantity is required"),
        Some(q) if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&q) => {
            errors.add("quantity", "Quantity must be between 1 and 5");
        }
        Some(_) => {}
    }

    match (drink, config.sweetness, config.ice, config.quantity) {
        (Some(drink), Some(sweetness), Some(ice), Some(quantity)) if errors.is_empty() => {
            Ok(ValidatedOrder {
                customer_name: config.customer_name.clone(),
                phone: config.phone.clone(),
                pickup_time: config.pickup_time.clone(),
                total: compute_total(config, catalog.drinks(), catalog.toppings()),
                drink,
                toppings,
                sweetness,
                ice,
                quantity,
                notes: config.notes.clone().filter(|n| !n.is_empty()),
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::StaticCatalog;

    fn valid_config() -> OrderConfiguration {
        OrderConfiguration {
            customer_name: "Neha Gupta".to_string(),
            phone: "9876543210".to_string(),
            pickup_time: "3:15 PM".to_string(),
            drink_id: Some(2),
            topping_ids: [4].into_iter().collect(),
            ..OrderConfiguration::default()
        }
    }

    #[test]
    fn accepts_a_complete_configuration() {
        let order = validate(&valid_config(), &StaticCatalog::new()).expect("valid");
        assert_eq!(order.drink.name, "Taro Milk Tea");
        assert_eq!(order.toppings.len(), 1);
        assert_eq!(order.quantity, 1);
        assert_eq!(order.total, 160);
        assert_eq!(order.items_description(), "Taro Milk Tea, Crystal Boba");
    }

    #[test]
    fn rejects_short_phone_and_accepts_ten_digits() {
        let catalog = StaticCatalog::new();

        let mut config = valid_config();
        config.phone = "12345".to_string();
        let errors = validate(&config, &catalog).expect_err("short phone");
        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.message_for("phone"), Some("Valid phone number is required"));

        config.phone = "9876543210".to_string();
        assert!(validate(&config, &catalog).is_ok());
    }

    #[test]
    fn one_character_name_is_rejected() {
        let mut config = valid_config();
        config.customer_name = "A".to_string();
        let errors = validate(&config, &StaticCatalog::new()).expect_err("short name");
        assert_eq!(errors.message_for("customer_name"), Some("Name is required"));
    }

    #[test]
    fn empty_form_reports_every_required_field_in_order() {
        let config = OrderConfiguration {
            sweetness: None,
            ice: None,
            quantity: None,
            ..OrderConfiguration::default()
        };
        let errors = validate(&config, &StaticCatalog::new()).expect_err("empty form");
        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["customer_name", "phone", "pickup_time", "drink_id", "sweetness", "ice", "quantity"]
        );
        assert_eq!(errors.first().map(|e| e.field.as_str()), Some("customer_name"));
    }

    #[test]
    fn toppings_and_notes_are_optional() {
        let mut config = valid_config();
        config.topping_ids.clear();
        config.notes = None;
        let order = validate(&config, &StaticCatalog::new()).expect("valid");
        assert!(order.toppings.is_empty());
        assert!(order.notes.is_none());
    }

    #[test]
    fn drink_outside_the_catalog_is_rejected() {
        let mut config = valid_config();
        config.drink_id = Some(999);
        let errors = validate(&config, &StaticCatalog::new()).expect_err("unknown drink");
        assert_eq!(
            errors.message_for("drink_id"),
            Some("Please select a drink from the menu")
        );
    }

    #[test]
    fn unknown_topping_is_rejected_once() {
        let mut config = valid_config();
        config.topping_ids = [77, 78].into_iter().collect();
        let errors = validate(&config, &StaticCatalog::new()).expect_err("unknown topping");
        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.message_for("topping_ids"), Some("Unknown topping"));
    }

    #[test]
    fn quantity_must_stay_within_range() {
        let catalog = StaticCatalog::new();
        let mut config = valid_config();

        config.quantity = Some(0);
        assert!(validate(&config, &catalog).is_err());
        config.quantity = Some(6);
        let errors = validate(&config, &catalog).expect_err("too many");
        assert_eq!(
            errors.message_for("quantity"),
            Some("Quantity must be between 1 and 5")
        );
        config.quantity = Some(5);
        assert_eq!(validate(&config, &catalog).map(|o| o.total).ok(), Some(800));
    }

    #[test]
    fn multi_cup_items_description() {
        let mut config = valid_config();
        config.drink_id = Some(3);
        config.topping_ids.clear();
        config.quantity = Some(3);
        let order = validate(&config, &StaticCatalog::new()).expect("valid");
        assert_eq!(order.items_description(), "Thai Milk Tea x3");
    }

    #[test]
    fn pickup_time_must_be_an_offered_slot() {
        let catalog = StaticCatalog::new();
        let offered = vec!["3:00 PM".to_string(), "3:15 PM".to_string()];

        let mut config = valid_config();
        config.pickup_time = "next tuesday".to_string();
        let errors = validate_for_pickup(&config, &catalog, &offered).expect_err("not a slot");
        assert_eq!(errors.fields().len(), 1);
        assert_eq!(
            errors.message_for("pickup_time"),
            Some("Please select an available pickup time")
        );

        config.pickup_time = "3:15 PM".to_string();
        assert!(validate_for_pickup(&config, &catalog, &offered).is_ok());

        config.pickup_time = String::new();
        let errors = validate_for_pickup(&config, &catalog, &offered).expect_err("empty");
        assert_eq!(errors.message_for("pickup_time"), Some("Pickup time is required"));
    }

    #[test]
    fn display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("phone", "Valid phone number is required");
        errors.add("ice", "Ice level is required");
        assert_eq!(
            errors.to_string(),
            "phone: Valid phone number is required; ice: Ice level is required"
        );
    }
}
