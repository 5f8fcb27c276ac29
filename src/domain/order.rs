use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::catalog::Catalog;
use super::errors::DomainError;
use super::pricing::compute_total;
use super::validation::{validate_for_pickup, ValidatedOrder};

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 5;

/// Sugar level as a percentage of the full recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sweetness {
    None,
    Quarter,
    Half,
    ThreeQuarters,
    #[default]
    Full,
}

impl Sweetness {
    pub fn percent(self) -> u8 {
        match self {
            Sweetness::None => 0,
            Sweetness::Quarter => 25,
            Sweetness::Half => 50,
            Sweetness::ThreeQuarters => 75,
            Sweetness::Full => 100,
        }
    }
}

impl TryFrom<u8> for Sweetness {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Sweetness::None),
            25 => Ok(Sweetness::Quarter),
            50 => Ok(Sweetness::Half),
            75 => Ok(Sweetness::ThreeQuarters),
            100 => Ok(Sweetness::Full),
            other => Err(format!("sweetness must be 0, 25, 50, 75 or 100, got {other}")),
        }
    }
}

impl From<Sweetness> for u8 {
    fn from(s: Sweetness) -> Self {
        s.percent()
    }
}

impl fmt::Display for Sweetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IceLevel {
    NoIce,
    Light,
    #[default]
    Regular,
    Extra,
}

/// A customer's in-progress selections for one order.
///
/// The default value is the freshly opened form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderConfiguration {
    pub customer_name: String,
    pub phone: String,
    pub pickup_time: String,
    pub drink_id: Option<u32>,
    #[schema(value_type = Vec<u32>)]
    pub topping_ids: BTreeSet<u32>,
    /// Percentage: 0, 25, 50, 75 or 100.
    #[schema(value_type = Option<u8>)]
    pub sweetness: Option<Sweetness>,
    pub ice: Option<IceLevel>,
    pub quantity: Option<u8>,
    pub notes: Option<String>,
}

impl Default for OrderConfiguration {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            phone: String::new(),
            pickup_time: String::new(),
            drink_id: None,
            topping_ids: BTreeSet::new(),
            sweetness: Some(Sweetness::default()),
            ice: Some(IceLevel::default()),
            quantity: Some(MIN_QUANTITY),
            notes: None,
        }
    }
}

impl OrderConfiguration {
    /// Checkbox semantics: checking an already selected topping is a no-op.
    pub fn set_topping(&mut self, topping_id: u32, checked: bool) {
        if checked {
            self.topping_ids.insert(topping_id);
        } else {
            self.topping_ids.remove(&topping_id);
        }
    }

    pub fn toggle_topping(&mut self, topping_id: u32) {
        let checked = !self.topping_ids.contains(&topping_id);
        self.set_topping(topping_id, checked);
    }
}

/// A submitted form is reset straight back to `Editing`, so there is no
/// lasting submitted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub total: u32,
}

/// One order page: the configuration being edited, the pickup options offered
/// when it was opened, and the submission state.
#[derive(Debug, Clone)]
pub struct OrderForm {
    config: OrderConfiguration,
    pickup_options: Vec<String>,
    state: FlowState,
}

impl OrderForm {
    pub fn start(pickup_options: Vec<String>) -> Self {
        Self::resume(OrderConfiguration::default(), pickup_options)
    }

    /// Opens the form with a drink already chosen, as when following a menu link.
    pub fn start_with_drink(drink_id: u32, pickup_options: Vec<String>) -> Self {
        let mut form = Self::start(pickup_options);
        form.config.drink_id = Some(drink_id);
        form
    }

    pub fn resume(config: OrderConfiguration, pickup_options: Vec<String>) -> Self {
        Self {
            config,
            pickup_options,
            state: FlowState::Editing,
        }
    }

    pub fn config(&self) -> &OrderConfiguration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut OrderConfiguration {
        &mut self.config
    }

    pub fn pickup_options(&self) -> &[String] {
        &self.pickup_options
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn total<C: Catalog + ?Sized>(&self, catalog: &C) -> u32 {
        compute_total(&self.config, catalog.drinks(), catalog.toppings())
    }

    /// Runs validation and enters `Submitting`. Field errors send the form
    /// back to `Editing` untouched. The pickup time must be one of this
    /// form's pickup options.
    ///
    /// The re-entry guard belongs to this form instance only.
    pub fn begin_submit<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
    ) -> Result<ValidatedOrder, DomainError> {
        if self.state == FlowState::Submitting {
            return Err(DomainError::AlreadySubmitting);
        }
        self.state = FlowState::Submitting;

        match validate_for_pickup(&self.config, catalog, &self.pickup_options) {
            Ok(order) => Ok(order),
            Err(errors) => {
                self.state = FlowState::Editing;
                Err(errors.into())
            }
        }
    }

    /// Finishes a submission started with [`OrderForm::begin_submit`] and
    /// resets the configuration to a fresh form.
    pub fn complete_submit(&mut self, order: &ValidatedOrder) -> Confirmation {
        let confirmation = Confirmation {
            title: "Order Submitted!".to_string(),
            message: format!(
                "Thank you, {}! Your order will be ready for pickup at {}.",
                order.customer_name, order.pickup_time
            ),
            total: order.total,
        };
        self.config = OrderConfiguration::default();
        self.state = FlowState::Editing;
        confirmation
    }
}
