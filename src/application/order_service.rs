use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::board::NewAdminOrder;
use crate::domain::catalog::Catalog;
use crate::domain::errors::DomainError;
use crate::domain::notification::Notification;
use crate::domain::order::{Confirmation, OrderConfiguration, OrderForm};
use crate::domain::ports::{Notifier, OrderBoard};
use crate::domain::pricing::OrderSummary;
use crate::domain::slots::{accepted_pickup_slots_now, pickup_slots_now};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderPlaced {
    pub order_id: u32,
    pub confirmation: Confirmation,
    /// The form after reset, ready for the next order.
    pub form: OrderConfiguration,
}

pub struct OrderService<C, B, N> {
    catalog: C,
    board: Arc<B>,
    notifier: N,
    submit_delay: Duration,
}

impl<C: Catalog, B: OrderBoard, N: Notifier> OrderService<C, B, N> {
    pub fn new(catalog: C, board: Arc<B>, notifier: N, submit_delay: Duration) -> Self {
        Self {
            catalog,
            board,
            notifier,
            submit_delay,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn pickup_slots(&self) -> Vec<String> {
        pickup_slots_now()
    }

    /// A fresh order form, optionally with a drink already chosen.
    pub fn new_form(&self, drink_id: Option<u32>) -> OrderForm {
        match drink_id {
            Some(id) => OrderForm::start_with_drink(id, self.pickup_slots()),
            None => OrderForm::start(self.pickup_slots()),
        }
    }

    pub fn quote(&self, config: &OrderConfiguration) -> OrderSummary {
        OrderSummary::of(config, &self.catalog)
    }

    /// Validates, waits out the simulated latency, records the order and
    /// resets the form. Field errors come back as [`DomainError::Validation`].
    ///
    /// Each call submits its own form, so the pickup time is checked against
    /// the slots on offer now or a quarter-hour ago.
    pub async fn place_order(&self, config: OrderConfiguration) -> Result<OrderPlaced, DomainError> {
        let mut form = OrderForm::resume(config, accepted_pickup_slots_now());
        let order = form.begin_submit(&self.catalog)?;

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let row = self.board.record(NewAdminOrder {
            customer: order.customer_name.clone(),
            phone: order.phone.clone(),
            items: order.items_description(),
            total: order.total,
            pickup_time: order.pickup_time.clone(),
        })?;
        log::info!(
            "Order #{} placed: {} for {} (total {})",
            row.id,
            row.items,
            row.customer,
            row.total
        );

        let confirmation = form.complete_submit(&order);
        self.notifier
            .notify(&Notification::new(&confirmation.title, &confirmation.message));

        Ok(OrderPlaced {
            order_id: row.id,
            confirmation,
            form: form.config().clone(),
        })
    }
}
