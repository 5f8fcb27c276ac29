use std::sync::Mutex;

use chrono::{Duration, Utc};

use crate::domain::board::{AdminOrder, NewAdminOrder, OrderFilter, OrderStatus};
use crate::domain::errors::DomainError;
use crate::domain::ports::OrderBoard;

// ── Sample data ───────────────────────────────────────────────────────────────

const SAMPLE_ORDERS: [(&str, &str, &str, u32, OrderStatus, i64, &str); 8] = [
    ("Rahul Sharma", "9876543210", "Classic Milk Tea, Tapioca Pearls", 140, OrderStatus::Pending, 20, "2:30 PM"),
    ("Neha Gupta", "9876543211", "Taro Milk Tea, Crystal Boba", 160, OrderStatus::Completed, 35, "2:15 PM"),
    ("Aditya Verma", "9876543212", "Brown Sugar Boba Milk x2", 340, OrderStatus::Completed, 60, "1:45 PM"),
    ("Meera Patel", "9876543213", "Mango Tango, Fruit Jellies", 175, OrderStatus::Pending, 90, "3:00 PM"),
    ("Vikram Singh", "9876543214", "Rose Milk Tea", 160, OrderStatus::Completed, 120, "1:30 PM"),
    ("Priya Khanna", "9876543215", "Passion Fruit Green Tea, Aloe Vera", 175, OrderStatus::Ready, 25, "2:45 PM"),
    ("Sameer Joshi", "9876543216", "Thai Milk Tea x3", 390, OrderStatus::Pending, 10, "3:15 PM"),
    ("Ananya Singh", "9876543217", "Matcha Milk Tea, Pudding", 180, OrderStatus::Ready, 40, "2:30 PM"),
];

// ── Repository ────────────────────────────────────────────────────────────────

/// Process-local order board; everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryOrderBoard {
    orders: Mutex<Vec<AdminOrder>>,
}

impl InMemoryOrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with the shop's sample orders, placed relative to now.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let orders = SAMPLE_ORDERS
            .iter()
            .zip(1u32..)
            .map(
                |(&(customer, phone, items, total, status, minutes_ago, pickup_time), id)| {
                    AdminOrder {
                        id,
                        customer: customer.to_string(),
                        phone: phone.to_string(),
                        items: items.to_string(),
                        total,
                        status,
                        placed_at: now - Duration::minutes(minutes_ago),
                        pickup_time: pickup_time.to_string(),
                    }
                },
            )
            .collect();
        Self {
            orders: Mutex::new(orders),
        }
    }
}

impl OrderBoard for InMemoryOrderBoard {
    fn record(&self, order: NewAdminOrder) -> Result<AdminOrder, DomainError> {
        let mut orders = self.orders.lock()?;
        let id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        let row = AdminOrder {
            id,
            customer: order.customer,
            phone: order.phone,
            items: order.items,
            total: order.total,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
            pickup_time: order.pickup_time,
        };
        orders.push(row.clone());
        Ok(row)
    }

    fn find_by_id(&self, id: u32) -> Result<Option<AdminOrder>, DomainError> {
        let orders = self.orders.lock()?;
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    fn list(&self, filter: &OrderFilter) -> Result<Vec<AdminOrder>, DomainError> {
        let orders = self.orders.lock()?;
        let mut matching: Vec<AdminOrder> =
            orders.iter().filter(|o| filter.matches(o)).cloned().collect();
        matching.sort_by(|a, b| b.placed_at.cmp(&a.placed_at).then(b.id.cmp(&a.id)));
        Ok(matching)
    }

    fn set_status(&self, id: u32, status: OrderStatus) -> Result<AdminOrder, DomainError> {
        let mut orders = self.orders.lock()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;
        order.status = status;
        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(customer: &str) -> NewAdminOrder {
        NewAdminOrder {
            customer: customer.to_string(),
            phone: "9876543299".to_string(),
            items: "Peach Oolong".to_string(),
            total: 140,
            pickup_time: "4:00 PM".to_string(),
        }
    }

    #[test]
    fn seeded_board_holds_sample_orders() {
        let board = InMemoryOrderBoard::seeded();
        let all = board.list(&OrderFilter::default()).expect("list failed");
        assert_eq!(all.len(), 8);
        // Sameer was ten minutes ago, the most recent sample.
        assert_eq!(all.first().map(|o| o.customer.as_str()), Some("Sameer Joshi"));
    }

    #[test]
    fn record_assigns_next_id_and_pending_status() {
        let board = InMemoryOrderBoard::seeded();
        let order = board.record(new_order("Kabir Rao")).expect("record failed");
        assert_eq!(order.id, 9);
        assert_eq!(order.status, OrderStatus::Pending);

        let found = board
            .find_by_id(9)
            .expect("find failed")
            .expect("order should exist");
        assert_eq!(found.customer, "Kabir Rao");
    }

    #[test]
    fn empty_board_starts_at_one() {
        let board = InMemoryOrderBoard::new();
        let order = board.record(new_order("Kabir Rao")).expect("record failed");
        assert_eq!(order.id, 1);
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let board = InMemoryOrderBoard::seeded();
        assert!(board.find_by_id(404).expect("find failed").is_none());
    }

    #[test]
    fn list_filters_by_status() {
        let board = InMemoryOrderBoard::seeded();
        let filter = OrderFilter {
            status: Some(OrderStatus::Ready),
            query: String::new(),
        };
        let ready = board.list(&filter).expect("list failed");
        assert_eq!(ready.len(), 2);
        assert!(ready.iter().all(|o| o.status == OrderStatus::Ready));
    }

    #[test]
    fn set_status_updates_in_place() {
        let board = InMemoryOrderBoard::seeded();
        let updated = board
            .set_status(1, OrderStatus::Ready)
            .expect("update failed");
        assert_eq!(updated.status, OrderStatus::Ready);
        let found = board.find_by_id(1).expect("find failed");
        assert_eq!(found.map(|o| o.status), Some(OrderStatus::Ready));
    }

    #[test]
    fn set_status_on_unknown_id_is_not_found() {
        let board = InMemoryOrderBoard::seeded();
        let err = board
            .set_status(99, OrderStatus::Completed)
            .expect_err("should fail");
        assert!(matches!(err, DomainError::NotFound));
    }
}
