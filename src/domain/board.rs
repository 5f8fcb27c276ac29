use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    Ready,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
        };
        f.write_str(s)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status '{other}'")),
        }
    }
}

/// An order as listed in the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminOrder {
    pub id: u32,
    pub customer: String,
    pub phone: String,
    pub items: String,
    pub total: u32,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub pickup_time: String,
}

#[derive(Debug, Clone)]
pub struct NewAdminOrder {
    pub customer: String,
    pub phone: String,
    pub items: String,
    pub total: u32,
    pub pickup_time: String,
}

/// Status filter plus free-text search. `status: None` means all statuses.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub query: String,
}

impl OrderFilter {
    /// Builds a filter from query parameters; `"all"` or no status means any.
    pub fn from_params(status: Option<&str>, query: Option<&str>) -> Result<Self, DomainError> {
        let status = match status {
            None | Some("all") | Some("") => None,
            Some(s) => Some(s.parse().map_err(DomainError::InvalidInput)?),
        };
        Ok(Self {
            status,
            query: query.unwrap_or_default().to_string(),
        })
    }

    /// Customer and items match case-insensitively; phone matches verbatim.
    pub fn matches(&self, order: &AdminOrder) -> bool {
        let status_ok = self.status.map_or(true, |s| s == order.status);
        let query = self.query.to_lowercase();
        let search_ok = order.customer.to_lowercase().contains(&query)
            || order.phone.contains(&self.query)
            || order.items.to_lowercase().contains(&query);
        status_ok && search_ok
    }
}
