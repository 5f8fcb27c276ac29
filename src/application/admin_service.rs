use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::board::{AdminOrder, OrderFilter, OrderStatus};
use crate::domain::errors::DomainError;
use crate::domain::notification::Notification;
use crate::domain::ports::{MenuRepository, Notifier, OrderBoard, SessionStore};

const RECENT_ORDERS: usize = 5;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub menu_items: usize,
    pub recent_orders: Vec<AdminOrder>,
}

/// Configured back-office credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Back office: login session plus the order board.
pub struct AdminService<S, B, M, N> {
    credentials: Credentials,
    sessions: S,
    board: Arc<B>,
    menu: Arc<M>,
    notifier: N,
}

impl<S, B, M, N> AdminService<S, B, M, N>
where
    S: SessionStore,
    B: OrderBoard,
    M: MenuRepository,
    N: Notifier,
{
    pub fn new(credentials: Credentials, sessions: S, board: Arc<B>, menu: Arc<M>, notifier: N) -> Self {
        Self {
            credentials,
            sessions,
            board,
            menu,
            notifier,
        }
    }

    /// Plain comparison against the configured credentials. A failure does not
    /// say which of the two was wrong.
    pub fn login(&self, username: &str, password: &str) -> Result<Uuid, DomainError> {
        if username != self.credentials.username || password != self.credentials.password {
            self.notifier.notify(&Notification::destructive(
                "Login Failed",
                "Invalid username or password.",
            ));
            return Err(DomainError::Unauthorized);
        }

        let token = self.sessions.issue()?;
        self.notifier.notify(&Notification::new(
            "Login Successful",
            "Welcome to the admin dashboard!",
        ));
        Ok(token)
    }

    pub fn authorize(&self, token: Uuid) -> Result<(), DomainError> {
        if self.sessions.contains(token)? {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }

    pub fn logout(&self, token: Uuid) -> Result<(), DomainError> {
        if !self.sessions.revoke(token)? {
            return Err(DomainError::Unauthorized);
        }
        log::info!("Admin session closed");
        Ok(())
    }

    pub fn list_orders(&self, filter: &OrderFilter) -> Result<Vec<AdminOrder>, DomainError> {
        self.board.list(filter)
    }

    pub fn get_order(&self, id: u32) -> Result<AdminOrder, DomainError> {
        self.board.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn update_status(&self, id: u32, status: OrderStatus) -> Result<AdminOrder, DomainError> {
        let order = self.board.set_status(id, status)?;
        self.notifier.notify(&Notification::new(
            "Status Updated",
            format!("Order #{id} status changed to {status}."),
        ));
        Ok(order)
    }

    pub fn dashboard(&self) -> Result<DashboardStats, DomainError> {
        let orders = self.board.list(&OrderFilter::default())?;
        let count = |status| orders.iter().filter(|o| o.status == status).count();

        Ok(DashboardStats {
            total_orders: orders.len(),
            pending_orders: count(OrderStatus::Pending),
            completed_orders: count(OrderStatus::Completed),
            menu_items: self.menu.count()?,
            recent_orders: orders.iter().take(RECENT_ORDERS).cloned().collect(),
        })
    }
}
