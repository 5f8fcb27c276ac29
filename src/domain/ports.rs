use uuid::Uuid;

use super::board::{AdminOrder, NewAdminOrder, OrderFilter, OrderStatus};
use super::errors::DomainError;
use super::menu::{MenuDraft, MenuFilter, MenuItem};
use super::notification::Notification;

pub trait OrderBoard: Send + Sync + 'static {
    fn record(&self, order: NewAdminOrder) -> Result<AdminOrder, DomainError>;
    fn find_by_id(&self, id: u32) -> Result<Option<AdminOrder>, DomainError>;
    /// Matching orders, newest first.
    fn list(&self, filter: &OrderFilter) -> Result<Vec<AdminOrder>, DomainError>;
    fn set_status(&self, id: u32, status: OrderStatus) -> Result<AdminOrder, DomainError>;
}

pub trait MenuRepository: Send + Sync + 'static {
    fn list(&self, filter: &MenuFilter) -> Result<Vec<MenuItem>, DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
    fn create(&self, draft: MenuDraft) -> Result<MenuItem, DomainError>;
    fn update(&self, id: u32, draft: MenuDraft) -> Result<MenuItem, DomainError>;
    fn delete(&self, id: u32) -> Result<MenuItem, DomainError>;
}

/// Issued admin tokens. Login inserts, logout removes.
pub trait SessionStore: Send + Sync + 'static {
    fn issue(&self) -> Result<Uuid, DomainError>;
    fn contains(&self, token: Uuid) -> Result<bool, DomainError>;
    fn revoke(&self, token: Uuid) -> Result<bool, DomainError>;
}

/// Fire-and-forget toast presenter.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: &Notification);
}
