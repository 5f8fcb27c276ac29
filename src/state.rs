use std::sync::Arc;

use crate::application::admin_service::{AdminService, Credentials};
use crate::application::contact_service::ContactService;
use crate::application::menu_service::MenuService;
use crate::application::order_service::OrderService;
use crate::config::Settings;
use crate::infrastructure::catalog::StaticCatalog;
use crate::infrastructure::menu_repo::InMemoryMenuRepository;
use crate::infrastructure::notifier::LogNotifier;
use crate::infrastructure::order_repo::InMemoryOrderBoard;
use crate::infrastructure::session_store::InMemorySessionStore;

pub type Orders = OrderService<StaticCatalog, InMemoryOrderBoard, LogNotifier>;
pub type Admin =
    AdminService<InMemorySessionStore, InMemoryOrderBoard, InMemoryMenuRepository, LogNotifier>;
pub type Menu = MenuService<InMemoryMenuRepository, LogNotifier>;
pub type Contact = ContactService<LogNotifier>;

/// Services shared by every worker. Built once at startup.
pub struct AppState {
    pub orders: Orders,
    pub admin: Admin,
    pub menu: Menu,
    pub contact: Contact,
}

impl AppState {
    /// Wires the in-memory adapters, seeded with the shop's sample data.
    pub fn new(settings: &Settings) -> Self {
        let board = Arc::new(InMemoryOrderBoard::seeded());
        let menu = Arc::new(InMemoryMenuRepository::seeded());
        let notifier = LogNotifier;

        Self {
            orders: OrderService::new(
                StaticCatalog::new(),
                board.clone(),
                notifier,
                settings.submit_delay,
            ),
            admin: AdminService::new(
                Credentials {
                    username: settings.admin_username.clone(),
                    password: settings.admin_password.clone(),
                },
                InMemorySessionStore::new(),
                board,
                menu.clone(),
                notifier,
            ),
            menu: MenuService::new(menu, notifier),
            contact: ContactService::new(notifier, settings.contact_delay),
        }
    }
}
