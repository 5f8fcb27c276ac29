pub mod catalog;
pub mod menu_repo;
pub mod notifier;
pub mod order_repo;
pub mod session_store;
