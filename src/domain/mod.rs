pub mod board;
pub mod catalog;
pub mod contact;
pub mod errors;
pub mod menu;
pub mod notification;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod slots;
pub mod validation;
