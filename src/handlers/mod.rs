pub mod admin;
pub mod auth;
pub mod contact;
pub mod menu;
pub mod orders;
