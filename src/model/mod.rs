pub mod api;
pub mod auth;
pub mod blink;
pub mod discord;
