pub mod authentication;
pub mod fridge;
pub mod health;
pub mod server;
pub mod shopping;
pub mod user;
