pub mod authentication;
pub mod common;
pub mod crypto;
pub mod fridge;
pub mod health;
pub mod jwt;
pub mod shopping;
pub mod user;
