pub mod crypto;
pub mod db;
pub mod fridge;
pub mod health;
pub mod shopping;
pub mod user;
