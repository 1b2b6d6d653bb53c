pub mod get_me;
pub mod update_me;
