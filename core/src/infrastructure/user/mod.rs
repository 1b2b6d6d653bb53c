pub mod mappers;
pub mod repository;
