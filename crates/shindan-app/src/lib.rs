//! Application service layer - use cases, config, export

pub mod config;
pub mod export;
pub mod repository;
pub mod schedule;
