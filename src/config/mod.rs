pub mod app_config;
pub mod database;

pub use app_config::{AppConfig, ConfigError, DatabaseSettings};
pub use database::{connect_scoped, ensure_schema};
