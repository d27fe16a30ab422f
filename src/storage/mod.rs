//! Storage module for the data file and configuration.

pub mod config;
pub mod store;

pub use config::{load_config, save_config, AppConfig, ConfigError};
pub use store::{JsonStore, StoreDocument, StoreError};
