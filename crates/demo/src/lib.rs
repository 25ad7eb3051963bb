//! Demonstration driver for the stockroom catalog.

pub mod config;
pub mod driver;

pub use config::{ConfigError, DemoConfig};
pub use driver::{run, seed_catalog, DemoReport};
