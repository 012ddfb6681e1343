//! Configuration loading and validation
//!
//! Loads the monitor configuration from TOML. The crate's `monitor.toml`
//! is validated at build time and embedded as the default.

pub mod loader;

pub use loader::{check_layout, load_default, parse_config, DEFAULT_CONFIG};
