//! Configuration types
//!
//! Board-agnostic configuration structures, loaded from TOML by the
//! monitor crate.

pub mod types;

pub use types::*;
