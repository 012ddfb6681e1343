//! Inkwatch monitor
//!
//! Ties the pieces together for the board firmware:
//! - Loads and validates the TOML configuration
//! - Polls the status endpoint through a [`StatusSource`]
//! - Tracks the network link through a [`NetworkLink`]
//! - Renders the dashboard or the container summary and presents it on an
//!   [`EpdPanel`](inkwatch_display::EpdPanel)
//!
//! The firmware owns the executor and the clock. A typical main loop:
//!
//! ```ignore
//! let config = config::load_default(panel.dimensions())?;
//! let mut monitor = Monitor::new(config, wifi, http, panel, &FONT);
//! monitor.start(Instant::now())?;
//! loop {
//!     monitor.poll(Instant::now())?;
//!     Timer::after_secs(1).await;
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

// Must come first so the logging macros are visible in later modules
mod fmt;

pub mod config;
pub mod error;
pub mod link;
pub mod monitor;
pub mod source;

pub use error::{ConfigError, FetchError, MonitorError};
pub use link::NetworkLink;
pub use monitor::{Cycle, Monitor, SkipReason};
pub use source::StatusSource;

/// Font used for every screen
pub use embedded_graphics::mono_font::ascii::FONT_10X20 as DEFAULT_FONT;
