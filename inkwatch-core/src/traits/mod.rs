//! Collaborator traits
//!
//! These traits define the interface between the layout logic and the
//! font rendering it runs on top of.

pub mod metrics;

pub use metrics::{GlyphMetrics, MonospaceMetrics};
