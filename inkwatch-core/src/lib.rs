//! Board-agnostic core logic for the Inkwatch e-paper monitor
//!
//! This crate contains all layout and rendering logic that does not depend
//! on a specific panel or network stack:
//!
//! - Greedy character wrapping against a pixel budget
//! - Region layout (header band, stats block, server columns)
//! - Dashboard and auxiliary screen rendering to draw-command plans
//! - Data model built from the decoded monitoring documents
//! - Configuration type definitions
//!
//! Rendering never touches pixels; it produces a [`draw::DrawPlan`] that a
//! display backend rasterizes.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod render;
pub mod screens;
pub mod traits;
pub mod wrap;

pub use draw::{Color, DrawCommand, DrawPlan};
pub use geometry::{CanvasSize, Rect};
pub use layout::{begin_region, compute_columns, compute_regions, RegionCursor};
pub use model::{ConnectionStatus, ContainerSummary, LinkState, ServerStatus, Snapshot, SystemStats};
pub use render::DashboardRenderer;
pub use traits::GlyphMetrics;
pub use wrap::wrap;
