//! Rasterization and panel abstraction for Inkwatch
//!
//! This crate provides:
//! - [`Canvas`], a 4-bit grayscale framebuffer implementing the
//!   `embedded-graphics` `DrawTarget`
//! - Rasterization of core draw plans onto a canvas with a mono font
//! - [`FontMetrics`], glyph metrics for the layout engine backed by the
//!   same font
//! - The [`EpdPanel`] trait and the power sequencing around a full refresh
//!
//! # Architecture
//!
//! The core crate lays out and renders to a draw plan without touching
//! pixels. This crate turns the plan into a packed framebuffer; the board
//! firmware implements `EpdPanel` for its panel driver and pushes the
//! buffer with [`present`].

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod backend;
pub mod canvas;
pub mod metrics;

// Re-export key types
pub use backend::{present, wipe, DisplayError, EpdPanel};
pub use canvas::Canvas;
pub use metrics::FontMetrics;
