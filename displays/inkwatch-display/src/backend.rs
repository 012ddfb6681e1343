//! E-paper panel backend
//!
//! Defines the interface to the panel driver and the power sequencing
//! around a full-frame refresh.

use crate::canvas::Canvas;
use inkwatch_core::CanvasSize;

/// Panel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the panel
    Communication,
    /// Panel still busy with a previous refresh
    Busy,
    /// Frame does not match the panel dimensions
    SizeMismatch,
    /// Panel not initialized
    NotInitialized,
}

/// E-paper panel driver
///
/// Implementations own the bus and waveform details. Every refresh is a
/// full frame; the panel keeps its image while powered off.
pub trait EpdPanel {
    /// Power up the panel drivers
    fn power_on(&mut self) -> Result<(), DisplayError>;

    /// Power down the panel drivers
    fn power_off(&mut self) -> Result<(), DisplayError>;

    /// Clear the physical panel to white
    ///
    /// Cycles the pixels to remove ghosting, unlike pushing a white frame.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Push a packed 4bpp frame (see [`Canvas`] for the layout)
    fn push_frame(&mut self, frame: &[u8]) -> Result<(), DisplayError>;

    /// Panel size in pixels
    fn dimensions(&self) -> CanvasSize;
}

/// Display `canvas` on `panel`
///
/// The panel is powered off again even if the push fails; the push error
/// wins over a power-off error.
pub fn present<P: EpdPanel + ?Sized>(panel: &mut P, canvas: &Canvas) -> Result<(), DisplayError> {
    if panel.dimensions() != canvas.canvas_size() {
        return Err(DisplayError::SizeMismatch);
    }

    panel.power_on()?;
    let pushed = panel.push_frame(canvas.as_bytes());
    let off = panel.power_off();
    pushed.and(off)
}

/// Clear `panel` and reset `canvas` to white
pub fn wipe<P: EpdPanel + ?Sized>(panel: &mut P, canvas: &mut Canvas) -> Result<(), DisplayError> {
    panel.power_on()?;
    let cleared = panel.clear();
    canvas.clear();
    let off = panel.power_off();
    cleared.and(off)
}
