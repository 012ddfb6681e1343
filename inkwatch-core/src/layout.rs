//! Region layout
//!
//! Splits the canvas into fixed regions (a header band, a stats block and
//! one column per monitored server) and provides [`RegionCursor`] for
//! stacking text top to bottom inside a region.
//!
//! Regions never scroll or grow. Content taller than its region runs past
//! the bottom border; callers size their content accordingly.

use alloc::vec::Vec;

use crate::config::LayoutConfig;
use crate::draw::{Color, DrawCommand, DrawPlan};
use crate::geometry::{CanvasSize, Rect};
use crate::traits::GlyphMetrics;
use crate::wrap::wrap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Margins around the row of server columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColumnMargins {
    /// Space left of the first column
    pub left: u32,
    /// Space right of the last column
    pub right: u32,
    /// Space between adjacent columns
    pub gap: u32,
    /// Top edge of every column (below the header band)
    pub top: u32,
    /// Space below the columns
    pub bottom: u32,
}

impl Default for ColumnMargins {
    /// Three 305px columns on a 960x540 panel
    fn default() -> Self {
        Self {
            left: 20,
            right: 5,
            gap: 10,
            top: 60,
            bottom: 10,
        }
    }
}

/// Compute `column_count` equal-width columns, left to right
///
/// Leftover pixels from the integer division stay on the right margin.
///
/// # Panics
///
/// Panics if `column_count` is zero or the margins leave no room for the
/// columns. Both are configuration bugs.
pub fn compute_columns(
    canvas: CanvasSize,
    column_count: usize,
    margins: &ColumnMargins,
) -> Vec<Rect> {
    assert!(column_count > 0, "at least one column required");

    let count = column_count as u32;
    let reserved = margins.left + margins.right + margins.gap * (count - 1);
    assert!(
        canvas.width > reserved,
        "no room for {} columns in {}px",
        count,
        canvas.width
    );
    assert!(
        canvas.height > margins.top + margins.bottom,
        "no room for columns in {}px",
        canvas.height
    );

    let width = (canvas.width - reserved) / count;
    let height = canvas.height - margins.top - margins.bottom;

    (0..count)
        .map(|i| {
            let x = margins.left + i * (width + margins.gap);
            let rect = Rect::new(x as i32, margins.top as i32, width, height);
            assert!(canvas.contains(&rect));
            rect
        })
        .collect()
}

/// All regions of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRegions {
    /// Full-width band above the columns (title and rule)
    pub header: Rect,
    /// Right-hand part of the header band holding the system stats
    pub stats: Rect,
    /// One column per server, in display order
    pub columns: Vec<Rect>,
}

/// Compute the dashboard regions for `column_count` servers
///
/// `columns` is empty when there are no servers.
///
/// # Panics
///
/// Panics if the configured regions do not fit on the canvas.
pub fn compute_regions(
    canvas: CanvasSize,
    column_count: usize,
    layout: &LayoutConfig,
) -> DashboardRegions {
    let header = Rect::new(0, 0, canvas.width, layout.columns.top);
    assert!(canvas.contains(&header), "header band outside canvas");

    let stats_x = layout.stats_left.saturating_sub(layout.header_padding);
    assert!(stats_x < canvas.width, "stats block outside canvas");
    let stats = Rect::new(stats_x as i32, 0, canvas.width - stats_x, layout.columns.top);

    let columns = if column_count == 0 {
        Vec::new()
    } else {
        compute_columns(canvas, column_count, &layout.columns)
    };

    DashboardRegions {
        header,
        stats,
        columns,
    }
}

/// Start placing content in `region`
pub fn begin_region(region: Rect, padding: u32, line_height: u32) -> RegionCursor {
    RegionCursor::new(region, padding, line_height)
}

/// Vertical cursor scoped to one region
///
/// Starts at the padded top-left corner. Every `place_*` call that consumes
/// a line emits its commands at the current position, moves down by one
/// line height plus the requested gap and returns the new y.
#[derive(Debug, Clone)]
pub struct RegionCursor {
    region: Rect,
    padding: u32,
    line_height: u32,
    y: i32,
}

impl RegionCursor {
    /// Create a cursor at the padded top-left corner of `region`
    ///
    /// # Panics
    ///
    /// Panics if the padding swallows the whole region width.
    pub fn new(region: Rect, padding: u32, line_height: u32) -> Self {
        assert!(
            region.width > padding * 2,
            "padding {} leaves no room in {}px region",
            padding,
            region.width
        );
        Self {
            region,
            padding,
            line_height,
            y: region.y + padding as i32,
        }
    }

    /// Region this cursor draws into
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Left text edge
    pub fn x(&self) -> i32 {
        self.region.x + self.padding as i32
    }

    /// Current line top
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Right text edge (exclusive)
    pub fn right(&self) -> i32 {
        self.region.right() - self.padding as i32
    }

    /// Width available for text between the paddings
    pub fn inner_width(&self) -> u32 {
        self.region.width - self.padding * 2
    }

    /// Move down by `pixels` without emitting anything
    ///
    /// Saturates at `i32::MAX`; the cursor never moves up.
    pub fn skip(&mut self, pixels: u32) -> i32 {
        let pixels = i32::try_from(pixels).unwrap_or(i32::MAX);
        self.y = self.y.saturating_add(pixels);
        self.y
    }

    /// Move down by one line plus `gap`
    pub fn advance(&mut self, gap: u32) -> i32 {
        self.skip(self.line_height.saturating_add(gap))
    }

    /// Place `text` at the left edge and move to the next line
    pub fn place_text(&mut self, plan: &mut DrawPlan, text: &str, gap: u32) -> i32 {
        self.place_indented(plan, 0, text, gap)
    }

    /// Place `text` `indent` pixels right of the left edge and move to the
    /// next line
    pub fn place_indented(&mut self, plan: &mut DrawPlan, indent: u32, text: &str, gap: u32) -> i32 {
        plan.push(DrawCommand::text(self.x() + indent as i32, self.y, text));
        self.advance(gap)
    }

    /// Place formatted text at the left edge and move to the next line
    pub fn place_fmt(
        &mut self,
        plan: &mut DrawPlan,
        indent: u32,
        args: core::fmt::Arguments<'_>,
        gap: u32,
    ) -> i32 {
        plan.push(DrawCommand::text_fmt(self.x() + indent as i32, self.y, args));
        self.advance(gap)
    }

    /// Place `text` `offset` pixels right of the left edge on the current
    /// line without moving down
    pub fn place_inline(&self, plan: &mut DrawPlan, offset: u32, text: &str) -> i32 {
        plan.push(DrawCommand::text(self.x() + offset as i32, self.y, text));
        self.y
    }

    /// Place `text` flush with the right edge on the current line without
    /// moving down
    ///
    /// Text wider than the region starts at the left edge instead.
    pub fn place_right<M: GlyphMetrics>(&self, plan: &mut DrawPlan, text: &str, metrics: &M) -> i32 {
        let x = (self.right() - metrics.text_width(text) as i32).max(self.x());
        plan.push(DrawCommand::text(x, self.y, text));
        self.y
    }

    /// Draw a horizontal rule across the inner width at the current y
    pub fn place_rule(&self, plan: &mut DrawPlan, color: Color) -> i32 {
        plan.push(DrawCommand::DrawHLine {
            x: self.x(),
            y: self.y,
            length: self.inner_width(),
            color,
        });
        self.y
    }

    /// Wrap `text` to the inner width and place each line
    ///
    /// Wrapped lines are separated by `gap`; the cursor ends below the last
    /// line, also after `gap`.
    pub fn place_wrapped<M: GlyphMetrics>(
        &mut self,
        plan: &mut DrawPlan,
        text: &str,
        metrics: &M,
        gap: u32,
    ) -> i32 {
        for line in wrap(text, self.inner_width(), |s| metrics.text_width(s)) {
            self.place_text(plan, line, gap);
        }
        self.y
    }
}
