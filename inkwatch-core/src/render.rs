//! Dashboard rendering
//!
//! Turns a [`Snapshot`] into a complete [`DrawPlan`] for the server
//! dashboard. Rendering is a pure function of the snapshot and canvas size:
//! every call redraws the whole frame from a clear canvas.
//!
//! Frame layout (960x540, three servers):
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  DOCKER MONITOR                              CPU:47.4C RAM:62% │
//! │ ──────────────────────────────────────────────────────────── │
//! │ ┌────────────────┐ ┌────────────────┐ ┌────────────────┐      │
//! │ │MC BINGO      ON│ │MINECRAFT    OFF│ │SATISFACTORY  ON│      │
//! │ │P:3             │ │                │ │log line        │      │
//! │ │log line        │ │                │ │wrapped log lin │      │
//! │ │                │ │                │ │e continues     │      │
//! │ └────────────────┘ └────────────────┘ └────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use crate::config::LayoutConfig;
use crate::draw::{Color, DrawCommand, DrawPlan, TextBuf, Truncating};
use crate::geometry::{CanvasSize, Rect};
use crate::layout::{begin_region, compute_regions};
use crate::model::{ServerStatus, Snapshot, SystemStats};
use crate::traits::GlyphMetrics;

/// Status token for a running server
pub const ONLINE_TOKEN: &str = "ON";

/// Status token for a stopped server
pub const OFFLINE_TOKEN: &str = "OFF";

/// CPU temperature reading, one decimal: `CPU:47.4C`
pub fn format_cpu(stats: &SystemStats) -> TextBuf {
    let mut text = TextBuf::new();
    let _ = write!(Truncating::new(&mut text), "CPU:{:.1}C", stats.cpu_temp_celsius);
    text
}

/// Memory reading, no decimals: `RAM:62%`
pub fn format_memory(stats: &SystemStats) -> TextBuf {
    let mut text = TextBuf::new();
    let _ = write!(Truncating::new(&mut text), "RAM:{:.0}%", stats.memory_used_percent);
    text
}

/// Renders the server dashboard
pub struct DashboardRenderer<'a, M> {
    layout: &'a LayoutConfig,
    metrics: M,
}

impl<'a, M: GlyphMetrics> DashboardRenderer<'a, M> {
    /// Create a renderer for `layout`, measuring text with `metrics`
    pub fn new(layout: &'a LayoutConfig, metrics: M) -> Self {
        Self { layout, metrics }
    }

    /// Render `snapshot` onto a canvas of `canvas` size
    ///
    /// Servers are drawn in snapshot order, one column each. Values are
    /// drawn as given; a negative player count prints as such.
    ///
    /// # Panics
    ///
    /// Panics if the layout does not fit `canvas`.
    pub fn render(&self, snapshot: &Snapshot, canvas: CanvasSize) -> DrawPlan {
        let regions = compute_regions(canvas, snapshot.servers.len(), self.layout);
        let mut plan = DrawPlan::new();

        plan.push(DrawCommand::ClearRect(canvas.bounds()));
        self.draw_header(&mut plan, regions.header);
        self.draw_stats(&mut plan, regions.stats, &snapshot.system);

        for (server, column) in snapshot.servers.iter().zip(regions.columns) {
            self.draw_server(&mut plan, server, column);
        }

        plan
    }

    /// Title and the rule beneath it
    fn draw_header(&self, plan: &mut DrawPlan, region: Rect) {
        let layout = self.layout;
        let mut cursor = begin_region(region, layout.header_padding, self.metrics.line_height());
        cursor.place_indented(plan, layout.title_indent, &layout.title, layout.title_gap);
        cursor.place_rule(plan, Color::BLACK);
    }

    /// CPU and RAM readings on the title line
    fn draw_stats(&self, plan: &mut DrawPlan, region: Rect, stats: &SystemStats) {
        let layout = self.layout;
        let cursor = begin_region(region, layout.header_padding, self.metrics.line_height());
        cursor.place_inline(plan, 0, &format_cpu(stats));
        cursor.place_inline(plan, layout.stats_spacing, &format_memory(stats));
    }

    /// One server column
    ///
    /// Offline servers show only their name and status token, even when
    /// the snapshot carries players or logs for them.
    fn draw_server(&self, plan: &mut DrawPlan, server: &ServerStatus, column: Rect) {
        let layout = self.layout;
        let metrics = &self.metrics;

        plan.push(DrawCommand::DrawRect(column, Color::BLACK));

        let mut cursor = begin_region(column, layout.block_padding, metrics.line_height());
        let token = if server.online {
            ONLINE_TOKEN
        } else {
            OFFLINE_TOKEN
        };
        cursor.place_inline(plan, 0, &server.name);
        cursor.place_right(plan, token, metrics);
        cursor.advance(layout.name_gap);

        if !server.online {
            return;
        }

        if let Some(players) = server.player_count {
            cursor.place_fmt(plan, 0, format_args!("P:{}", players), layout.players_gap);
        }

        for line in server.log_lines.iter().filter(|line| !line.is_empty()) {
            cursor.place_wrapped(plan, line, metrics, layout.wrap_gap);
            cursor.skip(layout.log_gap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::texts;
    use crate::traits::MonospaceMetrics;
    use alloc::vec::Vec;

    const METRICS: MonospaceMetrics = MonospaceMetrics::new(10, 20);

    fn render(snapshot: &Snapshot) -> DrawPlan {
        let layout = LayoutConfig::default();
        DashboardRenderer::new(&layout, METRICS).render(snapshot, CanvasSize::EPD_960X540)
    }

    fn snapshot(servers: &[ServerStatus]) -> Snapshot {
        let mut snap = Snapshot::default();
        for s in servers {
            snap.servers.push(s.clone()).unwrap();
        }
        snap
    }

    #[test]
    fn test_format_stats() {
        let stats = SystemStats {
            cpu_temp_celsius: 47.36,
            memory_used_percent: 62.0,
        };
        assert_eq!(format_cpu(&stats), "CPU:47.4C");
        assert_eq!(format_memory(&stats), "RAM:62%");
    }

    #[test]
    fn test_plan_starts_with_full_clear() {
        let plan = render(&Snapshot::default());
        assert_eq!(plan[0], DrawCommand::ClearRect(Rect::new(0, 0, 960, 540)));
    }

    #[test]
    fn test_header_and_stats_positions() {
        let plan = render(&Snapshot::default());
        assert_eq!(plan[1], DrawCommand::text(30, 20, "DOCKER MONITOR"));
        assert_eq!(
            plan[2],
            DrawCommand::DrawHLine {
                x: 20,
                y: 45,
                length: 920,
                color: Color::BLACK
            }
        );
        assert_eq!(plan[3], DrawCommand::text(700, 20, "CPU:0.0C"));
        assert_eq!(plan[4], DrawCommand::text(800, 20, "RAM:0%"));
        assert_eq!(plan.len(), 5);
    }

    #[test]
    fn test_server_block_order() {
        let plan = render(&snapshot(&[ServerStatus::new("MC BINGO", true)
            .with_players(3)
            .with_log("Player joined: Alice")]));

        let block = &plan[5..];
        assert_eq!(block[0], DrawCommand::DrawRect(Rect::new(20, 60, 935, 470), Color::BLACK));
        assert_eq!(block[1], DrawCommand::text(25, 65, "MC BINGO"));
        assert_eq!(block[2], DrawCommand::text(930, 65, "ON"));
        assert_eq!(block[3], DrawCommand::text(25, 90, "P:3"));
        assert_eq!(block[4], DrawCommand::text(25, 114, "Player joined: Alice"));
        assert_eq!(block.len(), 5);
    }

    #[test]
    fn test_offline_suppresses_details() {
        let plan = render(&snapshot(&[ServerStatus::new("MINECRAFT", false)
            .with_players(4)
            .with_log("still here")]));
        let found: Vec<_> = texts(&plan[5..]).collect();
        assert_eq!(found, ["MINECRAFT", "OFF"]);
    }

    #[test]
    fn test_empty_log_lines_skipped() {
        let plan = render(&snapshot(&[ServerStatus::new("S", true)
            .with_log("")
            .with_log("second")]));
        let found: Vec<_> = texts(&plan[5..]).collect();
        assert_eq!(found, ["S", "ON", "second"]);
    }

    #[test]
    fn test_log_entries_separated_by_gap() {
        let plan = render(&snapshot(&[ServerStatus::new("S", true)
            .with_log("first")
            .with_log("second")]));
        // name line at 65, logs at 65+25 and 90+21+2
        assert_eq!(plan[8], DrawCommand::text(25, 90, "first"));
        assert_eq!(plan[9], DrawCommand::text(25, 113, "second"));
    }

    #[test]
    fn test_negative_players_rendered_literally() {
        let plan = render(&snapshot(&[ServerStatus::new("S", true).with_players(-2)]));
        assert!(texts(&plan).any(|t| t == "P:-2"));
    }

    #[test]
    fn test_render_is_stateless() {
        let layout = LayoutConfig::default();
        let renderer = DashboardRenderer::new(&layout, METRICS);
        let snap = snapshot(&[ServerStatus::new("A", true).with_log("x")]);
        let first = renderer.render(&snap, CanvasSize::EPD_960X540);
        let second = renderer.render(&snap, CanvasSize::EPD_960X540);
        assert_eq!(first, second);
    }

    #[test]
    fn test_oversized_gap_pushes_lines_down() {
        let layout = LayoutConfig {
            name_gap: u32::MAX,
            ..LayoutConfig::default()
        };
        let renderer = DashboardRenderer::new(&layout, METRICS);
        let snap = snapshot(&[ServerStatus::new("S", true).with_players(1)]);
        let plan = renderer.render(&snap, CanvasSize::EPD_960X540);
        assert_eq!(plan[8], DrawCommand::text(25, i32::MAX, "P:1"));
    }

    #[test]
    fn test_long_log_wraps_without_loss() {
        let long: alloc::string::String = (0..300).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let plan = render(&snapshot(&[ServerStatus::new("S", true).with_log(&long)]));
        let lines: Vec<_> = texts(&plan[5..]).skip(2).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.concat(), long);
    }
}
