//! Auxiliary screens
//!
//! Full-frame screens shown outside the dashboard: link status while the
//! monitor connects, the container summary and a plain blank panel.
//! Like the dashboard they are pure functions returning a [`DrawPlan`].

use crate::config::LayoutConfig;
use crate::draw::{Color, DrawCommand, DrawPlan};
use crate::geometry::CanvasSize;
use crate::layout::{begin_region, RegionCursor};
use crate::model::{ConnectionStatus, ContainerSummary, LinkState};
use crate::traits::GlyphMetrics;

/// Distance from the canvas edge to screen content
pub const SCREEN_MARGIN: u32 = 50;

/// Indent of list items under a section heading
pub const ITEM_INDENT: u32 = 20;

const TITLE_GAP: u32 = 20;
const LINE_GAP: u32 = 10;
const ITEM_GAP: u32 = 5;
const SECTION_GAP: u32 = 20;
const RULE_GAP: u32 = 30;

fn page<M: GlyphMetrics>(canvas: CanvasSize, metrics: &M, plan: &mut DrawPlan) -> RegionCursor {
    plan.push(DrawCommand::ClearRect(canvas.bounds()));
    begin_region(canvas.bounds(), SCREEN_MARGIN, metrics.line_height())
}

fn rule(cursor: &mut RegionCursor, plan: &mut DrawPlan) {
    cursor.place_rule(plan, Color::BLACK);
    cursor.skip(RULE_GAP);
}

/// Link status screen
///
/// Shows the address and signal strength while connected, a connecting
/// message otherwise. The bottom line carries the notice if one is set.
pub fn connection_screen<M: GlyphMetrics>(
    status: &ConnectionStatus,
    canvas: CanvasSize,
    layout: &LayoutConfig,
    metrics: &M,
) -> DrawPlan {
    let mut plan = DrawPlan::new();
    let mut cursor = page(canvas, metrics, &mut plan);

    cursor.place_text(&mut plan, &layout.title, TITLE_GAP);

    match &status.link {
        LinkState::Connected { address, rssi_dbm } => {
            cursor.place_text(&mut plan, "WiFi: Connected", LINE_GAP);
            cursor.place_fmt(&mut plan, 0, format_args!("IP: {}", address), LINE_GAP);
            cursor.place_fmt(&mut plan, 0, format_args!("Signal: {} dBm", rssi_dbm), LINE_GAP);
        }
        LinkState::Disconnected => {
            cursor.place_text(&mut plan, "WiFi: Not Connected", LINE_GAP);
            cursor.place_text(&mut plan, "Attempting to connect...", LINE_GAP);
        }
    }

    rule(&mut cursor, &mut plan);

    match &status.notice {
        Some(notice) => cursor.place_fmt(&mut plan, 0, format_args!("Status: {}", notice), 0),
        None => cursor.place_text(&mut plan, "Status: Monitoring initialized", 0),
    };

    plan
}

/// Container summary screen
///
/// `elapsed_s` is the age of the summary in whole seconds.
pub fn container_screen<M: GlyphMetrics>(
    summary: &ContainerSummary,
    elapsed_s: u64,
    canvas: CanvasSize,
    layout: &LayoutConfig,
    metrics: &M,
) -> DrawPlan {
    let mut plan = DrawPlan::new();
    let mut cursor = page(canvas, metrics, &mut plan);

    cursor.place_text(&mut plan, &layout.title, LINE_GAP);
    cursor.place_fmt(&mut plan, 0, format_args!("Status: {}", summary.status), 0);
    rule(&mut cursor, &mut plan);

    cursor.place_text(&mut plan, "CONTAINERS:", ITEM_GAP);
    cursor.place_fmt(
        &mut plan,
        ITEM_INDENT,
        format_args!("Running: {} / {}", summary.running, summary.total),
        ITEM_GAP,
    );
    cursor.place_fmt(
        &mut plan,
        ITEM_INDENT,
        format_args!("Stopped: {}", summary.stopped()),
        SECTION_GAP,
    );

    cursor.place_text(&mut plan, "RESOURCES:", ITEM_GAP);
    cursor.place_fmt(
        &mut plan,
        ITEM_INDENT,
        format_args!("CPU:    {:.1}%", summary.cpu_percent),
        ITEM_GAP,
    );
    cursor.place_fmt(
        &mut plan,
        ITEM_INDENT,
        format_args!("Memory: {:.1}%", summary.memory_percent),
        SECTION_GAP,
    );

    cursor.place_fmt(&mut plan, 0, format_args!("Updated: {} sec ago", elapsed_s), 0);

    plan
}

/// A single full-canvas clear
pub fn blank_screen(canvas: CanvasSize) -> DrawPlan {
    let mut plan = DrawPlan::new();
    plan.push(DrawCommand::ClearRect(canvas.bounds()));
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::texts;
    use crate::geometry::Rect;
    use crate::traits::MonospaceMetrics;
    use alloc::vec::Vec;

    const METRICS: MonospaceMetrics = MonospaceMetrics::new(10, 20);

    #[test]
    fn test_connected_screen() {
        let status = ConnectionStatus::new(LinkState::connected("192.168.1.40", -61));
        let plan = connection_screen(&status, CanvasSize::EPD_960X540, &LayoutConfig::default(), &METRICS);

        assert_eq!(plan[0], DrawCommand::ClearRect(Rect::new(0, 0, 960, 540)));
        let found: Vec<_> = texts(&plan).collect();
        assert_eq!(
            found,
            [
                "DOCKER MONITOR",
                "WiFi: Connected",
                "IP: 192.168.1.40",
                "Signal: -61 dBm",
                "Status: Monitoring initialized",
            ]
        );
        assert!(plan
            .iter()
            .any(|c| matches!(c, DrawCommand::DrawHLine { x: 50, length: 860, .. })));
    }

    #[test]
    fn test_disconnected_screen_with_notice() {
        let status = ConnectionStatus::new(LinkState::Disconnected).with_notice("fetch failed");
        let plan = connection_screen(&status, CanvasSize::EPD_960X540, &LayoutConfig::default(), &METRICS);
        let found: Vec<_> = texts(&plan).collect();
        assert_eq!(
            found,
            [
                "DOCKER MONITOR",
                "WiFi: Not Connected",
                "Attempting to connect...",
                "Status: fetch failed",
            ]
        );
    }

    #[test]
    fn test_container_screen() {
        let summary = ContainerSummary {
            status: "ok".try_into().unwrap(),
            total: 5,
            running: 3,
            cpu_percent: 12.3,
            memory_percent: 40.0,
        };
        let plan = container_screen(&summary, 7, CanvasSize::EPD_960X540, &LayoutConfig::default(), &METRICS);
        let found: Vec<_> = texts(&plan).collect();
        assert_eq!(
            found,
            [
                "DOCKER MONITOR",
                "Status: ok",
                "CONTAINERS:",
                "Running: 3 / 5",
                "Stopped: 2",
                "RESOURCES:",
                "CPU:    12.3%",
                "Memory: 40.0%",
                "Updated: 7 sec ago",
            ]
        );
    }

    #[test]
    fn test_items_indented() {
        let summary = ContainerSummary::default();
        let plan = container_screen(&summary, 0, CanvasSize::EPD_960X540, &LayoutConfig::default(), &METRICS);
        let heading = plan.iter().find(|c| c.as_text() == Some("CONTAINERS:"));
        let item = plan.iter().find(|c| c.as_text() == Some("Running: 0 / 0"));
        match (heading, item) {
            (Some(DrawCommand::DrawText { x: hx, .. }), Some(DrawCommand::DrawText { x: ix, .. })) => {
                assert_eq!(*ix - *hx, ITEM_INDENT as i32);
            }
            other => panic!("missing lines: {:?}", other),
        }
    }

    #[test]
    fn test_blank_screen() {
        assert_eq!(
            blank_screen(CanvasSize::new(100, 50)),
            [DrawCommand::ClearRect(Rect::new(0, 0, 100, 50))]
        );
    }
}
