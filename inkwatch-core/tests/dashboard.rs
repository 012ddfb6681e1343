//! End-to-end dashboard rendering on the default three-column layout

use inkwatch_core::config::{LayoutConfig, MonitorConfig};
use inkwatch_core::draw::texts;
use inkwatch_core::traits::MonospaceMetrics;
use inkwatch_core::{
    CanvasSize, DashboardRenderer, DrawCommand, DrawPlan, GlyphMetrics, Rect, ServerStatus,
    Snapshot, SystemStats,
};
use inkwatch_protocol::parse_status;

const METRICS: MonospaceMetrics = MonospaceMetrics::new(10, 20);
const FIRST_COLUMN: Rect = Rect {
    x: 20,
    y: 60,
    width: 305,
    height: 470,
};

fn three_servers(first: ServerStatus) -> Snapshot {
    let mut snap = Snapshot::default();
    snap.servers.push(first).unwrap();
    snap.servers.push(ServerStatus::new("MINECRAFT", false).with_players(0)).unwrap();
    snap.servers.push(ServerStatus::new("SATISFACTORY", true)).unwrap();
    snap
}

fn render(snapshot: &Snapshot) -> DrawPlan {
    let layout = LayoutConfig::default();
    DashboardRenderer::new(&layout, METRICS).render(snapshot, CanvasSize::EPD_960X540)
}

/// Commands drawn inside the first column, after its border
fn first_column(plan: &DrawPlan) -> &[DrawCommand] {
    let start = plan
        .iter()
        .position(|c| matches!(c, DrawCommand::DrawRect(r, _) if *r == FIRST_COLUMN))
        .unwrap();
    let end = plan[start + 1..]
        .iter()
        .position(|c| matches!(c, DrawCommand::DrawRect(..)))
        .map_or(plan.len(), |i| start + 1 + i);
    &plan[start + 1..end]
}

#[test]
fn online_server_with_players_and_log() {
    let plan = render(&three_servers(
        ServerStatus::new("MC BINGO", true)
            .with_players(3)
            .with_log("Player joined: Alice"),
    ));

    let found: Vec<_> = texts(first_column(&plan)).collect();
    assert_eq!(found, ["MC BINGO", "ON", "P:3", "Player joined: Alice"]);
}

#[test]
fn offline_server_shows_name_and_status_only() {
    let plan = render(&three_servers(
        ServerStatus::new("MC BINGO", false)
            .with_players(3)
            .with_log("Player joined: Alice"),
    ));

    let found: Vec<_> = texts(first_column(&plan)).collect();
    assert_eq!(found, ["MC BINGO", "OFF"]);
    assert!(!texts(&plan).any(|t| t.starts_with("P:")));
}

#[test]
fn stats_are_formatted() {
    let mut snap = three_servers(ServerStatus::new("MC BINGO", true));
    snap.system = SystemStats {
        cpu_temp_celsius: 47.36,
        memory_used_percent: 62.0,
    };
    let plan = render(&snap);

    assert!(plan.contains(&DrawCommand::text(700, 20, "CPU:47.4C")));
    assert!(plan.contains(&DrawCommand::text(800, 20, "RAM:62%")));
}

#[test]
fn long_log_wraps_within_column() {
    let log: String = "0123456789".repeat(10);
    assert!(METRICS.text_width(&log) > 3 * FIRST_COLUMN.width);

    let plan = render(&three_servers(ServerStatus::new("MC BINGO", true).with_log(&log)));
    let column = first_column(&plan);
    let lines: Vec<_> = texts(column).skip(2).collect();

    assert!(lines.len() >= 3);
    for line in &lines {
        assert!(METRICS.text_width(line) <= FIRST_COLUMN.width - 10);
    }
    assert_eq!(lines.concat(), log);

    for cmd in column {
        if let DrawCommand::DrawText { x, .. } = cmd {
            assert!(*x >= FIRST_COLUMN.x && *x < FIRST_COLUMN.right());
        }
    }
}

#[test]
fn columns_follow_configuration_order() {
    let payload = br#"{
        "system": { "cpu_temp": 51.0, "memory_percent": 33.3 },
        "servers": {
            "satisfactory": { "online": true, "logs": ["Autosave complete"] },
            "minecraft": { "online": false, "players": 0, "logs": [] },
            "minecraft_bingo": { "online": true, "players": 2, "logs": ["a", "", "b"] }
        }
    }"#;
    let config = MonitorConfig::default();
    let snap = Snapshot::from_document(&parse_status(payload).unwrap(), &config.servers);
    let plan = render(&snap);

    let found: Vec<_> = texts(&plan).collect();
    assert_eq!(
        found,
        [
            "DOCKER MONITOR",
            "CPU:51.0C",
            "RAM:33%",
            "MC BINGO",
            "ON",
            "P:2",
            "a",
            "b",
            "MINECRAFT",
            "OFF",
            "SATISFACTORY",
            "ON",
            "Autosave complete",
        ]
    );
}
