//! Configuration type definitions
//!
//! These types describe what the monitor polls and how the dashboard is laid
//! out. Defaults reproduce the stock three-server deployment on a
//! 960x540 panel.

use heapless::{String, Vec};

use crate::layout::ColumnMargins;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum server key length (JSON object key)
pub const MAX_KEY_LEN: usize = 32;

/// Maximum display label length
pub const MAX_LABEL_LEN: usize = 24;

/// Maximum monitored servers (one column each)
pub const MAX_SERVERS: usize = 4;

/// Default poll period
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 5000;

/// What the monitor shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplayMode {
    /// Per-server dashboard (status, players, logs)
    #[default]
    Servers,
    /// Container counts and host resources
    Containers,
}

/// One monitored server
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServerSpec {
    /// Key in the status document's `servers` object
    pub key: String<MAX_KEY_LEN>,
    /// Name shown in the column header
    pub label: String<MAX_LABEL_LEN>,
    /// Server reports a player count
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: bool,
}

impl ServerSpec {
    /// Create a server spec, truncating overlong key or label
    pub fn new(key: &str, label: &str, players: bool) -> Self {
        let mut spec = Self {
            players,
            ..Self::default()
        };
        crate::draw::push_truncated(&mut spec.key, key);
        crate::draw::push_truncated(&mut spec.label, label);
        spec
    }
}

/// Dashboard geometry and spacing, in pixels
///
/// Vertical gaps are added on top of the font's line height.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Dashboard title
    pub title: String<MAX_LABEL_LEN>,
    /// Padding inside the header band
    pub header_padding: u32,
    /// Extra indent of the title relative to the rule
    pub title_indent: u32,
    /// Gap between title line and rule
    pub title_gap: u32,
    /// Left edge of the system stats text
    pub stats_left: u32,
    /// Horizontal distance between the CPU and RAM readings
    pub stats_spacing: u32,
    /// Server column placement
    pub columns: ColumnMargins,
    /// Padding inside each server column
    pub block_padding: u32,
    /// Gap below the name/status line
    pub name_gap: u32,
    /// Gap below the player count line
    pub players_gap: u32,
    /// Gap between wrapped lines of one log entry
    pub wrap_gap: u32,
    /// Extra gap between log entries
    pub log_gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let mut title = String::new();
        crate::draw::push_truncated(&mut title, "DOCKER MONITOR");
        Self {
            title,
            header_padding: 20,
            title_indent: 10,
            title_gap: 5,
            stats_left: 700,
            stats_spacing: 100,
            columns: ColumnMargins::default(),
            block_padding: 5,
            name_gap: 5,
            players_gap: 4,
            wrap_gap: 1,
            log_gap: 2,
        }
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Time between polls
    pub poll_interval_ms: u32,
    /// Screen to render
    pub mode: DisplayMode,
    /// Dashboard layout
    pub layout: LayoutConfig,
    /// Monitored servers in column order
    pub servers: Vec<ServerSpec, MAX_SERVERS>,
}

impl MonitorConfig {
    /// Configuration with the default layout and no servers
    pub fn empty() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            mode: DisplayMode::Servers,
            layout: LayoutConfig::default(),
            servers: Vec::new(),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        let defaults = [
            ServerSpec::new("minecraft_bingo", "MC BINGO", true),
            ServerSpec::new("minecraft", "MINECRAFT", true),
            ServerSpec::new("satisfactory", "SATISFACTORY", false),
        ];
        for spec in defaults {
            // MAX_SERVERS leaves room for the defaults
            let _ = config.servers.push(spec);
        }
        config
    }
}
