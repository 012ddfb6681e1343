//! Monitoring data model
//!
//! Values here are built fresh from every polled document and thrown away
//! once rendered. They are bounded (`heapless`) so a misbehaving host cannot
//! grow them without limit; overlong strings are truncated on a char
//! boundary when converted from the wire documents.

use heapless::{String, Vec};

use inkwatch_protocol::{ContainerDocument, ServerEntry, StatusDocument};

use crate::config::{ServerSpec, MAX_LABEL_LEN, MAX_SERVERS};
use crate::draw::push_truncated;

/// Log lines kept per server
pub const MAX_LOG_LINES: usize = 3;

/// Maximum bytes per log line
///
/// A log entry is wrapped over several draw commands, so it may be longer
/// than a single [`DrawCommand`](crate::DrawCommand) text.
pub const MAX_LOG_LEN: usize = 512;

/// Maximum length of a network address string
pub const MAX_ADDRESS_LEN: usize = 40;

/// Maximum length of a connection notice
pub const MAX_NOTICE_LEN: usize = 48;

/// Status of one monitored server
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServerStatus {
    /// Display name
    pub name: String<MAX_LABEL_LEN>,
    /// Server is running
    pub online: bool,
    /// Connected players, `None` for servers without a player concept
    pub player_count: Option<i32>,
    /// Most recent log lines, oldest first
    pub log_lines: Vec<String<MAX_LOG_LEN>, MAX_LOG_LINES>,
}

impl ServerStatus {
    /// Create a status with no players and no logs
    pub fn new(name: &str, online: bool) -> Self {
        let mut status = Self {
            online,
            ..Self::default()
        };
        push_truncated(&mut status.name, name);
        status
    }

    /// Set the player count
    pub fn with_players(mut self, count: i32) -> Self {
        self.player_count = Some(count);
        self
    }

    /// Append a log line; lines past [`MAX_LOG_LINES`] are ignored
    pub fn with_log(mut self, line: &str) -> Self {
        self.push_log(line);
        self
    }

    fn push_log(&mut self, line: &str) {
        let mut bounded = String::new();
        push_truncated(&mut bounded, line);
        let _ = self.log_lines.push(bounded);
    }

    /// Build from the document entry for `spec`
    ///
    /// A server missing from the document is offline with no logs. The
    /// player count is only kept for servers configured to report one,
    /// defaulting to 0 when the host left it out.
    pub fn from_entry(spec: &ServerSpec, entry: Option<&ServerEntry>) -> Self {
        let mut status = Self::new(&spec.label, false);
        if spec.players {
            status.player_count = Some(entry.and_then(|e| e.players).unwrap_or(0));
        }
        if let Some(entry) = entry {
            status.online = entry.online;
            for line in entry.logs.iter().take(MAX_LOG_LINES) {
                status.push_log(line);
            }
        }
        status
    }
}

/// Host-level readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemStats {
    /// CPU temperature in °C
    pub cpu_temp_celsius: f32,
    /// Used memory, 0..=100
    pub memory_used_percent: f32,
}

/// One polled sample: system stats plus every server in display order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub system: SystemStats,
    pub servers: Vec<ServerStatus, MAX_SERVERS>,
}

impl Snapshot {
    /// Build a snapshot from a decoded status document
    ///
    /// Servers appear in `specs` order. Specs beyond [`MAX_SERVERS`] are
    /// ignored; config validation rejects them earlier.
    pub fn from_document(doc: &StatusDocument, specs: &[ServerSpec]) -> Self {
        let system = SystemStats {
            cpu_temp_celsius: doc.system.cpu_temp.unwrap_or(0.0),
            memory_used_percent: doc.system.memory_percent.unwrap_or(0.0),
        };

        let mut servers = Vec::new();
        for spec in specs.iter().take(MAX_SERVERS) {
            let _ = servers.push(ServerStatus::from_entry(spec, doc.server(&spec.key)));
        }

        Self { system, servers }
    }
}

/// Container counts and host resources for the summary screen
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContainerSummary {
    /// Overall host status
    pub status: String<MAX_LABEL_LEN>,
    pub total: u32,
    pub running: u32,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

impl ContainerSummary {
    /// Containers not running
    pub fn stopped(&self) -> u32 {
        self.total.saturating_sub(self.running)
    }

    /// Build from a decoded container document
    pub fn from_document(doc: &ContainerDocument) -> Self {
        let mut status = String::new();
        push_truncated(&mut status, &doc.status);
        Self {
            status,
            total: doc.containers.total,
            running: doc.containers.running,
            cpu_percent: doc.resources.cpu_percent,
            memory_percent: doc.resources.memory_percent,
        }
    }
}

/// Network link state as reported by the WiFi collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Associated and holding an address
    Connected {
        address: String<MAX_ADDRESS_LEN>,
        rssi_dbm: i16,
    },
    /// Not associated
    Disconnected,
}

impl LinkState {
    /// Connected state with a truncated address
    pub fn connected(address: &str, rssi_dbm: i16) -> Self {
        let mut bounded = String::new();
        push_truncated(&mut bounded, address);
        LinkState::Connected {
            address: bounded,
            rssi_dbm,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected { .. })
    }
}

/// What the connection screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionStatus {
    pub link: LinkState,
    /// Replaces the default status line, e.g. after a failed fetch
    pub notice: Option<String<MAX_NOTICE_LEN>>,
}

impl ConnectionStatus {
    pub fn new(link: LinkState) -> Self {
        Self { link, notice: None }
    }

    /// Attach a notice
    pub fn with_notice(mut self, notice: &str) -> Self {
        let mut bounded = String::new();
        push_truncated(&mut bounded, notice);
        self.notice = Some(bounded);
        self
    }
}
