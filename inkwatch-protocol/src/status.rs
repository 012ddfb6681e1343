//! Game server status document
//!
//! Published by the Docker host for the server dashboard. Servers are keyed
//! by a stable identifier; display order is decided by the monitor's
//! configuration, not by the document.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use crate::lenient::{or_default, string_list};
use crate::{object_payload, DecodeError};

/// Host-level readings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemSection {
    /// CPU temperature in °C (`null` when the host has no sensor)
    #[serde(default, deserialize_with = "or_default")]
    pub cpu_temp: Option<f32>,
    /// Used memory in percent
    #[serde(default, deserialize_with = "or_default")]
    pub memory_percent: Option<f32>,
}

/// One monitored server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerEntry {
    /// Container is running
    #[serde(default, deserialize_with = "or_default")]
    pub online: bool,
    /// Player count, only published for servers that track players
    #[serde(default, deserialize_with = "or_default")]
    pub players: Option<i32>,
    /// Most recent log lines, oldest first
    #[serde(default, deserialize_with = "string_list")]
    pub logs: Vec<String>,
    /// Raw container status ("running", "exited", "not_found", ...)
    #[serde(default, deserialize_with = "or_default")]
    pub status: Option<String>,
    /// Human readable uptime ("3h 12m")
    #[serde(default, deserialize_with = "or_default")]
    pub uptime: Option<String>,
}

/// Complete `/status` document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusDocument {
    /// Host readings
    #[serde(default, deserialize_with = "or_default")]
    pub system: SystemSection,
    /// Servers by key
    #[serde(default, deserialize_with = "or_default")]
    pub servers: BTreeMap<String, ServerEntry>,
}

impl StatusDocument {
    /// Look up a server by its key
    pub fn server(&self, key: &str) -> Option<&ServerEntry> {
        self.servers.get(key)
    }
}

/// Decode a `/status` payload
pub fn parse_status(payload: &[u8]) -> Result<StatusDocument, DecodeError> {
    let payload = object_payload(payload)?;
    Ok(serde_json::from_slice(payload)?)
}
