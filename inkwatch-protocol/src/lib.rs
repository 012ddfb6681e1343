//! Inkwatch status protocol
//!
//! This crate defines the JSON documents served by the monitoring host and
//! polled by the e-paper monitor over HTTP. Decoding is lenient:
//! the panel should keep showing *something* when the host publishes a
//! partial document.
//!
//! # Documents
//!
//! ```text
//! GET /status (game servers)
//! {
//!   "system":  { "cpu_temp": 47.3, "memory_percent": 62.0 },
//!   "servers": {
//!     "<key>": { "online": true, "players": 3, "logs": ["...", "..."] }
//!   }
//! }
//!
//! GET /status (container summary)
//! {
//!   "status": "ok",
//!   "containers": { "total": 5, "running": 4, "stopped": 1 },
//!   "resources":  { "cpu_percent": 21.5, "memory_percent": 55.0 }
//! }
//! ```
//!
//! Absent, `null` or mistyped fields decode to their defaults
//! (`false` / `0` / empty). Only a payload that is not a JSON object is an
//! error.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod containers;
pub mod lenient;
pub mod status;

pub use containers::{parse_containers, ContainerCounts, ContainerDocument, HostInfo, ResourceUsage};
pub use status::{parse_status, ServerEntry, StatusDocument, SystemSection};

/// Errors that can occur while decoding a status document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Payload was empty
    Empty,
    /// Payload is not a JSON object
    Malformed,
}

impl From<serde_json::Error> for DecodeError {
    fn from(_: serde_json::Error) -> Self {
        DecodeError::Malformed
    }
}

/// Reject payloads that cannot hold a document before handing them to the
/// JSON parser
///
/// The root must be an object: derived struct decoding would otherwise
/// accept a JSON array as a positional field list.
pub(crate) fn object_payload(payload: &[u8]) -> Result<&[u8], DecodeError> {
    match payload.iter().find(|b| !b.is_ascii_whitespace()) {
        None => Err(DecodeError::Empty),
        Some(b'{') => Ok(payload),
        Some(_) => Err(DecodeError::Malformed),
    }
}
