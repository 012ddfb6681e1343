//! Container summary document
//!
//! The simpler endpoint used by the connectivity monitor: container counts
//! and host resource usage.

use alloc::string::String;

use serde::Deserialize;

use crate::lenient::or_default;
use crate::{object_payload, DecodeError};

/// Container counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ContainerCounts {
    #[serde(default, deserialize_with = "or_default")]
    pub total: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub running: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub stopped: u32,
}

/// Host resource usage in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ResourceUsage {
    #[serde(default, deserialize_with = "or_default")]
    pub cpu_percent: f32,
    #[serde(default, deserialize_with = "or_default")]
    pub memory_percent: f32,
    #[serde(default, deserialize_with = "or_default")]
    pub disk_percent: f32,
}

/// Host identification
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostInfo {
    #[serde(default, deserialize_with = "or_default")]
    pub hostname: String,
    #[serde(default, deserialize_with = "or_default")]
    pub uptime: String,
}

/// Complete container summary document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerDocument {
    /// Overall host status ("ok", "degraded", ...)
    #[serde(default, deserialize_with = "or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "or_default")]
    pub containers: ContainerCounts,
    #[serde(default, deserialize_with = "or_default")]
    pub resources: ResourceUsage,
    #[serde(default, deserialize_with = "or_default")]
    pub server: HostInfo,
}

/// Decode a container summary payload
pub fn parse_containers(payload: &[u8]) -> Result<ContainerDocument, DecodeError> {
    let payload = object_payload(payload)?;
    Ok(serde_json::from_slice(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let doc = parse_containers(
            br#"{
                "status": "ok",
                "server": { "hostname": "docker-host-1", "uptime": "15 days, 3 hours" },
                "containers": { "total": 5, "running": 4, "stopped": 1 },
                "resources": { "cpu_percent": 21.5, "memory_percent": 55.0, "disk_percent": 40.2 },
                "container_list": []
            }"#,
        )
        .unwrap();

        assert_eq!(doc.status, "ok");
        assert_eq!(doc.containers.running, 4);
        assert_eq!(doc.containers.total, 5);
        assert_eq!(doc.resources.cpu_percent, 21.5);
        assert_eq!(doc.server.hostname, "docker-host-1");
    }

    #[test]
    fn test_partial_summary() {
        let doc = parse_containers(br#"{"containers": {"running": 2}}"#).unwrap();
        assert_eq!(doc.containers.running, 2);
        assert_eq!(doc.containers.total, 0);
        assert_eq!(doc.status, "");
    }

    #[test]
    fn test_negative_count_defaults() {
        let doc = parse_containers(br#"{"containers": {"total": -1}}"#).unwrap();
        assert_eq!(doc.containers.total, 0);
    }
}
