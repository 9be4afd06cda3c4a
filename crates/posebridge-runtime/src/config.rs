//! Runtime configuration

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use posebridge_core::{BridgeError, BridgeResult};
use posebridge_pipeline::PipelineConfig;

/// Runtime configuration for the relay binary.
///
/// Loaded from a JSON file; every field has a default matching the live
/// deployment's constants, so a partial (or absent) file is fine.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Destination for outbound pose datagrams
    pub dest_addr: SocketAddr,
    /// Local name of the designated camera-mount sub-frame
    pub mount_frame: String,
    /// Emit the diagnostic dump every this many snapshots
    pub dump_every: u64,
    /// Feed rate in snapshots per second
    pub feed_hz: u32,
    /// Number of entities in the synthetic feed
    pub entities: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            dest_addr: SocketAddr::from(([127, 0, 0, 1], 9540)),
            mount_frame: "cgo3_camera_link".to_string(),
            dump_every: 100,
            feed_hz: 250,
            entities: 1,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    /// Parse configuration from a JSON string
    pub fn parse(raw: &str) -> BridgeResult<Self> {
        serde_json::from_str(raw).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// The pipeline's slice of this configuration
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            mount_frame: self.mount_frame.clone(),
            dump_every: self.dump_every,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_live_constants() {
        let config = RuntimeConfig::default();
        assert_eq!(config.mount_frame, "cgo3_camera_link");
        assert_eq!(config.dump_every, 100);
        assert_eq!(config.feed_hz, 250);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = RuntimeConfig::parse(r#"{"dest_addr": "10.0.0.5:4560", "entities": 3}"#).unwrap();
        assert_eq!(config.dest_addr, SocketAddr::from(([10, 0, 0, 5], 4560)));
        assert_eq!(config.entities, 3);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.mount_frame, "cgo3_camera_link");
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        assert!(matches!(
            RuntimeConfig::parse(r#"{"dest_adr": "10.0.0.5:4560"}"#),
            Err(BridgeError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        assert!(matches!(
            RuntimeConfig::load("/nonexistent/posebridge.json"),
            Err(BridgeError::Config(_))
        ));
    }

    #[test]
    fn test_pipeline_slice() {
        let config = RuntimeConfig::parse(r#"{"mount_frame": "gimbal_link", "dump_every": 10}"#).unwrap();
        let pipeline = config.pipeline();
        assert_eq!(pipeline.mount_frame, "gimbal_link");
        assert_eq!(pipeline.dump_every, 10);
    }
}
