// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Surface configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! container_width = 256
//! container_height = 128
//! ```

use crate::error::ConfigError;
use tiler_geom::Extents;

/// Describes the tiled container surface the engine packs into.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SurfaceConfig {
    /// Container width in slots.
    pub container_width: u16,
    /// Container height in slots.
    pub container_height: u16,
}

impl SurfaceConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("cannot read config '{}': {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError(format!("TOML serialise error: {e}")))
    }

    /// The configured surface as [`Extents`].
    pub fn extents(&self) -> Extents {
        Extents { width: self.container_width, height: self.container_height }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { container_width: 256, container_height: 128 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = SurfaceConfig::default();
        assert_eq!(c.extents().width, 256);
        assert_eq!(c.extents().height, 128);
    }

    #[test]
    fn test_from_toml() {
        let c = SurfaceConfig::from_toml("container_width = 128\ncontainer_height = 64\n").unwrap();
        assert_eq!(c.container_width, 128);
        assert_eq!(c.container_height, 64);
    }

    #[test]
    fn test_toml_roundtrip() {
        let c = SurfaceConfig::default();
        let toml = c.to_toml().unwrap();
        let back = SurfaceConfig::from_toml(&toml).unwrap();
        assert_eq!(back.container_width, c.container_width);
        assert_eq!(back.container_height, c.container_height);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SurfaceConfig::from_toml("container_width = \"wide\"").is_err());
    }
}
