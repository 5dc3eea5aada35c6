// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Detector configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! root = "/"
//! platform = "android"
//! os_version = "14"
//! is_tablet = false
//!
//! [display]
//! width_px = 1080
//! height_px = 2400
//! scale = 2.75
//! ```
//!
//! A `[facts]` table replaces system detection entirely:
//! ```toml
//! [facts]
//! total_memory_bytes = 8589934592
//! cpu_cores = 8
//! os_version = "14"
//! is_tablet = false
//! platform = "android"
//! display = { width_px = 1080, height_px = 2400, scale = 2.75 }
//! ```

use crate::SpecError;
use device_facts::{
    DisplayMetrics, FactsProvider, Platform, RawFacts, StaticProvider, SystemOverrides,
    SystemProvider,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Configuration for device detection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Directory that procfs/sysfs/system paths are resolved against.
    pub root: PathBuf,
    /// Platform override (`"android"`, `"ios"`, `"other"`).
    pub platform: Option<Platform>,
    pub os_version: Option<String>,
    pub is_tablet: Option<bool>,
    /// Display override; the system rarely knows the scale factor.
    pub display: Option<DisplayMetrics>,
    /// Fixed facts. When present, nothing is read from the system.
    pub facts: Option<RawFacts>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/"),
            platform: None,
            os_version: None,
            is_tablet: None,
            display: None,
            facts: None,
        }
    }
}

impl DetectorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpecError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SpecError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SpecError::ConfigError(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SpecError> {
        toml::to_string_pretty(self)
            .map_err(|e| SpecError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Rejects display scales that cannot describe a real screen.
    pub fn validate(&self) -> Result<(), SpecError> {
        let displays = self
            .display
            .iter()
            .chain(self.facts.as_ref().map(|f| &f.display));
        for display in displays {
            if !(display.scale.is_finite() && display.scale > 0.0) {
                return Err(SpecError::ConfigError(format!(
                    "display scale must be a positive number, got {}",
                    display.scale
                )));
            }
        }
        Ok(())
    }

    /// Creates the facts provider this config describes.
    pub fn create_provider(&self) -> Arc<dyn FactsProvider> {
        if let Some(facts) = &self.facts {
            tracing::debug!("using fixed facts from configuration");
            return Arc::new(StaticProvider::new(facts.clone()));
        }

        let overrides = SystemOverrides {
            platform: self.platform,
            os_version: self.os_version.clone(),
            is_tablet: self.is_tablet,
            display: self.display,
        };
        tracing::debug!("reading facts from system root {}", self.root.display());
        Arc::new(
            SystemProvider::new()
                .with_root(&self.root)
                .with_overrides(overrides),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = DetectorConfig::default();
        assert_eq!(c.root, PathBuf::from("/"));
        assert!(c.platform.is_none());
        assert!(c.facts.is_none());
        assert_eq!(c.create_provider().name(), "system");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = DetectorConfig::from_toml("").unwrap();
        assert_eq!(c, DetectorConfig::default());
    }

    #[test]
    fn test_from_toml_overrides() {
        let toml = r#"
root = "/tmp/fixture"
platform = "ios"
os_version = "17.2"
is_tablet = true

[display]
width_px = 2048
height_px = 2732
scale = 2.0
"#;
        let c = DetectorConfig::from_toml(toml).unwrap();
        assert_eq!(c.root, PathBuf::from("/tmp/fixture"));
        assert_eq!(c.platform, Some(Platform::Ios));
        assert_eq!(c.os_version.as_deref(), Some("17.2"));
        assert_eq!(c.is_tablet, Some(true));
        assert_eq!(c.display, Some(DisplayMetrics::new(2048, 2732, 2.0)));
    }

    #[test]
    fn test_from_toml_facts() {
        let toml = r#"
[facts]
total_memory_bytes = 8589934592
cpu_cores = 8
os_version = "14"
is_tablet = false
platform = "android"
display = { width_px = 1080, height_px = 2400, scale = 2.75 }
"#;
        let c = DetectorConfig::from_toml(toml).unwrap();
        let facts = c.facts.as_ref().unwrap();
        assert_eq!(facts.total_memory_bytes, 8 * 1024 * 1024 * 1024);
        assert_eq!(facts.platform, Platform::Android);
        assert_eq!(c.create_provider().name(), "static");
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let err = DetectorConfig::from_toml("platform = \"symbian\"").unwrap_err();
        assert!(matches!(err, SpecError::ConfigError(_)));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let toml = "[display]\nwidth_px = 1080\nheight_px = 2400\nscale = 0.0\n";
        let err = DetectorConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("scale"));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = DetectorConfig {
            platform: Some(Platform::Android),
            os_version: Some("13".into()),
            display: Some(DisplayMetrics::new(1080, 2340, 2.625)),
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = DetectorConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_missing_file() {
        let err = DetectorConfig::from_file(Path::new("/nonexistent/device-spec.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }
}
