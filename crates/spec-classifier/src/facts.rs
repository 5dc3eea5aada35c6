// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Classifier input: the hardware facts of a single device.

use std::fmt;
use std::str::FromStr;

/// Operating system family. Selects the OS-version scoring ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Other,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a platform name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}'; expected 'android', 'ios', or 'other'")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            "other" => Ok(Self::Other),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

/// Hardware facts consumed by [`classify`](crate::classify).
///
/// Built fresh for every classification; nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HardwareFacts {
    /// Total physical memory in GiB.
    pub total_memory_gb: f64,
    /// Number of CPU cores.
    pub cpu_cores: u32,
    /// Screen diagonal in inches.
    pub screen_size_inches: f64,
    /// Device pixel scale factor (e.g. `2.75`).
    pub pixel_density: f64,
    /// Platform-specific version string, e.g. `"14"` or `"17.2"`.
    pub os_version: String,
    /// Whether the device reports itself as a tablet.
    pub is_tablet: bool,
    pub platform: Platform,
}
