// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The three-tier device category.

use std::fmt;
use std::str::FromStr;

/// Lower bound (inclusive) of the high tier.
const HIGH_THRESHOLD: u8 = 70;

/// Lower bound (inclusive) of the mid tier.
const MID_THRESHOLD: u8 = 40;

/// Device capability tier.
///
/// Ordered: `Low < Mid < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSpec {
    Low,
    Mid,
    High,
}

impl DeviceSpec {
    /// Maps a total score to its category.
    ///
    /// Both thresholds are inclusive lower bounds: 70 is high, 40 is mid.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MID_THRESHOLD {
            Self::Mid
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DeviceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown device spec '{0}'; expected 'low', 'mid', or 'high'")]
pub struct ParseSpecError(pub String);

impl FromStr for DeviceSpec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "mid" => Ok(Self::Mid),
            "high" => Ok(Self::High),
            other => Err(ParseSpecError(other.to_string())),
        }
    }
}
