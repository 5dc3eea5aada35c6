// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The weighted scoring ladders and [`classify`].
//!
//! Every ladder is a chain of inclusive lower bounds checked from the top
//! band down; the first match wins. Float comparisons against NaN are
//! false, so NaN inputs fall through to the bottom band.

use crate::version::{parse_leading_float, parse_leading_int};
use crate::{DeviceSpec, HardwareFacts, Platform};

/// Highest possible total score (35 + 25 + 25 + 15).
pub const MAX_SCORE: u8 = 100;

/// Per-component scores behind a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ScoreBreakdown {
    /// RAM component, `0..=35`.
    pub memory: u8,
    /// CPU core component, `3..=25`.
    pub cpu: u8,
    /// Pixel density half of the display component, `4..=13`.
    pub density: u8,
    /// Screen size / tablet half of the display component, `4..=12`.
    pub screen: u8,
    /// OS version component, `0..=15`.
    pub os: u8,
}

impl ScoreBreakdown {
    /// Combined display component, `8..=25`.
    pub fn display(&self) -> u8 {
        self.density + self.screen
    }

    /// Sum of all components.
    pub fn total(&self) -> u8 {
        self.memory + self.cpu + self.display() + self.os
    }
}

/// Result of classifying one set of [`HardwareFacts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Classification {
    /// Total score in `[0, 100]`.
    pub score: u8,
    pub spec: DeviceSpec,
    pub breakdown: ScoreBreakdown,
}

/// Scores a device and derives its category.
///
/// Deterministic and infallible: identical facts always produce the same
/// classification.
pub fn classify(facts: &HardwareFacts) -> Classification {
    let breakdown = ScoreBreakdown {
        memory: memory_score(facts.total_memory_gb),
        cpu: cpu_score(facts.cpu_cores),
        density: density_score(facts.pixel_density),
        screen: screen_score(facts.screen_size_inches, facts.is_tablet),
        os: os_score(facts.platform, &facts.os_version),
    };
    let score = breakdown.total();
    debug_assert!(score <= MAX_SCORE);

    Classification {
        score,
        spec: DeviceSpec::from_score(score),
        breakdown,
    }
}

/// RAM component (max 35).
pub fn memory_score(total_memory_gb: f64) -> u8 {
    if total_memory_gb >= 12.0 {
        35
    } else if total_memory_gb >= 8.0 {
        30
    } else if total_memory_gb >= 6.0 {
        23
    } else if total_memory_gb >= 4.0 {
        16
    } else if total_memory_gb >= 3.0 {
        10
    } else if total_memory_gb >= 2.0 {
        5
    } else {
        0
    }
}

/// CPU component (max 25). Even a single-core device earns the floor of 3.
pub fn cpu_score(cpu_cores: u32) -> u8 {
    match cpu_cores {
        8.. => 25,
        6..=7 => 18,
        4..=5 => 10,
        _ => 3,
    }
}

/// Pixel density half of the display component (max 13).
pub fn density_score(pixel_density: f64) -> u8 {
    if pixel_density >= 3.0 {
        13
    } else if pixel_density >= 2.0 {
        8
    } else {
        4
    }
}

/// Screen size half of the display component (max 12).
///
/// Tablets earn the top band regardless of their reported diagonal.
pub fn screen_score(screen_size_inches: f64, is_tablet: bool) -> u8 {
    if screen_size_inches >= 6.5 || is_tablet {
        12
    } else if screen_size_inches >= 6.0 {
        8
    } else {
        4
    }
}

/// OS version component (max 15).
///
/// Android versions are compared by their leading integer, iOS versions by
/// their leading decimal. Unparseable versions and other platforms score 0.
pub fn os_score(platform: Platform, os_version: &str) -> u8 {
    match platform {
        Platform::Android => match parse_leading_int(os_version) {
            Some(v) if v >= 14 => 15,
            Some(v) if v >= 13 => 12,
            Some(v) if v >= 11 => 8,
            Some(v) if v >= 9 => 4,
            _ => 0,
        },
        Platform::Ios => match parse_leading_float(os_version) {
            Some(v) if v >= 17.0 => 15,
            Some(v) if v >= 16.0 => 12,
            Some(v) if v >= 14.0 => 8,
            Some(v) if v >= 12.0 => 4,
            _ => 0,
        },
        Platform::Other => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn android(mem: f64, cores: u32, screen: f64, density: f64, os: &str) -> HardwareFacts {
        HardwareFacts {
            total_memory_gb: mem,
            cpu_cores: cores,
            screen_size_inches: screen,
            pixel_density: density,
            os_version: os.to_string(),
            is_tablet: false,
            platform: Platform::Android,
        }
    }

    #[test]
    fn test_flagship_android_scores_100() {
        let c = classify(&android(16.0, 8, 6.8, 3.2, "14"));
        assert_eq!(
            c.breakdown,
            ScoreBreakdown {
                memory: 35,
                cpu: 25,
                density: 13,
                screen: 12,
                os: 15,
            }
        );
        assert_eq!(c.score, 100);
        assert_eq!(c.spec, DeviceSpec::High);
    }

    #[test]
    fn test_midrange_android() {
        let c = classify(&android(4.0, 4, 5.5, 2.0, "11"));
        assert_eq!(c.score, 16 + 10 + 8 + 4 + 8);
        assert_eq!(c.score, 46);
        assert_eq!(c.spec, DeviceSpec::Mid);
    }

    #[test]
    fn test_budget_android() {
        let c = classify(&android(1.0, 2, 4.7, 1.5, "8"));
        assert_eq!(c.score, 11);
        assert_eq!(c.spec, DeviceSpec::Low);
    }

    #[test]
    fn test_ios_uses_decimal_ladder() {
        let facts = HardwareFacts {
            platform: Platform::Ios,
            ..android(8.0, 6, 6.0, 2.5, "16.0")
        };
        let c = classify(&facts);
        assert_eq!(c.breakdown.memory, 30);
        assert_eq!(c.breakdown.cpu, 18);
        assert_eq!(c.breakdown.density, 8);
        assert_eq!(c.breakdown.screen, 8);
        assert_eq!(c.breakdown.os, 12);
        assert_eq!(c.score, 76);
        assert_eq!(c.spec, DeviceSpec::High);
    }

    #[test]
    fn test_score_exactly_70_is_high() {
        // 35 + 10 + 13 + 12 + 0
        let facts = HardwareFacts {
            platform: Platform::Other,
            ..android(12.0, 4, 6.5, 3.0, "14")
        };
        let c = classify(&facts);
        assert_eq!(c.score, 70);
        assert_eq!(c.spec, DeviceSpec::High);
    }

    #[test]
    fn test_score_exactly_40_is_mid() {
        // 10 + 18 + 4 + 8 + 0
        let c = classify(&android(3.0, 6, 6.0, 1.0, ""));
        assert_eq!(c.score, 40);
        assert_eq!(c.spec, DeviceSpec::Mid);
    }

    #[test]
    fn test_score_69_is_mid_and_39_is_low() {
        // 35 + 18 + 4 + 12 + 0
        let c = classify(&android(12.0, 6, 6.5, 1.0, ""));
        assert_eq!(c.score, 69);
        assert_eq!(c.spec, DeviceSpec::Mid);

        // 5 + 18 + 4 + 12 + 0
        let c = classify(&android(2.0, 6, 6.5, 1.0, ""));
        assert_eq!(c.score, 39);
        assert_eq!(c.spec, DeviceSpec::Low);
    }

    #[test]
    fn test_empty_version_scores_zero_on_every_platform() {
        for platform in [Platform::Android, Platform::Ios, Platform::Other] {
            assert_eq!(os_score(platform, ""), 0, "{platform}");
        }
    }

    #[test]
    fn test_other_platform_ignores_version() {
        assert_eq!(os_score(Platform::Other, "99"), 0);
    }

    #[test]
    fn test_android_ladder_bands() {
        let cases = [
            ("15", 15),
            ("14", 15),
            ("13", 12),
            ("12", 8),
            ("11", 8),
            ("10", 4),
            ("9", 4),
            ("8.1.0", 0),
            ("-1", 0),
        ];
        for (v, expected) in cases {
            assert_eq!(os_score(Platform::Android, v), expected, "android {v}");
        }
    }

    #[test]
    fn test_ios_ladder_bands() {
        let cases = [
            ("17.2", 15),
            ("17", 15),
            ("16.7.2", 12),
            ("15.8", 8),
            ("14.0", 8),
            ("13.9", 4),
            ("12", 4),
            ("11.4", 0),
        ];
        for (v, expected) in cases {
            assert_eq!(os_score(Platform::Ios, v), expected, "ios {v}");
        }
    }

    #[test]
    fn test_ios_fractional_boundary() {
        // Decimal parsing matters: 16.99 is still below the top band.
        assert_eq!(os_score(Platform::Ios, "16.99"), 12);
    }

    #[test]
    fn test_tablet_earns_top_screen_band() {
        assert_eq!(screen_score(5.0, true), 12);
        assert_eq!(screen_score(5.0, false), 4);
        assert_eq!(screen_score(6.0, false), 8);
        assert_eq!(screen_score(6.5, false), 12);
    }

    #[test]
    fn test_cpu_floor() {
        assert_eq!(cpu_score(0), 3);
        assert_eq!(cpu_score(1), 3);
        assert_eq!(cpu_score(3), 3);
        assert_eq!(cpu_score(4), 10);
        assert_eq!(cpu_score(64), 25);
    }

    #[test]
    fn test_nan_and_negative_inputs_are_defined() {
        let facts = HardwareFacts {
            total_memory_gb: f64::NAN,
            cpu_cores: 0,
            screen_size_inches: -2.0,
            pixel_density: f64::NAN,
            os_version: "not-a-version".into(),
            is_tablet: false,
            platform: Platform::Android,
        };
        let c = classify(&facts);
        assert_eq!(c.score, 11);
        assert_eq!(c.spec, DeviceSpec::Low);
    }

    #[test]
    fn test_infinite_inputs_hit_top_bands() {
        assert_eq!(memory_score(f64::INFINITY), 35);
        assert_eq!(density_score(f64::INFINITY), 13);
        assert_eq!(memory_score(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_deterministic() {
        let facts = android(6.0, 8, 6.1, 2.6, "13");
        let first = classify(&facts);
        for _ in 0..100 {
            assert_eq!(classify(&facts), first);
        }
    }

    #[test]
    fn test_breakdown_display_and_total() {
        let b = ScoreBreakdown {
            memory: 23,
            cpu: 18,
            density: 8,
            screen: 12,
            os: 4,
        };
        assert_eq!(b.display(), 20);
        assert_eq!(b.total(), 65);
    }
}
