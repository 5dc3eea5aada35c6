// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Screen geometry: pixel dimensions and scale factor.
//!
//! Physical size is derived against the 160 dpi baseline that density
//! independent pixels are defined on: one dp at scale 1.0 is 1/160 inch.

use crate::sysfs::read_sysfs_file;
use crate::ProviderError;
use std::path::Path;

/// Baseline density that a scale factor of 1.0 corresponds to.
pub const BASELINE_DPI: f64 = 160.0;

/// Smallest-width threshold (in dp) at which a device counts as a tablet.
pub const TABLET_MIN_WIDTH_DP: f64 = 600.0;

/// Framebuffer geometry file, relative to the system root.
pub(crate) const FRAMEBUFFER_SIZE_PATH: &str = "sys/class/graphics/fb0/virtual_size";

/// Screen dimensions in physical pixels plus the device scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
    /// Device pixel scale factor (pixels per dp).
    pub scale: f64,
}

impl DisplayMetrics {
    pub fn new(width_px: u32, height_px: u32, scale: f64) -> Self {
        Self {
            width_px,
            height_px,
            scale,
        }
    }

    /// Screen diagonal in inches.
    ///
    /// Returns 0.0 when the scale is zero, negative, or not finite.
    pub fn diagonal_inches(&self) -> f64 {
        if !self.has_valid_scale() {
            return 0.0;
        }
        let dpi = self.scale * BASELINE_DPI;
        let w = self.width_px as f64 / dpi;
        let h = self.height_px as f64 / dpi;
        w.hypot(h)
    }

    /// The shorter screen side in dp.
    pub fn smallest_width_dp(&self) -> f64 {
        if !self.has_valid_scale() {
            return 0.0;
        }
        self.width_px.min(self.height_px) as f64 / self.scale
    }

    /// Tablet heuristic: the shorter side is at least 600 dp.
    pub fn looks_like_tablet(&self) -> bool {
        self.smallest_width_dp() >= TABLET_MIN_WIDTH_DP
    }

    fn has_valid_scale(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }
}

/// Reads framebuffer geometry (`"W,H"`). The framebuffer does not report a
/// scale factor, so 1.0 is assumed.
pub(crate) fn read_framebuffer(path: &Path) -> Result<DisplayMetrics, ProviderError> {
    let content = read_sysfs_file(path, "display")?;
    let parse_err = || ProviderError::ParseError {
        path: path.display().to_string(),
        detail: format!("expected 'width,height', got '{content}'"),
    };

    let (w, h) = content.split_once(',').ok_or_else(parse_err)?;
    let width_px = w.trim().parse::<u32>().map_err(|_| parse_err())?;
    let height_px = h.trim().parse::<u32>().map_err(|_| parse_err())?;

    Ok(DisplayMetrics::new(width_px, height_px, 1.0))
}
