// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! One-shot device classification.
//!
//! [`try_get_device_spec`] reports retrieval failures;
//! [`get_device_spec`] never fails and substitutes
//! [`DeviceSpecInfo::fallback`] instead.

use crate::SpecError;
use device_facts::{FactsProvider, RawFacts, DEFAULT_CPU_CORES};
use spec_classifier::{classify, DeviceSpec, ScoreBreakdown};

/// Hardware details reported alongside the category.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceSpecDetails {
    /// Total memory in GiB, rounded to 2 decimals.
    pub total_memory: f64,
    /// Screen diagonal in inches, rounded to 2 decimals.
    pub screen_size: f64,
    pub pixel_density: f64,
    pub os_version: String,
    pub is_tablet: bool,
    pub cpu_cores: u32,
}

impl DeviceSpecDetails {
    /// Details reported when retrieval failed: everything zeroed except a
    /// nominal core count.
    pub fn fallback() -> Self {
        Self {
            total_memory: 0.0,
            screen_size: 0.0,
            pixel_density: 0.0,
            os_version: String::new(),
            is_tablet: false,
            cpu_cores: DEFAULT_CPU_CORES,
        }
    }

    fn from_raw(raw: &RawFacts) -> Self {
        let hw = raw.to_hardware_facts();
        Self {
            total_memory: round2(hw.total_memory_gb),
            screen_size: round2(hw.screen_size_inches),
            pixel_density: hw.pixel_density,
            os_version: hw.os_version,
            is_tablet: hw.is_tablet,
            cpu_cores: hw.cpu_cores,
        }
    }
}

/// Category and details for one device.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceSpecInfo {
    pub spec: DeviceSpec,
    /// Total score; `None` when the fallback was used.
    pub score: Option<u8>,
    /// Per-component scores; `None` when the fallback was used.
    pub breakdown: Option<ScoreBreakdown>,
    pub details: DeviceSpecDetails,
}

impl DeviceSpecInfo {
    /// The neutral result used when hardware facts cannot be read.
    ///
    /// Reports `mid`, which hides genuinely weak hardware behind a
    /// middle-of-the-road answer. Callers that care should use
    /// [`try_get_device_spec`] and handle the error.
    pub fn fallback() -> Self {
        Self {
            spec: DeviceSpec::Mid,
            score: None,
            breakdown: None,
            details: DeviceSpecDetails::fallback(),
        }
    }

    /// Returns `true` if this is the fallback result.
    pub fn is_fallback(&self) -> bool {
        self.score.is_none()
    }

    /// Classifies already-collected facts.
    pub fn from_raw(raw: &RawFacts) -> Self {
        // Scoring runs on unrounded values; only the reported details are rounded.
        let classification = classify(&raw.to_hardware_facts());
        Self {
            spec: classification.spec,
            score: Some(classification.score),
            breakdown: Some(classification.breakdown),
            details: DeviceSpecDetails::from_raw(raw),
        }
    }

    /// One-line description for logs and CLI output.
    pub fn summary(&self) -> String {
        let score = match self.score {
            Some(s) => format!("score {s}/100"),
            None => "fallback".to_string(),
        };
        format!(
            "Device: {} ({score}), {:.2} GB RAM, {} cores, {:.2}\" @ {}x, OS '{}'{}",
            self.spec,
            self.details.total_memory,
            self.details.cpu_cores,
            self.details.screen_size,
            self.details.pixel_density,
            self.details.os_version,
            if self.details.is_tablet { ", tablet" } else { "" },
        )
    }
}

/// Collects facts from `provider` and classifies them.
pub async fn try_get_device_spec(provider: &dyn FactsProvider) -> Result<DeviceSpecInfo, SpecError> {
    let raw = provider.collect().await?;
    let info = DeviceSpecInfo::from_raw(&raw);
    tracing::info!(
        provider = provider.name(),
        spec = %info.spec,
        score = info.score,
        "device classified"
    );
    Ok(info)
}

/// Like [`try_get_device_spec`], but returns [`DeviceSpecInfo::fallback`]
/// when retrieval fails. Not retried.
pub async fn get_device_spec(provider: &dyn FactsProvider) -> DeviceSpecInfo {
    match try_get_device_spec(provider).await {
        Ok(info) => info,
        Err(e) => {
            tracing::error!("error detecting device spec, defaulting to mid: {e}");
            DeviceSpecInfo::fallback()
        }
    }
}

/// Category only.
pub async fn get_device_spec_simple(provider: &dyn FactsProvider) -> DeviceSpec {
    get_device_spec(provider).await.spec
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
