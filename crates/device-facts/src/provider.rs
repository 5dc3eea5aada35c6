// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`FactsProvider`] trait and the raw facts it yields.

use crate::display::DisplayMetrics;
use crate::memory::bytes_to_gib;
use crate::ProviderError;
use async_trait::async_trait;
use spec_classifier::{HardwareFacts, Platform};

/// Hardware facts as the platform reports them, before unit conversion.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RawFacts {
    pub total_memory_bytes: u64,
    pub cpu_cores: u32,
    pub display: DisplayMetrics,
    pub os_version: String,
    pub is_tablet: bool,
    pub platform: Platform,
}

impl RawFacts {
    /// Converts to classifier input: bytes become GiB and the display
    /// becomes a diagonal plus a density.
    pub fn to_hardware_facts(&self) -> HardwareFacts {
        HardwareFacts {
            total_memory_gb: bytes_to_gib(self.total_memory_bytes),
            cpu_cores: self.cpu_cores,
            screen_size_inches: self.display.diagonal_inches(),
            pixel_density: self.display.scale,
            os_version: self.os_version.clone(),
            is_tablet: self.is_tablet,
            platform: self.platform,
        }
    }
}

/// A source of hardware facts.
///
/// Each fact has its own accessor so a provider can back them with
/// different platform APIs. [`collect`](FactsProvider::collect) awaits
/// every fact exactly once and fails on the first error.
#[async_trait]
pub trait FactsProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Total physical memory in bytes.
    async fn total_memory_bytes(&self) -> Result<u64, ProviderError>;

    /// Number of CPU cores.
    async fn cpu_core_count(&self) -> Result<u32, ProviderError>;

    fn display(&self) -> Result<DisplayMetrics, ProviderError>;

    fn os_version(&self) -> Result<String, ProviderError>;

    fn is_tablet(&self) -> Result<bool, ProviderError>;

    fn platform(&self) -> Platform;

    /// Gathers all facts.
    async fn collect(&self) -> Result<RawFacts, ProviderError> {
        let total_memory_bytes = self.total_memory_bytes().await?;
        let cpu_cores = self.cpu_core_count().await?;
        let display = self.display()?;
        let os_version = self.os_version()?;
        let is_tablet = self.is_tablet()?;
        let platform = self.platform();

        tracing::debug!(
            provider = self.name(),
            total_memory_bytes,
            cpu_cores,
            %platform,
            "collected hardware facts"
        );

        Ok(RawFacts {
            total_memory_bytes,
            cpu_cores,
            display,
            os_version,
            is_tablet,
            platform,
        })
    }
}

/// Serves a fixed set of facts.
///
/// Used for configured devices, for scoring facts supplied on the
/// command line, and in tests.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    facts: RawFacts,
}

impl StaticProvider {
    pub fn new(facts: RawFacts) -> Self {
        Self { facts }
    }

    pub fn facts(&self) -> &RawFacts {
        &self.facts
    }
}

#[async_trait]
impl FactsProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn total_memory_bytes(&self) -> Result<u64, ProviderError> {
        Ok(self.facts.total_memory_bytes)
    }

    async fn cpu_core_count(&self) -> Result<u32, ProviderError> {
        Ok(self.facts.cpu_cores)
    }

    fn display(&self) -> Result<DisplayMetrics, ProviderError> {
        Ok(self.facts.display)
    }

    fn os_version(&self) -> Result<String, ProviderError> {
        Ok(self.facts.os_version.clone())
    }

    fn is_tablet(&self) -> Result<bool, ProviderError> {
        Ok(self.facts.is_tablet)
    }

    fn platform(&self) -> Platform {
        self.facts.platform
    }
}
