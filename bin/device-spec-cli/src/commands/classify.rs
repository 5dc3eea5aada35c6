// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `device-spec classify`: score facts supplied as flags, without reading
//! the system.

use super::detect::print_breakdown;
use spec_classifier::{classify, HardwareFacts, Platform};

#[derive(clap::Args, Debug)]
pub struct FactArgs {
    /// Total memory in GB.
    #[arg(long)]
    pub memory_gb: f64,

    /// Number of CPU cores.
    #[arg(long)]
    pub cores: u32,

    /// Screen diagonal in inches.
    #[arg(long)]
    pub screen: f64,

    /// Pixel density scale factor.
    #[arg(long, default_value_t = 1.0)]
    pub density: f64,

    /// OS version string (e.g. "14", "17.2").
    #[arg(long, default_value = "")]
    pub os: String,

    /// Treat the device as a tablet.
    #[arg(long)]
    pub tablet: bool,

    /// Platform: android, ios, other.
    #[arg(long, default_value = "other")]
    pub platform: Platform,
}

impl FactArgs {
    pub fn to_facts(&self) -> HardwareFacts {
        HardwareFacts {
            total_memory_gb: self.memory_gb,
            cpu_cores: self.cores,
            screen_size_inches: self.screen,
            pixel_density: self.density,
            os_version: self.os.clone(),
            is_tablet: self.tablet,
            platform: self.platform,
        }
    }
}

pub fn execute(args: FactArgs) -> anyhow::Result<()> {
    let facts = args.to_facts();
    tracing::debug!(?facts, "classifying supplied facts");

    let result = classify(&facts);
    print_breakdown(&result.breakdown);
    println!("  Category:       {}", result.spec.as_str().to_uppercase());
    Ok(())
}
