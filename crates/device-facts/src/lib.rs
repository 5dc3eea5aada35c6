// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # device-facts
//!
//! Retrieves the hardware facts that device classification runs on:
//! total memory, CPU core count, screen geometry, OS version, tablet flag
//! and platform.
//!
//! # Sources
//! - **Total memory**: `MemTotal` from `/proc/meminfo`.
//! - **CPU cores**: `/sys/devices/system/cpu/online`, with fallbacks down
//!   to a fixed default of 4.
//! - **Display**: configured metrics or the framebuffer geometry.
//! - **OS version**: `/system/build.prop` on Android, `/etc/os-release`
//!   elsewhere.
//!
//! Memory is the only mandatory fact. When `/proc/meminfo` is missing,
//! retrieval fails with a descriptive [`ProviderError::NotAvailable`]
//! the first time it is attempted; there is no partial result.
//!
//! # Example
//! ```no_run
//! use device_facts::{FactsProvider, SystemProvider};
//!
//! # async fn example() -> Result<(), device_facts::ProviderError> {
//! let facts = SystemProvider::new().collect().await?;
//! println!("{} cores, {} bytes", facts.cpu_cores, facts.total_memory_bytes);
//! # Ok(())
//! # }
//! ```

pub mod cpu;
pub mod display;
mod error;
pub mod memory;
mod os;
mod provider;
mod sysfs;
mod system;

pub use cpu::{cpu_core_count_sync, DEFAULT_CPU_CORES};
pub use display::DisplayMetrics;
pub use error::ProviderError;
pub use provider::{FactsProvider, RawFacts, StaticProvider};
pub use system::{SystemOverrides, SystemProvider};

pub use spec_classifier::Platform;
