// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # spec-classifier
//!
//! Reduces a handful of hardware facts to a three-tier device category
//! using a fixed, weighted scoring rubric.
//!
//! # Rubric
//!
//! | Component | Max | Input |
//! |---|---|---|
//! | Memory | 35 | total RAM in GiB |
//! | CPU | 25 | core count |
//! | Display | 25 | pixel density (13) + screen size / tablet (12) |
//! | OS version | 15 | platform-specific version string |
//!
//! The total is mapped to a [`DeviceSpec`]: `≥ 70` is high, `≥ 40` is
//! mid, anything lower is low.
//!
//! Classification is pure: no I/O, no allocation beyond the result, and
//! no failure mode. Extreme inputs (zero, negative, NaN) land in the
//! bottom band of their ladder.
//!
//! # Example
//! ```
//! use spec_classifier::{classify, DeviceSpec, HardwareFacts, Platform};
//!
//! let facts = HardwareFacts {
//!     total_memory_gb: 16.0,
//!     cpu_cores: 8,
//!     screen_size_inches: 6.8,
//!     pixel_density: 3.2,
//!     os_version: "14".into(),
//!     is_tablet: false,
//!     platform: Platform::Android,
//! };
//!
//! let result = classify(&facts);
//! assert_eq!(result.score, 100);
//! assert_eq!(result.spec, DeviceSpec::High);
//! ```

mod category;
mod facts;
mod score;
pub mod version;

pub use category::{DeviceSpec, ParseSpecError};
pub use facts::{HardwareFacts, ParsePlatformError, Platform};
pub use score::{
    classify, cpu_score, density_score, memory_score, os_score, screen_score, Classification,
    ScoreBreakdown, MAX_SCORE,
};
