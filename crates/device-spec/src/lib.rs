// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # device-spec
//!
//! Classifies the current device as `low`, `mid` or `high` spec so an
//! application can scale its assets and effects to the hardware.
//!
//! The crate ties a [`FactsProvider`] to the scoring in
//! [`spec_classifier`] and offers two entry points:
//!
//! - [`get_device_spec`]: a one-shot async query. Never fails; if the
//!   hardware facts cannot be read it returns [`DeviceSpecInfo::fallback`]
//!   (`mid`, zeroed details, 4 cores).
//! - [`DeviceSpecWatcher`]: a background detection whose state
//!   (`spec`, `details`, `is_loading`, `error`) is observable through a
//!   `tokio::sync::watch` channel. Retrieval failures are published as
//!   the fallback *plus* the error.
//!
//! # Example
//! ```no_run
//! use device_spec::{get_device_spec, DetectorConfig};
//!
//! # async fn example() {
//! let provider = DetectorConfig::default().create_provider();
//! let info = get_device_spec(provider.as_ref()).await;
//! println!("{}", info.summary());
//! # }
//! ```

mod config;
mod detector;
mod error;
mod watcher;

pub use config::DetectorConfig;
pub use detector::{
    get_device_spec, get_device_spec_simple, try_get_device_spec, DeviceSpecDetails,
    DeviceSpecInfo,
};
pub use error::SpecError;
pub use watcher::{DeviceSpecState, DeviceSpecWatcher};

pub use device_facts::FactsProvider;
pub use spec_classifier::{DeviceSpec, Platform};
