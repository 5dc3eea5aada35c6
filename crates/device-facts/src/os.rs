// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! OS version strings.
//!
//! Android publishes its release in `ro.build.version.release` inside
//! `/system/build.prop`; other Linux systems use `VERSION_ID` in
//! `/etc/os-release`. The string is returned verbatim: interpreting it is
//! the classifier's job.

use crate::sysfs::{lookup_key_value, read_sysfs_file};
use crate::ProviderError;
use std::path::Path;

/// Android build properties, relative to the system root.
pub(crate) const BUILD_PROP_PATH: &str = "system/build.prop";

/// Linux distribution identification, relative to the system root.
pub(crate) const OS_RELEASE_PATH: &str = "etc/os-release";

const ANDROID_RELEASE_KEY: &str = "ro.build.version.release";
const OS_RELEASE_KEY: &str = "VERSION_ID";

/// Reads the Android release version from a build.prop file.
pub(crate) fn read_android_release(path: &Path) -> Result<String, ProviderError> {
    read_key(path, ANDROID_RELEASE_KEY)
}

/// Reads `VERSION_ID` from an os-release file.
pub(crate) fn read_os_release_version(path: &Path) -> Result<String, ProviderError> {
    read_key(path, OS_RELEASE_KEY)
}

fn read_key(path: &Path, key: &str) -> Result<String, ProviderError> {
    let content = read_sysfs_file(path, "os version")?;
    lookup_key_value(&content, key).ok_or_else(|| ProviderError::ParseError {
        path: path.display().to_string(),
        detail: format!("{key} not found"),
    })
}
