// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! [`SystemProvider`]: hardware facts from procfs, sysfs and system files.
//!
//! All paths are resolved below a root directory (`/` by default) so the
//! provider can be pointed at a fixture tree.
//!
//! # Graceful Degradation
//! Only total memory is mandatory. Everything else degrades:
//! - **CPU cores**: see [`crate::cpu`]; never fails.
//! - **Display**: override → framebuffer → all-zero metrics.
//! - **OS version**: override → build.prop (Android) → os-release → `""`.
//! - **Tablet**: override → display heuristic.
//! - **Platform**: override → compile target.

use crate::cpu::{cpu_core_count_sync, detect_core_count, CPU_BASE};
use crate::display::{read_framebuffer, DisplayMetrics, FRAMEBUFFER_SIZE_PATH};
use crate::memory::{read_total_bytes, MEMINFO_PATH};
use crate::os::{read_android_release, read_os_release_version, BUILD_PROP_PATH, OS_RELEASE_PATH};
use crate::{FactsProvider, ProviderError};
use async_trait::async_trait;
use spec_classifier::Platform;
use std::path::{Path, PathBuf};

/// Facts that take precedence over anything read from the system.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SystemOverrides {
    pub platform: Option<Platform>,
    pub os_version: Option<String>,
    pub is_tablet: Option<bool>,
    pub display: Option<DisplayMetrics>,
}

/// Reads hardware facts from the running system.
///
/// The procfs/sysfs reads are synchronous and run on the calling task.
#[derive(Debug, Clone)]
pub struct SystemProvider {
    root: PathBuf,
    overrides: SystemOverrides,
}

impl SystemProvider {
    /// Creates a provider rooted at `/` with no overrides.
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/"),
            overrides: SystemOverrides::default(),
        }
    }

    /// Resolves all system paths below `root` instead of `/`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_overrides(mut self, overrides: SystemOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn read_os_version(&self) -> Option<String> {
        if self.platform() == Platform::Android {
            match read_android_release(&self.path(BUILD_PROP_PATH)) {
                Ok(v) => return Some(v),
                Err(e) => tracing::debug!("android release unavailable: {e}"),
            }
        }
        match read_os_release_version(&self.path(OS_RELEASE_PATH)) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!("os-release version unavailable: {e}");
                None
            }
        }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactsProvider for SystemProvider {
    fn name(&self) -> &str {
        "system"
    }

    async fn total_memory_bytes(&self) -> Result<u64, ProviderError> {
        read_total_bytes(&self.path(MEMINFO_PATH))
    }

    async fn cpu_core_count(&self) -> Result<u32, ProviderError> {
        if self.root == Path::new("/") {
            return Ok(cpu_core_count_sync());
        }
        Ok(detect_core_count(&self.path(CPU_BASE)))
    }

    fn display(&self) -> Result<DisplayMetrics, ProviderError> {
        if let Some(display) = self.overrides.display {
            return Ok(display);
        }
        match read_framebuffer(&self.path(FRAMEBUFFER_SIZE_PATH)) {
            Ok(display) => Ok(display),
            Err(e) => {
                tracing::debug!("no display geometry ({e}), reporting an empty display");
                Ok(DisplayMetrics::default())
            }
        }
    }

    fn os_version(&self) -> Result<String, ProviderError> {
        if let Some(v) = &self.overrides.os_version {
            return Ok(v.clone());
        }
        Ok(self.read_os_version().unwrap_or_default())
    }

    fn is_tablet(&self) -> Result<bool, ProviderError> {
        match self.overrides.is_tablet {
            Some(flag) => Ok(flag),
            None => Ok(self.display()?.looks_like_tablet()),
        }
    }

    fn platform(&self) -> Platform {
        self.overrides.platform.unwrap_or_else(Platform::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a fixture system root with the given relative files.
    fn fixture(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_reads_android_fixture() {
        let root = fixture(&[
            ("proc/meminfo", "MemTotal:       11728172 kB\n"),
            ("sys/devices/system/cpu/online", "0-7\n"),
            ("system/build.prop", "ro.build.version.release=13\n"),
            ("sys/class/graphics/fb0/virtual_size", "1440,3120\n"),
        ]);
        let provider = SystemProvider::new()
            .with_root(root.path())
            .with_overrides(SystemOverrides {
                platform: Some(Platform::Android),
                ..Default::default()
            });

        let facts = provider.collect().await.unwrap();
        assert_eq!(facts.total_memory_bytes, 11728172 * 1024);
        assert_eq!(facts.cpu_cores, 8);
        assert_eq!(facts.os_version, "13");
        assert_eq!(facts.display, DisplayMetrics::new(1440, 3120, 1.0));
        // 1440 dp short side at scale 1.0.
        assert!(facts.is_tablet);
        assert_eq!(facts.platform, Platform::Android);
    }

    #[tokio::test]
    async fn test_android_falls_back_to_os_release() {
        let root = fixture(&[
            ("proc/meminfo", "MemTotal: 4000000 kB\n"),
            ("etc/os-release", "VERSION_ID=\"12\"\n"),
        ]);
        let provider = SystemProvider::new()
            .with_root(root.path())
            .with_overrides(SystemOverrides {
                platform: Some(Platform::Android),
                ..Default::default()
            });
        assert_eq!(provider.os_version().unwrap(), "12");
    }

    #[tokio::test]
    async fn test_missing_optional_sources_degrade() {
        let root = fixture(&[("proc/meminfo", "MemTotal: 2000000 kB\n")]);
        let provider = SystemProvider::new().with_root(root.path());

        let facts = provider.collect().await.unwrap();
        assert_eq!(facts.display, DisplayMetrics::default());
        assert_eq!(facts.os_version, "");
        assert!(!facts.is_tablet);
        assert!(facts.cpu_cores >= 1);
    }

    #[tokio::test]
    async fn test_overrides_take_precedence() {
        let root = fixture(&[
            ("proc/meminfo", "MemTotal: 6000000 kB\n"),
            ("etc/os-release", "VERSION_ID=\"22.04\"\n"),
            ("sys/class/graphics/fb0/virtual_size", "800,600\n"),
        ]);
        let display = DisplayMetrics::new(1179, 2556, 3.0);
        let provider = SystemProvider::new()
            .with_root(root.path())
            .with_overrides(SystemOverrides {
                platform: Some(Platform::Ios),
                os_version: Some("17.2".into()),
                is_tablet: Some(false),
                display: Some(display),
            });

        let facts = provider.collect().await.unwrap();
        assert_eq!(facts.platform, Platform::Ios);
        assert_eq!(facts.os_version, "17.2");
        assert_eq!(facts.display, display);
        assert!(!facts.is_tablet);
    }

    #[tokio::test]
    async fn test_missing_meminfo_fails() {
        let root = fixture(&[("etc/os-release", "VERSION_ID=1\n")]);
        let provider = SystemProvider::new().with_root(root.path());
        let err = provider.collect().await.unwrap_err();
        assert!(matches!(err, ProviderError::NotAvailable { fact: "total memory", .. }));
        assert!(err.to_string().contains("meminfo"));
    }

    #[test]
    fn test_default_platform_is_compile_target() {
        assert_eq!(SystemProvider::new().platform(), Platform::current());
    }
}
