// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU core count detection.
//!
//! Tries, in order:
//! 1. `/sys/devices/system/cpu/online`: a range list such as `"0-7"`.
//! 2. Counting `cpu[0-9]+` directories under `/sys/devices/system/cpu`.
//! 3. `std::thread::available_parallelism()`.
//! 4. [`DEFAULT_CPU_CORES`].
//!
//! Core count therefore never fails; the worst case is the default.

use crate::sysfs::read_sysfs_file;
use std::path::Path;
use std::sync::OnceLock;

/// Base sysfs path for CPU information, relative to the system root.
pub(crate) const CPU_BASE: &str = "sys/devices/system/cpu";

/// Core count reported when nothing else is available.
pub const DEFAULT_CPU_CORES: u32 = 4;

static HOST_CORES: OnceLock<u32> = OnceLock::new();

/// Returns the host's core count, detecting it on first use.
///
/// The detected value is cached for the life of the process.
pub fn cpu_core_count_sync() -> u32 {
    *HOST_CORES.get_or_init(|| detect_core_count(&Path::new("/").join(CPU_BASE)))
}

/// Detects the number of online cores below `cpu_base`, falling back
/// through the chain described in the module docs.
pub(crate) fn detect_core_count(cpu_base: &Path) -> u32 {
    if let Some(count) = read_online_cores(cpu_base) {
        return count;
    }
    if let Some(count) = count_cpu_dirs(cpu_base) {
        tracing::debug!("cpu online list unavailable, counted {count} cpu directories");
        return count;
    }
    match std::thread::available_parallelism() {
        Ok(n) => {
            tracing::debug!("cpu sysfs unavailable, using available_parallelism ({n})");
            n.get() as u32
        }
        Err(e) => {
            tracing::warn!("cannot determine cpu cores ({e}), assuming {DEFAULT_CPU_CORES}");
            DEFAULT_CPU_CORES
        }
    }
}

fn read_online_cores(cpu_base: &Path) -> Option<u32> {
    let content = read_sysfs_file(&cpu_base.join("online"), "cpu cores").ok()?;
    parse_cpu_range(&content)
}

fn count_cpu_dirs(cpu_base: &Path) -> Option<u32> {
    let entries = std::fs::read_dir(cpu_base).ok()?;
    let count = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.len() > 3 && name.starts_with("cpu") && name[3..].chars().all(|c| c.is_ascii_digit())
        })
        .count();
    (count > 0).then_some(count as u32)
}

/// Parses a CPU range string like `"0-3"` → 4, `"0-7"` → 8, `"0"` → 1, `"0,2-3"` → 3.
fn parse_cpu_range(s: &str) -> Option<u32> {
    let mut total = 0u32;
    for part in s.split(',') {
        let part = part.trim();
        if let Some((start_s, end_s)) = part.split_once('-') {
            let start: u32 = start_s.trim().parse().ok()?;
            let end: u32 = end_s.trim().parse().ok()?;
            if end < start {
                return None;
            }
            let span = end.checked_sub(start)?.checked_add(1)?;
            total = total.checked_add(span)?;
        } else {
            let _: u32 = part.parse().ok()?;
            total = total.checked_add(1)?;
        }
    }
    (total > 0).then_some(total)
}
