// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Total physical memory via `/proc/meminfo`.
//!
//! Only `MemTotal` matters for classification. Memory is the one fact
//! without a sensible default: if it cannot be read, retrieval fails.

use crate::sysfs::read_sysfs_file;
use crate::ProviderError;
use std::path::Path;

/// Path of the kernel memory info file, relative to the system root.
pub(crate) const MEMINFO_PATH: &str = "proc/meminfo";

/// Bytes in one GiB.
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Reads total physical memory in bytes from a meminfo-formatted file.
pub(crate) fn read_total_bytes(path: &Path) -> Result<u64, ProviderError> {
    let content = read_sysfs_file(path, "total memory")?;
    parse_mem_total(&content, path)
}

/// Extracts `MemTotal` (reported in kB) from meminfo content, in bytes.
pub(crate) fn parse_mem_total(content: &str, source_path: &Path) -> Result<u64, ProviderError> {
    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 || parts[0] != "MemTotal:" {
            continue;
        }

        let kb = parts[1]
            .parse::<u64>()
            .map_err(|_| ProviderError::ParseError {
                path: source_path.display().to_string(),
                detail: format!("expected integer kB value, got '{}'", parts[1]),
            })?;
        if kb == 0 {
            return Err(ProviderError::ParseError {
                path: source_path.display().to_string(),
                detail: "MemTotal is zero".to_string(),
            });
        }
        return Ok(kb.saturating_mul(1024));
    }

    Err(ProviderError::ParseError {
        path: source_path.display().to_string(),
        detail: "MemTotal not found".to_string(),
    })
}

/// Converts a byte count to GiB.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}
