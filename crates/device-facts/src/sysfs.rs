// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shared helpers for reading small kernel and system files.

use crate::ProviderError;
use std::path::Path;

/// Reads a sysfs/procfs file and returns its trimmed content.
///
/// A missing file maps to [`ProviderError::NotAvailable`] for `fact`;
/// any other I/O failure is a [`ProviderError::ReadError`].
pub(crate) fn read_sysfs_file(path: &Path, fact: &'static str) -> Result<String, ProviderError> {
    if !path.exists() {
        return Err(ProviderError::NotAvailable {
            fact,
            detail: format!("{} does not exist", path.display()),
        });
    }
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| ProviderError::ReadError {
            path: path.display().to_string(),
            source: e,
        })
}

/// Looks up `key` in a `key=value` file (build.prop, os-release).
///
/// Comments and blank lines are skipped, surrounding quotes are removed
/// from the value, and the last assignment wins.
pub(crate) fn lookup_key_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .filter(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = read_sysfs_file(Path::new("/nonexistent/sysfs/value"), "memory");
        assert!(matches!(
            result,
            Err(ProviderError::NotAvailable { fact: "memory", .. })
        ));
    }

    #[test]
    fn test_trims_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value");
        std::fs::write(&path, "  0-7\n").unwrap();
        assert_eq!(read_sysfs_file(&path, "cpu").unwrap(), "0-7");
    }

    #[test]
    fn test_lookup_key_value() {
        let content = "\
# comment
NAME=\"Ubuntu\"
VERSION_ID=\"22.04\"
ID=ubuntu
";
        assert_eq!(lookup_key_value(content, "VERSION_ID").as_deref(), Some("22.04"));
        assert_eq!(lookup_key_value(content, "ID").as_deref(), Some("ubuntu"));
        assert_eq!(lookup_key_value(content, "MISSING"), None);
    }

    #[test]
    fn test_lookup_last_assignment_wins() {
        let content = "ro.build.version.release=13\nro.build.version.release=14\n";
        assert_eq!(
            lookup_key_value(content, "ro.build.version.release").as_deref(),
            Some("14")
        );
    }
}
