// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for hardware fact retrieval.

/// Errors that can occur when reading hardware facts.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Failed to read a sysfs or procfs file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a value from a system file.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },

    /// The source for a fact does not exist on this device.
    #[error("{fact} is not available: {detail}")]
    NotAvailable { fact: &'static str, detail: String },
}
