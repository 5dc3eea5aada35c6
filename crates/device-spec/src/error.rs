// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for device classification.

/// Errors surfaced by the detector.
///
/// Scoring itself cannot fail; the only runtime failure is retrieving the
/// hardware facts.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Hardware fact retrieval failed.
    #[error("fact retrieval failed: {0}")]
    Retrieval(#[from] device_facts::ProviderError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
