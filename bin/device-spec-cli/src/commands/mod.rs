// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

pub mod classify;
pub mod detect;
pub mod watch;

use device_spec::DetectorConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DetectorConfig> {
    match path {
        Some(path) => {
            let config = DetectorConfig::from_file(path)?;
            tracing::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(DetectorConfig::default()),
    }
}

/// Creates a visual score bar (0-100 scale).
pub(crate) fn score_bar(score: u8, max: u8) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((score as f64 / max as f64) * 20.0).round() as usize
    };
    let filled = filled.min(20);
    let empty = 20 - filled;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0, 100), format!("[{}]", ".".repeat(20)));
        assert_eq!(score_bar(100, 100), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(35, 35), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(50, 100), format!("[{}{}]", "#".repeat(10), ".".repeat(10)));
        assert_eq!(score_bar(3, 0), format!("[{}]", ".".repeat(20)));
    }

    #[test]
    fn test_load_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DetectorConfig::default());
    }
}
