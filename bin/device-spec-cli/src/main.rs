// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # device-spec
//!
//! Command-line interface for device classification.
//!
//! ## Usage
//! ```bash
//! # Classify this machine
//! device-spec detect
//!
//! # Same, as JSON, with display and platform taken from a config file
//! device-spec --config phone.toml detect --json
//!
//! # Score facts without reading the system
//! device-spec classify --memory-gb 8 --cores 6 --screen 6.0 --density 2.5 --os 16.0 --platform ios
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::classify::FactArgs;

#[derive(Parser)]
#[command(
    name = "device-spec",
    about = "Classify device hardware as low, mid or high spec",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read this device's hardware facts and print the full classification.
    Detect {
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print only the category (low, mid or high).
    Simple,

    /// Score hardware facts given on the command line.
    Classify(FactArgs),

    /// Start a watcher and print each published state until detection finishes.
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Detect { json } => commands::detect::execute(&config, json).await,
        Commands::Simple => commands::detect::execute_simple(&config).await,
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Watch => commands::watch::execute(&config).await,
    }
}
