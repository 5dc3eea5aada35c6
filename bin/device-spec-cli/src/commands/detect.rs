// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `device-spec detect` and `device-spec simple`: classify this device.
//!
//! Retrieval failures do not fail the command: the fallback result is
//! printed and marked as such, with the reason logged.

use super::score_bar;
use device_spec::{get_device_spec, get_device_spec_simple, DetectorConfig, DeviceSpecInfo};
use spec_classifier::ScoreBreakdown;

pub async fn execute(config: &DetectorConfig, json: bool) -> anyhow::Result<()> {
    let provider = config.create_provider();
    let info = get_device_spec(provider.as_ref()).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            device-spec · Device Classification      ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    print_details(&info);

    match &info.breakdown {
        Some(breakdown) => print_breakdown(breakdown),
        None => {
            println!("  Score");
            println!("   Hardware facts could not be read; using the default category.");
            println!("   Run with -v for details.");
            println!();
        }
    }

    println!("  Result");
    println!("   Category:     {}", info.spec.as_str().to_uppercase());
    println!();
    println!("{}", info.summary());

    Ok(())
}

pub async fn execute_simple(config: &DetectorConfig) -> anyhow::Result<()> {
    let provider = config.create_provider();
    println!("{}", get_device_spec_simple(provider.as_ref()).await);
    Ok(())
}

fn print_details(info: &DeviceSpecInfo) {
    let d = &info.details;
    println!("  Hardware");
    println!("   Memory:       {:.2} GB", d.total_memory);
    println!("   CPU cores:    {}", d.cpu_cores);
    println!("   Screen:       {:.2} in", d.screen_size);
    println!("   Density:      {}x", d.pixel_density);
    let os = if d.os_version.is_empty() {
        "(unknown)"
    } else {
        d.os_version.as_str()
    };
    println!("   OS version:   {os}");
    println!("   Tablet:       {}", if d.is_tablet { "yes" } else { "no" });
    println!();
}

/// Prints each scoring component against its maximum.
pub(crate) fn print_breakdown(b: &ScoreBreakdown) {
    println!("  Score");
    let rows = [
        ("Memory", b.memory, 35),
        ("CPU", b.cpu, 25),
        ("Density", b.density, 13),
        ("Screen", b.screen, 12),
        ("OS version", b.os, 15),
    ];
    for (label, score, max) in rows {
        println!(
            "   {:<13} {:>3} / {:<3} {}",
            format!("{label}:"),
            score,
            max,
            score_bar(score, max)
        );
    }
    println!(
        "   {:<13} {:>3} / 100 {}",
        "Total:",
        b.total(),
        score_bar(b.total(), 100)
    );
    println!();
}
