// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `device-spec watch`: observe a watcher from mount to its final state.

use device_spec::{DetectorConfig, DeviceSpecState, DeviceSpecWatcher};

pub async fn execute(config: &DetectorConfig) -> anyhow::Result<()> {
    let watcher = DeviceSpecWatcher::spawn(config.create_provider());
    let mut rx = watcher.subscribe();

    print_state(&rx.borrow_and_update());
    while rx.borrow().is_loading {
        if rx.changed().await.is_err() {
            break;
        }
        print_state(&rx.borrow_and_update());
    }

    watcher.teardown().await;
    Ok(())
}

fn print_state(state: &DeviceSpecState) {
    if state.is_loading {
        println!("loading...");
        return;
    }
    let spec = state.spec.map(|s| s.to_string()).unwrap_or_else(|| "-".into());
    match (&state.details, &state.error) {
        (Some(d), None) => println!(
            "spec={spec} memory={:.2}GB cores={} screen={:.2}in density={} os='{}' tablet={}",
            d.total_memory, d.cpu_cores, d.screen_size, d.pixel_density, d.os_version, d.is_tablet
        ),
        (_, Some(e)) => println!("spec={spec} (fallback) error: {e}"),
        (None, None) => println!("spec={spec}"),
    }
}
