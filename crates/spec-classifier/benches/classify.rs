// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the scoring ladders.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spec_classifier::{classify, version, HardwareFacts, Platform};

fn bench_classify(c: &mut Criterion) {
    let android = HardwareFacts {
        total_memory_gb: 7.6,
        cpu_cores: 8,
        screen_size_inches: 6.4,
        pixel_density: 2.75,
        os_version: "13".into(),
        is_tablet: false,
        platform: Platform::Android,
    };
    let ios = HardwareFacts {
        os_version: "17.2.1".into(),
        platform: Platform::Ios,
        ..android.clone()
    };

    c.bench_function("classify_android", |b| b.iter(|| classify(black_box(&android))));
    c.bench_function("classify_ios", |b| b.iter(|| classify(black_box(&ios))));
}

fn bench_version_parse(c: &mut Criterion) {
    c.bench_function("parse_leading_float", |b| {
        b.iter(|| version::parse_leading_float(black_box("17.2.1")))
    });
}

criterion_group!(benches, bench_classify, bench_version_parse);
criterion_main!(benches);
