// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::hint::black_box;

use approach::prelude::*;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const ELEVATION: f64 = 1487.0;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, 14, 16, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

fn eddm() -> Airport {
    let mut arpt = Airport::new("EDDM", Coordinate::new(48.353783, 11.786086), ELEVATION);
    let thr26r = Coordinate::new(48.364147, 11.825108);
    let thr26l = thr26r.destination(180.0, 0.86);

    arpt.runways.extend(Runway::pair(
        ("26R", thr26r),
        ("08L", thr26r.destination(263.0, 2.16)),
    ));
    arpt.runways.extend(Runway::pair(
        ("26L", thr26l),
        ("08R", thr26l.destination(83.0, 2.16)),
    ));
    arpt
}

/// A 25 NM straight-in approach with one state per second.
fn approach(arpt: &Airport) -> Flight {
    let rwy = arpt.runway("26R").expect("runway should exist");
    let inbound = (rwy.bearing + 180.0).rem_euclid(360.0);
    let step = 140.0 / 3600.0;
    let n = (25.0 / step) as i64;

    let states = (0..=n)
        .map(|i| {
            let d = 25.0 - i as f64 * step;
            let pos = rwy.threshold.destination(inbound, d);

            StateVector::new(t0() + TimeDelta::seconds(i), pos.latitude, pos.longitude)
                .with_altitude(ELEVATION + 318.0 * d)
                .with_groundspeed(140.0)
        })
        .collect();

    Flight::new(states).with_callsign("DLH2YK")
}

/// Benchmark the detection on a single approach
fn bench_detection(c: &mut Criterion) {
    let arpt = eddm();
    let flight = approach(&arpt);
    let detector = GeometricDetector::default();

    let mut group = c.benchmark_group("detection");
    group.throughput(Throughput::Elements(flight.len() as u64));

    group.bench_function("ils", |b| {
        b.iter(|| detector.aligned_on_ils(black_box(&flight), &arpt))
    });

    group.bench_function("go-around", |b| {
        b.iter(|| detector.go_arounds(black_box(&flight), &arpt))
    });

    group.finish();
}

/// Benchmark the filters of an arrival pipeline
fn bench_filters(c: &mut Criterion) {
    let mut builder = NavigationDataBuilder::new();
    builder.add_airport(eddm());
    let nd = builder.build();

    let detector = GeometricDetector::default();
    let flight = approach(&eddm()).with_runway("26R");

    c.bench_function("crop after threshold", |b| {
        b.iter(|| crop_after_threshold(black_box(flight.clone()), "EDDM", &nd, 3000.0))
    });

    c.bench_function("pipeline", |b| {
        let pipeline = Pipeline::new()
            .stage("landing", |f| has_landing_at(f, "EDDM", &nd, &detector))
            .stage("go-around", |f| remove_go_around(f, "EDDM", &nd, &detector))
            .stage("threshold", |f| crop_after_threshold(f, "EDDM", &nd, 3000.0));

        b.iter(|| pipeline.run(black_box(flight.clone())))
    });
}

criterion_group!(benches, bench_detection, bench_filters);
criterion_main!(benches);
