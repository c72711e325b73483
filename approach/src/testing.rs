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

//! Fixtures shared by the unit tests.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::flight::{Flight, StateVector};
use crate::geom::Coordinate;
use crate::nd::{Airport, NavigationData, NavigationDataBuilder, Navpoint, Runway};

/// Distance flown in 10 s at 140 kt.
const STEP_NM: f64 = 140.0 / 360.0;
const GLIDE_FT_PER_NM: f64 = 318.0;

pub(crate) const EDDM_26R: Coordinate = coord!(48.364147, 11.825108);

pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, 14, 16, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub(crate) fn eddm() -> Airport {
    let t08l = EDDM_26R.destination(263.0, 2.16);
    let t26l = EDDM_26R.destination(180.0, 0.86);
    let t08r = t26l.destination(263.0, 2.16);

    let mut eddm = Airport::new("EDDM", coord!(48.353783, 11.786086), 1487.0);
    eddm.runways.extend(Runway::pair(("26R", EDDM_26R), ("08L", t08l)));
    eddm.runways.extend(Runway::pair(("26L", t26l), ("08R", t08r)));
    eddm
}

pub(crate) fn nd() -> NavigationData {
    let mut builder = NavigationDataBuilder::new();
    builder.add_airport(eddm());
    builder.add_navpoint(Navpoint::new("ROKIL", EDDM_26R.destination(83.0, 5.0)));
    builder.build()
}

/// States of a stabilized approach from `from_nm` to `to_nm` before the
/// threshold, one every 10 s.
pub(crate) fn approach(
    airport: &Airport,
    runway: &str,
    from_nm: f64,
    to_nm: f64,
    start: DateTime<Utc>,
) -> Vec<StateVector> {
    let rwy = airport.runway(runway).expect("runway should exist");
    let steps = ((from_nm - to_nm) / STEP_NM).floor() as i64;

    (0..=steps)
        .map(|i| {
            let d = from_nm - i as f64 * STEP_NM;
            let pos = rwy.threshold.destination((rwy.bearing + 180.0).rem_euclid(360.0), d);

            StateVector::new(start + TimeDelta::seconds(10 * i), pos.latitude, pos.longitude)
                .with_altitude(airport.elevation_ft + d * GLIDE_FT_PER_NM)
                .with_track(rwy.bearing)
                .with_groundspeed(140.0)
        })
        .collect()
}

/// States flying straight to the point on the `course`, one every 10 s.
pub(crate) fn straight_in(
    point: Coordinate,
    course: f64,
    from_nm: f64,
    to_nm: f64,
    altitude: f64,
    start: DateTime<Utc>,
) -> Vec<StateVector> {
    let steps = ((from_nm - to_nm) / STEP_NM).floor() as i64;

    (0..=steps)
        .map(|i| {
            let d = from_nm - i as f64 * STEP_NM;
            let pos = point.destination((course + 180.0).rem_euclid(360.0), d);

            StateVector::new(start + TimeDelta::seconds(10 * i), pos.latitude, pos.longitude)
                .with_altitude(altitude)
                .with_track(pos.bearing(&point))
        })
        .collect()
}

/// An approach on 26R followed by the roll-out on the runway.
pub(crate) fn landing(airport: &Airport) -> Flight {
    let mut states = approach(airport, "26R", 8.0, 0.2, t0());
    let touchdown = states.last().map(|s| s.timestamp).unwrap_or_else(t0);

    states.extend([0.15, 0.4, 0.65].iter().enumerate().map(|(i, &x)| {
        let pos = EDDM_26R.destination(263.0, x);
        StateVector::new(
            touchdown + TimeDelta::seconds(10 * (i as i64 + 1)),
            pos.latitude,
            pos.longitude,
        )
        .with_altitude(airport.elevation_ft)
        .with_track(263.0)
    }));

    Flight::new(states).with_callsign("DLH2YK").with_typecode("A20N")
}

/// An aborted approach on 26R, a climb on the runway heading and a second
/// approach 15 minutes later.
pub(crate) fn go_around_flight(airport: &Airport) -> Flight {
    let mut states = approach(airport, "26R", 6.0, 0.5, t0());
    let (aborted, lowest) = states
        .last()
        .map(|s| (s.timestamp, s.altitude.unwrap_or(airport.elevation_ft)))
        .unwrap_or((t0(), airport.elevation_ft));

    states.extend((1..=6).map(|k| {
        let pos = EDDM_26R.destination(263.0, 0.5 * k as f64);
        StateVector::new(
            aborted + TimeDelta::seconds(10 * k),
            pos.latitude,
            pos.longitude,
        )
        .with_altitude(lowest + 300.0 * k as f64)
        .with_track(263.0)
    }));

    states.extend(approach(
        airport,
        "26R",
        8.0,
        0.2,
        t0() + TimeDelta::minutes(15),
    ));

    Flight::new(states).with_callsign("EWG7MA")
}
