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

//! Detection of flight events.
//!
//! The filters of this crate don't look at the geometry of a trajectory
//! themselves but ask a [`Detector`] whether a flight was aligned on an ILS,
//! on a navpoint or went around. The [`GeometricDetector`] answers these
//! questions purely from the positions of the trajectory relative to the
//! runway thresholds and navpoints.

use chrono::{DateTime, TimeDelta, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flight::{Flight, StateVector};
use crate::geom::Coordinate;
use crate::nd::Airport;

mod go_around;
mod ils;
mod navpoint;

pub use go_around::GoAroundDetection;
pub use ils::IlsAlignment;
pub use navpoint::NavpointAlignment;

/// A time window of a flight in which an event was detected.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    /// The runway the event relates to, if any.
    pub runway: Option<String>,
}

impl Segment {
    pub fn duration(&self) -> TimeDelta {
        self.stop - self.start
    }
}

/// Detects events within a flight.
pub trait Detector {
    /// Returns the segments in which the flight is aligned on the ILS of any
    /// runway of the airport, ordered by their start.
    fn aligned_on_ils(&self, flight: &Flight, airport: &Airport) -> Vec<Segment>;

    /// Returns the segments in which the flight is heading to the navpoint.
    fn aligned_on_navpoint(
        &self,
        flight: &Flight,
        navpoint: &Coordinate,
        params: &NavpointAlignment,
    ) -> Vec<Segment>;

    /// Returns the go-arounds of the flight at the airport.
    fn go_arounds(&self, flight: &Flight, airport: &Airport) -> Vec<Segment>;

    fn has_go_around(&self, flight: &Flight, airport: &Airport) -> bool {
        !self.go_arounds(flight, airport).is_empty()
    }
}

/// Detects events from the trajectory's geometry on the WGS84 ellipsoid.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GeometricDetector {
    pub ils: IlsAlignment,
    pub go_around: GoAroundDetection,
}

impl GeometricDetector {
    pub fn new(ils: IlsAlignment, go_around: GoAroundDetection) -> Self {
        Self { ils, go_around }
    }
}

impl Detector for GeometricDetector {
    fn aligned_on_ils(&self, flight: &Flight, airport: &Airport) -> Vec<Segment> {
        self.ils.segments(flight, airport)
    }

    fn aligned_on_navpoint(
        &self,
        flight: &Flight,
        navpoint: &Coordinate,
        params: &NavpointAlignment,
    ) -> Vec<Segment> {
        params.segments(flight, navpoint)
    }

    fn go_arounds(&self, flight: &Flight, airport: &Airport) -> Vec<Segment> {
        self.go_around
            .segments(flight, &self.aligned_on_ils(flight, airport))
    }
}

/// Returns the signed difference `a - b` of two angles in degrees, normalized
/// to the range from -180° to less than 180°.
pub(crate) fn angle_diff(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

/// Groups the matching states into runs of states, where two consecutive
/// matching states belong to the same run if they are at most `max_gap`
/// apart. Returns the first and last state of each run.
pub(crate) fn runs<'a, I>(matches: I, max_gap: TimeDelta) -> Vec<(&'a StateVector, &'a StateVector)>
where
    I: IntoIterator<Item = &'a StateVector>,
{
    let mut runs: Vec<(&StateVector, &StateVector)> = Vec::new();

    for state in matches {
        let extends_run = runs
            .last()
            .is_some_and(|(_, last)| state.timestamp - last.timestamp <= max_gap);

        if !extends_run {
            runs.push((state, state));
        } else if let Some(run) = runs.last_mut() {
            run.1 = state;
        }
    }

    runs
}
