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

use chrono::TimeDelta;
use log::trace;

use super::{angle_diff, runs, Segment};
use crate::flight::{Flight, StateVector};
use crate::geom::Coordinate;

/// States farther away from the navpoint are never considered aligned.
const MAX_DISTANCE_NM: f64 = 500.0;

/// Parameters to detect a flight heading straight to a navpoint.
#[derive(Clone, PartialEq, Debug)]
pub struct NavpointAlignment {
    /// Maximum angle in degrees between the track and the bearing to the
    /// navpoint.
    pub angle_precision: f64,
    /// Aligned states less apart than this are merged into one alignment.
    pub time_precision: TimeDelta,
    /// Minimum duration of an alignment.
    pub min_time: TimeDelta,
    /// The alignment must come closer to the navpoint than this distance in NM.
    pub min_distance: f64,
}

impl Default for NavpointAlignment {
    fn default() -> Self {
        Self {
            angle_precision: 1.0,
            time_precision: TimeDelta::minutes(2),
            min_time: TimeDelta::seconds(30),
            min_distance: 10.0,
        }
    }
}

impl NavpointAlignment {
    pub fn with_angle_precision(mut self, angle_precision: f64) -> Self {
        self.angle_precision = angle_precision;
        self
    }

    pub fn with_time_precision(mut self, time_precision: TimeDelta) -> Self {
        self.time_precision = time_precision;
        self
    }

    pub fn with_min_time(mut self, min_time: TimeDelta) -> Self {
        self.min_time = min_time;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn segments(&self, flight: &Flight, navpoint: &Coordinate) -> Vec<Segment> {
        let aligned: Vec<(&StateVector, f64)> = flight
            .states()
            .iter()
            .zip(flight.tracks())
            .filter_map(|(s, track)| {
                let track = track?;
                let dist = s.coordinate().dist(navpoint);
                let bearing = s.coordinate().bearing(navpoint);

                (dist < MAX_DISTANCE_NM
                    && angle_diff(track, bearing).abs() < self.angle_precision)
                    .then_some((s, dist))
            })
            .collect();

        let segments: Vec<Segment> = runs(aligned.iter().map(|(s, _)| *s), self.time_precision)
            .into_iter()
            .filter(|(first, last)| last.timestamp - first.timestamp >= self.min_time)
            .filter(|(first, last)| {
                aligned
                    .iter()
                    .filter(|(s, _)| first.timestamp <= s.timestamp && s.timestamp <= last.timestamp)
                    .any(|(_, dist)| *dist < self.min_distance)
            })
            .map(|(first, last)| Segment {
                start: first.timestamp,
                stop: last.timestamp,
                runway: None,
            })
            .collect();

        trace!(
            "{} aligned {} time(s) on navpoint {}",
            flight.label(),
            segments.len(),
            navpoint
        );

        segments
    }
}
