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
use crate::flight::Flight;
use crate::nd::Airport;

/// Parameters to detect the alignment of a flight on an ILS.
///
/// A state is aligned on a runway if it is below the altitude ceiling, its
/// cross-track deviation from the extended runway centreline is within
/// tolerance and its track points towards the threshold. The deviation is
/// approximated by the distance to the threshold times the angle between the
/// bearing to the threshold and the runway's bearing.
#[derive(Clone, PartialEq, Debug)]
pub struct IlsAlignment {
    /// Maximum cross-track deviation in NM.
    pub tolerance: f64,
    /// Minimum duration of an alignment.
    pub min_duration: TimeDelta,
    /// Altitude ceiling in feet above the airport's elevation.
    pub max_ft_above_airport: f64,
    /// Maximum time between two aligned states of the same alignment.
    pub max_gap: TimeDelta,
}

impl Default for IlsAlignment {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            min_duration: TimeDelta::seconds(40),
            max_ft_above_airport: 5000.0,
            max_gap: TimeDelta::seconds(20),
        }
    }
}

impl IlsAlignment {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_min_duration(mut self, min_duration: TimeDelta) -> Self {
        self.min_duration = min_duration;
        self
    }

    pub fn with_max_ft_above_airport(mut self, max_ft_above_airport: f64) -> Self {
        self.max_ft_above_airport = max_ft_above_airport;
        self
    }

    pub fn with_max_gap(mut self, max_gap: TimeDelta) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Returns the alignments on all runways of the airport by start time.
    pub fn segments(&self, flight: &Flight, airport: &Airport) -> Vec<Segment> {
        let ceiling = airport.elevation_ft + self.max_ft_above_airport;
        let tracks = flight.tracks();

        let mut segments: Vec<Segment> = airport
            .runways
            .iter()
            .flat_map(|rwy| {
                let aligned = flight
                    .states()
                    .iter()
                    .zip(tracks.iter())
                    .filter(|(s, track)| {
                        if !s.altitude.is_some_and(|alt| alt < ceiling) {
                            return false;
                        }

                        let Some(track) = track else {
                            return false;
                        };

                        let bearing = s.coordinate().bearing(&rwy.threshold);
                        let deviation = s.coordinate().dist(&rwy.threshold)
                            * angle_diff(bearing, rwy.bearing).to_radians().abs();

                        deviation < self.tolerance && (bearing - track).to_radians().cos() > 0.0
                    })
                    .map(|(s, _)| s);

                runs(aligned, self.max_gap)
                    .into_iter()
                    .filter(|(first, last)| last.timestamp - first.timestamp >= self.min_duration)
                    .map(|(first, last)| Segment {
                        start: first.timestamp,
                        stop: last.timestamp,
                        runway: Some(rwy.name.clone()),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        segments.sort_by_key(|seg| seg.start);

        trace!(
            "{} aligned {} time(s) on an ILS at {}",
            flight.label(),
            segments.len(),
            airport.icao
        );

        segments
    }
}
