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

use chrono::{DateTime, Utc};
use log::debug;

use super::Segment;
use crate::flight::Flight;

/// Parameters to detect a go-around.
///
/// A go-around is an alignment on an ILS followed by a climb and another
/// alignment on an ILS of the same airport.
#[derive(Clone, PartialEq, Debug)]
pub struct GoAroundDetection {
    /// Minimum climb in feet above the lowest altitude of the approach.
    pub min_climb: f64,
}

impl Default for GoAroundDetection {
    fn default() -> Self {
        Self { min_climb: 400.0 }
    }
}

impl GoAroundDetection {
    pub fn with_min_climb(mut self, min_climb: f64) -> Self {
        self.min_climb = min_climb;
        self
    }

    /// Returns the go-arounds given the ILS alignments of the flight.
    ///
    /// Each go-around spans from the start of the aborted approach to the
    /// end of the next one.
    pub fn segments(&self, flight: &Flight, attempts: &[Segment]) -> Vec<Segment> {
        let mut go_arounds = Vec::new();
        let mut attempt = attempts.first();

        while let Some(first) = attempt {
            let Some(climb) = self.climb_after(flight, first.start) else {
                break;
            };

            attempt = attempts.iter().find(|next| next.start > climb);

            if let Some(next) = attempt {
                debug!(
                    "{} went around at {} and approached again at {}",
                    flight.label(),
                    climb,
                    next.start
                );

                go_arounds.push(Segment {
                    start: first.start,
                    stop: next.stop,
                    runway: first.runway.clone(),
                });
            }
        }

        go_arounds
    }

    /// Returns when the flight climbed `min_climb` above the lowest altitude
    /// reached after the timestamp.
    fn climb_after(&self, flight: &Flight, ts: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut lowest = f64::INFINITY;

        flight
            .states()
            .iter()
            .filter(|s| s.timestamp > ts)
            .find_map(|s| {
                let alt = s.altitude?;
                lowest = lowest.min(alt);
                (alt - lowest >= self.min_climb).then_some(s.timestamp)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::IlsAlignment;
    use crate::testing::*;

    #[test]
    fn detects_go_around() {
        let eddm = eddm();
        let flight = go_around_flight(&eddm);
        let attempts = IlsAlignment::default().segments(&flight, &eddm);

        assert_eq!(attempts.len(), 2);

        let go_arounds = GoAroundDetection::default().segments(&flight, &attempts);

        assert_eq!(go_arounds.len(), 1);
        assert_eq!(go_arounds[0].start, attempts[0].start);
        assert_eq!(go_arounds[0].stop, attempts[1].stop);
        assert_eq!(go_arounds[0].runway.as_deref(), Some("26R"));
    }

    #[test]
    fn landing_is_no_go_around() {
        let eddm = eddm();
        let flight = Flight::new(approach(&eddm, "26R", 8.0, 0.2, t0()));
        let attempts = IlsAlignment::default().segments(&flight, &eddm);

        assert!(GoAroundDetection::default()
            .segments(&flight, &attempts)
            .is_empty());
    }

    #[test]
    fn shallow_climb_is_no_go_around() {
        let eddm = eddm();
        let flight = go_around_flight(&eddm);
        let attempts = IlsAlignment::default().segments(&flight, &eddm);

        assert!(GoAroundDetection::default()
            .with_min_climb(5000.0)
            .segments(&flight, &attempts)
            .is_empty());
    }
}
