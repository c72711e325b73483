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

//! Flight trajectories.
//!
//! A [`Flight`] is a time ordered sequence of [`StateVector`]s. The cropping
//! methods follow the convention of a pipeline: whenever the result would not
//! contain any state, `None` is returned instead of an empty flight.

use chrono::{DateTime, TimeDelta, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

mod state;

pub use state::StateVector;

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FlightData"))]
pub struct Flight {
    pub callsign: Option<String>,
    pub icao24: Option<String>,
    pub typecode: Option<String>,
    /// The runway on which the flight landed, if known.
    pub runway: Option<String>,
    states: Vec<StateVector>,
}

/// A flight as it is serialized, with its states in any order.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct FlightData {
    callsign: Option<String>,
    icao24: Option<String>,
    typecode: Option<String>,
    runway: Option<String>,
    #[serde(default)]
    states: Vec<StateVector>,
}

#[cfg(feature = "serde")]
impl From<FlightData> for Flight {
    fn from(data: FlightData) -> Self {
        Self {
            callsign: data.callsign,
            icao24: data.icao24,
            typecode: data.typecode,
            runway: data.runway,
            ..Self::new(data.states)
        }
    }
}

impl Flight {
    /// Creates a flight from its states, which are sorted by timestamp.
    pub fn new(mut states: Vec<StateVector>) -> Self {
        states.sort_by_key(|s| s.timestamp);
        Self {
            states,
            ..Self::default()
        }
    }

    pub fn with_callsign(mut self, callsign: &str) -> Self {
        self.callsign = Some(callsign.to_string());
        self
    }

    pub fn with_icao24(mut self, icao24: &str) -> Self {
        self.icao24 = Some(icao24.to_string());
        self
    }

    pub fn with_typecode(mut self, typecode: &str) -> Self {
        self.typecode = Some(typecode.to_string());
        self
    }

    /// Annotates the flight with the runway it landed on.
    pub fn with_runway(mut self, runway: &str) -> Self {
        self.runway = Some(runway.to_string());
        self
    }

    pub fn states(&self) -> &[StateVector] {
        self.states.as_slice()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.states.first().map(|s| s.timestamp)
    }

    pub fn stop(&self) -> Option<DateTime<Utc>> {
        self.states.last().map(|s| s.timestamp)
    }

    pub fn duration(&self) -> TimeDelta {
        match (self.start(), self.stop()) {
            (Some(start), Some(stop)) => stop - start,
            _ => TimeDelta::zero(),
        }
    }

    /// Returns a label for log messages.
    pub fn label(&self) -> &str {
        self.callsign
            .as_deref()
            .or(self.icao24.as_deref())
            .unwrap_or("unknown")
    }

    /// Returns the part of the flight strictly before the timestamp.
    pub fn before(&self, ts: DateTime<Utc>) -> Option<Flight> {
        self.filter(|s| s.timestamp < ts)
    }

    /// Returns the part of the flight strictly after the timestamp.
    pub fn after(&self, ts: DateTime<Utc>) -> Option<Flight> {
        self.filter(|s| s.timestamp > ts)
    }

    /// Returns the part of the flight between both timestamps, inclusive.
    pub fn between(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Option<Flight> {
        self.filter(|s| start <= s.timestamp && s.timestamp <= stop)
    }

    /// Returns the states with a known altitude strictly below `altitude` ft.
    pub fn below(&self, altitude: f64) -> Option<Flight> {
        self.filter(|s| s.altitude.is_some_and(|alt| alt < altitude))
    }

    /// Returns the flight with only the states matching the predicate.
    pub fn filter<P>(&self, predicate: P) -> Option<Flight>
    where
        P: Fn(&StateVector) -> bool,
    {
        let states: Vec<StateVector> = self
            .states
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect();

        if states.is_empty() {
            None
        } else {
            Some(Flight {
                callsign: self.callsign.clone(),
                icao24: self.icao24.clone(),
                typecode: self.typecode.clone(),
                runway: self.runway.clone(),
                states,
            })
        }
    }

    /// Returns the distance in NM of each state to the point.
    pub fn distances(&self, point: &Coordinate) -> Vec<f64> {
        self.states
            .iter()
            .map(|s| s.coordinate().dist(point))
            .collect()
    }

    /// Returns the state closest to the point.
    ///
    /// If several states are equally close, the earliest one is returned.
    pub fn closest_to(&self, point: &Coordinate) -> Option<&StateVector> {
        self.states
            .iter()
            .zip(self.distances(point))
            .fold(None, |closest: Option<(&StateVector, f64)>, (s, d)| {
                match closest {
                    Some((_, min)) if min <= d => closest,
                    _ => Some((s, d)),
                }
            })
            .map(|(s, _)| s)
    }

    /// Returns the true track in degrees of each state.
    ///
    /// States without a reported track get the bearing towards the next
    /// state, or from the previous one if there is no next state or it is at
    /// the same position. A flight with a
    /// single state has no track at all.
    pub fn tracks(&self) -> Vec<Option<f64>> {
        let n = self.states.len();

        (0..n)
            .map(|i| {
                self.states[i].track.or_else(|| {
                    let here = self.states[i].coordinate();
                    let next = self.states.get(i + 1).map(StateVector::coordinate);
                    let prev = i
                        .checked_sub(1)
                        .map(|j| self.states[j].coordinate());

                    // duplicate positions have no bearing
                    match (next, prev) {
                        (Some(next), _) if next != here => Some(here.bearing(&next)),
                        (_, Some(prev)) if prev != here => Some(prev.bearing(&here)),
                        _ => None,
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn ts(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 7, 14, 16, minute, second)
            .single()
            .expect("timestamp should be valid")
    }

    fn flight() -> Flight {
        // flying west along the parallel, descending
        Flight::new(vec![
            StateVector::new(ts(0, 20), 48.0, 11.8).with_altitude(2000.0),
            StateVector::new(ts(0, 0), 48.0, 11.9).with_altitude(3000.0),
            StateVector::new(ts(0, 40), 48.0, 11.7).with_altitude(1000.0),
            StateVector::new(ts(1, 0), 48.0, 11.6),
        ])
        .with_callsign("DLH2YK")
    }

    #[test]
    fn sorts_states_by_timestamp() {
        let f = flight();
        assert_eq!(f.start(), Some(ts(0, 0)));
        assert_eq!(f.stop(), Some(ts(1, 0)));
        assert_eq!(f.duration(), TimeDelta::seconds(60));
        assert_eq!(f.states()[1].longitude, 11.8);
    }

    #[test]
    fn crops_strictly() {
        let f = flight();

        let before = f.before(ts(0, 20)).expect("one state should remain");
        assert_eq!(before.len(), 1);
        assert_eq!(before.callsign.as_deref(), Some("DLH2YK"));

        let after = f.after(ts(0, 20)).expect("two states should remain");
        assert_eq!(after.len(), 2);

        assert!(f.before(ts(0, 0)).is_none());
        assert!(f.after(ts(1, 0)).is_none());
        assert_eq!(f.between(ts(0, 20), ts(0, 40)).map(|f| f.len()), Some(2));
    }

    #[test]
    fn below_ignores_unknown_altitude() {
        let f = flight();
        assert_eq!(f.below(3000.0).map(|f| f.len()), Some(2));
        assert!(f.below(1000.0).is_none());
    }

    #[test]
    fn closest_state() {
        let f = flight();
        let closest = f
            .closest_to(&coord!(48.01, 11.69))
            .expect("flight should not be empty");
        assert_eq!(closest.timestamp, ts(0, 40));
        assert!(Flight::default().closest_to(&coord!(48.0, 11.0)).is_none());
    }

    #[test]
    fn duplicate_position_takes_track_from_previous_state() {
        let f = Flight::new(vec![
            StateVector::new(ts(0, 0), 48.0, 11.9),
            StateVector::new(ts(0, 10), 48.0, 11.8),
            StateVector::new(ts(0, 15), 48.0, 11.8),
        ]);

        let tracks = f.tracks();
        let second = tracks[1].expect("track should be derived from the previous state");

        assert!((second - 270.0).abs() < 0.1, "track is {second}");
        // both neighbours of the last state are at the same position
        assert!(tracks[2].is_none());
        assert!(Flight::new(vec![StateVector::new(ts(0, 0), 48.0, 11.9)]).tracks()[0].is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_states_are_sorted() {
        let json = r#"{
            "callsign": "DLH2YK",
            "states": [
                {"timestamp": "2023-07-14T16:01:00Z", "latitude": 48.0, "longitude": 11.7},
                {"timestamp": "2023-07-14T16:00:00Z", "latitude": 48.0, "longitude": 11.9}
            ]
        }"#;

        let f: Flight = serde_json::from_str(json).expect("flight should deserialize");

        assert_eq!(f.start(), Some(ts(0, 0)));
        assert_eq!(f.stop(), Some(ts(1, 0)));
        assert_eq!(f.duration(), TimeDelta::seconds(60));
        assert_eq!(f.callsign.as_deref(), Some("DLH2YK"));

        let round_trip: Flight = serde_json::to_string(&f)
            .and_then(|json| serde_json::from_str(&json))
            .expect("flight should round-trip");
        assert_eq!(round_trip, f);
    }

    #[test]
    fn derives_missing_tracks() {
        let f = Flight::new(vec![
            StateVector::new(ts(0, 0), 48.0, 11.9),
            StateVector::new(ts(0, 10), 48.0, 11.8).with_track(271.0),
            StateVector::new(ts(0, 20), 48.0, 11.7),
        ]);

        let tracks = f.tracks();
        let first = tracks[0].expect("track should be derived");

        // westbound along the parallel
        assert!((first - 270.0).abs() < 0.1, "track is {first}");
        assert_eq!(tracks[1], Some(271.0));
        assert!(tracks[2].is_some());
    }
}
