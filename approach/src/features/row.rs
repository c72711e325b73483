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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;
use crate::error::Result;
use crate::flight::Flight;

/// The summary of an arrival from which its features are derived.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightRecord {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub typecode: Option<String>,
    /// ICAO location indicator of the destination.
    pub airport: String,
}

impl FlightRecord {
    /// Summarizes the flight arriving at the airport.
    ///
    /// Returns `None` for a flight without states.
    pub fn from_flight(flight: &Flight, airport: &str) -> Option<Self> {
        Some(Self {
            start: flight.start()?,
            stop: flight.stop()?,
            typecode: flight.typecode.clone(),
            airport: airport.to_string(),
        })
    }
}

/// All features of one arrival.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureRow {
    pub body_type: Option<BodyType>,
    /// The season in which the flight started.
    pub season: Season,
    /// Whether the flight started during the rush hours of the airport.
    ///
    /// `None` if the rush hours of the airport are unknown.
    pub rush_hour: Option<bool>,
    pub meteo: MeteoFeatures,
}

impl FeatureRow {
    /// Computes the features of the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the METAR source fails.
    pub fn compute<S>(record: &FlightRecord, source: &S) -> Result<Self>
    where
        S: MetarSource + ?Sized,
    {
        Ok(Self {
            body_type: record.typecode.as_deref().and_then(body_type),
            season: season(&record.start),
            rush_hour: RushHours::for_airport(&record.airport)
                .map(|rush_hours| rush_hours.is_rush_hour(&record.start)),
            meteo: meteo_features(source, &record.airport, record.start, record.stop)?,
        })
    }
}
