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

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// No airport with this ICAO ident is in the navigation data.
    UnknownAirport(String),
    /// The airport has no runway with this designator.
    UnknownRunway { airport: String, runway: String },
    /// No waypoint or navaid with this ident is in the navigation data.
    UnknownNavpoint(String),
    /// The flight is not annotated with a landing runway.
    MissingRunway,
    /// No state of the flight is below the altitude in feet.
    NoStateBelow(f64),
    /// The trajectory has no state vectors.
    EmptyTrajectory,
    /// A meteorological source failed to provide observations.
    Source(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAirport(icao) => write!(f, "unknown airport {icao}"),
            Self::UnknownRunway { airport, runway } => {
                write!(f, "airport {airport} has no runway {runway}")
            }
            Self::UnknownNavpoint(ident) => write!(f, "unknown navpoint {ident}"),
            Self::MissingRunway => write!(f, "flight has no landing runway"),
            Self::NoStateBelow(altitude) => {
                write!(f, "flight has no state below {altitude} ft")
            }
            Self::EmptyTrajectory => write!(f, "trajectory is empty"),
            Self::Source(e) => write!(f, "meteorological source failed: {e}"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
