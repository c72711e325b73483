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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Fix, Runway};
use crate::geom::Coordinate;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    /// ICAO location indicator, e.g. `EDDM`.
    pub icao: String,
    /// Aerodrome reference point.
    pub coordinate: Coordinate,
    /// Field elevation in feet above MSL.
    pub elevation_ft: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub runways: Vec<Runway>,
}

impl Airport {
    pub fn new(icao: &str, coordinate: Coordinate, elevation_ft: f64) -> Self {
        Self {
            icao: icao.to_string(),
            coordinate,
            elevation_ft,
            runways: Vec::new(),
        }
    }

    /// Returns the runway with the designator, e.g. `26R`.
    pub fn runway(&self, name: &str) -> Option<&Runway> {
        self.runways.iter().find(|rwy| rwy.name == name)
    }
}

impl Fix for Airport {
    fn ident(&self) -> &str {
        &self.icao
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
