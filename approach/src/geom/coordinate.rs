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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Bearing, Destination, Distance, Geodesic};

use crate::constants::NAUTICAL_MILE_IN_METER;

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the true bearing in degrees from this point to the `other`.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid. The bearing is in the
    /// range from 0° to less than 360°.
    pub fn bearing(&self, other: &Coordinate) -> f64 {
        Geodesic
            .bearing((*self).into(), (*other).into())
            .rem_euclid(360.0)
    }

    /// Returns the distance in nautical miles from this point to the `other`.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid.
    pub fn dist(&self, other: &Coordinate) -> f64 {
        Geodesic.distance((*self).into(), (*other).into()) / NAUTICAL_MILE_IN_METER
    }

    /// Returns the point reached when travelling `dist` NM from this point
    /// along the initial true `bearing` in degrees.
    pub fn destination(&self, bearing: f64, dist: f64) -> Coordinate {
        Geodesic
            .destination((*self).into(), bearing, dist * NAUTICAL_MILE_IN_METER)
            .into()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}
