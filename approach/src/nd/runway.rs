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

use crate::geom::Coordinate;

/// A landing direction of a runway.
///
/// Each physical runway has two of these, one per threshold.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    /// The runway designator, e.g. `26R`.
    pub name: String,
    /// Position of the landing threshold.
    pub threshold: Coordinate,
    /// True bearing of the landing direction in degrees.
    pub bearing: f64,
}

impl Runway {
    pub fn new(name: &str, threshold: Coordinate, bearing: f64) -> Self {
        Self {
            name: name.to_string(),
            threshold,
            bearing,
        }
    }

    /// Creates both landing directions of the runway between two thresholds.
    ///
    /// The bearings are calculated from the threshold positions.
    pub fn pair(
        (name, threshold): (&str, Coordinate),
        (opposite_name, opposite_threshold): (&str, Coordinate),
    ) -> [Self; 2] {
        [
            Self::new(name, threshold, threshold.bearing(&opposite_threshold)),
            Self::new(
                opposite_name,
                opposite_threshold,
                opposite_threshold.bearing(&threshold),
            ),
        ]
    }
}
