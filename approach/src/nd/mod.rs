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

//! Navigation Data.
//!
//! The reference data needed to relate a trajectory to the ground: airports
//! with their runway thresholds, and navpoints (waypoints and navaids) by
//! ident.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

mod airport;
mod builder;
mod navpoint;
mod runway;

pub use airport::Airport;
pub use builder::NavigationDataBuilder;
pub use navpoint::Navpoint;
pub use runway::Runway;

/// A named point on the ground.
pub trait Fix {
    fn ident(&self) -> &str;
    fn coordinate(&self) -> Coordinate;
}

#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationData {
    airports: Vec<Airport>,
    navpoints: Vec<Navpoint>,
}

impl NavigationData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airports(&self) -> &[Airport] {
        self.airports.as_slice()
    }

    pub fn navpoints(&self) -> &[Navpoint] {
        self.navpoints.as_slice()
    }

    /// Returns the airport with the ICAO location indicator.
    pub fn airport(&self, icao: &str) -> Option<&Airport> {
        self.airports.iter().find(|arpt| arpt.icao == icao)
    }

    /// Returns the waypoint or navaid with the ident.
    pub fn navpoint(&self, ident: &str) -> Option<&Navpoint> {
        self.navpoints.iter().find(|np| np.ident == ident)
    }

    /// Searches for a fix by identifier.
    ///
    /// Searches navpoints first, then airports. Returns the first match found.
    /// The search is case-sensitive and does not perform partial matching.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approach::nd::{Fix, NavigationData};
    /// # fn search(nd: &NavigationData) {
    /// match nd.find("BETOS") {
    ///     Some(fix) => println!("{} at {}", fix.ident(), fix.coordinate()),
    ///     None => println!("BETOS not found"),
    /// }
    /// # }
    /// ```
    pub fn find(&self, ident: &str) -> Option<&dyn Fix> {
        self.navpoint(ident)
            .map(|np| np as &dyn Fix)
            .or_else(|| self.airport(ident).map(|arpt| arpt as &dyn Fix))
    }
}
