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

use std::collections::HashMap;

use super::*;

/// Navigation data factory, which is used to build [navigation data].
///
/// [navigation data]: super::NavigationData
#[derive(Default)]
pub struct NavigationDataBuilder {
    airports: Vec<Airport>,
    runways: HashMap<String, Vec<Runway>>,
    navpoints: Vec<Navpoint>,
}

impl NavigationDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> NavigationData {
        // add unassigned runways to airports
        for arpt in self.airports.iter_mut() {
            if let Some(mut rwys) = self.runways.remove(&arpt.icao) {
                arpt.runways.append(&mut rwys);
            }
        }

        for icao in self.runways.keys() {
            log::warn!("runways of unknown airport {icao} are dropped");
        }

        NavigationData {
            airports: self.airports,
            navpoints: self.navpoints,
        }
    }

    /// Adds an airport, replacing one with the same ICAO ident.
    pub fn add_airport(&mut self, arpt: Airport) {
        match self.airports.iter_mut().find(|a| a.icao == arpt.icao) {
            Some(existing) => *existing = arpt,
            None => self.airports.push(arpt),
        }
    }

    pub fn add_runway(&mut self, icao: &str, rwy: Runway) {
        match self.airports.iter_mut().find(|a| a.icao == icao) {
            Some(arpt) => arpt.runways.push(rwy),
            // in case we have already a runway but no airport
            None => self
                .runways
                .entry(icao.to_string())
                .or_default()
                .push(rwy),
        }
    }

    pub fn add_navpoint(&mut self, np: Navpoint) {
        self.navpoints.push(np);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_runways_added_before_airport() {
        let mut builder = NavigationDataBuilder::new();
        builder.add_runway("EDDM", Runway::new("26R", coord!(48.364, 11.825), 263.0));
        builder.add_airport(Airport::new("EDDM", coord!(48.353783, 11.786086), 1487.0));
        builder.add_runway("EDDM", Runway::new("08L", coord!(48.368, 11.768), 83.0));
        builder.add_runway("EDDF", Runway::new("25L", coord!(50.03, 8.58), 249.0));

        let nd = builder.build();
        let eddm = nd.airport("EDDM").expect("EDDM should be added");

        assert_eq!(eddm.runways.len(), 2);
        assert!(eddm.runway("26R").is_some());
        assert!(eddm.runway("08L").is_some());
        assert!(nd.airport("EDDF").is_none());
    }
}
