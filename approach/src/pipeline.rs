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

use log::{debug, info};

use crate::flight::Flight;

type Stage<'a> = Box<dyn Fn(Flight) -> Option<Flight> + 'a>;

/// Applies filters to flights in a defined order.
///
/// Each stage either passes a (possibly modified) flight on to the next
/// stage or drops it. A flight that passes all stages is the pipeline's
/// result.
///
/// # Examples
///
/// ```
/// use approach::prelude::*;
///
/// # fn filter(nd: &NavigationData, flight: Flight) -> Option<Flight> {
/// let pipeline = Pipeline::new()
///     .stage("after ROKIL", |f| crop_before_waypoint(f, "ROKIL", nd))
///     .stage("long enough", |f| (f.len() > 10).then_some(f));
///
/// pipeline.run(flight)
/// # }
/// ```
#[derive(Default)]
pub struct Pipeline<'a> {
    stages: Vec<(String, Stage<'a>)>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage to the pipeline.
    pub fn stage<F>(mut self, name: &str, f: F) -> Self
    where
        F: Fn(Flight) -> Option<Flight> + 'a,
    {
        self.stages.push((name.to_string(), Box::new(f)));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the flight through all stages.
    ///
    /// Returns `None` as soon as a stage drops the flight.
    pub fn run(&self, flight: Flight) -> Option<Flight> {
        self.stages.iter().try_fold(flight, |flight, (name, stage)| {
            let label = flight.label().to_string();
            let result = stage(flight);

            if result.is_none() {
                debug!("{label} dropped at stage '{name}'");
            }

            result
        })
    }

    /// Runs all flights through the pipeline and returns those that passed.
    pub fn run_all<I>(&self, flights: I) -> Vec<Flight>
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut total = 0;
        let passed: Vec<Flight> = flights
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|flight| self.run(flight))
            .collect();

        info!("{} of {} flight(s) passed the pipeline", passed.len(), total);

        passed
    }
}
