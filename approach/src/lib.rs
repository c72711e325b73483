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

//! Feature engineering and trajectory filtering for arrival flights.
//!
//! The crate is split in two loosely related parts:
//!
//! - [`features`] maps a flight record or a timestamp to a categorical or
//!   numeric value like the [`BodyType`], the [`Season`], an airport's rush
//!   hour flag or averaged METAR observations.
//! - [`filters`] take a [`Flight`] and return it unchanged, cropped or
//!   annotated, or return `None` to drop it from a [`Pipeline`].
//!
//! Detecting an ILS approach, a go-around or the alignment on a navpoint is
//! left to a [`Detector`]. The [`GeometricDetector`] works on the WGS84
//! ellipsoid and needs nothing but the trajectory and the [navigation data].
//!
//! # Examples
//!
//! Keep only flights that landed on an ILS at Munich without a go-around and
//! crop them at the runway threshold:
//!
//! ```
//! use approach::prelude::*;
//!
//! # fn arrivals(nd: &NavigationData, flights: Vec<Flight>) -> Vec<Flight> {
//! let detector = GeometricDetector::default();
//!
//! let pipeline = Pipeline::new()
//!     .stage("landing", |f| has_landing_at(f, "EDDM", nd, &detector))
//!     .stage("go-around", |f| remove_go_around(f, "EDDM", nd, &detector))
//!     .stage("threshold", |f| crop_after_threshold(f, "EDDM", nd, 3000.0));
//!
//! pipeline.run_all(flights)
//! # }
//! ```
//!
//! [navigation data]: nd::NavigationData

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod constants;
mod error;
mod pipeline;

pub mod detect;
pub mod features;
pub mod filters;
pub mod flight;
pub mod geom;
pub mod nd;

#[cfg(feature = "geojson")]
mod geojson;

#[cfg(test)]
mod testing;

pub use detect::{Detector, GeometricDetector};
pub use error::{Error, Result};
pub use features::{BodyType, Season};
pub use flight::{Flight, StateVector};
pub use pipeline::Pipeline;

pub mod prelude {
    pub use crate::detect::{
        Detector, GeometricDetector, GoAroundDetection, IlsAlignment, NavpointAlignment, Segment,
    };
    pub use crate::error::{Error, Result};
    pub use crate::features::{
        body_type, is_rush_hour_eddm, is_rush_hour_lirf, is_rush_hour_lsgg, meteo_features,
        season, BodyType, FeatureRow, FlightRecord, MeteoFeatures, MetarArchive, MetarSource,
        Observation, RushHours, Season,
    };
    pub use crate::filters::{
        aligned_navpoint, crop_after_threshold, crop_before_waypoint, has_landing_at,
        remove_go_around,
    };
    pub use crate::flight::{Flight, StateVector};
    pub use crate::geom::Coordinate;
    pub use crate::nd::{Airport, NavigationData, NavigationDataBuilder, Navpoint, Runway};
    pub use crate::pipeline::Pipeline;
}
