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

//! Features of a flight for the regression.
//!
//! Each feature is derived by a pure function from a value of a flight
//! record. The [`FeatureRow`] bundles all of them for one flight.

mod body;
mod meteo;
mod row;
mod rush_hour;
mod season;

pub use body::{body_type, BodyType};
pub use meteo::{meteo_features, MeteoFeatures, MetarArchive, MetarSource, Observation};
pub use row::{FeatureRow, FlightRecord};
pub use rush_hour::{is_rush_hour_eddm, is_rush_hour_lirf, is_rush_hour_lsgg, RushHours, Window};
pub use season::{season, Season};
