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

//! Flight filters.
//!
//! Every filter takes a [`Flight`] and returns it, a cropped or annotated
//! version of it, or `None` to drop it. This makes them composable in a
//! [`Pipeline`]. Errors don't escape a filter but drop the flight; the
//! `try_` variants of the croppers return them instead.
//!
//! [`Pipeline`]: crate::Pipeline

use log::{debug, warn};

use crate::detect::{Detector, NavpointAlignment};
use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::nd::NavigationData;

/// Returns the flight if it landed at the airport.
///
/// A landing is the first alignment on an ILS of the airport. The flight is
/// annotated with the runway of that alignment. Go-arounds are not checked;
/// combine with [`remove_go_around`] to drop them.
pub fn has_landing_at<D>(
    flight: Flight,
    airport: &str,
    nd: &NavigationData,
    detector: &D,
) -> Option<Flight>
where
    D: Detector + ?Sized,
{
    let Some(arpt) = nd.airport(airport) else {
        return dropped(&flight, Error::UnknownAirport(airport.to_string()));
    };

    let landing = detector.aligned_on_ils(&flight, arpt).into_iter().next()?;

    match landing.runway {
        Some(runway) => {
            debug!("{} landed on {airport} {runway}", flight.label());
            Some(flight.with_runway(&runway))
        }
        None => Some(flight),
    }
}

/// Returns the flight if it is aligned on the navpoint at least once.
pub fn aligned_navpoint<D>(
    flight: Flight,
    navpoint: &str,
    nd: &NavigationData,
    detector: &D,
    params: &NavpointAlignment,
) -> Option<Flight>
where
    D: Detector + ?Sized,
{
    let Some(fix) = nd.find(navpoint) else {
        return dropped(&flight, Error::UnknownNavpoint(navpoint.to_string()));
    };

    if detector
        .aligned_on_navpoint(&flight, &fix.coordinate(), params)
        .is_empty()
    {
        None
    } else {
        Some(flight)
    }
}

/// Crops the part of the flight after it passed the threshold of its
/// landing runway at the airport.
///
/// Only states below `altitude` ft are taken into account when searching
/// the state closest to the threshold. This ignores overflights of the
/// runway before the actual approach, like when arriving via the BELUS
/// STAR at LSGG.
///
/// The flight must be annotated with its landing runway, e.g. by
/// [`has_landing_at`]. Returns `None` if the flight can't be cropped.
pub fn crop_after_threshold(
    flight: Flight,
    airport: &str,
    nd: &NavigationData,
    altitude: f64,
) -> Option<Flight> {
    match try_crop_after_threshold(&flight, airport, nd, altitude) {
        Ok(cropped) => Some(cropped),
        Err(e) => dropped(&flight, e),
    }
}

/// Crops the part of the flight after it passed the threshold.
///
/// # Errors
///
/// Returns an error if the flight has no landing runway, the airport or the
/// runway is unknown, no state is below the altitude, or nothing is left
/// before the threshold.
pub fn try_crop_after_threshold(
    flight: &Flight,
    airport: &str,
    nd: &NavigationData,
    altitude: f64,
) -> Result<Flight> {
    let runway = flight.runway.as_deref().ok_or(Error::MissingRunway)?;
    let arpt = nd
        .airport(airport)
        .ok_or_else(|| Error::UnknownAirport(airport.to_string()))?;
    let rwy = arpt.runway(runway).ok_or_else(|| Error::UnknownRunway {
        airport: airport.to_string(),
        runway: runway.to_string(),
    })?;

    let below = flight
        .below(altitude)
        .ok_or(Error::NoStateBelow(altitude))?;
    let closest = below
        .closest_to(&rwy.threshold)
        .ok_or(Error::EmptyTrajectory)?;

    flight
        .before(closest.timestamp)
        .ok_or(Error::EmptyTrajectory)
}

/// Crops the part of the flight before it passed the waypoint.
///
/// Returns `None` if the flight can't be cropped.
pub fn crop_before_waypoint(flight: Flight, waypoint: &str, nd: &NavigationData) -> Option<Flight> {
    match try_crop_before_waypoint(&flight, waypoint, nd) {
        Ok(cropped) => Some(cropped),
        Err(e) => dropped(&flight, e),
    }
}

/// Crops the part of the flight before it passed the waypoint.
///
/// # Errors
///
/// Returns an error if the waypoint is unknown or nothing is left after the
/// state closest to the waypoint.
pub fn try_crop_before_waypoint(
    flight: &Flight,
    waypoint: &str,
    nd: &NavigationData,
) -> Result<Flight> {
    let fix = nd
        .find(waypoint)
        .ok_or_else(|| Error::UnknownNavpoint(waypoint.to_string()))?;
    let closest = flight
        .closest_to(&fix.coordinate())
        .ok_or(Error::EmptyTrajectory)?;

    flight
        .after(closest.timestamp)
        .ok_or(Error::EmptyTrajectory)
}

/// Returns the flight if it has no go-around at the airport.
pub fn remove_go_around<D>(
    flight: Flight,
    airport: &str,
    nd: &NavigationData,
    detector: &D,
) -> Option<Flight>
where
    D: Detector + ?Sized,
{
    let Some(arpt) = nd.airport(airport) else {
        return dropped(&flight, Error::UnknownAirport(airport.to_string()));
    };

    if detector.has_go_around(&flight, arpt) {
        debug!("{} went around at {airport}", flight.label());
        None
    } else {
        Some(flight)
    }
}

fn dropped(flight: &Flight, e: Error) -> Option<Flight> {
    match e {
        Error::UnknownAirport(_) | Error::UnknownRunway { .. } | Error::UnknownNavpoint(_) => {
            warn!("dropping {}: {e}", flight.label())
        }
        _ => debug!("dropping {}: {e}", flight.label()),
    }

    None
}
