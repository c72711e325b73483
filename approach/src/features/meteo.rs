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

use chrono::{DateTime, Utc};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::STD_PRESSURE_HPA;
use crate::error::Result;

/// The decoded values of a METAR.
///
/// Values which were not reported, or couldn't be decoded, are `None`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// ICAO location indicator of the reporting station.
    pub station: String,
    pub timestamp: DateTime<Utc>,
    /// Wind direction in degrees true.
    pub wind_dir: Option<f64>,
    /// Wind speed in knots.
    pub wind_speed: Option<f64>,
    /// Visibility in meters.
    pub visibility: Option<f64>,
    /// Temperature in degree Celsius.
    pub temperature: Option<f64>,
    /// QNH in hPa.
    pub pressure: Option<f64>,
}

impl Observation {
    pub fn new(station: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            station: station.to_string(),
            timestamp,
            wind_dir: None,
            wind_speed: None,
            visibility: None,
            temperature: None,
            pressure: None,
        }
    }

    pub fn with_wind(mut self, dir: f64, speed: f64) -> Self {
        self.wind_dir = Some(dir);
        self.wind_speed = Some(speed);
        self
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// A source of METAR observations.
pub trait MetarSource {
    /// Returns the observations of the station from `start` to `stop`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if the observations can't be retrieved.
    ///
    /// [`Error::Source`]: crate::Error::Source
    fn observations(
        &self,
        station: &str,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> Result<Vec<Observation>>;
}

/// Observations kept in memory.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetarArchive {
    observations: Vec<Observation>,
}

impl MetarArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<Observation> for MetarArchive {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl MetarSource for MetarArchive {
    fn observations(
        &self,
        station: &str,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        Ok(self
            .observations
            .iter()
            .filter(|o| o.station == station && start <= o.timestamp && o.timestamp <= stop)
            .cloned()
            .collect())
    }
}

/// Averaged weather at an airport during a flight.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeteoFeatures {
    /// Mean wind direction in degrees.
    pub wind_dir: Option<f64>,
    /// Mean wind speed in knots.
    pub wind_speed: Option<f64>,
    /// Mean visibility in kilometers.
    pub visibility_km: Option<f64>,
    /// Mean temperature in degree Celsius.
    pub temperature: Option<f64>,
    /// Mean QNH relative to the standard pressure of 1013 hPa.
    pub pressure_delta: Option<f64>,
}

/// Returns the weather at the airport averaged over all observations from
/// `start` to `stop`.
///
/// Each value is the arithmetic mean of the observations reporting it. A
/// value which no observation reports is `None`.
///
/// # Errors
///
/// Returns the error of the source if it fails to provide observations.
pub fn meteo_features<S>(
    source: &S,
    airport: &str,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> Result<MeteoFeatures>
where
    S: MetarSource + ?Sized,
{
    let observations = source.observations(airport, start, stop)?;

    debug!(
        "averaging {} observation(s) of {airport} from {start} to {stop}",
        observations.len()
    );

    Ok(MeteoFeatures {
        wind_dir: safe_mean(observations.iter().map(|o| o.wind_dir)),
        wind_speed: safe_mean(observations.iter().map(|o| o.wind_speed)),
        visibility_km: safe_mean(observations.iter().map(|o| o.visibility))
            .map(|vis| vis / 1000.0),
        temperature: safe_mean(observations.iter().map(|o| o.temperature)),
        pressure_delta: safe_mean(observations.iter().map(|o| o.pressure))
            .map(|press| press - STD_PRESSURE_HPA),
    })
}

/// Returns the mean of all present values, or `None` if there are none.
fn safe_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;
    use crate::error::Error;

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 2, 1, 12, 20, 0)
            .single()
            .expect("timestamp should be valid")
            + TimeDelta::minutes(minutes)
    }

    fn archive() -> MetarArchive {
        [
            Observation::new("LSGG", t(0))
                .with_wind(220.0, 8.0)
                .with_visibility(9999.0)
                .with_temperature(4.0)
                .with_pressure(1021.0),
            Observation::new("LSGG", t(30))
                .with_wind(240.0, 12.0)
                .with_visibility(8000.0)
                .with_temperature(5.0),
            Observation::new("LSGG", t(90)).with_temperature(9.0),
            Observation::new("LSZH", t(30)).with_temperature(-3.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn averages_observations() {
        let meteo = meteo_features(&archive(), "LSGG", t(0), t(60))
            .expect("archive should not fail");

        assert_eq!(meteo.wind_dir, Some(230.0));
        assert_eq!(meteo.wind_speed, Some(10.0));
        assert_eq!(meteo.visibility_km, Some(8.9995));
        assert_eq!(meteo.temperature, Some(4.5));
        assert_eq!(meteo.pressure_delta, Some(8.0));
    }

    #[test]
    fn archive_range_is_inclusive() {
        let archive = archive();

        let observations = archive
            .observations("LSGG", t(30), t(90))
            .expect("archive should not fail");
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[1].timestamp, t(90));

        let meteo = meteo_features(&archive, "LSGG", t(60), t(90))
            .expect("archive should not fail");
        assert_eq!(meteo.temperature, Some(9.0));

        assert!(archive
            .observations("LSGG", t(31), t(89))
            .expect("archive should not fail")
            .is_empty());
    }

    #[test]
    fn missing_values_are_none() {
        let meteo = meteo_features(&archive(), "LSGG", t(60), t(120))
            .expect("archive should not fail");

        assert_eq!(meteo.temperature, Some(9.0));
        assert_eq!(meteo.visibility_km, None);
        assert_eq!(meteo.pressure_delta, None);
        assert_eq!(
            meteo_features(&archive(), "LIRF", t(0), t(120)),
            Ok(MeteoFeatures::default())
        );
    }

    #[test]
    fn propagates_source_errors() {
        struct Offline;

        impl MetarSource for Offline {
            fn observations(
                &self,
                _station: &str,
                _start: DateTime<Utc>,
                _stop: DateTime<Utc>,
            ) -> Result<Vec<Observation>> {
                Err(Error::Source(String::from("no connection")))
            }
        }

        assert_eq!(
            meteo_features(&Offline, "LSGG", t(0), t(60)),
            Err(Error::Source(String::from("no connection")))
        );
    }
}
