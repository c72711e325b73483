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

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A period of the day from `start` to `end` minute, both inclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

impl Window {
    /// Creates a window from `(hour, minute)` to `(hour, minute)`.
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start: start.0 * 60 + start.1,
            end: end.0 * 60 + end.1,
        }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        self.start <= minute_of_day && minute_of_day <= self.end
    }
}

/// The peak hours of an airport.
///
/// The windows are defined in the time zone the airport publishes them in,
/// which is UTC for most airports but local time for e.g. Rome Fiumicino.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RushHours {
    tz: Tz,
    windows: Vec<Window>,
}

impl RushHours {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            windows: Vec::new(),
        }
    }

    pub fn with_window(mut self, start: (u32, u32), end: (u32, u32)) -> Self {
        self.windows.push(Window::new(start, end));
        self
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn windows(&self) -> &[Window] {
        self.windows.as_slice()
    }

    /// Munich (EDDM), in UTC.
    pub fn eddm() -> Self {
        Self::new(Tz::UTC)
            .with_window((5, 0), (6, 0))
            .with_window((7, 0), (9, 0))
            .with_window((11, 0), (14, 0))
            .with_window((16, 0), (20, 0))
    }

    /// Rome Fiumicino (LIRF), in local time as published in the Italian AIP.
    pub fn lirf() -> Self {
        Self::new(chrono_tz::Europe::Rome)
            .with_window((6, 30), (9, 0))
            .with_window((11, 0), (14, 0))
            .with_window((16, 30), (18, 0))
            .with_window((19, 0), (21, 0))
    }

    /// Geneva (LSGG), in UTC.
    pub fn lsgg() -> Self {
        Self::new(Tz::UTC)
            .with_window((7, 0), (10, 0))
            .with_window((11, 0), (13, 0))
            .with_window((14, 0), (17, 0))
            .with_window((20, 0), (21, 0))
    }

    /// Returns the peak hours of the airport, if known.
    pub fn for_airport(icao: &str) -> Option<Self> {
        match icao {
            "EDDM" => Some(Self::eddm()),
            "LIRF" => Some(Self::lirf()),
            "LSGG" => Some(Self::lsgg()),
            _ => None,
        }
    }

    /// Returns whether the timestamp is within the peak hours.
    ///
    /// Seconds are ignored, so the last minute of a window is entirely part
    /// of it.
    pub fn is_rush_hour(&self, ts: &DateTime<Utc>) -> bool {
        let local = ts.with_timezone(&self.tz);
        let minute_of_day = local.hour() * 60 + local.minute();

        self.windows.iter().any(|w| w.contains(minute_of_day))
    }
}

pub fn is_rush_hour_eddm(ts: &DateTime<Utc>) -> bool {
    RushHours::eddm().is_rush_hour(ts)
}

pub fn is_rush_hour_lirf(ts: &DateTime<Utc>) -> bool {
    RushHours::lirf().is_rush_hour(ts)
}

pub fn is_rush_hour_lsgg(ts: &DateTime<Utc>) -> bool {
    RushHours::lsgg().is_rush_hour(ts)
}
