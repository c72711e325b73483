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

use std::fmt;

use chrono::Datelike;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Astronomical season of the northern hemisphere.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Winter => write!(f, "Winter"),
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
        }
    }
}

/// Returns the season of the date.
///
/// The seasons start on fixed days each year: spring on March 20, summer on
/// June 21, fall on September 23 and winter on December 21.
pub fn season<D>(date: &D) -> Season
where
    D: Datelike,
{
    match (date.month(), date.day()) {
        (12, 21..) | (1 | 2, _) | (3, ..=19) => Season::Winter,
        (3, _) | (4 | 5, _) | (6, ..=20) => Season::Spring,
        (6, _) | (7 | 8, _) | (9, ..=22) => Season::Summer,
        _ => Season::Fall,
    }
}
