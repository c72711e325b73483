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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of an aircraft by its fuselage.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BodyType {
    Widebody,
    Narrowbody,
    RegionalJet,
    BusinessJet,
}

impl BodyType {
    /// ICAO aircraft type designators of each body type.
    const TYPECODES: [(BodyType, &'static [&'static str]); 4] = [
        (
            BodyType::Widebody,
            &["B763", "A333", "B789", "A332", "B772"],
        ),
        (
            BodyType::Narrowbody,
            &[
                "A320", "BCS3", "A20N", "A319", "BCS1", "A21N", "B738", "A321",
            ],
        ),
        (BodyType::RegionalJet, &["E190", "CRJ9", "E195", "DH8D"]),
        (
            BodyType::BusinessJet,
            &["PC12", "C56X", "F2TH", "PC24", "C68A", "E55P"],
        ),
    ];
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyType::Widebody => write!(f, "Widebody"),
            BodyType::Narrowbody => write!(f, "Narrowbody"),
            BodyType::RegionalJet => write!(f, "Regional Jet"),
            BodyType::BusinessJet => write!(f, "Business jets"),
        }
    }
}

/// Returns the body type of the aircraft type designator.
///
/// The lookup is case-sensitive. Unknown designators have no body type.
///
/// ```
/// use approach::features::{body_type, BodyType};
///
/// assert_eq!(body_type("A20N"), Some(BodyType::Narrowbody));
/// assert_eq!(body_type("C172"), None);
/// ```
pub fn body_type(typecode: &str) -> Option<BodyType> {
    BodyType::TYPECODES
        .iter()
        .find(|(_, typecodes)| typecodes.contains(&typecode))
        .map(|(body_type, _)| *body_type)
}
