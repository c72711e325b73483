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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Fix;
use crate::geom::Coordinate;

/// A waypoint or navaid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navpoint {
    pub ident: String,
    pub coordinate: Coordinate,
}

impl Navpoint {
    pub fn new(ident: &str, coordinate: Coordinate) -> Self {
        Self {
            ident: ident.to_string(),
            coordinate,
        }
    }
}

impl Fix for Navpoint {
    fn ident(&self) -> &str {
        &self.ident
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
