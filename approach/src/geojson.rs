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

use geo::BoundingRect;
use geojson::{Feature, GeoJson, Geometry, Value};

use crate::flight::Flight;

impl Flight {
    /// Returns the trajectory as GeoJSON with a line string geometry.
    ///
    /// The callsign, type code and landing runway are added as properties
    /// if known.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let line: geo::LineString<f64> = self
            .states()
            .iter()
            .map(|s| geo::Coord::from(s.coordinate()))
            .collect();

        let mut feature = Feature {
            bbox: line
                .bounding_rect()
                .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]),
            geometry: Some(Geometry::new(Value::from(&line))),
            id: None,
            properties: None,
            foreign_members: None,
        };

        for (name, value) in [
            ("callsign", &self.callsign),
            ("typecode", &self.typecode),
            ("runway", &self.runway),
        ] {
            if let Some(value) = value {
                feature.set_property(name, value.as_str());
            }
        }

        GeoJson::Feature(feature)
    }
}
