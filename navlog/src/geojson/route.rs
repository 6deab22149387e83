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

use super::rect_to_bbox;
use crate::error::Result;
use crate::route::Leg;

impl Leg {
    /// Returns the track of the leg as GeoJSON line string with a point
    /// every `interval_nm` along the great arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is not positive or the leg starts
    /// where it ends.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self, interval_nm: f64) -> Result<GeoJson> {
        legs_to_geojson(std::slice::from_ref(self), interval_nm)
    }
}

/// Returns the legs as one GeoJSON line string with a point every
/// `interval_nm` along each leg's great arc.
///
/// # Errors
///
/// Returns an error if the interval is not positive or a leg starts where
/// it ends.
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub fn legs_to_geojson(legs: &[Leg], interval_nm: f64) -> Result<GeoJson> {
    let mut coords: Vec<geo::Coord<f64>> = Vec::new();

    for leg in legs {
        let points = leg.from.interval_coordinates_to(&leg.to, interval_nm)?;
        coords.extend(points.into_iter().map(geo::Coord::from));
    }

    if let Some(last) = legs.last() {
        coords.push(last.to.coordinate().into());
    }

    let line = geo::LineString::from(coords);

    Ok(GeoJson::Feature(Feature {
        bbox: line.bounding_rect().map(rect_to_bbox),
        geometry: Some(Geometry::new(Value::from(&line))),
        id: None,
        properties: None,
        foreign_members: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::Waypoint;

    fn waypoint(lat: &str, lon: &str) -> Waypoint {
        Waypoint::new("WP", "WP", lat.parse().unwrap(), lon.parse().unwrap()).unwrap()
    }

    #[test]
    fn leg_as_line_string() {
        let leg = Leg::new(
            1,
            waypoint("500000N", "1000000W"),
            waypoint("510000N", "1000000W"),
            3000,
        );

        let GeoJson::Feature(feature) = leg.to_geojson(20.0).unwrap() else {
            panic!("leg should be a feature");
        };

        let Some(Value::LineString(coords)) = feature.geometry.map(|g| g.value) else {
            panic!("leg should be a line string");
        };

        // 0, 20 and 40 NM along the leg and its end at 60 NM
        assert_eq!(coords.len(), 4);
        assert!(feature.bbox.is_some());
    }

    #[test]
    fn interval_must_be_positive() {
        let leg = Leg::new(
            1,
            waypoint("500000N", "1000000W"),
            waypoint("510000N", "1000000W"),
            3000,
        );

        assert!(leg.to_geojson(0.0).is_err());
    }
}
