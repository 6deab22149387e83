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

//! Spatial index of waypoints with a known magnetic variation.

use log::{debug, trace};
use rstar::primitives::GeomWithData;
use rstar::RTree;

use super::Waypoint;
use crate::constants::VARIATION_EPSILON;
use crate::geom;

/// Spatial index to find the closest waypoints with a known magnetic
/// variation.
///
/// Waypoints are stored as vectors on the unit sphere. The straight-line
/// distance between two such vectors grows with the great arc between
/// them, so the nearest neighbor in space is also the closest waypoint on
/// the surface.
#[derive(Clone, Debug, Default)]
pub struct VariationIndex {
    tree: RTree<GeomWithData<[f64; 3], Waypoint>>,
}

impl VariationIndex {
    /// Creates an index from waypoints. Waypoints without a known magnetic
    /// variation are skipped.
    pub fn new<'a>(waypoints: impl IntoIterator<Item = &'a Waypoint>) -> Self {
        let entries: Vec<_> = waypoints
            .into_iter()
            .filter(|wp| wp.has_known_variation())
            .map(|wp| GeomWithData::new(position(wp), wp.clone()))
            .collect();

        debug!("indexing {} waypoints with magnetic variation", entries.len());

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Returns the indexed waypoint closest to the waypoint.
    pub fn closest(&self, waypoint: &Waypoint) -> Option<&Waypoint> {
        self.tree
            .nearest_neighbor(&position(waypoint))
            .map(|entry| &entry.data)
    }

    /// Returns the magnetic variation for a leg between two waypoints.
    ///
    /// The variation of the leg's waypoints is used if it is not virtually
    /// zero. Otherwise the variation is taken from the indexed waypoints
    /// closest to the origin and destination.
    pub fn variation_for_leg(&self, from: &Waypoint, to: &Waypoint) -> f64 {
        let variation = from.magnetic_variation_to(to);
        if variation.abs() > VARIATION_EPSILON {
            return variation;
        }

        match (self.closest(from), self.closest(to)) {
            (Some(origin), Some(destination)) => {
                trace!(
                    "using variation of {} and {} for leg {} to {}",
                    origin.code(),
                    destination.code(),
                    from.code(),
                    to.code()
                );
                origin.magnetic_variation_to(destination)
            }
            _ => variation,
        }
    }
}

fn position(waypoint: &Waypoint) -> [f64; 3] {
    let v = geom::unit_vector(waypoint.lat(), waypoint.lon());
    [v.x, v.y, v.z]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(code: &str, lat: &str, lon: &str, variation: Option<f64>) -> Waypoint {
        let wp = Waypoint::new(code, code, lat.parse().unwrap(), lon.parse().unwrap()).unwrap();
        match variation {
            Some(v) => wp.with_magnetic_variation(v),
            None => wp,
        }
    }

    fn index() -> VariationIndex {
        VariationIndex::new(&[
            waypoint("WEST", "490000N", "1230000W", Some(-16.0)),
            waypoint("EAST", "490000N", "0970000W", Some(-2.0)),
            waypoint("NONE", "500000N", "1100000W", None),
        ])
    }

    #[test]
    fn skips_unknown_variation() {
        assert_eq!(index().len(), 2);
    }

    #[test]
    fn closest_waypoint() {
        let wp = waypoint("A", "493000N", "1210000W", None);
        assert_eq!(index().closest(&wp).map(|wp| wp.code()), Some("WEST"));
    }

    #[test]
    fn variation_of_leg_waypoints_wins() {
        let from = waypoint("A", "493000N", "1210000W", Some(-17.0));
        let to = waypoint("B", "493000N", "1000000W", None);
        assert_eq!(index().variation_for_leg(&from, &to), -17.0);
    }

    #[test]
    fn variation_falls_back_to_closest() {
        let from = waypoint("A", "493000N", "1210000W", None);
        let to = waypoint("B", "493000N", "1000000W", Some(0.0));
        assert_eq!(index().variation_for_leg(&from, &to), -9.0);

        let empty = VariationIndex::default();
        assert_eq!(empty.variation_for_leg(&from, &to), 0.0);
    }
}
