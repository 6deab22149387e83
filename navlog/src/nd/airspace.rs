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

//! Northern Domestic Airspace (NDA).
//!
//! Within the NDA magnetic compass indications are unreliable and tracks
//! are flown with reference to true north. The southern boundary is a
//! polyline between two latitudes that bound the airspace on their own.
//! Aerodromes north of the polyline that still use magnetic references are
//! cut out by circular insets.

use log::trace;
use nalgebra::Vector3;

use super::Waypoint;
use crate::fc::dms_to_decimal;
use crate::geom;

/// Points south of this latitude are never within the NDA (58°46′N).
const FLOOR_LAT: f64 = 58.0 + 46.0 / 60.0;

/// Points north of this latitude are always within the NDA.
const CEILING_LAT: f64 = 72.0;

/// Point north of the boundary the arcs of the boundary test run to.
const REFERENCE: (f64, f64) = (80.0, -90.0);

/// Vertices of the southern boundary from west to east as latitude and
/// longitude in degrees and minutes.
const BOUNDARY: [((u8, u8), (u8, u8)); 12] = [
    ((65, 0), (141, 0)),
    ((64, 30), (133, 0)),
    ((63, 0), (126, 0)),
    ((62, 15), (119, 0)),
    ((61, 30), (112, 30)),
    ((61, 0), (102, 0)),
    ((60, 0), (96, 0)),
    ((59, 0), (90, 0)),
    ((59, 30), (80, 0)),
    ((60, 0), (71, 0)),
    ((60, 30), (65, 0)),
    ((61, 0), (60, 0)),
];

struct Inset {
    lat: (u8, u8),
    lon: (u8, u8),
    radius_nm: f64,
}

/// Areas around aerodromes north of the boundary excluded from the NDA.
const INSETS: [Inset; 4] = [
    // Yellowknife
    Inset {
        lat: (62, 28),
        lon: (114, 26),
        radius_nm: 25.0,
    },
    // Hay River
    Inset {
        lat: (60, 50),
        lon: (115, 47),
        radius_nm: 20.0,
    },
    // Iqaluit
    Inset {
        lat: (63, 45),
        lon: (68, 33),
        radius_nm: 25.0,
    },
    // Rankin Inlet
    Inset {
        lat: (62, 49),
        lon: (92, 7),
        radius_nm: 20.0,
    },
];

/// Returns radians of a northern latitude and western longitude.
fn north_west(lat: (u8, u8), lon: (u8, u8)) -> (f64, f64) {
    (
        dms_to_decimal(lat.0, lat.1, 0).to_radians(),
        -dms_to_decimal(lon.0, lon.1, 0).to_radians(),
    )
}

fn unit(lat_lon: (f64, f64)) -> Vector3<f64> {
    geom::unit_vector(lat_lon.0, lat_lon.1)
}

/// Returns `true` if the waypoint is within the Northern Domestic Airspace.
///
/// The great arc from the waypoint to a reference point far north is
/// tested against every segment of the southern boundary. Waypoints whose
/// arc crosses the boundary lie south of it.
pub fn is_in_northern_airspace(waypoint: &Waypoint) -> bool {
    let lat = waypoint.coordinate().y();

    if lat < FLOOR_LAT {
        return false;
    }

    if lat >= CEILING_LAT {
        return true;
    }

    let (wp_lat, wp_lon) = (waypoint.lat(), waypoint.lon());

    for inset in &INSETS {
        let (lat, lon) = north_west(inset.lat, inset.lon);
        if geom::great_arc_precise(wp_lat, wp_lon, lat, lon) <= inset.radius_nm {
            trace!("{} is within an NDA inset", waypoint.code());
            return false;
        }
    }

    let point = geom::unit_vector(wp_lat, wp_lon);
    let reference = unit((REFERENCE.0.to_radians(), REFERENCE.1.to_radians()));

    let crosses_boundary = BOUNDARY.windows(2).any(|segment| {
        let a = unit(north_west(segment[0].0, segment[0].1));
        let b = unit(north_west(segment[1].0, segment[1].1));
        geom::arcs_intersect(&point, &reference, &a, &b)
    });

    !crosses_boundary
}

impl Waypoint {
    /// Returns `true` if the waypoint is within the Northern Domestic
    /// Airspace.
    pub fn is_in_northern_airspace(&self) -> bool {
        is_in_northern_airspace(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(lat: &str, lon: &str) -> Waypoint {
        Waypoint::new("WP", "WP", lat.parse().unwrap(), lon.parse().unwrap()).unwrap()
    }

    #[test]
    fn latitude_bounds() {
        assert!(!waypoint("580000N", "1000000W").is_in_northern_airspace());
        assert!(waypoint("730000N", "1000000W").is_in_northern_airspace());
    }

    #[test]
    fn south_of_boundary() {
        assert!(!waypoint("590000N", "1100000W").is_in_northern_airspace());
        assert!(!waypoint("600000N", "1200000W").is_in_northern_airspace());
    }

    #[test]
    fn north_of_boundary() {
        assert!(waypoint("660000N", "1000000W").is_in_northern_airspace());
        assert!(waypoint("680000N", "1330000W").is_in_northern_airspace());
    }

    #[test]
    fn insets_are_excluded() {
        // Yellowknife lies north of the boundary
        assert!(!waypoint("622745N", "1142624W").is_in_northern_airspace());
        assert!(waypoint("630000N", "1140000W").is_in_northern_airspace());
    }
}
