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

//! Vector geometry on a spherical earth.
//!
//! Points are given by latitude and longitude in radians and placed in an
//! earth-centered cartesian frame with the x-axis through the prime meridian
//! and the z-axis through the north pole. Distances are in nautical miles.

use std::f64::consts::{FRAC_PI_2, PI};

use geo::Point;
use nalgebra::{Matrix3, Vector3};

use crate::constants::{EARTH_RADIUS_NM, GEOMETRY_EPSILON};
use crate::error::{Error, Result};
use crate::fc;

/// Returns the point on the unit sphere.
pub fn unit_vector(lat: f64, lon: f64) -> Vector3<f64> {
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Returns the point on the earth's surface in nautical miles.
pub fn cartesian(lat: f64, lon: f64) -> Vector3<f64> {
    unit_vector(lat, lon) * EARTH_RADIUS_NM
}

/// Angle between two vectors in radians.
fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a.dot(b) / (a.norm() * b.norm())).clamp(-1.0, 1.0).acos()
}

/// Normalizes the vector unless it is too short to have a direction.
fn normalize_or_keep(v: Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm > GEOMETRY_EPSILON {
        v / norm
    } else {
        v
    }
}

/// Unrounded distance of the great arc between two points in nautical miles.
pub fn great_arc_precise(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = cartesian(lat1, lon1);
    let to = cartesian(lat2, lon2);
    let cos = (from.dot(&to) / EARTH_RADIUS_NM.powi(2)).clamp(-1.0, 1.0);

    EARTH_RADIUS_NM * cos.acos()
}

/// Distance of the great arc between two points rounded to whole nautical
/// miles.
pub fn great_arc(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_arc_precise(lat1, lon1, lat2, lon2).round_ties_even()
}

/// Wraps a difference in longitude into `(-π, π]`.
pub fn wrap_longitude(delta_lon: f64) -> f64 {
    if delta_lon > PI {
        delta_lon - 2.0 * PI
    } else if delta_lon <= -PI {
        delta_lon + 2.0 * PI
    } else {
        delta_lon
    }
}

/// Unrounded true track from the first to the second point in degrees
/// within `[0, 360)`.
///
/// The track is the angle between the plane of the great circle through
/// both points and the plane of the meridian half-way between them.
///
/// # Errors
///
/// Returns [`InvalidGeometry`] if both points are identical or antipodal
/// since no unique great circle runs through them.
///
/// [`InvalidGeometry`]: Error::InvalidGeometry
pub fn true_track_precise(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
    let from = cartesian(lat1, lon1);
    let to = cartesian(lat2, lon2);

    let delta_lon = wrap_longitude(lon2 - lon1);
    let halfway_lon = delta_lon / 2.0 + lon1;

    let half = Vector3::new(
        EARTH_RADIUS_NM * halfway_lon.cos(),
        EARTH_RADIUS_NM * halfway_lon.sin(),
        0.0,
    );
    let north = Vector3::new(0.0, 0.0, EARTH_RADIUS_NM);

    let track_normal = from.cross(&to);
    if track_normal.norm() <= GEOMETRY_EPSILON {
        return Err(Error::InvalidGeometry);
    }

    let track_normal = normalize_or_keep(track_normal);
    let meridian_normal = normalize_or_keep(half.cross(&north));

    let angle = track_normal
        .dot(&meridian_normal)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();

    let track = if delta_lon > 0.0 { angle } else { 360.0 - angle };
    Ok(track.rem_euclid(360.0))
}

/// True track from the first to the second point rounded to whole degrees
/// within `[0, 360)`.
pub fn true_track(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<i32> {
    true_track_precise(lat1, lon1, lat2, lon2).map(fc::normalize_degrees)
}

/// Rotation around the z-axis as used for the local track frame.
fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Rotation around the x-axis as used for the local track frame.
fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Returns the rotation from the earth-centered frame into a frame whose
/// x-axis points along the true track from the first to the second point.
///
/// The z-axis of the rotated frame runs through the first point.
pub fn rotation_matrix(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<Matrix3<f64>> {
    let track = true_track_precise(lat1, lon1, lat2, lon2)?;

    let around_pole = rotation_z(lon1 + FRAC_PI_2);
    let tilt = rotation_x(FRAC_PI_2 - lat1);
    let along_track = rotation_z((90.0 - track).to_radians());

    Ok(along_track * tilt * around_pole)
}

/// Returns latitude and longitude in radians of a cartesian vector.
pub fn lat_lon(v: &Vector3<f64>) -> (f64, f64) {
    let r = v.norm();
    let lon = v.y.atan2(v.x);
    let lat = FRAC_PI_2 - (v.z / r).clamp(-1.0, 1.0).acos();
    (lat, lon)
}

/// Returns points spaced by the interval along the track from the first to
/// the second point, starting with the first point.
///
/// The points are stepped along the tangent plane of the first point and
/// projected back onto the sphere. The returned points hold the longitude
/// as x and the latitude as y in degrees.
///
/// # Errors
///
/// Returns [`NonPositiveInterval`] if the interval is not greater than zero
/// and [`InvalidGeometry`] if no track is defined between the points.
///
/// [`NonPositiveInterval`]: Error::NonPositiveInterval
/// [`InvalidGeometry`]: Error::InvalidGeometry
pub fn interval_coordinates(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    interval_nm: f64,
) -> Result<Vec<Point<f64>>> {
    if interval_nm <= 0.0 || !interval_nm.is_finite() {
        return Err(Error::NonPositiveInterval);
    }

    let rotation = rotation_matrix(lat1, lon1, lat2, lon2)?;
    let inverse = rotation.transpose();
    let total_distance = great_arc(lat1, lon1, lat2, lon2);
    let step = Vector3::new(interval_nm, 0.0, 0.0);

    let mut position = rotation * cartesian(lat1, lon1);
    let mut points = vec![Point::new(lon1.to_degrees(), lat1.to_degrees())];
    let mut current_distance = interval_nm;

    while current_distance < total_distance {
        position += step;
        let (lat, lon) = lat_lon(&(inverse * position));
        points.push(Point::new(lon.to_degrees(), lat.to_degrees()));
        current_distance += interval_nm;
    }

    Ok(points)
}

/// Returns `true` if the point lies on the shorter great arc between `a`
/// and `b`.
///
/// All vectors are expected on the unit sphere.
fn on_arc(point: &Vector3<f64>, a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    let arc = angle_between(a, b);
    let sum = angle_between(a, point) + angle_between(point, b);
    (sum - arc).abs() < GEOMETRY_EPSILON
}

/// Returns `true` if the great arcs `a1`-`a2` and `b1`-`b2` intersect.
///
/// Two great circles meet in two antipodal points. The arcs intersect if
/// either of them lies on both arcs.
pub fn arcs_intersect(
    a1: &Vector3<f64>,
    a2: &Vector3<f64>,
    b1: &Vector3<f64>,
    b2: &Vector3<f64>,
) -> bool {
    let line = a1.cross(a2).cross(&b1.cross(b2));
    let norm = line.norm();
    if norm <= GEOMETRY_EPSILON {
        return false;
    }

    let candidate = line / norm;
    [candidate, -candidate]
        .iter()
        .any(|p| on_arc(p, a1, a2) && on_arc(p, b1, b2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rad(lat: f64, lon: f64) -> (f64, f64) {
        (lat.to_radians(), lon.to_radians())
    }

    #[test]
    fn great_arc_along_equator() {
        let (lat1, lon1) = rad(0.0, 0.0);
        let (lat2, lon2) = rad(0.0, 1.0);
        // one degree of arc is roughly 60 NM
        assert_eq!(great_arc(lat1, lon1, lat2, lon2), 60.0);
        assert_eq!(great_arc(lat1, lon1, lat1, lon1), 0.0);
    }

    #[test]
    fn great_arc_is_symmetric() {
        let (lat1, lon1) = rad(49.29, -123.12);
        let (lat2, lon2) = rad(51.05, -114.07);
        assert_eq!(
            great_arc(lat1, lon1, lat2, lon2),
            great_arc(lat2, lon2, lat1, lon1)
        );
    }

    #[test]
    fn true_track_cardinal_directions() {
        let (lat, lon) = rad(0.0, 0.0);
        let track = |to_lat: f64, to_lon: f64| {
            let (lat2, lon2) = rad(to_lat, to_lon);
            true_track(lat, lon, lat2, lon2).unwrap()
        };

        assert_eq!(track(10.0, 0.0), 0);
        assert_eq!(track(0.0, 10.0), 90);
        assert_eq!(track(-10.0, 0.0), 180);
        assert_eq!(track(0.0, -10.0), 270);
    }

    #[test]
    fn true_track_across_antimeridian() {
        let (lat1, lon1) = rad(0.0, 179.5);
        let (lat2, lon2) = rad(0.0, -179.5);
        assert_eq!(true_track(lat1, lon1, lat2, lon2), Ok(90));
        assert_eq!(true_track(lat2, lon2, lat1, lon1), Ok(270));
    }

    #[test]
    fn true_track_stays_in_range() {
        for lat in [-60.0, -15.0, 0.0, 30.0, 75.0] {
            for lon in [-180.0, -179.0, -90.0, 0.0, 45.0, 179.0] {
                for (dlat, dlon) in [(1.0, 1.0), (-1.0, 2.0), (0.5, -3.0), (-2.0, -0.5)] {
                    let (lat1, lon1) = rad(lat, lon);
                    let (lat2, lon2) = rad(lat + dlat, lon + dlon);
                    let track = true_track(lat1, lon1, lat2, lon2).unwrap();
                    assert!((0..360).contains(&track), "track {track}");
                    let precise = true_track_precise(lat1, lon1, lat2, lon2).unwrap();
                    assert!((0.0..360.0).contains(&precise), "track {precise}");
                }
            }
        }
    }

    #[test]
    fn true_track_between_identical_points() {
        let (lat, lon) = rad(45.0, -75.0);
        assert_eq!(true_track(lat, lon, lat, lon), Err(Error::InvalidGeometry));
    }

    #[test]
    fn rotation_is_orthonormal() {
        let (lat1, lon1) = rad(49.0, -123.0);
        let (lat2, lon2) = rad(50.0, -120.0);
        let rotation = rotation_matrix(lat1, lon1, lat2, lon2).unwrap();

        let identity = rotation * rotation.transpose();
        assert!((identity - Matrix3::identity()).norm() < 1e-12);

        // the first point lies on the z-axis of the rotated frame
        let p = rotation * unit_vector(lat1, lon1);
        assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12);
    }

    #[test]
    fn interval_coordinates_along_equator() {
        let (lat1, lon1) = rad(0.0, 0.0);
        let (lat2, lon2) = rad(0.0, 2.0);
        let points = interval_coordinates(lat1, lon1, lat2, lon2, 30.0).unwrap();

        // 120 NM at 30 NM steps without the destination
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        for pair in points.windows(2) {
            assert!(pair[1].x() > pair[0].x());
            assert!(pair[1].y().abs() < 1e-9);
        }
        assert!((points[1].x() - 0.5).abs() < 0.01);
    }

    #[test]
    fn interval_must_be_positive() {
        let (lat1, lon1) = rad(0.0, 0.0);
        let (lat2, lon2) = rad(0.0, 2.0);
        assert_eq!(
            interval_coordinates(lat1, lon1, lat2, lon2, 0.0),
            Err(Error::NonPositiveInterval)
        );
    }

    #[test]
    fn crossing_arcs() {
        let v = |lat: f64, lon: f64| unit_vector(lat.to_radians(), lon.to_radians());

        assert!(arcs_intersect(
            &v(-1.0, 0.0),
            &v(1.0, 0.0),
            &v(0.0, -1.0),
            &v(0.0, 1.0)
        ));
        assert!(!arcs_intersect(
            &v(2.0, 0.0),
            &v(3.0, 0.0),
            &v(0.0, -1.0),
            &v(0.0, 1.0)
        ));
    }
}
