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
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;
use nalgebra::{Matrix3, Vector3};

use crate::constants::VARIATION_EPSILON;
use crate::error::{Error, Result};
use crate::{fc, geom};

/// Hemisphere of a latitude or longitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    fn sign(&self) -> f64 {
        match self {
            Self::N | Self::E => 1.0,
            Self::S | Self::W => -1.0,
        }
    }

    fn is_latitude(&self) -> bool {
        matches!(self, Self::N | Self::S)
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'N' => Ok(Self::N),
            'S' => Ok(Self::S),
            'E' => Ok(Self::E),
            'W' => Ok(Self::W),
            _ => Err(Error::UnexpectedString),
        }
    }
}

/// An angle in degrees, minutes and seconds with its hemisphere.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: u8,
    minutes: u8,
    seconds: u8,
    hemisphere: Hemisphere,
}

impl Dms {
    /// Creates a new angle.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if minutes or seconds exceed 59 or the
    /// degrees exceed 90 for a latitude or 180 for a longitude.
    ///
    /// [`InvalidCoordinate`]: Error::InvalidCoordinate
    pub fn new(degrees: u8, minutes: u8, seconds: u8, hemisphere: Hemisphere) -> Result<Self> {
        let max_degrees = if hemisphere.is_latitude() { 90 } else { 180 };

        if minutes > 59 || seconds > 59 {
            return Err(Error::InvalidCoordinate(format!(
                "{minutes}' {seconds}\" exceeds 59"
            )));
        }

        if degrees > max_degrees || (degrees == max_degrees && (minutes > 0 || seconds > 0)) {
            return Err(Error::InvalidCoordinate(format!(
                "{degrees}° {minutes}' {seconds}\" exceeds {max_degrees}°"
            )));
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Returns the signed angle in decimal degrees.
    pub fn decimal(&self) -> f64 {
        self.hemisphere.sign() * fc::dms_to_decimal(self.degrees, self.minutes, self.seconds)
    }

    /// Returns the signed angle in radians.
    pub fn radians(&self) -> f64 {
        self.decimal().to_radians()
    }
}

impl FromStr for Dms {
    type Err = Error;

    /// Parses an angle like `491732N` for latitudes or `1230708W` for
    /// longitudes.
    fn from_str(s: &str) -> Result<Self> {
        let hemisphere = s
            .chars()
            .last()
            .ok_or(Error::UnexpectedString)
            .and_then(Hemisphere::try_from)?;

        let digits = &s[..s.len() - 1];
        let degree_digits = if hemisphere.is_latitude() { 2 } else { 3 };
        if digits.len() != degree_digits + 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedString);
        }

        macro_rules! value {
            ($index:expr) => {
                digits
                    .get($index)
                    .and_then(|s| s.parse::<u8>().ok())
                    .ok_or(Error::UnexpectedString)
            };
        }

        Self::new(
            value!(0..degree_digits)?,
            value!(degree_digits..degree_digits + 2)?,
            value!(degree_digits + 2..degree_digits + 4)?,
            hemisphere,
        )
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.hemisphere.is_latitude() { 2 } else { 3 };
        write!(
            f,
            "{:0width$}{:02}{:02}{:?}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

/// A waypoint with its coordinates and the magnetic variation if known.
///
/// The magnetic variation is positive to the west and added to a true
/// direction to get the magnetic direction.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    code: String,
    name: String,
    latitude: Dms,
    longitude: Dms,
    magnetic_variation: Option<f64>,
}

impl Waypoint {
    /// Creates a new waypoint.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if the latitude is not in the north or
    /// south or the longitude not in the east or west.
    ///
    /// [`InvalidCoordinate`]: Error::InvalidCoordinate
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        latitude: Dms,
        longitude: Dms,
    ) -> Result<Self> {
        if !latitude.hemisphere.is_latitude() {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {latitude} should be north or south"
            )));
        }

        if longitude.hemisphere.is_latitude() {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {longitude} should be east or west"
            )));
        }

        Ok(Self {
            code: code.into(),
            name: name.into(),
            latitude,
            longitude,
            magnetic_variation: None,
        })
    }

    /// Sets the magnetic variation at the waypoint.
    pub fn with_magnetic_variation(mut self, variation: f64) -> Self {
        self.magnetic_variation = Some(variation);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn magnetic_variation(&self) -> Option<f64> {
        self.magnetic_variation
    }

    /// Latitude in radians.
    pub fn lat(&self) -> f64 {
        self.latitude.radians()
    }

    /// Longitude in radians.
    pub fn lon(&self) -> f64 {
        self.longitude.radians()
    }

    /// The waypoint's position with longitude as x and latitude as y in
    /// degrees.
    pub fn coordinate(&self) -> Point<f64> {
        coord!(self.latitude.decimal(), self.longitude.decimal())
    }

    /// Position on the earth's surface in nautical miles.
    pub fn cartesian(&self) -> Vector3<f64> {
        geom::cartesian(self.lat(), self.lon())
    }

    /// Great arc distance to the other waypoint in whole nautical miles.
    pub fn great_arc_to(&self, other: &Waypoint) -> f64 {
        geom::great_arc(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// True track to the other waypoint in whole degrees.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeometry`] if both waypoints share their position.
    ///
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    pub fn true_track_to(&self, other: &Waypoint) -> Result<i32> {
        geom::true_track(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Unrounded true track to the other waypoint in degrees.
    pub fn true_track_precise_to(&self, other: &Waypoint) -> Result<f64> {
        geom::true_track_precise(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Returns `true` if both waypoints are less than half a nautical mile
    /// apart.
    pub fn is_equal(&self, other: &Waypoint) -> bool {
        self.great_arc_to(other) < 0.5
    }

    /// Magnetic variation between this and the other waypoint.
    ///
    /// This is the average if both variations are known, the known one if
    /// only one is and zero if neither is.
    pub fn magnetic_variation_to(&self, other: &Waypoint) -> f64 {
        match (self.magnetic_variation, other.magnetic_variation) {
            (Some(a), Some(b)) => (a + b) / 2.0,
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => 0.0,
        }
    }

    /// Returns `true` if the magnetic variation is set and not virtually
    /// zero.
    pub fn has_known_variation(&self) -> bool {
        self.magnetic_variation
            .is_some_and(|v| v.abs() > VARIATION_EPSILON)
    }

    /// Rotation into the frame whose x-axis points along the track to the
    /// other waypoint.
    pub fn rotation_to(&self, other: &Waypoint) -> Result<Matrix3<f64>> {
        geom::rotation_matrix(self.lat(), self.lon(), other.lat(), other.lon())
    }

    /// Returns the point at the average latitude and longitude of both
    /// waypoints in degrees.
    pub fn halfway_to(&self, other: &Waypoint) -> Point<f64> {
        coord!(
            (self.latitude.decimal() + other.latitude.decimal()) / 2.0,
            (self.longitude.decimal() + other.longitude.decimal()) / 2.0
        )
    }

    /// Returns points every `interval_nm` along the track to the other
    /// waypoint, starting at this waypoint.
    pub fn interval_coordinates_to(
        &self,
        other: &Waypoint,
        interval_nm: f64,
    ) -> Result<Vec<Point<f64>>> {
        geom::interval_coordinates(self.lat(), self.lon(), other.lat(), other.lon(), interval_nm)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.code, self.latitude, self.longitude)
    }
}
