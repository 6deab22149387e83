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

//! Flight Computer.

use crate::constants::{PhysicalConstants, FT_PER_INHG, KELVIN_IN_CELSIUS, STD_ALTIMETER_INHG};

/// Converts an angle from degree minutes and seconds to decimal.
pub fn dms_to_decimal(degree: u8, minutes: u8, seconds: u8) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

/// Rounds the value to the number of decimal places.
///
/// Ties are rounded to the even neighbour.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Rounds the value to the nearest integer.
pub fn round_int(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Normalizes a whole-degree angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> i32 {
    round_int(angle).rem_euclid(360)
}

/// Converts an altitude read with the altimeter setting to pressure altitude.
///
/// With `reverse` set the pressure altitude is converted back to the
/// altitude indicated with this altimeter setting.
///
/// # Examples
///
/// ```
/// use navlog::fc::pressure_altitude;
///
/// assert_eq!(pressure_altitude(1000.0, 29.42, false), 1500);
/// assert_eq!(pressure_altitude(1500.0, 29.42, true), 1000);
/// ```
pub fn pressure_altitude(altitude_ft: f64, altimeter_inhg: f64, reverse: bool) -> i32 {
    let correction = FT_PER_INHG * (STD_ALTIMETER_INHG - altimeter_inhg);

    if reverse {
        round_int(altitude_ft - correction)
    } else {
        round_int(altitude_ft + correction)
    }
}

/// The solved wind triangle of a leg.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WindTriangle {
    /// Ground speed in knots.
    pub ground_speed: i32,
    /// Wind correction angle in degrees.
    pub wca: f64,
    /// True heading in `[0, 360)`.
    pub true_heading: i32,
}

/// Solves the wind triangle for a true track, true airspeed and the wind.
///
/// The wind direction is where the wind is blowing from.
pub fn solve_wind_triangle(
    true_track: f64,
    ktas: f64,
    wind_direction: f64,
    wind_speed: f64,
) -> WindTriangle {
    let wind_angle = (wind_direction - true_track).to_radians();
    let ground_speed = ktas - wind_speed * wind_angle.cos();
    let wca = if ktas > 0.0 {
        (wind_speed * wind_angle.sin() / ktas).atan().to_degrees()
    } else {
        0.0
    };

    WindTriangle {
        ground_speed: round_int(ground_speed),
        wca,
        true_heading: normalize_degrees(true_track + wca),
    }
}

/// Calculates the calibrated from the true airspeed.
///
/// The air density is derived from the pressure at the pressure altitude
/// and the temperature by the ideal gas law. Compressibility is neglected.
pub fn kcas(ktas: f64, pressure_alt_ft: f64, temperature_c: f64, c: &PhysicalConstants) -> i32 {
    let pressure_pa = (c.sea_level_pressure_hpa - pressure_alt_ft / c.ft_per_hpa) * 100.0;
    let temperature_k = temperature_c + KELVIN_IN_CELSIUS;
    let density_ratio = c.gas_constant * temperature_k * c.sea_level_density / pressure_pa;

    round_int(ktas / density_ratio.sqrt())
}

/// Head- and crosswind component on a runway.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct WindComponents {
    /// Headwind in knots. A tailwind is negative.
    pub headwind: i32,
    /// Crosswind in knots. Wind from the right is positive.
    pub crosswind: i32,
}

/// Splits the wind into its components along a runway.
///
/// The runway number is the magnetic heading in tens of degrees and
/// converted to true with the magnetic variation.
pub fn runway_wind_components(
    wind_direction_true: f64,
    wind_speed: f64,
    runway_number: u8,
    magnetic_variation: f64,
) -> WindComponents {
    let runway_true = runway_number as f64 * 10.0 - magnetic_variation;
    let angle = (wind_direction_true - runway_true).to_radians();

    WindComponents {
        headwind: round_int(wind_speed * angle.cos()),
        crosswind: round_int(wind_speed * angle.sin()),
    }
}

/// Rounds a minimum altitude up to its next hundred feet.
pub fn round_altitude_to_hundred(min_altitude_ft: i32) -> i32 {
    match min_altitude_ft.rem_euclid(100) {
        0 => min_altitude_ft,
        remainder => min_altitude_ft + 100 - remainder,
    }
}

/// Returns the lowest VFR cruising altitude at or above the minimum.
///
/// Above 3000 ft the cruising altitude is an odd thousand plus 500 ft for
/// magnetic tracks from 0° to 179° and an even thousand plus 500 ft
/// otherwise.
///
/// # Examples
///
/// ```
/// use navlog::fc::vfr_cruising_altitude;
///
/// assert_eq!(vfr_cruising_altitude(4200, 90), 5500);
/// assert_eq!(vfr_cruising_altitude(4400, 270), 4500);
/// assert_eq!(vfr_cruising_altitude(2450, 270), 2500);
/// ```
pub fn vfr_cruising_altitude(min_altitude_ft: i32, magnetic_track: i32) -> i32 {
    let rounded = round_altitude_to_hundred(min_altitude_ft);
    if rounded <= 3000 {
        return rounded;
    }

    let easterly = magnetic_track.rem_euclid(360) < 180;
    let mut thousands = min_altitude_ft.div_euclid(1000);
    if thousands * 1000 + 500 < min_altitude_ft {
        thousands += 1;
    }
    if (thousands % 2 == 1) != easterly {
        thousands += 1;
    }

    thousands * 1000 + 500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_altitude_reverses() {
        assert_eq!(pressure_altitude(2000.0, 30.12, false), 1800);
        assert_eq!(pressure_altitude(1800.0, 30.12, true), 2000);
        assert_eq!(pressure_altitude(500.0, 29.92, false), 500);
    }

    #[test]
    fn wind_triangle_with_headwind() {
        let triangle = solve_wind_triangle(90.0, 100.0, 90.0, 20.0);
        assert_eq!(triangle.ground_speed, 80);
        assert_eq!(triangle.true_heading, 90);
    }

    #[test]
    fn wind_triangle_with_crosswind() {
        let triangle = solve_wind_triangle(360.0, 100.0, 90.0, 20.0);
        assert_eq!(triangle.ground_speed, 100);
        // arctan(0.2) = 11.3°
        assert_eq!(triangle.true_heading, 11);

        let triangle = solve_wind_triangle(0.0, 100.0, 270.0, 20.0);
        assert_eq!(triangle.true_heading, 349);
    }

    #[test]
    fn kcas_at_sea_level_equals_ktas() {
        let c = PhysicalConstants::default();
        assert_eq!(kcas(100.0, 0.0, 15.0, &c), 100);
        assert!(kcas(120.0, 8000.0, 0.0, &c) < 120);
    }

    #[test]
    fn runway_components() {
        let wind = runway_wind_components(270.0, 10.0, 27, 0.0);
        assert_eq!(wind, WindComponents { headwind: 10, crosswind: 0 });

        let wind = runway_wind_components(90.0, 10.0, 27, 0.0);
        assert_eq!(wind.headwind, -10);

        let wind = runway_wind_components(360.0, 10.0, 27, 0.0);
        assert_eq!(wind, WindComponents { headwind: 0, crosswind: 10 });

        // runway 09 with 10° west variation points to 080° true
        let wind = runway_wind_components(80.0, 15.0, 9, 10.0);
        assert_eq!(wind.headwind, 15);
    }

    #[test]
    fn cruising_altitudes() {
        assert_eq!(round_altitude_to_hundred(3001), 3100);
        assert_eq!(round_altitude_to_hundred(3000), 3000);
        assert_eq!(vfr_cruising_altitude(3000, 90), 3000);
        assert_eq!(vfr_cruising_altitude(3500, 90), 3500);
        assert_eq!(vfr_cruising_altitude(3600, 90), 5500);
        assert_eq!(vfr_cruising_altitude(3600, 180), 4500);
        assert_eq!(vfr_cruising_altitude(6500, 359), 6500);
        assert_eq!(vfr_cruising_altitude(6501, 359), 8500);
    }

    #[test]
    fn rounds_ties_to_even() {
        assert_eq!(round_dp(12.3456, 2), 12.35);
        assert_eq!(round_int(2.5), 2);
        assert_eq!(normalize_degrees(-0.4), 0);
        assert_eq!(normalize_degrees(359.6), 0);
        assert_eq!(normalize_degrees(-10.0), 350);
    }
}
