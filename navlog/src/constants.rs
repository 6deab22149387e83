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

//! Physical and geometric constants used throughout the engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean earth radius in feet.
pub const EARTH_RADIUS_FT: f64 = 20_902_230.97;

/// Feet in one nautical mile.
pub const FT_IN_NM: f64 = 6076.12;

/// Mean earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = EARTH_RADIUS_FT / FT_IN_NM;

/// Standard altimeter setting in inches of mercury.
pub const STD_ALTIMETER_INHG: f64 = 29.92;

/// Feet of altitude per inch of mercury near the surface.
pub const FT_PER_INHG: f64 = 1000.0;

pub const KELVIN_IN_CELSIUS: f64 = 273.15;

/// Climbs of less than this difference in pressure altitude are flown at
/// cruise performance.
pub const CLIMB_THRESHOLD_FT: f64 = 1000.0;

/// Magnetic variations with an absolute value at or below are treated as
/// unknown.
pub const VARIATION_EPSILON: f64 = 1e-3;

/// Remaining fuel to burn below which a burn sequence stops.
pub const FUEL_EPSILON_GAL: f64 = 5e-3;

/// Tolerance for vector norms and angle sums in spherical geometry.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Constants of the atmosphere model used to derive calibrated airspeed.
///
/// The defaults describe dry air in the ICAO standard atmosphere.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalConstants {
    /// Specific gas constant of dry air in J/(kg·K).
    pub gas_constant: f64,
    /// Air density at sea level in kg/m³.
    pub sea_level_density: f64,
    /// Pressure at sea level in hPa.
    pub sea_level_pressure_hpa: f64,
    /// Feet of altitude per hPa of pressure drop.
    pub ft_per_hpa: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gas_constant: 287.05,
            sea_level_density: 1.225,
            sea_level_pressure_hpa: 1013.25,
            ft_per_hpa: 30.0,
        }
    }
}
