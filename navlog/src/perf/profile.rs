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

use std::borrow::Cow;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::FuelType;
use crate::error::Result;

/// Whether a runway is used to take off or to land.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayOperation {
    Takeoff,
    Landing,
}

/// Corrections of the tabulated takeoff or landing distances.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayCorrections {
    /// Percent the distances decrease per knot of headwind.
    pub headwind_decrease_pct: f64,
    /// Percent the distances increase per knot of tailwind.
    pub tailwind_increase_pct: f64,
    /// Percent the distances increase on a runway surface by the surface's
    /// id. Surfaces without an entry need no correction.
    pub surface_increase_pct: HashMap<u32, f64>,
}

impl RunwayCorrections {
    /// Percent per knot to correct for the wind. Negative headwinds are
    /// tailwinds.
    pub fn wind_pct(&self, headwind: f64) -> f64 {
        if headwind >= 0.0 {
            self.headwind_decrease_pct
        } else {
            self.tailwind_increase_pct
        }
    }

    /// Percent to correct for the runway surface.
    pub fn surface_pct(&self, surface_id: u32) -> f64 {
        self.surface_increase_pct
            .get(&surface_id)
            .copied()
            .unwrap_or_default()
    }
}

/// An aircraft's performance profile.
///
/// The profile identifies the tables to look up and carries the
/// corrections applied to the tabulated values.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceProfile {
    pub id: u32,
    pub name: String,
    pub fuel_type: FuelType,
    /// Fuel burned before takeoff e.g. to taxi and run up.
    pub taxi_fuel_gallons: f64,
    pub takeoff: RunwayCorrections,
    pub landing: RunwayCorrections,
    /// Percent the climb increases per °C above the standard temperature.
    pub climb_temperature_increase_pct: f64,
}

impl PerformanceProfile {
    /// Creates a profile without any corrections.
    pub fn new(id: u32, name: impl Into<String>, fuel_type: FuelType) -> Self {
        Self {
            id,
            name: name.into(),
            fuel_type,
            taxi_fuel_gallons: 0.0,
            takeoff: RunwayCorrections::default(),
            landing: RunwayCorrections::default(),
            climb_temperature_increase_pct: 0.0,
        }
    }

    /// Density of the profile's fuel in lb/gal.
    pub fn fuel_density(&self) -> f64 {
        self.fuel_type.density()
    }

    pub fn runway_corrections(&self, operation: RunwayOperation) -> &RunwayCorrections {
        match operation {
            RunwayOperation::Takeoff => &self.takeoff,
            RunwayOperation::Landing => &self.landing,
        }
    }
}

/// Provides performance profiles by their id.
pub trait ProfileProvider {
    fn profile(&self, profile_id: u32) -> Result<Cow<'_, PerformanceProfile>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_correction_by_direction() {
        let corrections = RunwayCorrections {
            headwind_decrease_pct: 1.5,
            tailwind_increase_pct: 10.0,
            ..Default::default()
        };
        assert_eq!(corrections.wind_pct(5.0), 1.5);
        assert_eq!(corrections.wind_pct(0.0), 1.5);
        assert_eq!(corrections.wind_pct(-2.0), 10.0);
    }

    #[test]
    fn unknown_surface_needs_no_correction() {
        let mut corrections = RunwayCorrections::default();
        corrections.surface_increase_pct.insert(2, 15.0);
        assert_eq!(corrections.surface_pct(2), 15.0);
        assert_eq!(corrections.surface_pct(1), 0.0);
    }
}
