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

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::Wind;
use crate::error::Result;
use crate::fc;
use crate::nd::{VariationIndex, Waypoint};
use crate::perf::{
    get_landing_takeoff_data, PerformanceProfile, RunwayConditions, RunwayOperation,
    TableProvider,
};

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub id: u32,
    /// Magnetic heading in tens of degrees.
    pub number: u8,
    /// Left, center or right.
    pub position: Option<char>,
    pub length_ft: i32,
    pub landing_length_ft: i32,
    pub intersection_departure_length_ft: Option<i32>,
    pub surface_id: u32,
}

impl Runway {
    /// Returns the designator, e.g. `09L`.
    pub fn designator(&self) -> String {
        match self.position {
            Some(position) => format!("{:02}{position}", self.number),
            None => format!("{:02}", self.number),
        }
    }

    pub fn length_available(&self, operation: RunwayOperation) -> i32 {
        match operation {
            RunwayOperation::Takeoff => self.length_ft,
            RunwayOperation::Landing => self.landing_length_ft,
        }
    }
}

/// An aerodrome with its runways and weather.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    pub waypoint: Waypoint,
    pub elevation_ft: i32,
    pub runways: Vec<Runway>,
    pub altimeter_inhg: f64,
    pub temperature_c: f64,
    /// Wind with a true direction.
    pub wind: Wind,
}

impl Aerodrome {
    pub fn pressure_altitude(&self) -> i32 {
        fc::pressure_altitude(self.elevation_ft as f64, self.altimeter_inhg, false)
    }
}

/// Takeoff or landing distance on a runway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayDistance {
    pub runway_id: u32,
    pub runway: String,
    pub length_available_ft: i32,
    pub intersection_departure_length_ft: Option<i32>,
    pub weight_lb: f64,
    pub pressure_alt_ft: i32,
    pub truncated_pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub truncated_temperature_c: f64,
    pub headwind: i32,
    pub crosswind: i32,
    pub groundroll_ft: i32,
    pub obstacle_clearance_ft: i32,
}

impl RunwayDistance {
    /// Returns `true` if a 50 ft obstacle is cleared within the runway.
    pub fn is_sufficient(&self) -> bool {
        self.obstacle_clearance_ft <= self.length_available_ft
    }
}

/// Returns the takeoff or landing distances on all runways of the
/// aerodrome.
///
/// The wind is split into the components of each runway with the magnetic
/// variation at the aerodrome.
pub fn runway_distances<T>(
    tables: &T,
    profile: &PerformanceProfile,
    operation: RunwayOperation,
    aerodrome: &Aerodrome,
    weight_lb: f64,
    variations: &VariationIndex,
) -> Result<Vec<RunwayDistance>>
where
    T: TableProvider + ?Sized,
{
    let pressure_alt = aerodrome.pressure_altitude();
    let variation = variations.variation_for_leg(&aerodrome.waypoint, &aerodrome.waypoint);

    aerodrome
        .runways
        .iter()
        .map(|runway| {
            let wind = fc::runway_wind_components(
                aerodrome.wind.direction,
                aerodrome.wind.speed,
                runway.number,
                variation,
            );

            let perf = get_landing_takeoff_data(
                tables,
                profile,
                operation,
                &RunwayConditions {
                    weight_lb,
                    pressure_alt_ft: pressure_alt as f64,
                    temperature_c: aerodrome.temperature_c,
                    surface_id: runway.surface_id,
                    headwind: wind.headwind as f64,
                },
            )?;

            debug!(
                "{operation:?} on {} at {}: {} ft ground roll, {} ft to clear obstacle",
                runway.designator(),
                aerodrome.waypoint.code(),
                perf.groundroll_ft,
                perf.obstacle_clearance_ft
            );

            Ok(RunwayDistance {
                runway_id: runway.id,
                runway: runway.designator(),
                length_available_ft: runway.length_available(operation),
                intersection_departure_length_ft: runway.intersection_departure_length_ft,
                weight_lb,
                pressure_alt_ft: pressure_alt,
                truncated_pressure_alt_ft: perf.truncated_pressure_alt_ft,
                temperature_c: aerodrome.temperature_c,
                truncated_temperature_c: perf.truncated_temperature_c,
                headwind: wind.headwind,
                crosswind: wind.crosswind,
                groundroll_ft: perf.groundroll_ft,
                obstacle_clearance_ft: perf.obstacle_clearance_ft,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designator_has_two_digits() {
        let mut runway = Runway {
            id: 1,
            number: 9,
            position: Some('L'),
            length_ft: 3000,
            landing_length_ft: 2800,
            intersection_departure_length_ft: None,
            surface_id: 1,
        };
        assert_eq!(runway.designator(), "09L");
        assert_eq!(runway.length_available(RunwayOperation::Landing), 2800);

        runway.number = 27;
        runway.position = None;
        assert_eq!(runway.designator(), "27");
    }
}
