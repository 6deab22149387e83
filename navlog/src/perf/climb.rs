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

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{interpolate, PerformanceProfile, TableProvider};
use crate::constants::CLIMB_THRESHOLD_FT;
use crate::error::Result;
use crate::fc;

/// Conditions of a climb between two pressure altitudes.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbConditions {
    pub weight_lb: f64,
    pub pressure_alt_from_ft: f64,
    pub pressure_alt_to_ft: f64,
    /// Outside air temperature during the climb.
    pub temperature_c: f64,
    /// Distance within which the climb must be completed.
    pub available_distance_nm: Option<f64>,
}

/// Time, fuel and distance to climb and the pressure altitude reached.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbPerformance {
    pub time_min: i32,
    pub fuel_gal: f64,
    pub distance_nm: i32,
    /// The pressure altitude reached at the end of the climb.
    pub pressure_alt_ft: i32,
}

impl ClimbPerformance {
    fn level(pressure_alt_ft: f64) -> Self {
        Self {
            time_min: 0,
            fuel_gal: 0.0,
            distance_nm: 0,
            pressure_alt_ft: fc::round_int(pressure_alt_ft),
        }
    }
}

/// Returns the time, fuel and distance to climb.
///
/// The climb table is looked up at both pressure altitudes and the
/// difference is the cost of the climb. Both lookups are increased by the
/// profile's climb temperature correction for every degree the actual
/// temperature exceeds the table's temperature at the target altitude.
///
/// Climbs of less than 1000 ft are not modeled and cost nothing. If the
/// climb needs more than the available distance, the pressure altitude
/// reached within the distance is estimated from the average rate of climb.
pub fn get_climb_data<T>(
    tables: &T,
    profile: &PerformanceProfile,
    conditions: &ClimbConditions,
) -> Result<ClimbPerformance>
where
    T: TableProvider + ?Sized,
{
    let from = conditions.pressure_alt_from_ft;
    let to = conditions.pressure_alt_to_ft;

    if to - from < CLIMB_THRESHOLD_FT {
        trace!("no climb from {from} ft to {to} ft");
        return Ok(ClimbPerformance::level(to));
    }

    let rows = tables.climb(profile.id)?;
    let upper = interpolate(&*rows, &[conditions.weight_lb, to])?;
    let lower = interpolate(&*rows, &[conditions.weight_lb, from])?;

    let standard_temperature = upper.values[0];
    let correction = 1.0
        + profile.climb_temperature_increase_pct / 100.0
            * (conditions.temperature_c - standard_temperature).max(0.0);

    let cost = |i: usize| ((upper.values[i] - lower.values[i]) * correction).max(0.0);
    let mut time = cost(1);
    let mut fuel = cost(2);
    let mut distance = cost(3);
    let mut reached = to;

    debug!(
        "climb from {from} ft to {to} ft: {time:.1} min, {fuel:.2} gal, {distance:.1} NM \
         with correction {correction:.3}"
    );

    if let Some(available) = conditions.available_distance_nm {
        if available < distance && time > 0.0 {
            let rate_of_climb = (to - from) / time;
            let speed = distance / time;
            let available_time = available.max(0.0) / speed;

            reached = from + rate_of_climb * available_time;
            fuel *= available_time / time;
            time = available_time;
            distance = available.max(0.0);

            debug!("climb limited to {reached:.0} ft within {available} NM");
        }
    }

    Ok(ClimbPerformance {
        time_min: fc::round_int(time),
        fuel_gal: fc::round_dp(fuel, 2),
        distance_nm: fc::round_int(distance),
        pressure_alt_ft: fc::round_int(reached),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FuelType;
    use crate::perf::{ClimbRow, PerformanceTables};

    fn tables() -> (PerformanceTables, PerformanceProfile) {
        let row = |pressure_alt_ft, temperature_c, time_min, fuel_gal, distance_nm| ClimbRow {
            weight_lb: 2400.0,
            pressure_alt_ft,
            temperature_c,
            time_min,
            fuel_gal,
            distance_nm,
        };

        let mut profile = PerformanceProfile::new(1, "test", FuelType::AvGas);
        profile.climb_temperature_increase_pct = 10.0;

        let mut tables = PerformanceTables::new();
        tables.add_profile(profile.clone());
        tables
            .add_climb(
                1,
                [
                    row(0.0, 15.0, 0.0, 0.0, 0.0),
                    row(2000.0, 11.0, 4.0, 1.0, 6.0),
                    row(4000.0, 7.0, 8.0, 2.0, 12.0),
                ],
            )
            .unwrap();
        (tables, profile)
    }

    fn climb(from: f64, to: f64, temperature_c: f64, available: Option<f64>) -> ClimbPerformance {
        let (tables, profile) = tables();
        let conditions = ClimbConditions {
            weight_lb: 2400.0,
            pressure_alt_from_ft: from,
            pressure_alt_to_ft: to,
            temperature_c,
            available_distance_nm: available,
        };
        get_climb_data(&tables, &profile, &conditions).unwrap()
    }

    #[test]
    fn difference_of_lookups() {
        let perf = climb(1000.0, 4000.0, 7.0, None);
        assert_eq!(perf.time_min, 6);
        assert_eq!(perf.fuel_gal, 1.5);
        assert_eq!(perf.distance_nm, 9);
        assert_eq!(perf.pressure_alt_ft, 4000);
    }

    #[test]
    fn warm_climb_takes_longer() {
        // 2 °C above standard at 4000 ft increase the climb by 20%
        let perf = climb(0.0, 4000.0, 9.0, None);
        assert_eq!(perf.time_min, 10);
        assert_eq!(perf.fuel_gal, 2.4);
        assert_eq!(perf.distance_nm, 14);

        let perf = climb(0.0, 4000.0, -10.0, None);
        assert_eq!(perf.time_min, 8);
    }

    #[test]
    fn short_climb_is_not_modeled() {
        let perf = climb(3500.0, 4000.0, 7.0, None);
        assert_eq!(
            perf,
            ClimbPerformance {
                time_min: 0,
                fuel_gal: 0.0,
                distance_nm: 0,
                pressure_alt_ft: 4000,
            }
        );

        // descents need no table either
        let empty = PerformanceTables::new();
        let profile = PerformanceProfile::new(9, "none", FuelType::AvGas);
        let conditions = ClimbConditions {
            weight_lb: 2400.0,
            pressure_alt_from_ft: 6000.0,
            pressure_alt_to_ft: 2000.0,
            temperature_c: 0.0,
            available_distance_nm: Some(1.0),
        };
        assert_eq!(
            get_climb_data(&empty, &profile, &conditions).map(|c| c.pressure_alt_ft),
            Ok(2000)
        );
    }

    #[test]
    fn climb_limited_by_distance() {
        // 12 NM are needed but only 6 NM are available
        let perf = climb(0.0, 4000.0, 7.0, Some(6.0));
        assert_eq!(perf.distance_nm, 6);
        assert_eq!(perf.time_min, 4);
        assert_eq!(perf.fuel_gal, 1.0);
        assert_eq!(perf.pressure_alt_ft, 2000);
    }
}
