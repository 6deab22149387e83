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

use super::{interpolate, PerformanceProfile, TableProvider};
use crate::error::Result;
use crate::fc;

/// Conditions at cruise.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruiseConditions {
    pub weight_lb: f64,
    pub pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub bhp_percent: f64,
}

/// Cruise performance at a power setting.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruisePerformance {
    pub ktas: i32,
    /// Fuel flow in gallons per hour.
    pub gph: f64,
    pub rpm: i32,
    /// Pressure altitude the table was evaluated at.
    pub truncated_pressure_alt_ft: f64,
    /// Temperature the table was evaluated at.
    pub truncated_temperature_c: f64,
}

/// Returns the true airspeed, fuel flow and RPM at cruise.
pub fn get_cruise_data<T>(
    tables: &T,
    profile: &PerformanceProfile,
    conditions: &CruiseConditions,
) -> Result<CruisePerformance>
where
    T: TableProvider + ?Sized,
{
    let rows = tables.cruise(profile.id)?;
    let result = interpolate(
        &*rows,
        &[
            conditions.weight_lb,
            conditions.pressure_alt_ft,
            conditions.temperature_c,
            conditions.bhp_percent,
        ],
    )?;

    debug!("cruise table at {:?}: {:?}", result.targets, result.values);

    Ok(CruisePerformance {
        ktas: fc::round_int(result.values[0]),
        gph: fc::round_dp(result.values[1], 2),
        rpm: fc::round_int(result.values[2]),
        truncated_pressure_alt_ft: result.targets[1],
        truncated_temperature_c: result.targets[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FuelType;
    use crate::perf::{CruiseRow, PerformanceTables};

    #[test]
    fn interpolates_power_setting() {
        let row = |bhp_percent, rpm, ktas, gph| CruiseRow {
            weight_lb: 2400.0,
            pressure_alt_ft: 4000.0,
            temperature_c: 7.0,
            bhp_percent,
            rpm,
            ktas,
            gph,
        };

        let profile = PerformanceProfile::new(1, "test", FuelType::AvGas);
        let mut tables = PerformanceTables::new();
        tables.add_profile(profile.clone());
        tables
            .add_cruise(
                1,
                [
                    row(75.0, 2500.0, 118.0, 9.1),
                    row(55.0, 2300.0, 104.0, 7.0),
                ],
            )
            .unwrap();

        let conditions = CruiseConditions {
            weight_lb: 2300.0,
            pressure_alt_ft: 5500.0,
            temperature_c: 7.0,
            bhp_percent: 65.0,
        };

        let perf = get_cruise_data(&tables, &profile, &conditions).unwrap();
        assert_eq!(perf.ktas, 111);
        assert_eq!(perf.gph, 8.05);
        assert_eq!(perf.rpm, 2400);
        assert_eq!(perf.truncated_pressure_alt_ft, 4000.0);
    }
}
