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

use super::{interpolate, PerformanceProfile, RunwayOperation, TableProvider};
use crate::error::Result;
use crate::fc;

/// Conditions on the runway at takeoff or landing.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayConditions {
    pub weight_lb: f64,
    pub pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub surface_id: u32,
    /// Headwind component in knots. A tailwind is negative.
    pub headwind: f64,
}

/// Corrected takeoff or landing distances.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayPerformance {
    pub groundroll_ft: i32,
    pub obstacle_clearance_ft: i32,
    /// Weight the table was evaluated at.
    pub truncated_weight_lb: f64,
    /// Pressure altitude the table was evaluated at.
    pub truncated_pressure_alt_ft: f64,
    /// Temperature the table was evaluated at.
    pub truncated_temperature_c: f64,
}

/// Returns the ground roll and the distance to clear a 50 ft obstacle.
///
/// The tabulated distances are corrected for the wind first and then
/// increased for the runway surface. The obstacle clearance increases by
/// the ground roll's surface correction.
pub fn get_landing_takeoff_data<T>(
    tables: &T,
    profile: &PerformanceProfile,
    operation: RunwayOperation,
    conditions: &RunwayConditions,
) -> Result<RunwayPerformance>
where
    T: TableProvider + ?Sized,
{
    let rows = match operation {
        RunwayOperation::Takeoff => tables.takeoff(profile.id)?,
        RunwayOperation::Landing => tables.landing(profile.id)?,
    };

    let result = interpolate(
        &*rows,
        &[
            conditions.weight_lb,
            conditions.pressure_alt_ft,
            conditions.temperature_c,
        ],
    )?;

    let (mut groundroll, mut obstacle) = (result.values[0], result.values[1]);
    debug!(
        "{operation:?} table at {:?}: groundroll {groundroll:.0} ft, obstacle {obstacle:.0} ft",
        result.targets
    );

    let corrections = profile.runway_corrections(operation);

    let wind_pct = corrections.wind_pct(conditions.headwind);
    groundroll -= conditions.headwind * wind_pct * groundroll / 100.0;
    obstacle -= conditions.headwind * wind_pct * obstacle / 100.0;

    let surface_pct = corrections.surface_pct(conditions.surface_id);
    obstacle += surface_pct * groundroll / 100.0;
    groundroll += surface_pct * groundroll / 100.0;

    Ok(RunwayPerformance {
        groundroll_ft: fc::round_int(groundroll),
        obstacle_clearance_ft: fc::round_int(obstacle),
        truncated_weight_lb: result.targets[0],
        truncated_pressure_alt_ft: result.targets[1],
        truncated_temperature_c: result.targets[2],
    })
}
