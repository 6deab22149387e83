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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fc;
use crate::route::NavLogTotals;

/// The time of fuel planned on top of the flight.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelPolicy {
    /// Enroute time added to the flight, e.g. for holdings.
    pub added_enroute_hours: f64,
    pub reserve_hours: f64,
    pub contingency_hours: f64,
}

/// Fuel for a time at the average fuel flow.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelAmount {
    pub hours: f64,
    pub gallons: f64,
}

impl FuelAmount {
    fn at(hours: f64, average_gph: f64) -> Self {
        Self {
            hours,
            gallons: fc::round_dp(hours * average_gph, 2),
        }
    }
}

/// The fuel required for a flight and the fuel on board.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelCalculation {
    pub pre_takeoff_gallons: f64,
    pub climb_gallons: f64,
    /// Average cruise fuel flow of all legs.
    pub average_gph: f64,
    pub enroute: FuelAmount,
    pub additional: FuelAmount,
    pub reserve: FuelAmount,
    pub contingency: FuelAmount,
    pub gallons_on_board: f64,
}

impl FuelCalculation {
    /// Calculates the fuel of the flight from the navigation log totals.
    ///
    /// All enroute, additional, reserve and contingency fuel is planned at
    /// the average cruise fuel flow which is zero for a flight without
    /// time at cruise.
    pub fn new(
        totals: &NavLogTotals,
        policy: &FuelPolicy,
        taxi_gallons: f64,
        gallons_on_board: f64,
    ) -> Self {
        let average_gph = if totals.hours_enroute > 0.0 {
            fc::round_dp(totals.gallons_enroute / totals.hours_enroute, 1)
        } else {
            0.0
        };

        Self {
            pre_takeoff_gallons: taxi_gallons,
            climb_gallons: fc::round_dp(totals.climb_gallons, 2),
            average_gph,
            enroute: FuelAmount::at(totals.hours_enroute, average_gph),
            additional: FuelAmount::at(policy.added_enroute_hours, average_gph),
            reserve: FuelAmount::at(policy.reserve_hours, average_gph),
            contingency: FuelAmount::at(policy.contingency_hours, average_gph),
            gallons_on_board: fc::round_dp(gallons_on_board, 2),
        }
    }

    /// Fuel needed for the flight including all reserves.
    pub fn required_gallons(&self) -> f64 {
        self.pre_takeoff_gallons
            + self.climb_gallons
            + self.enroute.gallons
            + self.additional.gallons
            + self.reserve.gallons
            + self.contingency.gallons
    }

    /// Fuel on board beyond the required fuel. Negative if short of fuel.
    pub fn extra_gallons(&self) -> f64 {
        fc::round_dp(self.gallons_on_board - self.required_gallons(), 2)
    }

    pub fn is_sufficient(&self) -> bool {
        self.extra_gallons() >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> NavLogTotals {
        NavLogTotals {
            climb_gallons: 1.5,
            hours_enroute: 2.0,
            gallons_enroute: 17.0,
            distance_nm: 220,
            time_min: 130,
        }
    }

    #[test]
    fn fuel_at_average_flow() {
        let policy = FuelPolicy {
            added_enroute_hours: 0.2,
            reserve_hours: 0.5,
            contingency_hours: 0.1,
        };
        let fuel = FuelCalculation::new(&totals(), &policy, 1.0, 40.0);

        assert_eq!(fuel.average_gph, 8.5);
        assert_eq!(fuel.enroute.gallons, 17.0);
        assert_eq!(fuel.additional.gallons, 1.7);
        assert_eq!(fuel.reserve.gallons, 4.25);
        assert_eq!(fuel.contingency.gallons, 0.85);
        assert!(fuel.is_sufficient());
        assert_eq!(fuel.extra_gallons(), 13.7);
    }

    #[test]
    fn no_cruise_has_no_flow() {
        let totals = NavLogTotals {
            climb_gallons: 1.0,
            ..Default::default()
        };
        let fuel = FuelCalculation::new(&totals, &FuelPolicy::default(), 1.0, 1.5);

        assert_eq!(fuel.average_gph, 0.0);
        assert_eq!(fuel.reserve.gallons, 0.0);
        assert!(!fuel.is_sufficient());
    }
}
