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

use std::collections::BTreeMap;

use log::{trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::WeightBalancePoint;
use crate::constants::FUEL_EPSILON_GAL;
use crate::fc;

/// A fuel tank loaded with fuel.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelTank {
    pub id: u32,
    pub name: String,
    pub arm_in: f64,
    /// Tanks are emptied in ascending sequence. Tanks sharing a sequence
    /// are emptied together.
    pub burn_sequence: u32,
    /// Usable fuel in the tank.
    pub gallons: f64,
}

/// Fuel of a tank with its weight at the tank's arm.
///
/// Fuel that is burned has a negative weight.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TankFuel {
    pub tank_id: u32,
    pub name: String,
    pub gallons: f64,
    pub point: WeightBalancePoint,
}

impl TankFuel {
    /// Fuel loaded into the tank.
    pub fn loaded(tank: &FuelTank, density: f64) -> Self {
        Self::with_weight(tank, tank.gallons, fc::round_dp(tank.gallons * density, 2))
    }

    /// Fuel burned from the tank.
    pub fn burned(tank: &FuelTank, gallons: f64, density: f64) -> Self {
        Self::with_weight(tank, gallons, -fc::round_dp(gallons * density, 2))
    }

    fn with_weight(tank: &FuelTank, gallons: f64, weight_lb: f64) -> Self {
        Self {
            tank_id: tank.id,
            name: tank.name.clone(),
            gallons,
            point: WeightBalancePoint::new(weight_lb, tank.arm_in),
        }
    }
}

/// Fuel drawn from the tanks before takeoff and in flight.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelBurn {
    pub pre_takeoff: Vec<TankFuel>,
    pub in_flight: Vec<TankFuel>,
}

/// Draws the taxi fuel and the fuel burned in flight from the tanks.
///
/// Both are drawn sequence by sequence, starting with the lowest burn
/// sequence. Within a sequence every tank gives an equal share, and a tank
/// that runs dry passes the rest of its share on to the fuller tanks. A
/// sequence is only left once all its tanks are empty, so taxi fuel the
/// lowest sequence can't supply is taken from the next one.
pub fn sequence_fuel_burn(
    tanks: &[FuelTank],
    taxi_gallons: f64,
    gallons_burned: f64,
    density: f64,
) -> FuelBurn {
    let mut sequences: BTreeMap<u32, Vec<FuelTank>> = BTreeMap::new();
    for tank in tanks {
        sequences
            .entry(tank.burn_sequence)
            .or_default()
            .push(tank.clone());
    }

    let pre_takeoff = draw(&mut sequences, taxi_gallons, density);
    let in_flight = draw(&mut sequences, gallons_burned, density);

    FuelBurn {
        pre_takeoff,
        in_flight,
    }
}

fn draw(
    sequences: &mut BTreeMap<u32, Vec<FuelTank>>,
    gallons: f64,
    density: f64,
) -> Vec<TankFuel> {
    let mut remaining = gallons;
    let mut burned = Vec::new();

    for (sequence, group) in sequences.iter_mut() {
        if remaining < FUEL_EPSILON_GAL {
            break;
        }

        let total: f64 = group.iter().map(|tank| tank.gallons).sum();
        trace!("drawing {remaining:.2} gal from sequence {sequence} holding {total:.2} gal");

        if remaining > total {
            for tank in group.iter_mut().filter(|tank| tank.gallons > 0.0) {
                burned.push(TankFuel::burned(tank, tank.gallons, density));
                tank.gallons = 0.0;
            }
            remaining -= total;
            continue;
        }

        group.sort_by(|a, b| a.gallons.total_cmp(&b.gallons));

        let count = group.len();
        for (i, tank) in group.iter_mut().enumerate() {
            let share = remaining / (count - i) as f64;
            let take = share.min(tank.gallons);
            remaining -= take;
            tank.gallons -= take;
            burned.push(TankFuel::burned(tank, take, density));
        }
    }

    if remaining >= FUEL_EPSILON_GAL {
        warn!("{remaining:.2} gal exceed the fuel in the tanks");
    }

    burned
}
