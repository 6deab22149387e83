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

use crate::mb::{FuelTank, Loading};

/// Where the weight of a person on board comes from.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightSource {
    /// Weight entered for this flight.
    Explicit(f64),
    /// Stored weight of a registered user.
    User { user_id: u32, weight_lb: f64 },
    /// Stored weight of a passenger profile.
    PassengerProfile { profile_id: u32, weight_lb: f64 },
}

impl WeightSource {
    pub fn weight(&self) -> f64 {
        match self {
            Self::Explicit(weight_lb) => *weight_lb,
            Self::User { weight_lb, .. } => *weight_lb,
            Self::PassengerProfile { weight_lb, .. } => *weight_lb,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonOnBoard {
    pub name: String,
    pub seat_id: u32,
    pub source: WeightSource,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Baggage {
    pub name: String,
    pub compartment_id: u32,
    pub weight_lb: f64,
}

/// Returns the weight at takeoff.
///
/// This is the empty weight with the persons, baggage and fuel on board
/// less the fuel burned before takeoff.
pub fn get_takeoff_weight(
    empty_weight_lb: f64,
    persons: &[PersonOnBoard],
    baggage: &[Baggage],
    fuel_gallons: f64,
    density: f64,
    taxi_gallons: f64,
) -> f64 {
    let persons: f64 = persons.iter().map(|person| person.source.weight()).sum();
    let baggage: f64 = baggage.iter().map(|baggage| baggage.weight_lb).sum();

    empty_weight_lb + persons + baggage + fuel_gallons * density - taxi_gallons * density
}

/// Loads the persons, baggage and tanks by their stations.
pub fn load(persons: &[PersonOnBoard], baggage: &[Baggage], tanks: &[FuelTank]) -> Loading {
    let mut loading = Loading::new();

    for person in persons {
        loading.seat(person.seat_id, person.source.weight());
    }

    for baggage in baggage {
        loading.compartment(baggage.compartment_id, baggage.weight_lb);
    }

    for tank in tanks {
        loading.tank(tank.clone());
    }

    loading
}
