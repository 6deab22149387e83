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

//! Flight Planning.
//!
//! The [`FlightPlanningBuilder`] puts the pieces of a flight together: the
//! navigation log of the legs, the fuel calculation, the takeoff and
//! landing distances on the runways of the departure and arrival
//! aerodrome, and the weight & balance of the loaded aircraft.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mb::WeightBalanceReport;
use crate::route::NavLog;

mod builder;
mod fuel;
mod loading;
mod runway;

pub use builder::FlightPlanningBuilder;
pub use fuel::{FuelAmount, FuelCalculation, FuelPolicy};
pub use loading::{get_takeoff_weight, load, Baggage, PersonOnBoard, WeightSource};
pub use runway::{runway_distances, Aerodrome, Runway, RunwayDistance};

/// The planning of a flight.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightPlanning {
    pub nav_log: NavLog,
    pub fuel: FuelCalculation,
    pub takeoff_weight_lb: f64,
    pub landing_weight_lb: f64,
    /// Takeoff distances on the runways of the departure aerodrome.
    pub takeoff_distances: Vec<RunwayDistance>,
    /// Landing distances on the runways of the arrival aerodrome.
    pub landing_distances: Vec<RunwayDistance>,
    pub weight_balance: WeightBalanceReport,
}
