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

//! Mass & Balance.
//!
//! A [`WeightBalanceReport`] sums the weight and moment of the aircraft's
//! loading stations and fuel tanks into the chain of empty, zero-fuel,
//! ramp, takeoff and landing weight. The fuel burned in flight is drawn
//! from the tanks in their burn sequence. Takeoff and landing are finally
//! checked against the [`Envelope`]s of the aircraft.

mod envelope;
mod fuel_burn;
mod point;
mod report;

pub use envelope::Envelope;
pub use fuel_burn::{sequence_fuel_burn, FuelBurn, FuelTank, TankFuel};
pub use point::WeightBalancePoint;
pub use report::{Loading, LoadingStation, StationWeight, WeightBalanceProfile, WeightBalanceReport};
