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

use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Div, Mul, Sub};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod constants {
    pub const AVGAS_LB_PER_GAL: f64 = 6.0;
    pub const MOGAS_LB_PER_GAL: f64 = 6.0;
    pub const DIESEL_LB_PER_GAL: f64 = 7.0;
    pub const JET_A_LB_PER_GAL: f64 = 6.7;
}

/// Type of fuel used by an aircraft.
///
/// Each fuel type has a density in pounds per US gallon used to convert
/// between the volume in the tanks and its weight.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelType {
    /// Aviation gasoline (100LL) with 6 lb/gal.
    AvGas,
    /// Automotive gasoline with 6 lb/gal.
    MoGas,
    /// Diesel with 7 lb/gal.
    Diesel,
    /// Jet-A with 6.7 lb/gal.
    JetA,
    /// Any other fuel with its density in lb/gal.
    Other { density_lb_gal: f64 },
}

impl FuelType {
    /// Returns the density in lb/gal.
    pub fn density(&self) -> f64 {
        match self {
            Self::AvGas => constants::AVGAS_LB_PER_GAL,
            Self::MoGas => constants::MOGAS_LB_PER_GAL,
            Self::Diesel => constants::DIESEL_LB_PER_GAL,
            Self::JetA => constants::JET_A_LB_PER_GAL,
            Self::Other { density_lb_gal } => *density_lb_gal,
        }
    }
}

/// Fuel quantity of a specific type in US gallons.
///
/// # Examples
///
/// ```
/// # use navlog::prelude::*;
/// let fuel = Fuel::new(10.0, FuelType::AvGas);
/// assert_eq!(fuel.weight(), 60.0);
///
/// let total = fuel + Fuel::new(5.0, FuelType::AvGas);
/// assert_eq!(total.gallons, 15.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fuel {
    pub fuel_type: FuelType,
    pub gallons: f64,
}

impl Fuel {
    pub fn new(gallons: f64, fuel_type: FuelType) -> Self {
        Self { fuel_type, gallons }
    }

    /// Creates fuel from its weight in lb.
    pub fn from_weight(weight_lb: f64, fuel_type: FuelType) -> Self {
        Self {
            fuel_type,
            gallons: weight_lb / fuel_type.density(),
        }
    }

    /// Returns the weight in lb.
    pub fn weight(&self) -> f64 {
        self.gallons * self.fuel_type.density()
    }

    /// Removes up to `rhs` from this fuel and returns what could be taken.
    ///
    /// Nothing is taken if there is not enough fuel left.
    pub fn take(&mut self, rhs: Fuel) -> Option<Fuel> {
        if rhs.gallons <= self.gallons {
            self.gallons -= rhs.gallons;
            Some(rhs)
        } else {
            None
        }
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tmp = if let Some(precision) = f.precision() {
            format!("{:.precision$} gal", self.gallons)
        } else {
            format!("{} gal", self.gallons)
        };

        f.pad_integral(true, "", &tmp)
    }
}

impl Add for Fuel {
    type Output = Fuel;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fuel_type: self.fuel_type,
            gallons: self.gallons + rhs.gallons,
        }
    }
}

impl Sub for Fuel {
    type Output = Fuel;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            fuel_type: self.fuel_type,
            gallons: self.gallons - rhs.gallons,
        }
    }
}

macro_rules! mul_impl {
    ($($t:ty)*) => ($(
        impl Mul<$t> for Fuel {
            type Output = Fuel;

            fn mul(self, rhs: $t) -> Self {
                Self {
                    fuel_type: self.fuel_type,
                    gallons: self.gallons * rhs as f64,
                }
            }
        }
    )*)
}

mul_impl! { usize f64 }

macro_rules! div_impl {
    ($($t:ty)*) => ($(
        impl Div<$t> for Fuel {
            type Output = Fuel;

            fn div(self, rhs: $t) -> Self {
                Self {
                    fuel_type: self.fuel_type,
                    gallons: self.gallons / rhs as f64,
                }
            }
        }
    )*)
}

div_impl! { usize f64 }

/// Fuel burned over time.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelFlow {
    PerHour(Fuel),
}

impl Mul<Duration> for FuelFlow {
    type Output = Fuel;

    fn mul(self, rhs: Duration) -> Self::Output {
        let hours = rhs.as_secs_f64() / 3600.0;

        match self {
            Self::PerHour(fuel) => fuel * hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_weight() {
        assert_eq!(avgas!(10.0).weight(), 60.0);
        assert_eq!(jet_a!(10.0).weight(), 67.0);
        assert_eq!(Fuel::from_weight(70.0, FuelType::Diesel), diesel!(10.0));
        assert_eq!(
            Fuel::new(2.0, FuelType::Other { density_lb_gal: 5.5 }).weight(),
            11.0
        );
    }

    #[test]
    fn add_fuel() {
        assert_eq!(avgas!(10.0) + avgas!(10.0), avgas!(20.0));
    }

    #[test]
    fn sub_fuel() {
        assert_eq!(avgas!(10.0) - avgas!(10.0), avgas!(0.0));
    }

    #[test]
    fn take_fuel() {
        let mut fuel = avgas!(10.0);
        assert_eq!(fuel.take(avgas!(4.0)), Some(avgas!(4.0)));
        assert_eq!(fuel.take(avgas!(7.0)), None);
        assert_eq!(fuel, avgas!(6.0));
    }

    #[test]
    fn mul_fuel() {
        assert_eq!(avgas!(10.0) * 10.0, avgas!(100.0));
        assert_eq!(avgas!(10.0) / 4usize, avgas!(2.5));
    }

    #[test]
    fn mul_fuel_flow() {
        let lhs = FuelFlow::PerHour(avgas!(10.0));
        let rhs = Duration::from_secs(7200); // 2h
        assert_eq!(lhs * rhs, avgas!(20.0));
    }
}
