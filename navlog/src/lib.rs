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

//! Flight planning library for piston aircraft.
//!
//! This crate computes what a pilot needs to plan a VFR flight from the
//! performance tables of an aircraft: takeoff and landing distances, the
//! climb and cruise performance of each leg flown into a navigation log,
//! the fuel required and the weight & balance from ramp to landing.
//!
//! The performance tables are looked up by linear interpolation between
//! the rows that bracket the requested conditions (see [`perf`]). Legs are
//! flown on a spherical earth (see [`geom`] and [`nd`]) and their wind and
//! magnetic corrections are solved by the flight computer in [`fc`].
//!
//! # Examples
//!
//! Lets get the distance and true track between two waypoints and the
//! heading to fly with some wind from the south:
//!
//! ```
//! use navlog::fc::solve_wind_triangle;
//! use navlog::prelude::*;
//!
//! # fn main() -> std::result::Result<(), navlog::Error> {
//! let vancouver = Waypoint::new("CYVR", "Vancouver", "491138N".parse()?, "1231101W".parse()?)?;
//! let nanaimo = Waypoint::new("CYCD", "Nanaimo", "490303N".parse()?, "1235212W".parse()?)?;
//!
//! let distance = vancouver.great_arc_to(&nanaimo);
//! let track = vancouver.true_track_to(&nanaimo)?;
//! let wind: Wind = "18015KT".parse()?;
//!
//! let triangle = solve_wind_triangle(track as f64, 110.0, wind.direction, wind.speed);
//! println!("{distance} NM with TH {} at {} kt", triangle.true_heading, triangle.ground_speed);
//! # Ok(())
//! # }
//! ```
//!
//! A whole flight is planned with the [`FlightPlanningBuilder`] which needs
//! a [`TableProvider`] with the performance tables of the aircraft. The
//! [`PerformanceTables`] keep them in memory.
//!
//! [`FlightPlanningBuilder`]: crate::fp::FlightPlanningBuilder
//! [`TableProvider`]: crate::perf::TableProvider
//! [`PerformanceTables`]: crate::perf::PerformanceTables

#[macro_use]
mod macros;

pub mod constants;
pub mod core;
mod error;
pub mod fc;
pub mod fp;
#[cfg(feature = "geojson")]
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub mod geojson;
pub mod geom;
pub mod mb;
pub mod nd;
pub mod perf;
pub mod route;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::constants::PhysicalConstants;
    pub use crate::core::{Fuel, FuelFlow, FuelType, Wind};
    pub use crate::error::{Error, Result};
    pub use crate::fp::{
        Aerodrome, Baggage, FlightPlanning, FlightPlanningBuilder, FuelPolicy, PersonOnBoard,
        Runway, WeightSource,
    };
    pub use crate::mb::{
        Envelope, FuelTank, Loading, LoadingStation, WeightBalancePoint, WeightBalanceProfile,
        WeightBalanceReport,
    };
    pub use crate::nd::{Dms, Hemisphere, VariationIndex, Waypoint};
    pub use crate::perf::{
        ClimbRow, CruiseRow, PerformanceProfile, PerformanceTables, ProfileProvider,
        TableProvider, TakeoffLandingRow,
    };
    pub use crate::route::{Departure, Leg, NavLog, NavLogEntry, NavigationEngine};
}
