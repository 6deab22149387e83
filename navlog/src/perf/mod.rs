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

//! Aircraft performance from tabulated data.
//!
//! Performance tables are looked up by [`interpolate`] which brackets each
//! key of a table and interpolates linearly between the bracketing rows.
//! Targets outside of a table are clamped to the table's range and reported
//! back, so a caller can tell the values the table was evaluated at.
//!
//! The tables are provided by a [`TableProvider`] and the corrections by a
//! [`PerformanceProfile`]. [`PerformanceTables`] keeps both in memory.

mod climb;
mod cruise;
mod interp;
mod profile;
mod table;
mod takeoff_landing;

pub use climb::{get_climb_data, ClimbConditions, ClimbPerformance};
pub use cruise::{get_cruise_data, CruiseConditions, CruisePerformance};
pub use interp::{find_bracket, interpolate, linear_interpolation, Bracket, Interpolation};
pub use profile::{PerformanceProfile, ProfileProvider, RunwayCorrections, RunwayOperation};
pub use table::{
    cmp_keys, ClimbRow, CruiseRow, PerformanceTables, TableProvider, TableRow, TakeoffLandingRow,
};
pub use takeoff_landing::{get_landing_takeoff_data, RunwayConditions, RunwayPerformance};
