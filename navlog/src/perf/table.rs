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

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PerformanceProfile, ProfileProvider};
use crate::error::{Error, Result};

/// A row of a performance table.
///
/// Rows are looked up by their keys and provide their outputs as ordered
/// numeric values.
pub trait TableRow {
    /// Name of the table used in errors and logs.
    const TABLE: &'static str;
    /// Names of the keys in the order the table is sorted by.
    const KEYS: &'static [&'static str];
    /// Names of the outputs.
    const OUTPUTS: &'static [&'static str];

    /// Returns the value of the key dimension.
    fn key(&self, dim: usize) -> f64;

    /// Returns the outputs in the order of [`OUTPUTS`](Self::OUTPUTS).
    fn outputs(&self) -> Vec<f64>;
}

/// Orders rows ascending by their keys.
pub fn cmp_keys<R: TableRow>(a: &R, b: &R) -> Ordering {
    (0..R::KEYS.len())
        .map(|dim| a.key(dim).total_cmp(&b.key(dim)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Row of a takeoff or landing distance table.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TakeoffLandingRow {
    pub weight_lb: f64,
    pub pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub groundroll_ft: f64,
    pub obstacle_clearance_ft: f64,
}

table_row!(
    TakeoffLandingRow,
    "takeoff/landing",
    keys: [weight_lb, pressure_alt_ft, temperature_c],
    outputs: [groundroll_ft, obstacle_clearance_ft]
);

/// Row of a climb table with the time, fuel and distance to climb from sea
/// level and the standard temperature at the pressure altitude.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbRow {
    pub weight_lb: f64,
    pub pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub time_min: f64,
    pub fuel_gal: f64,
    pub distance_nm: f64,
}

table_row!(
    ClimbRow,
    "climb",
    keys: [weight_lb, pressure_alt_ft],
    outputs: [temperature_c, time_min, fuel_gal, distance_nm]
);

/// Row of a cruise table.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruiseRow {
    pub weight_lb: f64,
    pub pressure_alt_ft: f64,
    pub temperature_c: f64,
    pub bhp_percent: f64,
    pub rpm: f64,
    pub ktas: f64,
    pub gph: f64,
}

table_row!(
    CruiseRow,
    "cruise",
    keys: [weight_lb, pressure_alt_ft, temperature_c, bhp_percent],
    outputs: [ktas, gph, rpm]
);

/// Provides the performance tables of a profile.
///
/// The rows must be sorted ascending by the table's keys.
pub trait TableProvider {
    fn takeoff(&self, profile_id: u32) -> Result<Cow<'_, [TakeoffLandingRow]>>;
    fn landing(&self, profile_id: u32) -> Result<Cow<'_, [TakeoffLandingRow]>>;
    fn climb(&self, profile_id: u32) -> Result<Cow<'_, [ClimbRow]>>;
    fn cruise(&self, profile_id: u32) -> Result<Cow<'_, [CruiseRow]>>;
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct ProfileTables {
    profile: PerformanceProfile,
    takeoff: Vec<TakeoffLandingRow>,
    landing: Vec<TakeoffLandingRow>,
    climb: Vec<ClimbRow>,
    cruise: Vec<CruiseRow>,
}

/// In-memory performance profiles and their tables.
///
/// Rows are kept sorted by their keys regardless of the order they are
/// added in.
///
/// # Examples
///
/// ```
/// # use navlog::prelude::*;
/// # fn main() -> std::result::Result<(), navlog::Error> {
/// let mut tables = PerformanceTables::new();
/// tables
///     .add_profile(PerformanceProfile::new(1, "C172S", FuelType::AvGas))
///     .add_cruise(
///         1,
///         [CruiseRow {
///             weight_lb: 2300.0,
///             pressure_alt_ft: 4000.0,
///             temperature_c: 7.0,
///             bhp_percent: 65.0,
///             rpm: 2450.0,
///             ktas: 112.0,
///             gph: 8.3,
///         }],
///     )?;
///
/// assert_eq!(tables.cruise(1)?.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceTables {
    profiles: HashMap<u32, ProfileTables>,
}

fn insert_sorted<R: TableRow>(table: &mut Vec<R>, rows: impl IntoIterator<Item = R>) {
    table.extend(rows);
    table.sort_by(cmp_keys);
}

impl PerformanceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the profile replacing any profile with the same id and its
    /// tables.
    pub fn add_profile(&mut self, profile: PerformanceProfile) -> &mut Self {
        self.profiles.insert(
            profile.id,
            ProfileTables {
                profile,
                takeoff: Vec::new(),
                landing: Vec::new(),
                climb: Vec::new(),
                cruise: Vec::new(),
            },
        );
        self
    }

    fn tables(&self, profile_id: u32) -> Result<&ProfileTables> {
        self.profiles
            .get(&profile_id)
            .ok_or(Error::UnknownProfile(profile_id))
    }

    fn tables_mut(&mut self, profile_id: u32) -> Result<&mut ProfileTables> {
        self.profiles
            .get_mut(&profile_id)
            .ok_or(Error::UnknownProfile(profile_id))
    }

    pub fn add_takeoff(
        &mut self,
        profile_id: u32,
        rows: impl IntoIterator<Item = TakeoffLandingRow>,
    ) -> Result<&mut Self> {
        insert_sorted(&mut self.tables_mut(profile_id)?.takeoff, rows);
        Ok(self)
    }

    pub fn add_landing(
        &mut self,
        profile_id: u32,
        rows: impl IntoIterator<Item = TakeoffLandingRow>,
    ) -> Result<&mut Self> {
        insert_sorted(&mut self.tables_mut(profile_id)?.landing, rows);
        Ok(self)
    }

    pub fn add_climb(
        &mut self,
        profile_id: u32,
        rows: impl IntoIterator<Item = ClimbRow>,
    ) -> Result<&mut Self> {
        insert_sorted(&mut self.tables_mut(profile_id)?.climb, rows);
        Ok(self)
    }

    pub fn add_cruise(
        &mut self,
        profile_id: u32,
        rows: impl IntoIterator<Item = CruiseRow>,
    ) -> Result<&mut Self> {
        insert_sorted(&mut self.tables_mut(profile_id)?.cruise, rows);
        Ok(self)
    }
}

impl TableProvider for PerformanceTables {
    fn takeoff(&self, profile_id: u32) -> Result<Cow<'_, [TakeoffLandingRow]>> {
        Ok(Cow::Borrowed(&self.tables(profile_id)?.takeoff))
    }

    fn landing(&self, profile_id: u32) -> Result<Cow<'_, [TakeoffLandingRow]>> {
        Ok(Cow::Borrowed(&self.tables(profile_id)?.landing))
    }

    fn climb(&self, profile_id: u32) -> Result<Cow<'_, [ClimbRow]>> {
        Ok(Cow::Borrowed(&self.tables(profile_id)?.climb))
    }

    fn cruise(&self, profile_id: u32) -> Result<Cow<'_, [CruiseRow]>> {
        Ok(Cow::Borrowed(&self.tables(profile_id)?.cruise))
    }
}

impl ProfileProvider for PerformanceTables {
    fn profile(&self, profile_id: u32) -> Result<Cow<'_, PerformanceProfile>> {
        Ok(Cow::Borrowed(&self.tables(profile_id)?.profile))
    }
}
