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

use std::time::Duration;

use log::{debug, info, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::leg::{check_sequence, Leg};
use crate::constants::PhysicalConstants;
use crate::core::{Fuel, FuelFlow, Wind};
use crate::error::{Error, Result};
use crate::fc;
use crate::nd::VariationIndex;
use crate::perf::{
    get_climb_data, get_cruise_data, ClimbConditions, CruiseConditions, PerformanceProfile,
    TableProvider,
};

/// Fuel on board and the aircraft's weight.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelState {
    pub fuel: Fuel,
    pub weight_lb: f64,
    /// Set once a leg needed more fuel than was left.
    pub exhausted: bool,
}

impl FuelState {
    pub fn new(fuel: Fuel, weight_lb: f64) -> Self {
        Self {
            fuel,
            weight_lb,
            exhausted: false,
        }
    }

    /// Burns the gallons and returns the new state with the gallons that
    /// were actually burned.
    ///
    /// If there is not enough fuel left, the tanks are set empty but no
    /// fuel is accounted as burned and the state is marked as exhausted.
    pub fn burn(&self, gallons: f64) -> (Self, f64) {
        let mut fuel = self.fuel;

        match fuel.take(Fuel::new(gallons, fuel.fuel_type)) {
            Some(burned) => (
                Self {
                    fuel,
                    weight_lb: self.weight_lb - burned.weight(),
                    exhausted: self.exhausted,
                },
                burned.gallons,
            ),
            None => {
                warn!(
                    "{gallons:.2} gal needed but only {:.2} gal left, fuel is exhausted",
                    self.fuel.gallons
                );
                (
                    Self {
                        fuel: fuel * 0.0,
                        weight_lb: self.weight_lb,
                        exhausted: true,
                    },
                    0.0,
                )
            }
        }
    }
}

/// The computed navigation log of one leg.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavLogEntry {
    pub sequence: u32,
    pub from: String,
    pub to: String,
    pub desired_altitude_ft: i32,
    /// Altitude reached which is below the desired altitude if the leg is
    /// too short to climb.
    pub actual_altitude_ft: i32,
    /// Pressure altitude the cruise table was evaluated at.
    pub truncated_altitude_ft: i32,
    pub rpm: i32,
    pub temperature_c: f64,
    /// Temperature the cruise table was evaluated at.
    pub truncated_temperature_c: f64,
    pub ktas: i32,
    pub kcas: i32,
    pub true_track: i32,
    pub wind: Wind,
    pub true_heading: i32,
    pub magnetic_variation: f64,
    pub magnetic_heading: i32,
    pub ground_speed: i32,
    pub distance_to_climb_nm: i32,
    pub distance_enroute_nm: i32,
    pub total_distance_nm: i32,
    pub time_to_climb_min: i32,
    pub time_enroute_min: i32,
    pub fuel_to_climb_gal: f64,
    pub cruise_fuel_flow: FuelFlow,
    /// Weight at the start of the leg.
    pub weight_lb: f64,
    pub fuel_burned: Fuel,
    pub fuel_remaining: Fuel,
}

impl NavLogEntry {
    /// Time spent at cruise in hours.
    pub fn hours_enroute(&self) -> f64 {
        self.time_enroute_min as f64 / 60.0
    }

    /// Fuel burned at cruise in gallons.
    pub fn gallons_enroute(&self) -> f64 {
        let enroute = Duration::from_secs(self.time_enroute_min.max(0) as u64 * 60);
        (self.cruise_fuel_flow * enroute).gallons
    }

    /// Time of climb and cruise in minutes.
    pub fn total_time_min(&self) -> i32 {
        self.time_to_climb_min + self.time_enroute_min
    }
}

/// Totals of all legs.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavLogTotals {
    pub climb_gallons: f64,
    pub hours_enroute: f64,
    pub gallons_enroute: f64,
    pub distance_nm: i32,
    pub time_min: i32,
}

impl NavLogTotals {
    fn accumulate(&mut self, entry: &NavLogEntry) {
        self.climb_gallons += entry.fuel_to_climb_gal;
        self.hours_enroute += entry.hours_enroute();
        self.gallons_enroute += entry.gallons_enroute();
        self.distance_nm += entry.total_distance_nm;
        self.time_min += entry.total_time_min();
    }
}

/// The navigation log of a flight.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavLog {
    pub entries: Vec<NavLogEntry>,
    pub totals: NavLogTotals,
    /// Fuel and weight after the last leg.
    pub fuel: FuelState,
}

impl NavLog {
    /// Returns `true` if the fuel on board was not enough for all legs.
    ///
    /// Legs flown without fuel left report no fuel burned, thus the totals
    /// understate the fuel needed.
    pub fn is_fuel_exhausted(&self) -> bool {
        self.fuel.exhausted
    }
}

/// Conditions at the start of a flight.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Departure {
    /// Pressure altitude of the departure aerodrome.
    pub pressure_alt_ft: i32,
    pub takeoff_weight_lb: f64,
    /// Usable fuel on board.
    pub fuel_gallons: f64,
    /// Power setting at cruise.
    pub bhp_percent: f64,
}

/// Computes navigation logs of legs flown with a performance profile.
#[derive(Debug)]
pub struct NavigationEngine<'a, T: ?Sized> {
    tables: &'a T,
    profile: &'a PerformanceProfile,
    variations: &'a VariationIndex,
    constants: PhysicalConstants,
}

impl<'a, T> NavigationEngine<'a, T>
where
    T: TableProvider + ?Sized,
{
    pub fn new(
        tables: &'a T,
        profile: &'a PerformanceProfile,
        variations: &'a VariationIndex,
    ) -> Self {
        Self {
            tables,
            profile,
            variations,
            constants: PhysicalConstants::default(),
        }
    }

    /// Uses the physical constants to derive the calibrated airspeed.
    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Computes the navigation log of a single leg.
    ///
    /// The climb starts at the pressure altitude and with the fuel and
    /// weight the previous leg ended with. Returns the entry and the state
    /// of fuel and weight at the end of the leg.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGeometry`] if the leg starts where it ends,
    /// [`InsufficientData`] if a performance table is empty and
    /// [`ImplausibleValue`] if the wind is too strong to make any progress.
    ///
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    /// [`InsufficientData`]: Error::InsufficientData
    /// [`ImplausibleValue`]: Error::ImplausibleValue
    pub fn compute_leg(
        &self,
        leg: &Leg,
        bhp_percent: f64,
        start_pressure_alt_ft: i32,
        start: &FuelState,
    ) -> Result<(NavLogEntry, FuelState)> {
        let distance = leg.distance();
        let true_track = leg.from.true_track_to(&leg.to)?;
        let variation = self.variations.variation_for_leg(&leg.from, &leg.to);
        let pressure_alt = fc::pressure_altitude(leg.altitude_ft as f64, leg.altimeter_inhg, false);

        trace!(
            "leg {}: {} to {}, {distance} NM, TT {true_track}, VAR {variation:.1}",
            leg.sequence,
            leg.from.code(),
            leg.to.code()
        );

        let climb = get_climb_data(
            self.tables,
            self.profile,
            &ClimbConditions {
                weight_lb: start.weight_lb,
                pressure_alt_from_ft: start_pressure_alt_ft as f64,
                pressure_alt_to_ft: pressure_alt as f64,
                temperature_c: leg.temperature_c,
                available_distance_nm: Some(distance),
            },
        )?;

        let cruise = get_cruise_data(
            self.tables,
            self.profile,
            &CruiseConditions {
                weight_lb: start.weight_lb,
                pressure_alt_ft: climb.pressure_alt_ft as f64,
                temperature_c: leg.temperature_c,
                bhp_percent,
            },
        )?;

        let triangle = fc::solve_wind_triangle(
            true_track as f64,
            cruise.ktas as f64,
            leg.wind.direction,
            leg.wind.speed,
        );

        if triangle.ground_speed <= 0 {
            return Err(Error::ImplausibleValue("ground speed"));
        }

        let kcas = fc::kcas(
            cruise.ktas as f64,
            climb.pressure_alt_ft as f64,
            leg.temperature_c,
            &self.constants,
        );

        let total_distance = fc::round_int(distance);
        let distance_enroute = (total_distance - climb.distance_nm).max(0);
        let time_enroute =
            fc::round_int(distance_enroute as f64 * 60.0 / triangle.ground_speed as f64);

        let mut entry = NavLogEntry {
            sequence: leg.sequence,
            from: leg.from.code().to_string(),
            to: leg.to.code().to_string(),
            desired_altitude_ft: leg.altitude_ft,
            actual_altitude_ft: fc::pressure_altitude(
                climb.pressure_alt_ft as f64,
                leg.altimeter_inhg,
                true,
            ),
            truncated_altitude_ft: fc::round_int(cruise.truncated_pressure_alt_ft),
            rpm: cruise.rpm,
            temperature_c: leg.temperature_c,
            truncated_temperature_c: cruise.truncated_temperature_c,
            ktas: cruise.ktas,
            kcas,
            true_track,
            wind: leg.wind,
            true_heading: triangle.true_heading,
            magnetic_variation: fc::round_dp(variation, 2),
            magnetic_heading: fc::normalize_degrees(triangle.true_heading as f64 + variation),
            ground_speed: triangle.ground_speed,
            distance_to_climb_nm: climb.distance_nm,
            distance_enroute_nm: distance_enroute,
            total_distance_nm: total_distance,
            time_to_climb_min: climb.time_min,
            time_enroute_min: time_enroute,
            fuel_to_climb_gal: climb.fuel_gal,
            cruise_fuel_flow: FuelFlow::PerHour(Fuel::new(cruise.gph, start.fuel.fuel_type)),
            weight_lb: start.weight_lb,
            fuel_burned: start.fuel * 0.0,
            fuel_remaining: start.fuel,
        };

        let (end, burned) = start.burn(entry.fuel_to_climb_gal + entry.gallons_enroute());
        entry.fuel_burned = Fuel::new(fc::round_dp(burned, 2), end.fuel.fuel_type);
        entry.fuel_remaining = Fuel::new(fc::round_dp(end.fuel.gallons, 2), end.fuel.fuel_type);

        debug!(
            "leg {}: GS {} kt, MH {}, {} min, {:.2} burned",
            entry.sequence,
            entry.ground_speed,
            entry.magnetic_heading,
            entry.total_time_min(),
            entry.fuel_burned
        );

        Ok((entry, end))
    }

    /// Computes the navigation log of all legs.
    ///
    /// Each leg starts at the altitude and with the weight the previous
    /// leg ended with. The first leg starts at the departure.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSequence`] if the legs are not numbered from 1 in
    /// the order given and any error computing a leg.
    ///
    /// [`InvalidSequence`]: Error::InvalidSequence
    pub fn compute_nav_log(&self, legs: &[Leg], departure: &Departure) -> Result<NavLog> {
        check_sequence(legs)?;

        info!("computing navigation log of {} legs", legs.len());

        let mut state = FuelState::new(
            Fuel::new(departure.fuel_gallons, self.profile.fuel_type),
            departure.takeoff_weight_lb,
        );
        let mut pressure_alt = departure.pressure_alt_ft;
        let mut totals = NavLogTotals::default();
        let mut entries = Vec::with_capacity(legs.len());

        for leg in legs {
            let (entry, end) = self.compute_leg(leg, departure.bhp_percent, pressure_alt, &state)?;

            totals.accumulate(&entry);
            // the next leg climbs from the altitude reached on this leg
            pressure_alt = fc::pressure_altitude(
                entry.actual_altitude_ft as f64,
                legs.get(leg.sequence as usize)
                    .map_or(leg.altimeter_inhg, |next| next.altimeter_inhg),
                false,
            );
            state = end;
            entries.push(entry);
        }

        if state.exhausted {
            warn!("fuel on board is not enough for the flight");
        }

        info!(
            "navigation log computed: {} NM, {} min, {:.2} gal climb, {:.2} gal enroute",
            totals.distance_nm, totals.time_min, totals.climb_gallons, totals.gallons_enroute
        );

        Ok(NavLog {
            entries,
            totals,
            fuel: state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burn_reduces_weight() {
        let state = FuelState::new(avgas!(40.0), 2400.0);
        let (end, burned) = state.burn(10.0);
        assert_eq!(burned, 10.0);
        assert_eq!(end.fuel, avgas!(30.0));
        assert_eq!(end.weight_lb, 2340.0);
        assert!(!end.exhausted);
    }

    #[test]
    fn exhausted_fuel_burns_nothing() {
        let state = FuelState::new(avgas!(5.0), 2400.0);
        let (end, burned) = state.burn(10.0);
        assert_eq!(burned, 0.0);
        assert_eq!(end.fuel.gallons, 0.0);
        assert_eq!(end.weight_lb, 2400.0);
        assert!(end.exhausted);

        // stays exhausted once empty
        let (end, _) = end.burn(0.0);
        assert!(end.exhausted);
    }
}
