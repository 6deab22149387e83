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

use log::{debug, info, trace, warn};

use super::*;

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};
use crate::mb::{FuelTank, WeightBalanceProfile, WeightBalanceReport};
use crate::nd::VariationIndex;
use crate::perf::{PerformanceProfile, RunwayOperation, TableProvider};
use crate::route::{Departure, Leg, NavigationEngine};

/// Flight planning factory, which is used to build a flight planning.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FlightPlanningBuilder {
    legs: Option<Vec<Leg>>,
    departure: Option<Aerodrome>,
    arrival: Option<Aerodrome>,
    bhp_percent: Option<f64>,
    policy: FuelPolicy,
    persons: Vec<PersonOnBoard>,
    baggage: Vec<Baggage>,
    tanks: Vec<FuelTank>,
    weight_balance: Option<WeightBalanceProfile>,
    constants: PhysicalConstants,
}

impl FlightPlanningBuilder {
    /// Creates a new builder.
    pub fn new() -> FlightPlanningBuilder {
        Self::default()
    }

    /// Builds the flight planning with the aircraft's performance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if the legs, the departure or
    /// arrival aerodrome, the power setting or the weight & balance profile
    /// is not set, and [`Error::UnknownStation`] if a person or baggage is
    /// placed on a station the profile doesn't have. Any error computing
    /// the navigation log, the runway distances or the weight & balance is
    /// returned as well.
    pub fn build<T>(
        &self,
        tables: &T,
        profile: &PerformanceProfile,
        variations: &VariationIndex,
    ) -> Result<FlightPlanning>
    where
        T: TableProvider + ?Sized,
    {
        info!("building flight planning with profile {}", profile.name);

        let legs = self.legs.as_deref().ok_or(Error::MissingInput("legs"))?;
        let departure = self
            .departure
            .as_ref()
            .ok_or(Error::MissingInput("departure aerodrome"))?;
        let arrival = self
            .arrival
            .as_ref()
            .ok_or(Error::MissingInput("arrival aerodrome"))?;
        let bhp_percent = self.bhp_percent.ok_or(Error::MissingInput("power setting"))?;
        let weight_balance = self
            .weight_balance
            .as_ref()
            .ok_or(Error::MissingInput("weight & balance profile"))?;

        let density = profile.fuel_density();
        let taxi_gallons = profile.taxi_fuel_gallons;
        let fuel_gallons: f64 = self.tanks.iter().map(|tank| tank.gallons).sum();

        let takeoff_weight = get_takeoff_weight(
            weight_balance.empty_weight_lb,
            &self.persons,
            &self.baggage,
            fuel_gallons,
            density,
            taxi_gallons,
        );
        debug!("takeoff weight of {takeoff_weight:.2} lb with {fuel_gallons:.2} gal on board");

        let nav_log = NavigationEngine::new(tables, profile, variations)
            .with_constants(self.constants)
            .compute_nav_log(
                legs,
                &Departure {
                    pressure_alt_ft: departure.pressure_altitude(),
                    takeoff_weight_lb: takeoff_weight,
                    fuel_gallons,
                    bhp_percent,
                },
            )?;

        let fuel = FuelCalculation::new(&nav_log.totals, &self.policy, taxi_gallons, fuel_gallons);
        if !fuel.is_sufficient() {
            warn!(
                "{:.2} gal on board but {:.2} gal required",
                fuel.gallons_on_board,
                fuel.required_gallons()
            );
        }

        let landing_weight = takeoff_weight
            - (taxi_gallons + nav_log.totals.climb_gallons + nav_log.totals.gallons_enroute)
                * density;

        trace!("computing runway distances at {}", departure.waypoint.code());
        let takeoff_distances = runway_distances(
            tables,
            profile,
            RunwayOperation::Takeoff,
            departure,
            takeoff_weight,
            variations,
        )?;

        trace!("computing runway distances at {}", arrival.waypoint.code());
        let landing_distances = runway_distances(
            tables,
            profile,
            RunwayOperation::Landing,
            arrival,
            landing_weight,
            variations,
        )?;

        let gallons_burned = fuel.additional.gallons
            + nav_log.totals.climb_gallons
            + nav_log.totals.gallons_enroute;
        let weight_balance = WeightBalanceReport::new(
            weight_balance,
            &load(&self.persons, &self.baggage, &self.tanks),
            density,
            taxi_gallons,
            gallons_burned,
        )?;

        info!(
            "flight planning built: {} legs, fuel sufficient={}, within limits={}",
            nav_log.entries.len(),
            fuel.is_sufficient(),
            weight_balance.is_within_limits(),
        );

        Ok(FlightPlanning {
            nav_log,
            fuel,
            takeoff_weight_lb: takeoff_weight,
            landing_weight_lb: landing_weight,
            takeoff_distances,
            landing_distances,
            weight_balance,
        })
    }

    pub fn legs(&mut self, legs: Vec<Leg>) -> &mut Self {
        self.legs = Some(legs);
        self
    }

    pub fn departure(&mut self, aerodrome: Aerodrome) -> &mut Self {
        self.departure = Some(aerodrome);
        self
    }

    pub fn arrival(&mut self, aerodrome: Aerodrome) -> &mut Self {
        self.arrival = Some(aerodrome);
        self
    }

    pub fn bhp_percent(&mut self, bhp_percent: f64) -> &mut Self {
        self.bhp_percent = Some(bhp_percent);
        self
    }

    pub fn policy(&mut self, policy: FuelPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    pub fn person(&mut self, person: PersonOnBoard) -> &mut Self {
        self.persons.push(person);
        self
    }

    pub fn baggage(&mut self, baggage: Baggage) -> &mut Self {
        self.baggage.push(baggage);
        self
    }

    pub fn tank(&mut self, tank: FuelTank) -> &mut Self {
        self.tanks.push(tank);
        self
    }

    pub fn weight_balance(&mut self, profile: WeightBalanceProfile) -> &mut Self {
        self.weight_balance = Some(profile);
        self
    }

    pub fn constants(&mut self, constants: PhysicalConstants) -> &mut Self {
        self.constants = constants;
        self
    }
}
