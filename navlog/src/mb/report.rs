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

use std::collections::HashMap;

use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{sequence_fuel_burn, Envelope, FuelBurn, FuelTank, TankFuel, WeightBalancePoint};
use crate::error::{Error, Result};
use crate::fc;

/// A seat row or baggage compartment.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadingStation {
    pub id: u32,
    pub name: String,
    pub arm_in: f64,
    pub weight_limit_lb: Option<f64>,
}

/// The weight & balance data of an aircraft.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightBalanceProfile {
    pub empty_weight_lb: f64,
    /// Center of gravity of the empty aircraft.
    pub empty_arm_in: f64,
    pub max_ramp_weight_lb: Option<f64>,
    pub max_takeoff_weight_lb: Option<f64>,
    pub max_landing_weight_lb: Option<f64>,
    /// Weight allowed in all compartments together.
    pub baggage_allowance_lb: Option<f64>,
    pub seats: Vec<LoadingStation>,
    pub compartments: Vec<LoadingStation>,
    pub envelopes: Vec<Envelope>,
}

/// The load of a flight by station and tank.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Loading {
    seats: HashMap<u32, f64>,
    compartments: HashMap<u32, f64>,
    tanks: Vec<FuelTank>,
}

impl Loading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds weight to a seat row.
    pub fn seat(&mut self, seat_id: u32, weight_lb: f64) -> &mut Self {
        *self.seats.entry(seat_id).or_default() += weight_lb;
        self
    }

    /// Adds weight to a baggage compartment.
    pub fn compartment(&mut self, compartment_id: u32, weight_lb: f64) -> &mut Self {
        *self.compartments.entry(compartment_id).or_default() += weight_lb;
        self
    }

    pub fn tank(&mut self, tank: FuelTank) -> &mut Self {
        self.tanks.push(tank);
        self
    }

    pub fn tanks(&self) -> &[FuelTank] {
        &self.tanks
    }

    /// Total fuel in all tanks.
    pub fn fuel_gallons(&self) -> f64 {
        self.tanks.iter().map(|tank| tank.gallons).sum()
    }
}

/// The weight of a loading station.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationWeight {
    pub station_id: u32,
    pub name: String,
    pub point: WeightBalancePoint,
}

/// Weight and balance of a flight from the empty aircraft to the landing.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightBalanceReport {
    pub warnings: Vec<String>,
    pub seats: Vec<StationWeight>,
    pub compartments: Vec<StationWeight>,
    pub fuel_on_board: Vec<TankFuel>,
    /// Taxi fuel drawn from the tanks of the lowest burn sequence.
    pub fuel_burned_pre_takeoff: Vec<TankFuel>,
    pub fuel_burned: Vec<TankFuel>,
    pub empty: WeightBalancePoint,
    pub zero_fuel: WeightBalancePoint,
    pub ramp: WeightBalancePoint,
    pub takeoff: WeightBalancePoint,
    pub landing: WeightBalancePoint,
}

impl WeightBalanceReport {
    /// Computes the weight and balance of the loaded aircraft.
    ///
    /// The `gallons_burned` in flight are drawn from the tanks after the
    /// taxi fuel in their burn sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStation`] if weight is loaded on a seat row or
    /// compartment the profile doesn't have, [`Error::InvalidFuelTanks`] if
    /// fuel is burned but no tank is loaded, and [`Error::ZeroWeight`] if a
    /// weight of the chain is zero.
    pub fn new(
        profile: &WeightBalanceProfile,
        loading: &Loading,
        density: f64,
        taxi_gallons: f64,
        gallons_burned: f64,
    ) -> Result<Self> {
        let mut warnings = Vec::new();

        let seats = station_weights(&profile.seats, &loading.seats, "seat", &mut warnings)?;
        let compartments = station_weights(
            &profile.compartments,
            &loading.compartments,
            "compartment",
            &mut warnings,
        )?;

        if let Some(allowance) = profile.baggage_allowance_lb {
            let baggage: f64 = compartments.iter().map(|c| c.point.weight_lb).sum();
            if allowance < baggage {
                warnings.push(format!(
                    "This aircraft can only hold {allowance} lb of baggage"
                ));
            }
        }

        let mut tanks = loading.tanks.clone();
        tanks.sort_by_key(|tank| tank.burn_sequence);

        if tanks.is_empty() && (taxi_gallons > 0.0 || gallons_burned > 0.0) {
            return Err(Error::InvalidFuelTanks);
        }

        let fuel_on_board: Vec<_> = tanks
            .iter()
            .map(|tank| TankFuel::loaded(tank, density))
            .collect();
        let FuelBurn {
            pre_takeoff: fuel_burned_pre_takeoff,
            in_flight: fuel_burned,
        } = sequence_fuel_burn(&tanks, taxi_gallons, gallons_burned, density);

        let empty = WeightBalancePoint::new(profile.empty_weight_lb, profile.empty_arm_in);
        let zero_fuel = empty.combine(seats.iter().chain(&compartments).map(|s| &s.point))?;
        let ramp = zero_fuel.combine(fuel_on_board.iter().map(|f| &f.point))?;
        let takeoff = ramp.combine(fuel_burned_pre_takeoff.iter().map(|f| &f.point))?;
        let landing = takeoff.combine(fuel_burned.iter().map(|f| &f.point))?;

        debug!("weight & balance: ramp {ramp}, takeoff {takeoff}, landing {landing}");

        for (limit, point, what) in [
            (profile.max_ramp_weight_lb, &ramp, "ramp"),
            (profile.max_takeoff_weight_lb, &takeoff, "takeoff"),
            (profile.max_landing_weight_lb, &landing, "landing"),
        ] {
            if let Some(limit) = limit.filter(|limit| *limit < point.weight_lb) {
                warnings.push(format!("Maximum {what} weight of {limit} lb exceeded"));
            }
        }

        for envelope in &profile.envelopes {
            for (point, what) in [(&landing, "Landing"), (&takeoff, "Takeoff")] {
                if envelope.is_exceeded_by(point) {
                    warnings.push(format!(
                        "{what} weight exceeds the {} limits",
                        envelope.name()
                    ));
                }
            }
        }

        for warning in &warnings {
            warn!("{warning}");
        }

        Ok(Self {
            warnings,
            seats,
            compartments,
            fuel_on_board,
            fuel_burned_pre_takeoff,
            fuel_burned,
            empty,
            zero_fuel,
            ramp,
            takeoff,
            landing,
        })
    }

    /// Returns `true` if no limit is exceeded.
    pub fn is_within_limits(&self) -> bool {
        self.warnings.is_empty()
    }
}

fn station_weights(
    stations: &[LoadingStation],
    loads: &HashMap<u32, f64>,
    kind: &'static str,
    warnings: &mut Vec<String>,
) -> Result<Vec<StationWeight>> {
    if let Some(id) = loads
        .keys()
        .find(|id| !stations.iter().any(|station| station.id == **id))
    {
        return Err(Error::UnknownStation { kind, id: *id });
    }

    let mut stations: Vec<_> = stations.iter().collect();
    stations.sort_by(|a, b| a.arm_in.total_cmp(&b.arm_in));

    Ok(stations
        .into_iter()
        .map(|station| {
            let weight = fc::round_dp(loads.get(&station.id).copied().unwrap_or_default(), 2);

            if let Some(limit) = station.weight_limit_lb.filter(|limit| *limit < weight) {
                warnings.push(format!("{} can only hold {limit} lb", station.name));
            }

            StationWeight {
                station_id: station.id,
                name: station.name.clone(),
                point: WeightBalancePoint::new(weight, station.arm_in),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> WeightBalanceProfile {
        WeightBalanceProfile {
            empty_weight_lb: 1500.0,
            empty_arm_in: 39.0,
            max_ramp_weight_lb: Some(2450.0),
            max_takeoff_weight_lb: Some(2400.0),
            max_landing_weight_lb: Some(2400.0),
            baggage_allowance_lb: Some(120.0),
            seats: vec![
                LoadingStation {
                    id: 2,
                    name: "Rear Seats".to_string(),
                    arm_in: 73.0,
                    weight_limit_lb: None,
                },
                LoadingStation {
                    id: 1,
                    name: "Front Seats".to_string(),
                    arm_in: 37.0,
                    weight_limit_lb: None,
                },
            ],
            compartments: vec![LoadingStation {
                id: 1,
                name: "Baggage".to_string(),
                arm_in: 95.0,
                weight_limit_lb: Some(100.0),
            }],
            envelopes: vec![envelope!(
                "Normal",
                [(35.0, 1500.0), (40.0, 1800.0), (47.3, 1800.0)]
            )],
        }
    }

    fn loading() -> Loading {
        let mut loading = Loading::new();
        loading
            .seat(1, 170.0)
            .seat(1, 180.0)
            .compartment(1, 50.0)
            .tank(FuelTank {
                id: 1,
                name: "Main".to_string(),
                arm_in: 48.0,
                burn_sequence: 1,
                gallons: 40.0,
            });
        loading
    }

    #[test]
    fn weight_chain() {
        let report = WeightBalanceReport::new(&profile(), &loading(), 6.0, 1.0, 10.0).unwrap();

        assert_eq!(report.seats[0].name, "Front Seats");
        assert_eq!(report.seats[0].point.weight_lb, 350.0);
        assert_eq!(report.seats[1].point.weight_lb, 0.0);
        assert_eq!(report.zero_fuel.weight_lb, 1900.0);
        assert_eq!(report.ramp.weight_lb, 2140.0);
        assert_eq!(report.takeoff.weight_lb, 2134.0);
        assert_eq!(report.landing.weight_lb, 2074.0);
        assert!(report.is_within_limits());

        for point in [
            report.empty,
            report.zero_fuel,
            report.ramp,
            report.takeoff,
            report.landing,
        ] {
            assert_relative_eq!(point.moment_lb_in, point.weight_lb * point.arm_in);
        }
    }

    #[test]
    fn exceeded_limits_are_reported() {
        let mut loading = loading();
        loading.compartment(1, 80.0);

        let report = WeightBalanceReport::new(&profile(), &loading, 6.0, 1.0, 10.0).unwrap();
        assert!(!report.is_within_limits());
        assert!(report
            .warnings
            .contains(&"Baggage can only hold 100 lb".to_string()));
        assert!(report
            .warnings
            .contains(&"This aircraft can only hold 120 lb of baggage".to_string()));
    }

    #[test]
    fn burned_fuel_needs_a_tank() {
        let mut loading = Loading::new();
        loading.seat(1, 170.0);

        assert_eq!(
            WeightBalanceReport::new(&profile(), &loading, 6.0, 1.0, 10.0),
            Err(Error::InvalidFuelTanks)
        );
    }

    #[test]
    fn weight_on_unknown_station_is_rejected() {
        let mut loading = loading();
        loading.seat(3, 200.0);

        assert_eq!(
            WeightBalanceReport::new(&profile(), &loading, 6.0, 1.0, 10.0),
            Err(Error::UnknownStation {
                kind: "seat",
                id: 3
            })
        );

        let mut loading = self::loading();
        loading.compartment(2, 20.0);

        assert_eq!(
            WeightBalanceReport::new(&profile(), &loading, 6.0, 1.0, 10.0),
            Err(Error::UnknownStation {
                kind: "compartment",
                id: 2
            })
        );
    }

    #[test]
    fn landing_fuel_matches_the_tanks() {
        let mut loading = Loading::new();
        loading
            .seat(1, 170.0)
            .tank(FuelTank {
                id: 1,
                name: "Aux".to_string(),
                arm_in: 60.0,
                burn_sequence: 1,
                gallons: 0.5,
            })
            .tank(FuelTank {
                id: 2,
                name: "Main".to_string(),
                arm_in: 48.0,
                burn_sequence: 2,
                gallons: 30.0,
            });

        let report = WeightBalanceReport::new(&profile(), &loading, 6.0, 1.0, 10.0).unwrap();

        // the aux tank runs dry during taxi and the main tank keeps 19.5 gal
        assert_eq!(report.fuel_burned_pre_takeoff.len(), 2);
        assert_eq!(report.zero_fuel.weight_lb, 1670.0);
        assert_relative_eq!(report.takeoff.weight_lb, 1670.0 + 29.5 * 6.0);
        assert_relative_eq!(report.landing.weight_lb, 1670.0 + 19.5 * 6.0);
        assert_relative_eq!(
            report.landing.moment_lb_in,
            report.zero_fuel.moment_lb_in + 19.5 * 6.0 * 48.0,
            epsilon = 1e-6
        );
    }
}
