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

use approx::assert_abs_diff_eq;
use navlog::perf::*;
use navlog::prelude::*;
use navlog::table_row;

fn takeoff_tables() -> (PerformanceTables, PerformanceProfile) {
    let row = |weight_lb, temperature_c, groundroll_ft, obstacle_clearance_ft| TakeoffLandingRow {
        weight_lb,
        pressure_alt_ft: 0.0,
        temperature_c,
        groundroll_ft,
        obstacle_clearance_ft,
    };

    let profile = PerformanceProfile::new(1, "C172S", FuelType::AvGas);
    let mut tables = PerformanceTables::new();
    tables.add_profile(profile.clone());
    tables
        .add_takeoff(
            1,
            [
                row(1000.0, 0.0, 300.0, 500.0),
                row(1000.0, 20.0, 320.0, 520.0),
                row(2000.0, 0.0, 340.0, 560.0),
            ],
        )
        .unwrap();

    (tables, profile)
}

#[test]
fn takeoff_between_weights_and_temperatures() {
    let (tables, profile) = takeoff_tables();
    let rows = tables.takeoff(1).unwrap();

    // at 1000 lb the temperatures 0 °C and 20 °C are bracketed, while the
    // 2000 lb rows clamp the temperature to 0 °C for all following lookups
    let result = interpolate(&*rows, &[1500.0, 0.0, 10.0]).unwrap();
    assert_eq!(result.values, vec![325.0, 535.0]);
    assert_eq!(result.targets, vec![1500.0, 0.0, 0.0]);

    let perf = get_landing_takeoff_data(
        &tables,
        &profile,
        RunwayOperation::Takeoff,
        &RunwayConditions {
            weight_lb: 1500.0,
            pressure_alt_ft: 0.0,
            temperature_c: 10.0,
            surface_id: 1,
            headwind: 0.0,
        },
    )
    .unwrap();

    assert_eq!(perf.groundroll_ft, 325);
    assert_eq!(perf.obstacle_clearance_ft, 535);
    assert_eq!(perf.truncated_weight_lb, 1500.0);
    assert_eq!(perf.truncated_temperature_c, 0.0);
}

#[test]
fn rows_are_returned_exactly() {
    let (tables, _) = takeoff_tables();
    let rows = tables.takeoff(1).unwrap();

    for row in rows.iter() {
        let result = interpolate(
            &*rows,
            &[row.weight_lb, row.pressure_alt_ft, row.temperature_c],
        )
        .unwrap();

        assert_eq!(result.values, row.outputs());
    }
}

#[test]
fn targets_are_clamped_to_the_table() {
    let (tables, _) = takeoff_tables();
    let rows = tables.takeoff(1).unwrap();

    let below = interpolate(&*rows, &[500.0, -100.0, -30.0]).unwrap();
    assert_eq!(below.targets, vec![1000.0, 0.0, 0.0]);
    assert_eq!(below.values, vec![300.0, 500.0]);

    let above = interpolate(&*rows, &[2500.0, 1000.0, 40.0]).unwrap();
    assert_eq!(above.targets, vec![2000.0, 0.0, 0.0]);
    assert_eq!(above.values, vec![340.0, 560.0]);
}

struct Line {
    x: f64,
    y: f64,
}

table_row!(Line, "line", keys: [x], outputs: [y]);

#[test]
fn midpoint_of_two_rows() {
    let rows = [Line { x: 0.0, y: 0.0 }, Line { x: 10.0, y: 100.0 }];
    let result = interpolate(&rows, &[5.0]).unwrap();

    assert_eq!(result.values, vec![50.0]);
    assert_eq!(result.value::<Line>("y"), Some(50.0));
}

#[test]
fn empty_table_has_insufficient_data() {
    let rows: [Line; 0] = [];
    assert!(matches!(
        interpolate(&rows, &[5.0]),
        Err(Error::InsufficientData { table: "line", .. })
    ));
}

#[test]
fn short_climb_needs_no_table() {
    // no profile and thus no climb table at all
    let tables = PerformanceTables::new();
    let profile = PerformanceProfile::new(1, "C172S", FuelType::AvGas);

    let perf = get_climb_data(
        &tables,
        &profile,
        &ClimbConditions {
            weight_lb: 2300.0,
            pressure_alt_from_ft: 3100.0,
            pressure_alt_to_ft: 4000.0,
            temperature_c: 30.0,
            available_distance_nm: Some(1.0),
        },
    )
    .unwrap();

    assert_eq!(perf.time_min, 0);
    assert_eq!(perf.fuel_gal, 0.0);
    assert_eq!(perf.distance_nm, 0);
    assert_eq!(perf.pressure_alt_ft, 4000);
}

#[test]
fn cruise_between_power_settings() {
    let row = |bhp_percent, rpm, ktas, gph| CruiseRow {
        weight_lb: 2300.0,
        pressure_alt_ft: 4000.0,
        temperature_c: 7.0,
        bhp_percent,
        rpm,
        ktas,
        gph,
    };

    let profile = PerformanceProfile::new(1, "C172S", FuelType::AvGas);
    let mut tables = PerformanceTables::new();
    tables.add_profile(profile.clone());
    tables
        .add_cruise(
            1,
            [
                row(65.0, 2450.0, 112.0, 8.3),
                row(55.0, 2300.0, 105.0, 7.1),
            ],
        )
        .unwrap();

    let perf = get_cruise_data(
        &tables,
        &profile,
        &CruiseConditions {
            weight_lb: 2300.0,
            pressure_alt_ft: 4000.0,
            temperature_c: 7.0,
            bhp_percent: 60.0,
        },
    )
    .unwrap();

    assert_eq!(perf.ktas, 108);
    assert_eq!(perf.rpm, 2375);
    assert_abs_diff_eq!(perf.gph, 7.7, epsilon = 1e-9);
}
