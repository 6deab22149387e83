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

/// Creates AvGas [`Fuel`] from gallons.
///
/// [`Fuel`]: crate::core::Fuel
#[macro_export]
macro_rules! avgas {
    ($gallons:expr) => {
        $crate::core::Fuel::new($gallons, $crate::core::FuelType::AvGas)
    };
}

/// Creates Diesel [`Fuel`] from gallons.
///
/// [`Fuel`]: crate::core::Fuel
#[macro_export]
macro_rules! diesel {
    ($gallons:expr) => {
        $crate::core::Fuel::new($gallons, $crate::core::FuelType::Diesel)
    };
}

/// Creates Jet-A [`Fuel`] from gallons.
///
/// [`Fuel`]: crate::core::Fuel
#[macro_export]
macro_rules! jet_a {
    ($gallons:expr) => {
        $crate::core::Fuel::new($gallons, $crate::core::FuelType::JetA)
    };
}

/// Creates a [`geo::Point<f64>`] from latitude and longitude.
///
/// Note: This macro accepts (latitude, longitude) but internally creates
/// the geo::Point with (longitude, latitude) to match geo's coordinate order.
#[macro_export]
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        geo::Point::new($longitude, $latitude)
    };
}

/// Creates a weight and balance [`Envelope`] from (cg, weight) vertices.
///
/// ```
/// use navlog::envelope;
///
/// let normal = envelope!("Normal", [(35.0, 1500.0), (35.0, 1950.0), (39.5, 2300.0)]);
/// assert_eq!(normal.name(), "Normal");
/// ```
///
/// [`Envelope`]: crate::mb::Envelope
#[macro_export]
macro_rules! envelope {
    ($name:expr, [ $( ($cg:expr, $weight:expr) ),* $(,)? ]) => {
        $crate::mb::Envelope::new(
            $name,
            geo::LineString::from(vec![ $( geo::Coord { x: $cg, y: $weight }, )* ]),
        )
    };
}

/// Implements [`TableRow`] for a struct of `f64` fields.
///
/// The keys are listed in the order the rows are sorted by.
///
/// ```
/// use navlog::perf::TableRow;
/// use navlog::table_row;
///
/// struct GlideRow {
///     weight_lb: f64,
///     altitude_ft: f64,
///     distance_nm: f64,
/// }
///
/// table_row!(GlideRow, "glide", keys: [weight_lb, altitude_ft], outputs: [distance_nm]);
///
/// assert_eq!(GlideRow::KEYS, &["weight_lb", "altitude_ft"]);
/// ```
///
/// [`TableRow`]: crate::perf::TableRow
#[macro_export]
macro_rules! table_row {
    ($row:ty, $table:literal, keys: [$($key:ident),+ $(,)?], outputs: [$($output:ident),+ $(,)?]) => {
        impl $crate::perf::TableRow for $row {
            const TABLE: &'static str = $table;
            const KEYS: &'static [&'static str] = &[$(stringify!($key)),+];
            const OUTPUTS: &'static [&'static str] = &[$(stringify!($output)),+];

            fn key(&self, dim: usize) -> f64 {
                [$(self.$key),+][dim]
            }

            fn outputs(&self) -> Vec<f64> {
                vec![$(self.$output),+]
            }
        }
    };
}
