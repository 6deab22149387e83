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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A weight at its center of gravity.
///
/// The moment is always the product of weight and arm.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightBalancePoint {
    pub weight_lb: f64,
    pub arm_in: f64,
    pub moment_lb_in: f64,
}

impl WeightBalancePoint {
    pub fn new(weight_lb: f64, arm_in: f64) -> Self {
        Self {
            weight_lb,
            arm_in,
            moment_lb_in: weight_lb * arm_in,
        }
    }

    /// Creates a point from a total weight and moment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroWeight`] since the arm of no weight is undefined.
    pub fn from_moment(weight_lb: f64, moment_lb_in: f64) -> Result<Self> {
        if weight_lb == 0.0 {
            return Err(Error::ZeroWeight);
        }

        Ok(Self {
            weight_lb,
            arm_in: moment_lb_in / weight_lb,
            moment_lb_in,
        })
    }

    /// Adds the points to this one and returns the combined center of
    /// gravity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroWeight`] if the points cancel each other out.
    pub fn combine<'a>(&self, points: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let (weight, moment) = points
            .into_iter()
            .fold((self.weight_lb, self.moment_lb_in), |(w, m), p| {
                (w + p.weight_lb, m + p.moment_lb_in)
            });

        Self::from_moment(weight, moment)
    }
}

impl fmt::Display for WeightBalancePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} lb @ {:.2} in", self.weight_lb, self.arm_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn combined_arm_is_weighted_mean() {
        let empty = WeightBalancePoint::new(1500.0, 39.0);
        let pilot = WeightBalancePoint::new(200.0, 37.0);
        let baggage = WeightBalancePoint::new(100.0, 95.0);

        let total = empty.combine(&[pilot, baggage]).unwrap();
        assert_eq!(total.weight_lb, 1800.0);
        assert_relative_eq!(total.arm_in, (58500.0 + 7400.0 + 9500.0) / 1800.0);
        assert_relative_eq!(total.moment_lb_in, total.weight_lb * total.arm_in);
    }

    #[test]
    fn zero_weight_has_no_arm() {
        assert_eq!(
            WeightBalancePoint::from_moment(0.0, 10.0),
            Err(Error::ZeroWeight)
        );
    }
}
