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

use geo::LineString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::WeightBalancePoint;

/// A weight & balance limit of a loading configuration, e.g. the normal
/// category.
///
/// The limit is an open line through (cg, weight) vertices where x is the
/// center of gravity in inches and y the weight in pounds. A point is
/// outside of the envelope if it lies below a segment that spans its arm.
/// Use the [`envelope`] macro to create it from the vertices.
///
/// [`envelope`]: crate::envelope
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Envelope {
    name: String,
    limits: LineString<f64>,
}

impl Envelope {
    pub fn new(name: impl Into<String>, limits: LineString<f64>) -> Self {
        Self {
            name: name.into(),
            limits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn limits(&self) -> &LineString<f64> {
        &self.limits
    }

    /// Returns `true` if the point is below any segment that spans the
    /// point's arm.
    ///
    /// Vertical segments have no weight to compare with and are skipped.
    pub fn is_exceeded_by(&self, point: &WeightBalancePoint) -> bool {
        let arm = point.arm_in;

        self.limits.lines().any(|line| {
            let (x1, y1) = line.start.x_y();
            let (x2, y2) = line.end.x_y();

            if x1 == x2 || arm < x1.min(x2) || arm > x1.max(x2) {
                return false;
            }

            point.weight_lb < (y2 - y1) / (x2 - x1) * (arm - x1) + y1
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_below_rising_segment_is_flagged() {
        let envelope = envelope!("Normal", [(35.0, 1500.0), (40.0, 2000.0)]);

        assert!(envelope.is_exceeded_by(&WeightBalancePoint::new(1600.0, 37.5)));
        assert!(!envelope.is_exceeded_by(&WeightBalancePoint::new(1800.0, 37.5)));
    }

    #[test]
    fn point_below_falling_segment_is_flagged() {
        let envelope = envelope!("Utility", [(35.0, 2000.0), (40.0, 1500.0)]);

        assert!(envelope.is_exceeded_by(&WeightBalancePoint::new(1600.0, 37.5)));
        assert!(!envelope.is_exceeded_by(&WeightBalancePoint::new(1800.0, 37.5)));
    }

    #[test]
    fn point_outside_of_all_segments_is_not_flagged() {
        let envelope = envelope!("Normal", [(35.0, 1500.0), (40.0, 2000.0)]);
        assert!(!envelope.is_exceeded_by(&WeightBalancePoint::new(100.0, 42.0)));
    }

    #[test]
    fn vertical_segments_are_skipped() {
        let envelope = envelope!(
            "Normal",
            [(35.0, 1500.0), (35.0, 2000.0), (40.0, 2000.0)]
        );

        assert!(!envelope.is_exceeded_by(&WeightBalancePoint::new(2100.0, 35.0)));
        assert!(envelope.is_exceeded_by(&WeightBalancePoint::new(1900.0, 35.0)));
    }
}
