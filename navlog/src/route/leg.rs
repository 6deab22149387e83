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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::STD_ALTIMETER_INHG;
use crate::core::Wind;
use crate::error::{Error, Result};
use crate::nd::Waypoint;

/// A leg `from` one waypoint `to` another with the conditions expected
/// along it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    /// Position of the leg within the flight starting at 1.
    pub sequence: u32,
    pub from: Waypoint,
    pub to: Waypoint,
    /// Desired cruise altitude in feet.
    pub altitude_ft: i32,
    /// Outside air temperature at the cruise altitude.
    pub temperature_c: f64,
    pub wind: Wind,
    pub altimeter_inhg: f64,
}

impl Leg {
    /// Creates a leg in standard conditions without wind.
    pub fn new(sequence: u32, from: Waypoint, to: Waypoint, altitude_ft: i32) -> Self {
        Self {
            sequence,
            from,
            to,
            altitude_ft,
            temperature_c: 15.0 - 2.0 * altitude_ft as f64 / 1000.0,
            wind: Wind::default(),
            altimeter_inhg: STD_ALTIMETER_INHG,
        }
    }

    pub fn with_temperature(mut self, temperature_c: f64) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    pub fn with_wind(mut self, wind: Wind) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_altimeter(mut self, altimeter_inhg: f64) -> Self {
        self.altimeter_inhg = altimeter_inhg;
        self
    }

    /// Great arc distance of the leg in whole nautical miles.
    pub fn distance(&self) -> f64 {
        self.from.great_arc_to(&self.to)
    }
}

/// Checks that the legs are numbered contiguously from 1.
pub(crate) fn check_sequence(legs: &[Leg]) -> Result<()> {
    for (expected, leg) in (1..).zip(legs) {
        if leg.sequence != expected {
            return Err(Error::InvalidSequence {
                expected,
                found: leg.sequence,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(lat: &str) -> Waypoint {
        Waypoint::new("WP", "WP", lat.parse().unwrap(), "1000000W".parse().unwrap()).unwrap()
    }

    #[test]
    fn standard_temperature_by_default() {
        let leg = Leg::new(1, waypoint("500000N"), waypoint("510000N"), 5000);
        assert_eq!(leg.temperature_c, 5.0);
        assert_eq!(leg.altimeter_inhg, 29.92);
        assert_eq!(leg.distance(), 60.0);
    }

    #[test]
    fn sequence_is_contiguous() {
        let leg = |sequence| Leg::new(sequence, waypoint("500000N"), waypoint("510000N"), 3000);

        assert!(check_sequence(&[leg(1), leg(2), leg(3)]).is_ok());
        assert!(check_sequence(&[]).is_ok());
        assert_eq!(
            check_sequence(&[leg(1), leg(3)]),
            Err(Error::InvalidSequence {
                expected: 2,
                found: 3
            })
        );
    }
}
