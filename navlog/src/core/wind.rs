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
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Wind by the true direction it blows from and its speed in knots.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    pub direction: f64,
    pub speed: f64,
}

impl Wind {
    pub fn new(direction: f64, speed: f64) -> Self {
        Self { direction, speed }
    }

    /// Returns `true` if there is no wind to correct for.
    pub fn is_calm(&self) -> bool {
        self.speed == 0.0
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind given as direction in three figures followed by the
    /// speed in knots e.g. `27015KT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix("KT").ok_or(Error::UnexpectedString)?;

        let direction = s
            .get(0..3)
            .and_then(|d| d.parse::<u16>().ok())
            .filter(|d| *d <= 360)
            .ok_or(Error::UnexpectedString)?;

        let speed = s
            .get(3..)
            .filter(|s| (2..=3).contains(&s.len()))
            .and_then(|s| s.parse::<u16>().ok())
            .ok_or(Error::UnexpectedString)?;

        Ok(Self::new(direction as f64, speed as f64))
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03.0}{:02.0}KT", self.direction, self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_from_str() {
        assert_eq!(Wind::from_str("18050KT"), Ok(Wind::new(180.0, 50.0)));
        assert_eq!(Wind::from_str("090105KT"), Ok(Wind::new(90.0, 105.0)));
        assert_eq!(Wind::from_str("18050"), Err(Error::UnexpectedString));
        assert_eq!(Wind::from_str("40010KT"), Err(Error::UnexpectedString));
        assert_eq!(Wind::from_str("1805KT"), Err(Error::UnexpectedString));
    }

    #[test]
    fn wind_to_string() {
        assert_eq!(Wind::new(90.0, 5.0).to_string(), "09005KT");
    }
}
