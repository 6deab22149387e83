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

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A performance table has no rows to evaluate.
    InsufficientData {
        table: &'static str,
        dimension: &'static str,
    },
    /// Two vectors that should span a plane are (anti-)parallel or zero.
    InvalidGeometry,
    /// A coordinate failed its range checks.
    InvalidCoordinate(String),
    /// The interval between generated coordinates must be positive.
    NonPositiveInterval,
    /// No performance profile is known by this id.
    UnknownProfile(u32),
    /// The value is out of the range this engine can work with.
    ImplausibleValue(&'static str),
    /// A string could not be parsed into the requested value.
    UnexpectedString,
    /// Weight is loaded on a station the aircraft doesn't have.
    UnknownStation { kind: &'static str, id: u32 },
    /// Fuel is loaded but the aircraft has no tank to hold it.
    InvalidFuelTanks,
    /// A balance point was requested for a mass of zero.
    ZeroWeight,
    /// Leg sequence numbers must run contiguously from 1.
    InvalidSequence { expected: u32, found: u32 },
    /// A flight planning was built without a required input.
    MissingInput(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { table, dimension } => {
                write!(f, "{table} table has no data to evaluate {dimension}")
            }
            Self::InvalidGeometry => {
                write!(f, "points are too close or antipodal to span a plane")
            }
            Self::InvalidCoordinate(reason) => write!(f, "invalid coordinate: {reason}"),
            Self::NonPositiveInterval => write!(f, "interval should be greater than zero"),
            Self::UnknownProfile(id) => write!(f, "performance profile {id} is unknown"),
            Self::ImplausibleValue(what) => write!(f, "{what} is implausible"),
            Self::UnexpectedString => write!(f, "unexpected string"),
            Self::UnknownStation { kind, id } => write!(f, "aircraft has no {kind} {id}"),
            Self::InvalidFuelTanks => write!(f, "aircraft has no usable fuel tank"),
            Self::ZeroWeight => write!(f, "arm of a zero weight is undefined"),
            Self::InvalidSequence { expected, found } => {
                write!(f, "leg sequence should be {expected} but is {found}")
            }
            Self::MissingInput(what) => write!(f, "flight planning needs {what}"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
