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

//! Legs of a route and their navigation log.
//!
//! The [`NavigationEngine`] flies each [`Leg`] with the performance of a
//! profile: it climbs towards the leg's altitude, cruises the remaining
//! distance and burns the fuel used along the leg. Weight and altitude at
//! the end of a leg are the start of the next.

mod leg;
mod navlog;

pub use leg::Leg;
pub use navlog::{Departure, FuelState, NavLog, NavLogEntry, NavLogTotals, NavigationEngine};

