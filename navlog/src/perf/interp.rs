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

//! Multi-dimensional linear interpolation over sorted table rows.

use log::trace;

use super::TableRow;
use crate::error::{Error, Result};

/// Rows bracketing a target along one key dimension.
#[derive(Clone, PartialEq, Debug)]
pub struct Bracket<'a, R> {
    /// The target actually used, clamped to the table's extremes.
    pub target: f64,
    /// All rows sharing the lower and the upper key value or, if the target
    /// was clamped, all rows sharing the extreme key value.
    pub groups: Vec<Vec<&'a R>>,
}

impl<R> Bracket<'_, R> {
    /// Returns `true` if the target was out of the table's range.
    pub fn is_clamped(&self) -> bool {
        self.groups.len() == 1
    }
}

/// Finds the rows bracketing the target along the key dimension.
///
/// The rows must be sorted ascending by the key. A target below or above
/// all keys is clamped to the smallest or largest key and a single group is
/// returned.
///
/// # Errors
///
/// Returns [`InsufficientData`] if there are no rows.
///
/// [`InsufficientData`]: Error::InsufficientData
pub fn find_bracket<'a, R: TableRow>(
    rows: &[&'a R],
    target: f64,
    dim: usize,
) -> Result<Bracket<'a, R>> {
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first.key(dim), last.key(dim)),
        _ => {
            return Err(Error::InsufficientData {
                table: R::TABLE,
                dimension: R::KEYS[dim],
            })
        }
    };

    let group = |key: f64| -> Vec<&'a R> {
        rows.iter()
            .copied()
            .filter(|row| row.key(dim) == key)
            .collect()
    };

    if target >= last {
        trace!("{} {} clamped to {last}", R::TABLE, R::KEYS[dim]);
        return Ok(Bracket {
            target: last,
            groups: vec![group(last)],
        });
    }

    // first row with a key not less than the target
    let upper = rows.partition_point(|row| row.key(dim) < target);

    if upper == 0 {
        trace!("{} {} clamped to {first}", R::TABLE, R::KEYS[dim]);
        return Ok(Bracket {
            target: first,
            groups: vec![group(first)],
        });
    }

    Ok(Bracket {
        target,
        groups: vec![
            group(rows[upper - 1].key(dim)),
            group(rows[upper].key(dim)),
        ],
    })
}

/// Linear interpolation of `y` at `x_target` between two points.
pub fn linear_interpolation(x1: f64, y1: f64, x2: f64, y2: f64, x_target: f64) -> f64 {
    let slope = (y2 - y1) / (x2 - x1);
    y1 + slope * (x_target - x1)
}

/// Outputs of an interpolation with the targets used for each key.
#[derive(Clone, PartialEq, Debug)]
pub struct Interpolation {
    /// Interpolated outputs in the order of [`TableRow::OUTPUTS`].
    pub values: Vec<f64>,
    /// Targets in the order of [`TableRow::KEYS`] after clamping to the
    /// table's range.
    pub targets: Vec<f64>,
}

impl Interpolation {
    /// Returns the interpolated output by name.
    pub fn value<R: TableRow>(&self, output: &str) -> Option<f64> {
        R::OUTPUTS
            .iter()
            .position(|name| *name == output)
            .and_then(|i| self.values.get(i).copied())
    }
}

/// Interpolates the outputs of the rows at the targets.
///
/// The rows are searched key by key. Along each key the rows bracketing the
/// target are grouped and the next key is searched within each group. The
/// outputs of the innermost groups are then interpolated linearly back up
/// along each key.
///
/// Targets are shared by all groups. A target clamped while searching one
/// group is used for the groups that follow.
///
/// # Errors
///
/// Returns [`InsufficientData`] if a group has no rows to search or two
/// bracketing groups share the same key.
///
/// [`InsufficientData`]: Error::InsufficientData
pub fn interpolate<R: TableRow>(rows: &[R], targets: &[f64]) -> Result<Interpolation> {
    if targets.len() != R::KEYS.len() {
        return Err(Error::ImplausibleValue("number of interpolation targets"));
    }

    let mut targets = targets.to_vec();
    let rows: Vec<&R> = rows.iter().collect();
    let values = descend(&rows, 0, &mut targets)?;

    Ok(Interpolation { values, targets })
}

fn descend<R: TableRow>(rows: &[&R], dim: usize, targets: &mut [f64]) -> Result<Vec<f64>> {
    let bracket = find_bracket(rows, targets[dim], dim)?;
    targets[dim] = bracket.target;

    let mut resolved = Vec::with_capacity(bracket.groups.len());
    for group in &bracket.groups {
        let base = group.first().ok_or(Error::InsufficientData {
            table: R::TABLE,
            dimension: R::KEYS[dim],
        })?;

        let values = if dim + 1 < R::KEYS.len() {
            descend(group, dim + 1, targets)?
        } else {
            base.outputs()
        };

        resolved.push((base.key(dim), values));
    }

    if let [(x1, y1), (x2, y2)] = resolved.as_slice() {
        if x2 == x1 {
            return Err(Error::InsufficientData {
                table: R::TABLE,
                dimension: R::KEYS[dim],
            });
        }

        return Ok(y1
            .iter()
            .zip(y2)
            .map(|(y1, y2)| linear_interpolation(*x1, *y1, *x2, *y2, targets[dim]))
            .collect());
    }

    resolved
        .into_iter()
        .next()
        .map(|(_, values)| values)
        .ok_or(Error::InsufficientData {
            table: R::TABLE,
            dimension: R::KEYS[dim],
        })
}
