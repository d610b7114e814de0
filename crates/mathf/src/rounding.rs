// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Comparison, sign and rounding helpers.

use crate::consts::EPSILON;

/// Returns `true` when `f1` and `f2` differ by less than [`EPSILON`].
///
/// The tolerance is absolute, not scaled by magnitude, so values far from
/// `1.0` only compare equal when they are (nearly) bit-identical. Any `NaN`
/// operand yields `false`.
#[inline]
pub fn approximately(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() < EPSILON
}

/// Returns `1.0` for `f >= 0` and `-1.0` otherwise.
///
/// There is no zero case: both `0.0` and `-0.0` map to `1.0`. `NaN` maps to
/// `-1.0`.
#[inline]
pub fn sign(f: f64) -> f64 {
    if f >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Rounds `f` to an integer value, with one exception below.
///
/// Exact `.5` ties (where `f + 0.5 == ceil(f)`) go to the even neighbour:
/// `2.5 → 2`, `3.5 → 4`, `-2.5 → -2`. Everything else rounds to nearest with
/// halves away from zero.
///
/// The tie test runs on the rounded sum `f + 0.5`, so `0.49999999999999994`
/// (the largest `f64` below `0.5`) is taken as a tie: the sum rounds to `1.0`,
/// which is odd, and the result is `f - 0.5 = -5.551115123125783e-17`, not an
/// integer.
pub fn round(f: f64) -> f64 {
    let ceil_val = f + 0.5;
    if ceil_val == f.ceil() {
        if ceil_val % 2.0 == 0.0 {
            f + 0.5
        } else {
            f - 0.5
        }
    } else {
        f.round()
    }
}
