// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle conversion factors and the comparison tolerance.

use core::f64::consts::TAU;

/// Multiply degrees by this to get radians (`2π / 360`).
pub const DEG2RAD: f64 = TAU / 360.0;

/// Multiply radians by this to get degrees (`360 / 2π`).
pub const RAD2DEG: f64 = 360.0 / TAU;

/// Machine epsilon for `f64`; the absolute tolerance used by
/// [`approximately`](crate::approximately).
pub const EPSILON: f64 = f64::EPSILON;
