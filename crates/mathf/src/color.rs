// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Gamma ↔ linear color-space conversion for a single channel.
//!
//! `pow` goes through `libm` so results do not depend on the platform's math
//! library.

const GAMMA: f64 = 2.2;
/// Fixed decoding exponent; deliberately not `1.0 / GAMMA`.
const INV_GAMMA: f64 = 0.45454545;

/// Converts a gamma-encoded channel value to linear space (`value ^ 2.2`).
///
/// Negative input follows `pow` and yields `NaN`.
pub fn gamma_to_linear_space(value: f64) -> f64 {
    libm::pow(value, GAMMA)
}

/// Converts a linear channel value to gamma space (`value ^ 0.45454545`).
pub fn linear_to_gamma_space(value: f64) -> f64 {
    libm::pow(value, INV_GAMMA)
}
