// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear interpolation and stepping.

use crate::clamp::{clamp, clamp01};

/// Interpolates from `a` to `b` by `t`, with `t` clamped to `[0, 1]`.
///
/// Computed as `(b - a) * clamp01(t) + a`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a) * clamp01(t) + a
}

/// Interpolates from `a` toward `b` without clamping `t`.
///
/// Inside `[0, 1]` this is [`lerp`]. Outside that range the step is
/// `a + |b - a| * t`: the distance is unsigned, so the direction follows the
/// sign of `t` rather than the order of `a` and `b`. `lerp_unclamped(10, 0, 2)`
/// is `30`, not `-10`.
pub fn lerp_unclamped(a: f64, b: f64, t: f64) -> f64 {
    if !(0.0..=1.0).contains(&t) && !t.is_nan() {
        a + (b - a).abs() * t
    } else {
        lerp(a, b, t)
    }
}

/// Returns where `value` sits between `a` and `b` as a fraction in `[0, 1]`.
///
/// `value` is clamped into the span first. With `a == b` the denominator is
/// zero and the result is `NaN`; no guard is applied.
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    (clamp(value, a.min(b), a.max(b)) - a) / (b - a)
}

/// Moves `current` toward `target` by at most `max_delta`.
///
/// When `max_delta > 0` and the remaining distance is within one step the
/// result snaps to `target` exactly, so repeated calls never overshoot.
/// Otherwise the step is applied as given: a negative `max_delta` moves away
/// from `target`.
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    if max_delta > 0.0 && (target - current).abs() <= max_delta {
        return target;
    }
    if current > target {
        current - max_delta
    } else {
        current + max_delta
    }
}
