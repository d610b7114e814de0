// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle helpers. All angles are in degrees.

use crate::interp::lerp;

const FULL_TURN: f64 = 360.0;
const HALF_TURN: f64 = 180.0;
/// Turn count above which [`lerp_angle`] stops stepping one turn at a time.
const MAX_STEPPED_TURNS: f64 = 1024.0;

/// Returns `target - current` after reducing each angle that exceeds one full
/// turn in magnitude.
///
/// The reduction is a sign-preserving remainder (`%`), applied only when
/// `|angle| > 360`. The difference itself is not wrapped into `[-180, 180]`,
/// so `delta_angle(10, 350)` is `340`, not `-20`.
pub fn delta_angle(current: f64, target: f64) -> f64 {
    let current = reduce_turns(current);
    let target = reduce_turns(target);
    target - current
}

#[inline]
fn reduce_turns(angle: f64) -> f64 {
    if angle.abs() > FULL_TURN {
        angle % FULL_TURN
    } else {
        angle
    }
}

/// Interpolates between angles `a` and `b` by `t` (clamped), going the short
/// way around.
///
/// `b` is shifted by whole turns until it lies within half a turn of `a`, then
/// the pair is passed to [`lerp`]. Gaps wider than 1024 turns
/// are first closed in a single jump, and stepping stops once adding a turn no
/// longer changes `b`, so the call terminates for any finite input. Non-finite
/// inputs are passed to [`lerp`] unshifted.
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let mut b = b;
    if a.is_finite() && b.is_finite() {
        let gap = b - a;
        if gap.abs() > MAX_STEPPED_TURNS * FULL_TURN {
            b -= (gap / FULL_TURN).trunc() * FULL_TURN;
        }
        while b - a > HALF_TURN {
            let next = b - FULL_TURN;
            if next == b {
                break;
            }
            b = next;
        }
        while a - b > HALF_TURN {
            let next = b + FULL_TURN;
            if next == b {
                break;
            }
            b = next;
        }
    }
    lerp(a, b, t)
}
