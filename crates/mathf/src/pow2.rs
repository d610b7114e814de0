// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Power-of-two helpers on 32-bit integers.
//!
//! Inputs are `f64`. They are truncated toward zero and wrapped modulo 2^32
//! into an `i32` before any bit manipulation, and all intermediate arithmetic
//! wraps. Results whose true value exceeds `i32::MAX` therefore wrap too; that
//! is accepted, not reported.

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Truncates `value` toward zero and wraps it into the `i32` range.
///
/// Non-finite values become `0`.
pub(crate) fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    // In [0, 2^32) after the euclidean remainder; reinterpret the bits as signed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bits = wrapped as u32;
    bits.cast_signed()
}

/// Returns the smallest power of two that is `>=` the truncated `value`.
///
/// Negative input returns `0`, and so does `0` itself. Uses the decrement,
/// OR-smear, increment sequence, so inputs in `(2^30, 2^31)` wrap to
/// `i32::MIN`. Inputs in `[2^31, 2^32)` truncate to a negative `i32` and
/// return `0`; larger inputs wrap modulo `2^32` first.
pub fn next_power_of_two(value: f64) -> i32 {
    let mut v = to_int32(value);
    if v < 0 {
        return 0;
    }
    v = v.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Returns the power of two nearest to `value`, preferring the larger one
/// unless `value` is more than a quarter of it away.
///
/// With `next = next_power_of_two(value)`, returns `next >> 1` when
/// `next - value > next >> 2`, otherwise `next`. The distance is measured
/// against the untruncated `value`.
pub fn closest_power_of_two(value: f64) -> i32 {
    let next = next_power_of_two(value);
    pick_closest(next, value)
}

/// Variant of [`closest_power_of_two`] that locates the power through
/// `floor(log2(value))` instead of bit smearing.
///
/// `value` is truncated toward zero first; negative input returns `0`. The
/// candidate is `2 << floor(log2(value))` evaluated as a 32-bit shift (the
/// shift count wraps modulo 32 and bits shifted out are lost), so despite the
/// wider return type the reachable range is that of `i32`. `0` has
/// `log2 = -∞`, which shifts by `0` and yields a candidate of `2` and a result
/// of `1`.
pub fn closest_power_of_two_long(value: f64) -> i64 {
    let value = value.trunc();
    if value < 0.0 {
        return 0;
    }
    let exponent = to_int32(libm::log2(value).floor());
    let next = 2_i32.wrapping_shl(exponent.cast_unsigned());
    i64::from(pick_closest(next, value))
}

/// Returns `true` when the truncated `value` has at most one bit set.
///
/// `0` counts as a power of two here (`0 & -1 == 0`), as does `i32::MIN`.
pub fn is_power_of_two(value: f64) -> bool {
    let v = to_int32(value);
    v & v.wrapping_sub(1) == 0
}

#[inline]
fn pick_closest(next: i32, value: f64) -> i32 {
    if f64::from(next) - value > f64::from(next >> 2) {
        next >> 1
    } else {
        next
    }
}
