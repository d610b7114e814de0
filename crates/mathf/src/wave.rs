// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Periodic wrapping: sawtooth (`repeat`) and triangle (`ping_pong`).
//!
//! Both use Rust's `%`, which keeps the sign of the dividend.

/// Reflects `t` back and forth over `[0, length]`.
///
/// Negative `t` is mirrored first. With `m = t % length`, odd periods
/// (`ceil(t / length)` odd) rise and return `m`, even periods fall and return
/// `length - m`. Exact multiples of `length` land on the period boundary:
/// `length` after an odd period, `0` after an even one.
pub fn ping_pong(t: f64, length: f64) -> f64 {
    let t = if t < 0.0 { -t } else { t };
    let m = t % length;
    if (t / length).ceil() % 2.0 == 0.0 {
        if m == 0.0 {
            0.0
        } else {
            length - m
        }
    } else if m == 0.0 {
        length
    } else {
        m
    }
}

/// Wraps `t` into a sawtooth of period `length`.
///
/// Positive `t` yields `t % length`. For `t <= 0` the result is
/// `length + t % length`, so `repeat(0, l)` and `repeat(-l, l)` both return
/// `l` rather than `0`.
pub fn repeat(t: f64, length: f64) -> f64 {
    if t > 0.0 {
        t % length
    } else {
        length + t % length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_pong_rises_then_falls() {
        assert_eq!(ping_pong(3.0, 5.0), 3.0);
        assert_eq!(ping_pong(7.0, 5.0), 3.0);
        assert_eq!(ping_pong(12.0, 5.0), 2.0);
        assert_eq!(ping_pong(-3.0, 5.0), 3.0);
        assert_eq!(ping_pong(-7.0, 5.0), 3.0);
    }

    #[test]
    fn ping_pong_period_boundaries() {
        assert_eq!(ping_pong(0.0, 5.0), 0.0);
        assert_eq!(ping_pong(5.0, 5.0), 5.0);
        assert_eq!(ping_pong(10.0, 5.0), 0.0);
        assert_eq!(ping_pong(15.0, 5.0), 5.0);
    }

    #[test]
    fn repeat_sawtooth() {
        assert_eq!(repeat(7.0, 5.0), 2.0);
        assert_eq!(repeat(-2.0, 5.0), 3.0);
        assert_eq!(repeat(2.5, 5.0), 2.5);
        assert_eq!(repeat(-7.0, 5.0), 3.0);
        assert_eq!(repeat(10.0, 5.0), 0.0);
    }

    #[test]
    fn repeat_non_positive_multiples_return_length() {
        assert_eq!(repeat(0.0, 5.0), 5.0);
        assert_eq!(repeat(-5.0, 5.0), 5.0);
    }
}
