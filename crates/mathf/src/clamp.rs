// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Clamps `value` into `[min, max]`.
///
/// Returns `min` when `value < min`, `max` when `value > max`, otherwise
/// `value` unchanged. A `NaN` `value` fails both comparisons and is returned
/// as-is. The bounds are not checked: with `min > max` the result is whichever
/// bound the first failing comparison picks.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` into `[0, 1]`.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_picks_bound_or_value() {
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(10.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn inverted_bounds_are_not_reordered() {
        // value < min wins first.
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(15.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn nan_passes_through() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert!(clamp01(f64::NAN).is_nan());
    }

    #[test]
    fn clamp01_unit_range() {
        assert_eq!(clamp01(-0.25), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
    }
}
