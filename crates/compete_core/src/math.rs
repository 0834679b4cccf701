//! Rounding and small numeric helpers shared by every layer.

/// Round `value` to `decimals` decimal places, ties toward positive infinity.
///
/// # Examples
///
/// ```
/// use compete_core::math::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(2.25, 1), 2.3);
/// assert_eq!(round_to(-2.25, 1), -2.2);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Round to one decimal place (score and impact precision).
#[inline]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places (price precision).
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Limit `value` to `[min, max]`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Percentage change from `old` to `new`.
///
/// When `old` is zero the change is reported as `100` if `new` is positive
/// and `0` otherwise.
///
/// # Examples
///
/// ```
/// use compete_core::math::change_percentage;
///
/// assert_eq!(change_percentage(50.0, 75.0), 50.0);
/// assert_eq!(change_percentage(0.0, 3.0), 100.0);
/// assert_eq!(change_percentage(0.0, -3.0), 0.0);
/// ```
pub fn change_percentage(old: f64, new: f64) -> f64 {
    if old == 0.0 {
        return if new > 0.0 { 100.0 } else { 0.0 };
    }
    (new - old) / old * 100.0
}

/// Divide, returning `default` when the denominator is zero.
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64, default: f64) -> f64 {
    if denominator == 0.0 {
        default
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_helpers() {
        assert_eq!(round1(7.96), 8.0);
        assert_eq!(round2(118.4211), 118.42);
        assert_eq!(round_to(-1.25, 1), -1.2);
        assert_eq!(round_to(12.0, 0), 12.0);
    }

    #[test]
    fn test_negative_ties_round_up() {
        assert_eq!(round1(-6.25), -6.2);
        assert_eq!(round1(-18.75), -18.7);
        assert_eq!(round1(6.25), 6.3);
        assert_eq!(round1(-6.26), -6.3);
    }

    #[test]
    fn test_round_is_idempotent() {
        for value in [0.05, 1.15, 9.95, 3.333_333] {
            let once = round1(value);
            assert_eq!(round1(once), once);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(4.2, 0.0, 10.0), 4.2);
    }

    #[test]
    fn test_change_percentage() {
        assert_relative_eq!(change_percentage(40.0, 30.0), -25.0);
        assert_relative_eq!(change_percentage(-10.0, -5.0), -50.0);
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(1.0, 0.0, 7.0), 7.0);
        assert_eq!(safe_divide(1.0, 4.0, 7.0), 0.25);
    }
}
