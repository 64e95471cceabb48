//! Numeric helpers shared by the noise kernels.

/// Floor to a lattice coordinate.
///
/// The cast saturates, so values beyond the `i32` range clamp to its ends and
/// NaN maps to 0 instead of panicking.
#[inline]
#[must_use]
pub fn floor(v: f64) -> i32 {
    v.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_positive_and_negative() {
        assert_eq!(floor(1.5), 1);
        assert_eq!(floor(-1.5), -2);
        assert_eq!(floor(-0.0), 0);
        assert_eq!(floor(-2.0), -2);
        assert_eq!(floor(1e-300), 0);
        assert_eq!(floor(-1e-300), -1);
    }

    #[test]
    fn floor_saturates_out_of_range_values() {
        assert_eq!(floor(f64::NAN), 0);
        assert_eq!(floor(f64::INFINITY), i32::MAX);
        assert_eq!(floor(f64::NEG_INFINITY), i32::MIN);
    }
}
