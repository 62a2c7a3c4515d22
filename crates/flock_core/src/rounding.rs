//! Rounding applied at the read boundary of a flock.
//!
//! Midpoints go to the even neighbour, so `0.25` becomes `0.2` and `0.35`
//! becomes `0.4` at one decimal (subject to the binary value of the input).

/// Rounds `value` to `decimals` places, ties to even.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_to(10.04, 1), 10.0);
        assert_eq!(round_to(10.06, 1), 10.1);
        assert_eq!(round_to(-5.06, 1), -5.1);
    }

    #[test]
    fn test_round_two_decimals() {
        assert_eq!(round_to(125f64.sqrt(), 2), 11.18);
        assert_eq!(round_to(2f64.sqrt(), 2), 1.41);
    }

    #[test]
    fn test_ties_go_to_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.5, 1), 0.5);
        assert_eq!(round_to(1.25, 1), 1.2);
        assert_eq!(round_to(1.75, 1), 1.8);
    }

    #[test]
    fn test_zero_and_huge_values() {
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(f64::MAX, 2), f64::MAX);
    }
}
