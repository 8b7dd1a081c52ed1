use std::cmp::Ordering;

// Integers in this range convert to f64 without rounding.
const F64_SAFE_I64: i64 = 1i64 << 53;

// 2^63 as f64; the first double above every i64.
const I64_UPPER_F64: f64 = 9_223_372_036_854_775_808.0;

/// Total order over doubles used by every comparison surface.
///
/// - `-0.0` and `0.0` are Equal.
/// - NaN is Equal to NaN and Greater than every other number, so index keys
///   built from doubles stay totally ordered.
#[must_use]
pub(crate) fn cmp_f64(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
    }
}

/// Exact Integer vs Double comparison.
///
/// Small integers are promoted to f64 directly. Outside ±2^53 promotion would
/// round, so the double is split into integral and fractional parts instead.
#[must_use]
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn cmp_i64_f64(int: i64, double: f64) -> Ordering {
    if (-F64_SAFE_I64..=F64_SAFE_I64).contains(&int) {
        return cmp_f64(int as f64, double);
    }

    if double.is_nan() || double >= I64_UPPER_F64 {
        return Ordering::Less;
    }
    if double < -I64_UPPER_F64 {
        return Ordering::Greater;
    }

    // in range: trunc is integral and fits i64 exactly
    let whole = double.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&double).unwrap_or(Ordering::Equal),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(cmp_f64(-0.0, 0.0), Ordering::Equal);
        assert_eq!(cmp_i64_f64(0, -0.0), Ordering::Equal);
    }

    #[test]
    fn nan_sorts_above_everything() {
        assert_eq!(cmp_f64(f64::NAN, f64::NAN), Ordering::Equal);
        assert_eq!(cmp_f64(f64::NAN, f64::INFINITY), Ordering::Greater);
        assert_eq!(cmp_f64(f64::NEG_INFINITY, f64::NAN), Ordering::Less);
        assert_eq!(cmp_i64_f64(i64::MAX, f64::NAN), Ordering::Less);
        assert_eq!(cmp_i64_f64(1, f64::NAN), Ordering::Less);
    }

    #[test]
    fn infinities_bound_every_integer() {
        assert_eq!(cmp_i64_f64(i64::MAX, f64::INFINITY), Ordering::Less);
        assert_eq!(cmp_i64_f64(i64::MIN, f64::NEG_INFINITY), Ordering::Greater);
    }

    #[test]
    fn large_integers_do_not_round_into_equality() {
        // i64::MAX rounds to 2^63 as a double; exact comparison must not.
        assert_eq!(cmp_i64_f64(i64::MAX, I64_UPPER_F64), Ordering::Less);
        assert_eq!(cmp_i64_f64(i64::MIN, -I64_UPPER_F64), Ordering::Equal);

        // 2^53 + 1 is not representable; nearest doubles are 2^53 and 2^53 + 2.
        let int = (1i64 << 53) + 1;
        assert_eq!(cmp_i64_f64(int, 9_007_199_254_740_992.0), Ordering::Greater);
        assert_eq!(cmp_i64_f64(int, 9_007_199_254_740_994.0), Ordering::Less);
    }

    #[test]
    fn fractional_part_breaks_ties_for_large_integers() {
        let int = 1i64 << 60;
        #[expect(clippy::cast_precision_loss)]
        let exact = int as f64;
        assert_eq!(cmp_i64_f64(int, exact), Ordering::Equal);
        assert_eq!(cmp_i64_f64(int - 1, exact), Ordering::Less);
        assert_eq!(cmp_i64_f64(-int, -exact), Ordering::Equal);
    }

    #[test]
    fn small_integers_promote() {
        assert_eq!(cmp_i64_f64(2, 2.0), Ordering::Equal);
        assert_eq!(cmp_i64_f64(2, 2.5), Ordering::Less);
        assert_eq!(cmp_i64_f64(-3, -3.5), Ordering::Greater);
    }
}
