//! Readable ingredient amounts: whole numbers stay whole, the rest become
//! reduced fractions.

/// Largest denominator used when approximating an amount.
const MAX_DENOMINATOR: i128 = 1_000_000;

/// Exact `numerator / denominator` of a finite, non-negative `f64`.
///
/// Doubles the value until it is integral (each doubling is exact), giving a
/// power-of-two denominator. Gives up after 62 doublings, which only affects
/// amounts far below anything a recipe lists.
fn exact_ratio(value: f64) -> (i128, i128) {
    let mut scaled = value;
    let mut shift = 0u32;
    while scaled.fract() != 0.0 && shift < 62 {
        scaled *= 2.0;
        shift += 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    let numerator = scaled.trunc() as i128;
    (numerator, 1i128 << shift)
}

/// What: Closest fraction to `n / d` whose denominator is at most `max_den`.
///
/// Details:
/// - Walks the continued-fraction convergents, then compares the last
///   convergent with the best semiconvergent, the same way the classic
///   `limit_denominator` algorithm does.
fn limit_denominator(n: i128, d: i128, max_den: i128) -> (i128, i128) {
    if d <= max_den {
        let g = gcd(n, d);
        return (n / g, d / g);
    }
    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut num, mut den) = (n, d);
    while den != 0 {
        let a = num / den;
        let q2 = q0 + a * q1;
        if q2 > max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (num, den) = (den, num - a * den);
    }
    let k = (max_den - q0) / q1;
    let (b1n, b1d) = (p0 + k * p1, q0 + k * q1);
    let (b2n, b2d) = (p1, q1);
    // |b2 - n/d| <= |b1 - n/d|, compared by cross-multiplication
    let err2 = (b2n * d - n * b2d).abs() * b1d;
    let err1 = (b1n * d - n * b1d).abs() * b2d;
    if err2 <= err1 { (b2n, b2d) } else { (b1n, b1d) }
}

/// Greatest common divisor of two non-negative integers.
const fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a == 0 { 1 } else { a }
}

/// What: Format an ingredient amount for display.
///
/// Inputs:
/// - `amount`: Quantity from the API, possibly absent
///
/// Output:
/// - `""` when absent, `"2"` for whole numbers, otherwise a reduced fraction
///   such as `"1/3"` or `"3/2"` with a denominator of at most 1,000,000.
#[must_use]
pub fn format_ingredient_amount(amount: Option<f64>) -> String {
    let Some(value) = amount else {
        return String::new();
    };
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let (n, d) = exact_ratio(value.abs());
    let (num, den) = limit_denominator(n, d, MAX_DENOMINATOR);
    if den == 1 {
        format!("{sign}{num}")
    } else {
        format!("{sign}{num}/{den}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_ingredient_amount;

    #[test]
    fn whole_and_missing_amounts() {
        assert_eq!(format_ingredient_amount(None), "");
        assert_eq!(format_ingredient_amount(Some(2.0)), "2");
        assert_eq!(format_ingredient_amount(Some(0.0)), "0");
        assert_eq!(format_ingredient_amount(Some(250.0)), "250");
    }

    #[test]
    fn simple_fractions_reduce() {
        assert_eq!(format_ingredient_amount(Some(0.5)), "1/2");
        assert_eq!(format_ingredient_amount(Some(0.25)), "1/4");
        assert_eq!(format_ingredient_amount(Some(0.75)), "3/4");
        assert_eq!(format_ingredient_amount(Some(1.5)), "3/2");
    }

    #[test]
    fn repeating_decimals_snap_to_small_denominators() {
        assert_eq!(format_ingredient_amount(Some(1.0 / 3.0)), "1/3");
        assert_eq!(format_ingredient_amount(Some(2.0 / 3.0)), "2/3");
        assert_eq!(format_ingredient_amount(Some(0.1)), "1/10");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_ingredient_amount(Some(-0.5)), "-1/2");
    }
}
