//!
//! Short and long division with selectable remainder rounding
//!

use crate::arithmetic::addition::{add_digit, cmp_magnitude};
use crate::bigdigit::{Digit, RADIX};
use crate::{ArithmeticError, BigInt, RoundingMode, Sign};

use num_traits::{ToPrimitive, Zero};

use std::cmp::Ordering;


/// Divide, returning quotient and remainder
///
/// Truncate mode keeps the dividend's sign on the remainder; floor
/// mode keeps the remainder non-negative by paying one extra divisor
/// into it.
pub(crate) fn divmod(
    dividend: &BigInt,
    divisor: &BigInt,
    mode: RoundingMode,
) -> Result<(BigInt, BigInt), ArithmeticError> {
    if divisor.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    if dividend.is_zero() {
        return Ok((BigInt::zero(), BigInt::zero()));
    }

    if let Some(d) = divisor.single_digit_signed() {
        // checked_div sidesteps the i64::MIN / -1 overflow
        if let Some((n, mut q)) = dividend.to_i64().and_then(|n| Some((n, n.checked_div(d)?))) {
            let mut r = n % d;
            if mode == RoundingMode::Floor && r < 0 {
                r += d.abs();
                q -= d.signum();
            }
            return Ok((BigInt::from(q), BigInt::from(r)));
        }
        return Ok(short_division(dividend, divisor, d, mode));
    }

    Ok(long_division(dividend, divisor, mode))
}

/// Single-digit divisor: one pass from the most significant digit down
fn short_division(dividend: &BigInt, divisor: &BigInt, d: Digit, mode: RoundingMode) -> (BigInt, BigInt) {
    let d_abs = d.abs();
    let mut quotient_digits = vec![0; dividend.digits.len()];
    let mut rem: Digit = 0;
    for i in (0..dividend.digits.len()).rev() {
        let cur = dividend.digits[i] + rem * RADIX;
        quotient_digits[i] = cur / d_abs;
        rem = cur % d_abs;
    }

    let mut quotient = BigInt::from_digits(quotient_digits);
    if !quotient.is_zero() {
        quotient.sign = dividend.sign() * divisor.sign();
    }
    let mut remainder = match dividend.sign() {
        Sign::Minus => BigInt::from(-rem),
        _ => BigInt::from(rem),
    };

    if mode == RoundingMode::Floor && remainder.sign() == Sign::Minus {
        add_digit(&mut remainder, d_abs);
        match divisor.sign() {
            Sign::Minus => add_digit(&mut quotient, 1),
            _ => add_digit(&mut quotient, -1),
        }
    }
    (quotient, remainder)
}

/// Multi-digit divisor: build the remainder digit by digit, binary
/// searching each quotient digit
fn long_division(dividend: &BigInt, divisor: &BigInt, mode: RoundingMode) -> (BigInt, BigInt) {
    let mut divisor_mag = divisor.clone();
    divisor_mag.sign = Sign::Plus;

    let mut quotient_digits = vec![0; dividend.digits.len()];
    let mut remainder = BigInt::zero();
    for i in (0..dividend.digits.len()).rev() {
        remainder.digits.insert(0, dividend.digits[i]);
        // an all-zero prefix would corrupt the length-first comparison
        while remainder.digits.last() == Some(&0) {
            remainder.digits.pop();
        }
        remainder.sign = if remainder.digits.is_empty() { Sign::NoSign } else { Sign::Plus };

        if cmp_magnitude(&remainder.digits, &divisor_mag.digits) == Ordering::Less {
            continue;
        }
        let factor = find_quotient_digit(&divisor_mag, &remainder, 1, RADIX - 1);
        quotient_digits[i] = factor;
        remainder -= &(&divisor_mag * factor);
    }

    let mut quotient = BigInt::from_digits(quotient_digits);
    if !quotient.is_zero() {
        quotient.sign = dividend.sign() * divisor.sign();
    }
    if !remainder.is_zero() {
        remainder.sign = dividend.sign();
    }

    if mode == RoundingMode::Floor && remainder.sign() == Sign::Minus {
        remainder += &divisor_mag;
        match divisor.sign() {
            Sign::Minus => add_digit(&mut quotient, 1),
            _ => add_digit(&mut quotient, -1),
        }
    }
    (quotient, remainder)
}

/// Largest n in [low, high] with `divisor * n <= remainder`
///
/// The caller guarantees `divisor <= remainder < divisor * RADIX`, so
/// the search always lands.
pub(crate) fn find_quotient_digit(
    divisor: &BigInt,
    remainder: &BigInt,
    mut low: Digit,
    mut high: Digit,
) -> Digit {
    loop {
        let n = (low + high + 1) / 2;
        let candidate = divisor * n;
        if &candidate > remainder {
            high = n - 1;
        } else if &(&candidate + divisor) > remainder {
            return n;
        } else {
            low = n + 1;
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn parsed(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal, $mode:ident => $q:literal, $r:literal) => {
            #[test]
            fn $name() {
                let (q, r) = divmod(&parsed($a), &parsed($b), RoundingMode::$mode).unwrap();
                assert_eq!(q, parsed($q));
                assert_eq!(r, parsed($r));
            }
        };
    }

    impl_case!(case_100_7_truncate: "100" / "7", Truncate => "14", "2");
    impl_case!(case_100_7_floor: "100" / "7", Floor => "14", "2");
    impl_case!(case_neg100_7_truncate: "-100" / "7", Truncate => "-14", "-2");
    impl_case!(case_neg100_7_floor: "-100" / "7", Floor => "-15", "5");
    impl_case!(case_100_neg7_truncate: "100" / "-7", Truncate => "-14", "2");
    impl_case!(case_100_neg7_floor: "100" / "-7", Floor => "-14", "2");
    impl_case!(case_neg100_neg7_truncate: "-100" / "-7", Truncate => "14", "-2");
    impl_case!(case_neg100_neg7_floor: "-100" / "-7", Floor => "15", "5");
    impl_case!(case_0_dividend: "0" / "987654321987654321", Truncate => "0", "0");
    impl_case!(case_exact_long: "121932631356500531347203169112635269" / "987654321987654321",
        Truncate => "123456789123456789", "0");
    impl_case!(case_inexact_long:
        "10000000000000000000000000000000000000000" / "123456789123456789123",
        Truncate => "81000000656100005970", "99969589362668935690");
    impl_case!(case_short_division_long_dividend:
        "10000000000000000000000000000000000000000" / "7",
        Truncate => "1428571428571428571428571428571428571428", "4");
    impl_case!(case_negative_long_floor:
        "-10000000000000000000000000000000000000000" / "123456789123456789123",
        Floor => "-81000000656100005971", "23487199760787853433");

    #[test]
    fn division_by_zero_fails() {
        for s in ["0", "1", "-7", "999999999999999999999999"].iter() {
            let result = divmod(&parsed(s), &parsed("0"), RoundingMode::Truncate);
            assert_eq!(result, Err(ArithmeticError::DivisionByZero));
        }
    }

    #[test]
    fn quotient_and_remainder_reconstruct_dividend() {
        let mut rng = oorandom::Rand64::new(17);
        for _ in 0..24 {
            let a = random_signed(&mut rng, 8);
            let b = random_signed(&mut rng, 3);
            if b.is_zero() {
                continue;
            }
            for mode in [RoundingMode::Truncate, RoundingMode::Floor].iter().copied() {
                let (q, r) = divmod(&a, &b, mode).unwrap();
                assert_eq!(&(&q * &b) + &r, a, "mode {:?}", mode);
                if mode == RoundingMode::Floor {
                    assert!(r.sign() != Sign::Minus);
                }
            }
        }
    }

    fn random_signed(rng: &mut oorandom::Rand64, len: usize) -> BigInt {
        let digits: Vec<Digit> = (0..len).map(|_| (rng.rand_u64() % RADIX as u64) as Digit).collect();
        let mut value = BigInt::from_digits(digits);
        if rng.rand_u64() % 2 == 0 {
            value.negate();
        }
        value
    }
}
