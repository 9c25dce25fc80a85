//!
//! Schoolbook and Karatsuba multiplication
//!

use crate::bigdigit::{Digit, ROWS_PER_NORMALIZE};
use crate::BigInt;
use crate::Sign;

// const KARATSUBA_THRESHOLD: usize = ${RUST_ZINT_KARATSUBA_THRESHOLD} or 25;
include!(concat!(env!("OUT_DIR"), "/karatsuba_threshold.rs"));


/// `x *= rhs`
pub(crate) fn mul_assign(x: &mut BigInt, rhs: &BigInt) {
    // Fast-path special cases.
    if x.is_zero() {
        return;
    }
    if rhs.is_zero() {
        x.digits.clear();
        x.sign = Sign::NoSign;
        return;
    }
    if let Some(digit) = rhs.single_digit_signed() {
        for d in x.digits.iter_mut() {
            *d *= digit;
        }
        // a negative multiplier leaves every entry non-positive;
        // normalize resolves that into a sign flip
        x.normalize();
        return;
    }

    let sign = x.sign() * rhs.sign();
    if x.digits.len() < KARATSUBA_THRESHOLD || rhs.digits.len() < KARATSUBA_THRESHOLD {
        schoolbook(x, &rhs.digits);
    } else {
        karatsuba(x, rhs);
    }
    x.sign = sign;
}

/// Accumulate cross products row by row into x's own digit vector
fn schoolbook(x: &mut BigInt, b: &[Digit]) {
    let a = x.digits.clone();
    let full_len = a.len() + b.len();

    // Preload x with the first row.
    let b0 = b[0];
    for d in x.digits.iter_mut() {
        *d *= b0;
    }
    x.digits.resize(full_len, 0);

    for (j, &b_digit) in b.iter().enumerate().skip(1) {
        if b_digit != 0 {
            for (i, &a_digit) in a.iter().enumerate() {
                x.digits[i + j] += a_digit * b_digit;
            }
        }
        // There is enough headroom for 6 or 7 rows between carry passes.
        if j % ROWS_PER_NORMALIZE == 0 {
            x.normalize();
            x.digits.resize(full_len, 0);
        }
    }
    x.normalize();
}

/// Three-subproduct divide-and-conquer multiplication
fn karatsuba(x: &mut BigInt, rhs: &BigInt) {
    let chunk_len = (x.digits.len().max(rhs.digits.len()) + 1) / 2;
    let (a_low, a_high) = split_digits(&x.digits, chunk_len);
    let (b_low, b_high) = split_digits(&rhs.digits, chunk_len);

    let z0 = &a_high * &b_high;
    let z2 = &a_low * &b_low;
    let mut z1 = (&a_high + &a_low) * (&b_high + &b_low);
    z1 -= &z0;
    z1 -= &z2;

    let mut result = z0;
    result.shift_digits(chunk_len * 2);
    z1.shift_digits(chunk_len);
    result += &z1;
    result += &z2;

    x.digits = result.digits;
    x.sign = result.sign;
}

/// Split a magnitude at a digit boundary into (low, high) halves
fn split_digits(digits: &[Digit], at: usize) -> (BigInt, BigInt) {
    let at = at.min(digits.len());
    (
        BigInt::from_digits(digits[..at].to_vec()),
        BigInt::from_digits(digits[at..].to_vec()),
    )
}


#[cfg(test)]
#[allow(unreachable_patterns)]
mod test {
    use super::*;
    use crate::bigdigit::RADIX;
    use std::str::FromStr;

    fn parsed(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let mut a = parsed($a);
                mul_assign(&mut a, &parsed($b));
                assert_eq!(a, parsed($expected));

                // multiplication commutes
                let mut b = parsed($b);
                mul_assign(&mut b, &parsed($a));
                assert_eq!(b, parsed($expected));
            }
        };
    }

    impl_case!(case_0_5: "0" * "5" => "0");
    impl_case!(case_7_22: "7" * "22" => "154");
    impl_case!(case_single_digit_carry: "33554431" * "33554431" => "1125899839733761");
    impl_case!(case_negative_digit: "1000000000" * "-3" => "-3000000000");
    impl_case!(case_both_negative: "-123456789" * "-987654321" => "121932631112635269");
    impl_case!(case_18_digits:
        "123456789123456789" * "987654321987654321"
        => "121932631356500531347203169112635269");

    #[test]
    fn karatsuba_agrees_with_schoolbook() {
        let mut rng = oorandom::Rand64::new(11);
        for _ in 0..20 {
            // both operands above the cutover, forcing the recursive path
            let a = random_magnitude(&mut rng, KARATSUBA_THRESHOLD + 7);
            let b = random_magnitude(&mut rng, KARATSUBA_THRESHOLD + 3);

            let mut by_karatsuba = a.clone();
            karatsuba(&mut by_karatsuba, &b);

            let mut by_schoolbook = a.clone();
            schoolbook(&mut by_schoolbook, &b.digits);

            assert_eq!(by_karatsuba, by_schoolbook);
        }
    }

    #[test]
    fn mul_assign_picks_karatsuba_above_threshold() {
        let mut rng = oorandom::Rand64::new(5);
        let a = random_magnitude(&mut rng, KARATSUBA_THRESHOLD * 2);
        let b = random_magnitude(&mut rng, KARATSUBA_THRESHOLD);

        let mut product = a.clone();
        mul_assign(&mut product, &b);

        let mut expected = a.clone();
        schoolbook(&mut expected, &b.digits);
        assert_eq!(product, expected);
    }

    fn random_magnitude(rng: &mut oorandom::Rand64, len: usize) -> BigInt {
        let mut digits: Vec<Digit> = (0..len).map(|_| (rng.rand_u64() % RADIX as u64) as Digit).collect();
        // force a non-zero leading digit so the length is exact
        digits[len - 1] = 1 + digits[len - 1] % (RADIX - 1);
        BigInt::from_digits(digits)
    }
}
