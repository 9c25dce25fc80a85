//!
//! Exponentiation by squaring, with native fast paths
//!

use crate::arithmetic::modulo::mod_assign;
use crate::arithmetic::multiplication::mul_assign;
use crate::arithmetic::square::square_assign;
use crate::bigdigit::Digit;
use crate::{ArithmeticError, BigInt, RoundingMode, Sign};

use num_traits::ToPrimitive;

/// Largest (base, exponent) pairs whose exact power still fits the
/// native safe-integer range; scanned in ascending base order.
const NATIVE_POW_BOUNDS: [(Digit, u64); 18] = [
    (3, 33),
    (5, 22),
    (6, 20),
    (7, 18),
    (9, 16),
    (11, 15),
    (13, 14),
    (16, 13),
    (21, 12),
    (28, 11),
    (39, 10),
    (59, 9),
    (98, 8),
    (190, 7),
    (456, 6),
    (1552, 5),
    (9741, 4),
    (208063, 3),
];


/// `x = x.pow(exp)`
///
/// Panics if `exp` is negative.
pub(crate) fn pow_assign(x: &mut BigInt, exp: &BigInt) {
    assert!(exp.sign() != Sign::Minus, "attempt to raise to a negative power");

    if exp.is_zero() {
        // 0^0 == 1 by convention
        x.assign_native(1);
        return;
    }
    if x.is_zero() {
        return;
    }

    if let Some(e) = exp.to_u64() {
        match e {
            1 => return,
            2 => return square_assign(x),
            _ => {}
        }
        if let Some(digit) = x.single_digit_signed() {
            if pow_single_digit(x, digit, e) {
                return;
            }
        }
    }

    // Square-and-multiply over the exponent's bit pattern, skipping
    // the leading 1 (the accumulator already holds base^1).
    let base = x.clone();
    for bit in exp.to_radix_digits(2).into_iter().skip(1) {
        square_assign(x);
        if bit == 1 {
            mul_assign(x, &base);
        }
    }
}

/// Fast paths for a single-digit base and native exponent.
///
/// Returns false when no path applies and the caller must run the
/// general square-and-multiply loop.
fn pow_single_digit(x: &mut BigInt, digit: Digit, e: u64) -> bool {
    let magnitude = digit.abs();
    let sign = if digit < 0 && e % 2 == 1 { Sign::Minus } else { Sign::Plus };

    if magnitude == 1 {
        x.assign_native(if sign == Sign::Minus { -1 } else { 1 });
        return true;
    }

    // An exact power of two is a pure bit shift.
    if magnitude.count_ones() == 1 {
        let log2 = magnitude.trailing_zeros() as u64;
        if let Some(bits) = e.checked_mul(log2) {
            let mut result = BigInt::pow2(bits);
            result.sign = result.sign * sign;
            x.assign_value(result);
            return true;
        }
        return false;
    }

    for &(base_bound, exp_bound) in NATIVE_POW_BOUNDS.iter() {
        if magnitude <= base_bound && e <= exp_bound {
            let value = magnitude.pow(e as u32);
            x.assign_native(if sign == Sign::Minus { -value } else { value });
            return true;
        }
    }
    false
}

/// `x = x.pow(exp) mod modulus`, reducing after every step
pub(crate) fn powmod_assign(
    x: &mut BigInt,
    exp: &BigInt,
    modulus: &BigInt,
) -> Result<(), ArithmeticError> {
    assert!(exp.sign() != Sign::Minus, "attempt to raise to a negative power");

    if modulus.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    if exp.is_zero() {
        x.assign_native(1);
        return Ok(());
    }
    if x.is_zero() {
        return Ok(());
    }
    if exp.to_u64() == Some(1) {
        return mod_assign(x, modulus, RoundingMode::Truncate);
    }

    // A single-digit modulus bounds every intermediate below RADIX²,
    // so the whole loop runs in native arithmetic.
    if let Some(m) = modulus.single_digit_signed() {
        mod_assign(x, modulus, RoundingMode::Truncate)?;
        let base = match x.single_digit_signed() {
            Some(digit) => digit,
            None => unreachable!("reduction by a single digit leaves a single digit"),
        };
        let mut accum = base;
        for bit in exp.to_radix_digits(2).into_iter().skip(1) {
            accum = accum * accum % m;
            if bit == 1 {
                accum = accum * base % m;
            }
        }
        x.assign_native(accum);
        return Ok(());
    }

    mod_assign(x, modulus, RoundingMode::Truncate)?;
    let base = x.clone();
    for bit in exp.to_radix_digits(2).into_iter().skip(1) {
        square_assign(x);
        mod_assign(x, modulus, RoundingMode::Truncate)?;
        if bit == 1 {
            mul_assign(x, &base);
            mod_assign(x, modulus, RoundingMode::Truncate)?;
        }
    }
    Ok(())
}
