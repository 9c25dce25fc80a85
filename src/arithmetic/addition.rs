//!
//! Signed addition and subtraction over BigInt digits
//!

use crate::bigdigit::{Digit, RADIX};
use crate::{BigInt, Sign};

use std::cmp::Ordering;


/// `x += rhs`
pub(crate) fn add_assign(x: &mut BigInt, rhs: &BigInt) {
    // Fast-path special cases.
    if rhs.is_zero() {
        return;
    }
    if x.is_zero() {
        x.sign = rhs.sign();
        x.digits.clear();
        x.digits.extend_from_slice(&rhs.digits);
        return;
    }
    if let Some(digit) = rhs.single_digit_signed() {
        add_digit(x, digit);
        return;
    }
    signed_add(x, &rhs.digits, rhs.sign());
}

/// `x -= rhs`
///
/// Delegates to addition with the operand's sign negated; `rhs` itself
/// is never touched.
pub(crate) fn sub_assign(x: &mut BigInt, rhs: &BigInt) {
    // Fast-path special cases.
    if rhs.is_zero() {
        return;
    }
    if x.is_zero() {
        x.sign = -rhs.sign();
        x.digits.clear();
        x.digits.extend_from_slice(&rhs.digits);
        return;
    }
    if let Some(digit) = rhs.single_digit_signed() {
        add_digit(x, -digit);
        return;
    }
    signed_add(x, &rhs.digits, -rhs.sign());
}

/// Add a native value with magnitude below the inner radix
///
/// Applies directly to the low digit, renormalizing only when that
/// digit leaves `[0, RADIX)` or collapses a single-digit value to zero.
pub(crate) fn add_digit(x: &mut BigInt, digit: Digit) {
    debug_assert!(digit.abs() < RADIX);

    if digit == 0 {
        return;
    }
    if x.is_zero() {
        x.assign_native(digit);
        return;
    }
    match x.sign() {
        Sign::Minus => x.digits[0] -= digit,
        _ => x.digits[0] += digit,
    }
    if x.digits[0] < 0 || x.digits[0] >= RADIX || x.digits.last() == Some(&0) {
        x.normalize();
    }
}

/// Shared slow path for add/sub: `x += sign(rhs_sign) * |rhs_digits|`
fn signed_add(x: &mut BigInt, rhs_digits: &[Digit], rhs_sign: Sign) {
    let len = x.digits.len().max(rhs_digits.len());
    x.digits.resize(len, 0);

    if x.sign() == rhs_sign {
        for (d, &r) in x.digits.iter_mut().zip(rhs_digits.iter()) {
            *d += r;
        }
        x.normalize();
        return;
    }

    // Differing signs: subtract the smaller magnitude from the larger;
    // the result takes the sign of the larger-magnitude operand.
    if cmp_magnitude(&x.digits, rhs_digits) != Ordering::Less {
        for (d, &r) in x.digits.iter_mut().zip(rhs_digits.iter()) {
            *d -= r;
        }
    } else {
        for (i, d) in x.digits.iter_mut().enumerate() {
            *d = rhs_digits.get(i).copied().unwrap_or(0) - *d;
        }
        x.sign = rhs_sign;
    }
    x.normalize();
}

/// Compare digit sequences by magnitude, ignoring any trailing zeros
pub(crate) fn cmp_magnitude(a: &[Digit], b: &[Digit]) -> Ordering {
    let a_len = a.iter().rposition(|&d| d != 0).map_or(0, |p| p + 1);
    let b_len = b.iter().rposition(|&d| d != 0).map_or(0, |p| p + 1);
    if a_len != b_len {
        return a_len.cmp(&b_len);
    }
    for i in (0..a_len).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
