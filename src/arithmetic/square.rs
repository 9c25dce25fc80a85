//!
//! Specialized squaring
//!

use crate::bigdigit::RADIX;
use crate::{BigInt, Sign};

/// Below this digit count the symmetric O(n²) expansion wins over the
/// divide-and-conquer split.
const BASECASE_LEN: usize = 10;


/// `x = x²`
///
/// Exploits operand symmetry instead of delegating to the general
/// multiply: one operand scan in the base case, and a three-subproduct
/// split that reuses x's own allocation for the low half above it.
pub(crate) fn square_assign(x: &mut BigInt) {
    if x.is_zero() {
        return;
    }
    // Squaring always gives a positive number.
    x.sign = Sign::Plus;

    if x.digits.len() == 1 {
        x.digits[0] *= x.digits[0];
        if x.digits[0] >= RADIX {
            x.normalize();
        }
        return;
    }

    if x.digits.len() < BASECASE_LEN {
        let n = x.digits.len();
        let mut result = vec![0; 2 * n];
        for i in 0..n {
            for j in 0..n {
                // fewer than BASECASE_LEN rows accumulate per slot,
                // which stays well inside an i64
                result[i + j] += x.digits[i] * x.digits[j];
            }
        }
        x.digits = result;
        x.normalize();
        return;
    }

    // Karatsuba-style split; truncating x in place makes it the low
    // half without another allocation.
    let chunk_len = (x.digits.len() + 1) / 2;
    let mut high = BigInt::from_digits(x.digits.split_off(chunk_len));
    x.normalize();

    let mut z2 = x.clone();
    square_assign(&mut z2);
    let mut z1 = &high + &*x;
    square_assign(&mut z1);
    square_assign(&mut high);
    let mut z0 = high;
    z1 -= &z0;
    z1 -= &z2;

    z0.shift_digits(chunk_len * 2);
    z1.shift_digits(chunk_len);
    let mut result = z0;
    result += &z1;
    result += &z2;

    x.digits = result.digits;
    x.sign = result.sign;
}
