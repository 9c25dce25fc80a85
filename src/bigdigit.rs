//! Inner-radix digit definitions and the normalization routine
//!
//! A `BigInt` stores its magnitude as little-endian digits in radix
//! 2^25.  Digits are held in i64 slots so the raw addition,
//! subtraction and multiplication loops may push entries far outside
//! the canonical range — negative included — and defer all carry and
//! borrow resolution to [`normalize`].

use crate::Sign;

/// Storage type for a single inner-radix digit
///
/// Canonical digits lie in `[0, RADIX)`; loop intermediates need not.
pub(crate) type Digit = i64;

/// The inner radix
///
/// 2^25 keeps a digit-by-digit product below 2^50, leaving headroom
/// for several unnormalized accumulation rows in an i64 slot.
pub(crate) const RADIX: Digit = 1 << 25;

/// log2 of [`RADIX`]
pub(crate) const RADIX_BITS: u64 = 25;

/// Accumulation rows allowed between normalization passes of the
/// schoolbook multiply
pub(crate) const ROWS_PER_NORMALIZE: usize = 6;


/// Put every digit back into the range `[0, RADIX)`
///
/// Accepts digit sequences whose entries are out of range or negative,
/// as produced by the raw arithmetic loops.  Carries are propagated
/// least-significant first; a negative final carry means the value as
/// a whole was negative, so the sign flips and the digits are rewritten
/// as the radix complement of the magnitude (the radix-R analogue of a
/// two's-complement borrow).  Trailing zero digits are stripped, making
/// the empty sequence the canonical zero.
///
/// This is the single point of truth for canonical form; normalizing
/// an already-canonical value is a no-op.
pub(crate) fn normalize(digits: &mut Vec<Digit>, sign: &mut Sign) {
    let mut carry: Digit = 0;
    for d in digits.iter_mut() {
        let v = *d + carry;
        carry = v.div_euclid(RADIX);
        *d = v.rem_euclid(RADIX);
    }

    // If the final carry is negative, the entire number was negative.
    if carry < 0 {
        *sign = -*sign;
        let mut borrow = 0;
        for d in digits.iter_mut() {
            let v = -*d - borrow;
            if v < 0 {
                borrow = 1;
                *d = v + RADIX;
            } else {
                borrow = 0;
                *d = v;
            }
        }
        carry = -carry - borrow;
    }

    // If there's any final carry, add more digits.
    while carry > 0 {
        digits.push(carry % RADIX);
        carry /= RADIX;
    }

    // Drop trailing (most-significant) zeros.
    while digits.last() == Some(&0) {
        digits.pop();
    }

    if digits.is_empty() {
        *sign = Sign::NoSign;
    } else if *sign == Sign::NoSign {
        *sign = Sign::Plus;
    }
}
