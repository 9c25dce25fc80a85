//! Routines for parsing values of BigInt
//!

use crate::bigdigit::{Digit, RADIX};
use crate::*;

use std::str::FromStr;


impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, 10)
    }
}

impl BigInt {
    /// Parse a (optionally sign-prefixed) numeral string in the given
    /// radix, 2 through 36
    ///
    /// The radix is remembered as the value's display base.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseBigIntError::InvalidRadix(radix));
        }

        let (digits_str, negative) = match s.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (s.strip_prefix('+').unwrap_or(s), false),
        };
        if digits_str.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let digits = digits_str
            .chars()
            .map(|c| c.to_digit(radix).ok_or(ParseBigIntError::InvalidNumeral(c, radix)))
            .collect::<Result<Vec<u32>, _>>()?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_radix_be(sign, &digits, radix)
    }

    /// Build a value from most-significant-first digits in an
    /// arbitrary radix up to the inner radix
    ///
    /// Re-encodes several input digits per multiplication pass: the
    /// largest power of `radix` still below the inner radix is folded
    /// natively, so a long input costs far fewer big-number
    /// operations than one pass per digit.
    pub fn from_radix_be(sign: Sign, digits: &[u32], radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix < 2 || radix as Digit > RADIX {
            return Err(ParseBigIntError::InvalidRadix(radix));
        }
        if let Some(&bad) = digits.iter().find(|&&d| d as Digit >= radix as Digit) {
            return Err(ParseBigIntError::DigitOutOfRange(bad, radix));
        }

        let mut group_radix: Digit = radix as Digit;
        let mut group = 1;
        while group_radix * radix as Digit <= RADIX {
            group_radix *= radix as Digit;
            group += 1;
        }

        let mut result = BigInt::default();
        if (2..=36).contains(&radix) {
            result.base = radix;
        }
        let head_len = digits.len() % group;
        let chunks = std::iter::once(&digits[..head_len])
            .filter(|chunk| !chunk.is_empty())
            .chain(digits[head_len..].chunks(group));
        for chunk in chunks {
            let mut piece: Digit = 0;
            for &d in chunk {
                piece = piece * radix as Digit + d as Digit;
            }
            if chunk.len() == group {
                result *= group_radix;
            } else {
                result *= (radix as Digit).pow(chunk.len() as u32);
            }
            result += piece;
        }
        if sign == Sign::Minus && !result.is_zero() {
            result.negate();
        }
        Ok(result)
    }
}
