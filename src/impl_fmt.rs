//! Implementation of std::fmt traits and string conversion routines
//!

use crate::*;

use std::fmt;


impl fmt::Display for BigInt {
    /// Format in the instance's display base (decimal unless
    /// constructed or reconfigured otherwise), honoring width, fill,
    /// and sign flags.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_str = self.magnitude_to_str_radix(self.base);
        f.pad_integral(self.sign() != Sign::Minus, "", &abs_str)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{}\")", self)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_str = self.magnitude_to_str_radix(2);
        f.pad_integral(self.sign() != Sign::Minus, "0b", &abs_str)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_str = self.magnitude_to_str_radix(8);
        f.pad_integral(self.sign() != Sign::Minus, "0o", &abs_str)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_str = self.magnitude_to_str_radix(16);
        f.pad_integral(self.sign() != Sign::Minus, "0x", &abs_str)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let abs_str = self.magnitude_to_str_radix(16).to_uppercase();
        f.pad_integral(self.sign() != Sign::Minus, "0x", &abs_str)
    }
}


impl BigInt {
    /// Digit values of the magnitude in `radix`, most significant
    /// first
    ///
    /// Fails with InvalidRadix unless `2 <= radix <= RADIX`.
    pub fn digits(&self, radix: u32) -> Result<Vec<u32>, ParseBigIntError> {
        if radix < 2 || radix as i64 > crate::bigdigit::RADIX {
            return Err(ParseBigIntError::InvalidRadix(radix));
        }
        Ok(self.to_radix_digits(radix))
    }

    /// Sign-prefixed string in the requested radix (2 through 36)
    pub fn to_str_radix(&self, radix: u32) -> Result<String, ParseBigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseBigIntError::InvalidRadix(radix));
        }
        let abs_str = self.magnitude_to_str_radix(radix);
        if self.sign() == Sign::Minus {
            let mut result = String::with_capacity(abs_str.len() + 1);
            result.push('-');
            result.push_str(&abs_str);
            Ok(result)
        } else {
            Ok(abs_str)
        }
    }

    /// Peel digits off the magnitude by repeated division
    ///
    /// The caller has validated the radix.
    pub(crate) fn to_radix_digits(&self, radix: u32) -> Vec<u32> {
        if self.is_zero() {
            return vec![0];
        }
        let divisor = BigInt::from(radix);
        let mut number = self.clone();
        number.sign = Sign::Plus;

        let mut digits = Vec::new();
        while !number.is_zero() {
            let (quotient, remainder) =
                match arithmetic::division::divmod(&number, &divisor, RoundingMode::Truncate) {
                    Ok(parts) => parts,
                    // the radix was validated non-zero
                    Err(_) => break,
                };
            digits.push(remainder.single_digit_signed().unwrap_or(0) as u32);
            number = quotient;
        }
        digits.reverse();
        digits
    }

    pub(crate) fn magnitude_to_str_radix(&self, radix: u32) -> String {
        self.to_radix_digits(radix)
            .iter()
            .filter_map(|&d| std::char::from_digit(d, radix))
            .collect()
    }
}
