//! Conversions to and from native numbers
//!

use crate::bigdigit::{Digit, RADIX};
use crate::*;

use num_traits::ToPrimitive;

use std::convert::TryFrom;

/// Largest float whose every integer neighbor is exactly representable
/// (2^53 - 1)
const MAX_SAFE_FLOAT: f64 = 9007199254740991.0;


/// Decompose a native magnitude into inner-radix digits
fn from_u128_magnitude(sign: Sign, mut magnitude: u128) -> BigInt {
    let mut digits = Vec::new();
    while magnitude != 0 {
        digits.push((magnitude % RADIX as u128) as Digit);
        magnitude /= RADIX as u128;
    }
    let sign = if digits.is_empty() { Sign::NoSign } else { sign };
    BigInt { sign, digits, base: 10 }
}

macro_rules! impl_from_uint {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                from_u128_magnitude(Sign::Plus, n as u128)
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> BigInt {
                BigInt::from(*n)
            }
        }
    };
}

macro_rules! impl_from_int {
    ($t:ty) => {
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                if n < 0 {
                    from_u128_magnitude(Sign::Minus, (n as i128).unsigned_abs())
                } else {
                    from_u128_magnitude(Sign::Plus, n as u128)
                }
            }
        }

        impl From<&$t> for BigInt {
            fn from(n: &$t) -> BigInt {
                BigInt::from(*n)
            }
        }
    };
}

impl_from_uint!(u8);
impl_from_uint!(u16);
impl_from_uint!(u32);
impl_from_uint!(u64);
impl_from_uint!(u128);
impl_from_uint!(usize);
impl_from_int!(i8);
impl_from_int!(i16);
impl_from_int!(i32);
impl_from_int!(i64);
impl_from_int!(i128);
impl_from_int!(isize);


impl TryFrom<f64> for BigInt {
    type Error = ArithmeticError;

    /// Accept only finite floats that hold an exactly-representable
    /// integer
    fn try_from(n: f64) -> Result<BigInt, ArithmeticError> {
        if !n.is_finite() || n.fract() != 0.0 || n.abs() > MAX_SAFE_FLOAT {
            return Err(ArithmeticError::UnrepresentableMagnitude);
        }
        Ok(BigInt::from(n as i64))
    }
}

impl TryFrom<f32> for BigInt {
    type Error = ArithmeticError;

    fn try_from(n: f32) -> Result<BigInt, ArithmeticError> {
        BigInt::try_from(n as f64)
    }
}

macro_rules! impl_try_into_primitive {
    ($t:ty : $to_method:ident) => {
        impl TryFrom<&BigInt> for $t {
            type Error = ArithmeticError;

            fn try_from(n: &BigInt) -> Result<$t, ArithmeticError> {
                n.$to_method().ok_or(ArithmeticError::UnrepresentableMagnitude)
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = ArithmeticError;

            fn try_from(n: BigInt) -> Result<$t, ArithmeticError> {
                <$t>::try_from(&n)
            }
        }
    };
}

impl_try_into_primitive!(i64: to_i64);
impl_try_into_primitive!(u64: to_u64);
impl_try_into_primitive!(i128: to_i128);
impl_try_into_primitive!(u128: to_u128);
