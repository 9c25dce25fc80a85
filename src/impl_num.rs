//! Code for num_traits
//!

use crate::bigdigit::RADIX;
use crate::*;

use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, One, Pow, Signed,
    ToPrimitive, Zero,
};


impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from(1i64)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> BigInt {
        let mut result = self.clone();
        if result.sign() == Sign::Minus {
            result.negate();
        }
        result
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInt {
        match self.sign() {
            Sign::Minus => BigInt::from(-1i64),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() == Sign::Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }
}


impl Pow<u64> for BigInt {
    type Output = BigInt;

    fn pow(mut self, exp: u64) -> BigInt {
        self.pow_assign(&BigInt::from(exp));
        self
    }
}

impl Pow<u64> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: u64) -> BigInt {
        Pow::pow(self.clone(), exp)
    }
}

impl Pow<&BigInt> for BigInt {
    type Output = BigInt;

    fn pow(mut self, exp: &BigInt) -> BigInt {
        self.pow_assign(exp);
        self
    }
}

impl Pow<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: &BigInt) -> BigInt {
        self.clone().pow(exp)
    }
}

impl Pow<BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn pow(self, exp: BigInt) -> BigInt {
        self.pow(&exp)
    }
}


impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        match self.to_i128()? {
            n if n < i64::MIN as i128 => None,
            n if n > i64::MAX as i128 => None,
            n => Some(n as i64),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.to_u128()? {
            n if n > u64::MAX as u128 => None,
            n => Some(n as u64),
        }
    }

    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        match self.sign() {
            Sign::Minus if magnitude == 1u128 << 127 => Some(i128::MIN),
            Sign::Minus if magnitude < 1u128 << 127 => Some(-(magnitude as i128)),
            Sign::Minus => None,
            _ if magnitude <= i128::MAX as u128 => Some(magnitude as i128),
            _ => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self.sign() {
            Sign::Minus => None,
            _ => self.magnitude_u128(),
        }
    }

    /// Only exactly-representable values convert; no silent rounding
    fn to_f64(&self) -> Option<f64> {
        const SAFE: i64 = 1 << 53;
        self.to_i64().filter(|&n| -SAFE <= n && n <= SAFE).map(|n| n as f64)
    }
}

impl BigInt {
    /// Reconstruct the magnitude natively, refusing overflow
    fn magnitude_u128(&self) -> Option<u128> {
        let mut accum: u128 = 0;
        for &digit in self.digits.iter().rev() {
            accum = accum.checked_mul(RADIX as u128)?.checked_add(digit as u128)?;
        }
        Some(accum)
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}


impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self + rhs)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self - rhs)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, rhs: &BigInt) -> Option<BigInt> {
        Some(self * rhs)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, rhs: &BigInt) -> Option<BigInt> {
        arithmetic::division::divmod(self, rhs, RoundingMode::Truncate)
            .ok()
            .map(|(quotient, _)| quotient)
    }
}
