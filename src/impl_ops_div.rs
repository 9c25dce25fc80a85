//! Division operator trait implementation
//!
//! The `/` operator truncates toward zero, matching native integer
//! division, and panics on a zero divisor. Use [`BigInt::divmod`] for
//! a fallible version with a choice of rounding mode.
//!

use crate::*;

use std::ops::{Div, DivAssign};


impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        match arithmetic::division::divmod(self, rhs, RoundingMode::Truncate) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, rhs: &BigInt) -> BigInt {
        &self / rhs
    }
}

forward_val_val_binop!(impl Div for BigInt, div);
forward_ref_val_binop!(impl Div for BigInt, div);


impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        let quotient = &*self / rhs;
        self.assign_value(quotient);
    }
}

impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, rhs: BigInt) {
        *self /= &rhs;
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn operator_truncates_toward_zero() {
        let a = BigInt::from_str("-100").unwrap();
        let b = BigInt::from_str("7").unwrap();
        assert_eq!(&a / &b, BigInt::from(-14i64));

        let mut c = a;
        c /= &b;
        assert_eq!(c, BigInt::from(-14i64));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn operator_panics_on_zero_divisor() {
        let a = BigInt::from_str("1").unwrap();
        let _ = &a / &BigInt::from(0i64);
    }
}
