//! Remainder operator trait implementation
//!
//! `%` keeps the dividend's sign, matching native integer remainder,
//! and panics on a zero modulus. Use [`BigInt::modulo`] for the
//! fallible version with a choice of rounding mode.
//!

use crate::*;

use std::ops::{Rem, RemAssign};


impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, rhs: &BigInt) -> BigInt {
        let mut value = self.clone();
        value %= rhs;
        value
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(mut self, rhs: &BigInt) -> BigInt {
        self %= rhs;
        self
    }
}

forward_val_val_binop!(impl Rem for BigInt, rem);
forward_ref_val_binop!(impl Rem for BigInt, rem);


impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        if arithmetic::modulo::mod_assign(self, rhs, RoundingMode::Truncate).is_err() {
            panic!("attempt to calculate the remainder with a divisor of zero");
        }
    }
}

impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, rhs: BigInt) {
        *self %= &rhs;
    }
}
