//! Subtraction operator trait implementation
//!

use crate::*;

use std::ops::{Sub, SubAssign};


impl Sub<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.clone() - rhs
    }
}

forward_val_val_binop!(impl Sub for BigInt, sub);
forward_ref_val_binop!(impl Sub for BigInt, sub);


impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: &BigInt) {
        arithmetic::addition::sub_assign(self, rhs);
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        *self -= &rhs;
    }
}
