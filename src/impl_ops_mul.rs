//! Multiplication operator trait implementation
//!

use crate::*;

use std::ops::{Mul, MulAssign};


impl Mul<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(mut self, rhs: &BigInt) -> BigInt {
        self *= rhs;
        self
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        // prefer scanning the shorter operand's digits as rows
        if self.digits.len() >= rhs.digits.len() {
            self.clone() * rhs
        } else {
            rhs.clone() * self
        }
    }
}

forward_val_val_binop!(impl Mul for BigInt, mul);
forward_ref_val_binop!(impl Mul for BigInt, mul);


impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: &BigInt) {
        arithmetic::multiplication::mul_assign(self, rhs);
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}
