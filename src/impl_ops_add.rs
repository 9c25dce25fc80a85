//! Addition operator trait implementation
//!

use crate::*;

use std::ops::{Add, AddAssign};


impl Add<&BigInt> for BigInt {
    type Output = BigInt;

    #[inline]
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        // adding into the longer operand saves a reallocation
        if self.digits.len() >= rhs.digits.len() {
            self.clone() + rhs
        } else {
            rhs.clone() + self
        }
    }
}

forward_val_val_binop!(impl Add for BigInt, add);
forward_ref_val_binop!(impl Add for BigInt, add);


impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: &BigInt) {
        arithmetic::addition::add_assign(self, rhs);
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}
