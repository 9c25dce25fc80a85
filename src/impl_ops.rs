//! Implement math operations: Add, Sub, etc for native integer operands

use crate::*;

use num_traits::ToPrimitive;

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};


macro_rules! impl_add_for_primitive {
    ($t:ty) => {
        impl_add_for_primitive!(IMPL:ADD $t);
        impl_add_for_primitive!(IMPL:ADD-ASSIGN $t);
        impl_add_for_primitive!(IMPL:ADD &$t);
        impl_add_for_primitive!(IMPL:ADD-ASSIGN &$t);
    };
    (IMPL:ADD $t:ty) => {
        impl Add<$t> for BigInt {
            type Output = BigInt;

            fn add(mut self, rhs: $t) -> BigInt {
                self += rhs;
                self
            }
        }

        impl Add<$t> for &BigInt {
            type Output = BigInt;

            fn add(self, rhs: $t) -> BigInt {
                self.clone() + rhs
            }
        }

        forward_communative_binop!(impl Add<BigInt>::add for $t);
        forward_communative_binop!(impl Add<&BigInt>::add for $t);
    };
    (IMPL:ADD-ASSIGN &$t:ty) => {
        impl AddAssign<&$t> for BigInt {
            fn add_assign(&mut self, rhs: &$t) {
                *self += *rhs;
            }
        }
    };
    (IMPL:ADD-ASSIGN $t:ty) => {
        impl AddAssign<$t> for BigInt {
            fn add_assign(&mut self, rhs: $t) {
                // a value below the inner radix touches one digit
                match rhs.to_i64() {
                    Some(d) if -crate::bigdigit::RADIX < d && d < crate::bigdigit::RADIX => {
                        arithmetic::addition::add_digit(self, d);
                    }
                    _ => *self += BigInt::from(rhs),
                }
            }
        }
    };
}

impl_add_for_primitive!(u8);
impl_add_for_primitive!(u16);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(u64);
impl_add_for_primitive!(u128);
impl_add_for_primitive!(i8);
impl_add_for_primitive!(i16);
impl_add_for_primitive!(i32);
impl_add_for_primitive!(i64);
impl_add_for_primitive!(i128);


macro_rules! impl_sub_for_primitive {
    ($t:ty) => {
        impl Sub<$t> for BigInt {
            type Output = BigInt;

            fn sub(mut self, rhs: $t) -> BigInt {
                self -= rhs;
                self
            }
        }

        impl Sub<$t> for &BigInt {
            type Output = BigInt;

            fn sub(self, rhs: $t) -> BigInt {
                self.clone() - rhs
            }
        }

        impl Sub<BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: BigInt) -> BigInt {
                rhs.neg() + self
            }
        }

        impl Sub<&BigInt> for $t {
            type Output = BigInt;

            fn sub(self, rhs: &BigInt) -> BigInt {
                rhs.neg() + self
            }
        }

        impl SubAssign<$t> for BigInt {
            fn sub_assign(&mut self, rhs: $t) {
                match rhs.to_i64() {
                    Some(d) if -crate::bigdigit::RADIX < d && d < crate::bigdigit::RADIX => {
                        arithmetic::addition::add_digit(self, -d);
                    }
                    _ => *self -= BigInt::from(rhs),
                }
            }
        }
    };
}

impl_sub_for_primitive!(u8);
impl_sub_for_primitive!(u16);
impl_sub_for_primitive!(u32);
impl_sub_for_primitive!(u64);
impl_sub_for_primitive!(u128);
impl_sub_for_primitive!(i8);
impl_sub_for_primitive!(i16);
impl_sub_for_primitive!(i32);
impl_sub_for_primitive!(i64);
impl_sub_for_primitive!(i128);


macro_rules! impl_mul_for_primitive {
    ($t:ty) => {
        impl Mul<$t> for BigInt {
            type Output = BigInt;

            fn mul(mut self, rhs: $t) -> BigInt {
                self *= rhs;
                self
            }
        }

        impl Mul<$t> for &BigInt {
            type Output = BigInt;

            fn mul(self, rhs: $t) -> BigInt {
                self.clone() * rhs
            }
        }

        forward_communative_binop!(impl Mul<BigInt>::mul for $t);
        forward_communative_binop!(impl Mul<&BigInt>::mul for $t);

        impl MulAssign<$t> for BigInt {
            fn mul_assign(&mut self, rhs: $t) {
                *self *= BigInt::from(rhs);
            }
        }
    };
}

impl_mul_for_primitive!(u8);
impl_mul_for_primitive!(u16);
impl_mul_for_primitive!(u32);
impl_mul_for_primitive!(u64);
impl_mul_for_primitive!(u128);
impl_mul_for_primitive!(i8);
impl_mul_for_primitive!(i16);
impl_mul_for_primitive!(i32);
impl_mul_for_primitive!(i64);
impl_mul_for_primitive!(i128);


macro_rules! impl_divrem_for_primitive {
    ($t:ty) => {
        impl Div<$t> for BigInt {
            type Output = BigInt;

            fn div(self, rhs: $t) -> BigInt {
                self / BigInt::from(rhs)
            }
        }

        impl Div<$t> for &BigInt {
            type Output = BigInt;

            fn div(self, rhs: $t) -> BigInt {
                self / &BigInt::from(rhs)
            }
        }

        impl Div<BigInt> for $t {
            type Output = BigInt;

            fn div(self, rhs: BigInt) -> BigInt {
                BigInt::from(self) / rhs
            }
        }

        impl DivAssign<$t> for BigInt {
            fn div_assign(&mut self, rhs: $t) {
                *self /= BigInt::from(rhs);
            }
        }

        impl Rem<$t> for BigInt {
            type Output = BigInt;

            fn rem(self, rhs: $t) -> BigInt {
                self % BigInt::from(rhs)
            }
        }

        impl Rem<$t> for &BigInt {
            type Output = BigInt;

            fn rem(self, rhs: $t) -> BigInt {
                self % &BigInt::from(rhs)
            }
        }

        impl Rem<BigInt> for $t {
            type Output = BigInt;

            fn rem(self, rhs: BigInt) -> BigInt {
                BigInt::from(self) % rhs
            }
        }

        impl RemAssign<$t> for BigInt {
            fn rem_assign(&mut self, rhs: $t) {
                *self %= BigInt::from(rhs);
            }
        }
    };
}

impl_divrem_for_primitive!(u8);
impl_divrem_for_primitive!(u16);
impl_divrem_for_primitive!(u32);
impl_divrem_for_primitive!(u64);
impl_divrem_for_primitive!(u128);
impl_divrem_for_primitive!(i8);
impl_divrem_for_primitive!(i16);
impl_divrem_for_primitive!(i32);
impl_divrem_for_primitive!(i64);
impl_divrem_for_primitive!(i128);


impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        self.clone().neg()
    }
}
