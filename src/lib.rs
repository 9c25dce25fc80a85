//! Arbitrary-precision signed integers
//!
//! `BigInt` stores integers of unbounded magnitude as little-endian
//! digit sequences in radix 2<sup>25</sup>, and implements the whole
//! arithmetic surface over that representation: schoolbook and
//! Karatsuba multiplication, specialized squaring, binary
//! exponentiation (plain and modular), long division with selectable
//! remainder rounding, trial-division factorization, and conversion
//! to and from strings and digit arrays in any radix from 2 to 36.
//!
//! Common numerical operations are overloaded, so values can be
//! treated the same way we treat other numbers.
//!
//! # Example
//!
//! ```
//! use zint::BigInt;
//! use std::str::FromStr;
//!
//! let a = BigInt::from_str("999999999999999999999").unwrap();
//! let b = &a + 1u8;
//! assert_eq!(b.to_string(), "1000000000000000000000");
//!
//! let square = b.square();
//! assert_eq!(square.to_string(), "1000000000000000000000000000000000000000000");
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Mul, Neg};

use num_integer::Integer;
pub use num_traits::{FromPrimitive, Num, One, Pow, Signed, ToPrimitive, Zero};

use crate::bigdigit::{Digit, RADIX_BITS};

#[macro_use]
mod macros;

// digit representation and the arithmetic engines over it
mod bigdigit;
pub(crate) mod arithmetic;

// From<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq, Ord, Hash
mod impl_cmp;

// Display and radix strings
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod parsing;

pub mod rounding;
pub use rounding::RoundingMode;

mod factorize;
pub use factorize::PrimeSource;

#[cfg(feature = "serde")]
mod impl_serde;


/// Sign of a [BigInt]
///
/// Zero values carry `NoSign`; the derived ordering puts
/// `Minus < NoSign < Plus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (lhs, rhs) if lhs == rhs => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}


/// An error when parsing a numeral string or digit array
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// No digit characters were present
    Empty,
    /// A character fell outside the radix's alphabet
    InvalidNumeral(char, u32),
    /// An array entry was at or above the declared radix
    DigitOutOfRange(u32, u32),
    /// The radix itself was outside the supported range
    InvalidRadix(u32),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseBigIntError::Empty => {
                write!(f, "cannot parse integer from empty string")
            }
            ParseBigIntError::InvalidNumeral(c, radix) => {
                write!(f, "invalid numeral {:?} for radix {}", c, radix)
            }
            ParseBigIntError::DigitOutOfRange(digit, radix) => {
                write!(f, "digit {} out of range for radix {}", digit, radix)
            }
            ParseBigIntError::InvalidRadix(radix) => {
                write!(f, "radix {} is not supported", radix)
            }
        }
    }
}

impl std::error::Error for ParseBigIntError {}


/// An error from an arithmetic operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modular reduction by zero
    DivisionByZero,
    /// The value does not fit the requested native representation
    UnrepresentableMagnitude,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::UnrepresentableMagnitude => {
                write!(f, "magnitude not representable as a native number")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}


/// An arbitrary-precision signed integer
///
/// The digit vector is little-endian in radix 2^25 with no trailing
/// zeros; zero is the empty vector with `NoSign`. The display base
/// (set by the parsing radix, 10 by default) only affects formatting.
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    digits: Vec<Digit>,
    base: u32,
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt {
            sign: Sign::NoSign,
            digits: Vec::new(),
            base: 10,
        }
    }
}

impl BigInt {
    /// Sign of the value
    #[inline]
    pub fn sign(&self) -> Sign {
        if self.digits.is_empty() {
            Sign::NoSign
        } else {
            self.sign
        }
    }

    /// True when the value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// The radix [Display](fmt::Display) renders in
    #[inline]
    pub fn display_base(&self) -> u32 {
        self.base
    }

    /// Change the radix used by [Display](fmt::Display)
    ///
    /// Fails with InvalidRadix outside 2 through 36.
    pub fn set_display_base(&mut self, base: u32) -> Result<(), ParseBigIntError> {
        if !(2..=36).contains(&base) {
            return Err(ParseBigIntError::InvalidRadix(base));
        }
        self.base = base;
        Ok(())
    }

    /// Replace this value wholesale, display base included
    pub fn adopt<T: Into<BigInt>>(&mut self, value: T) {
        *self = value.into();
    }

    /// Flip the sign in place; zero is untouched
    pub fn negate(&mut self) {
        self.sign = -self.sign();
    }

    /// `self²`
    pub fn square(&self) -> BigInt {
        let mut result = self.clone();
        result.square_assign();
        result
    }

    /// `self = self²`, cheaper than a general multiply
    pub fn square_assign(&mut self) {
        arithmetic::square::square_assign(self);
    }

    /// `self^exp`
    ///
    /// `0^0` is one by convention. Panics if `exp` is negative.
    pub fn pow(&self, exp: &BigInt) -> BigInt {
        let mut result = self.clone();
        result.pow_assign(exp);
        result
    }

    /// `self = self^exp`
    pub fn pow_assign(&mut self, exp: &BigInt) {
        arithmetic::pow::pow_assign(self, exp);
    }

    /// `self^exp mod modulus`, truncate-mode remainder
    ///
    /// Reduces after every square and multiply, so intermediates never
    /// exceed O(modulus²) regardless of the exponent.
    pub fn powmod(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
        let mut result = self.clone();
        result.powmod_assign(exp, modulus)?;
        Ok(result)
    }

    /// `self = self^exp mod modulus`
    pub fn powmod_assign(&mut self, exp: &BigInt, modulus: &BigInt) -> Result<(), ArithmeticError> {
        arithmetic::pow::powmod_assign(self, exp, modulus)
    }

    /// Quotient and remainder in one pass
    pub fn divmod(&self, divisor: &BigInt, mode: RoundingMode) -> Result<(BigInt, BigInt), ArithmeticError> {
        arithmetic::division::divmod(self, divisor, mode)
    }

    /// Remainder only, skipping quotient construction where possible
    pub fn modulo(&self, modulus: &BigInt, mode: RoundingMode) -> Result<BigInt, ArithmeticError> {
        let mut result = self.clone();
        result.modulo_assign(modulus, mode)?;
        Ok(result)
    }

    /// `self = self mod modulus`
    pub fn modulo_assign(&mut self, modulus: &BigInt, mode: RoundingMode) -> Result<(), ArithmeticError> {
        arithmetic::modulo::mod_assign(self, modulus, mode)
    }

    /// Prime factorization of the magnitude
    ///
    /// Trial-divides candidates from `primes` and maps each prime
    /// found to its exponent; values of magnitude one or less yield an
    /// empty map.
    pub fn factorize<P: PrimeSource>(&self, primes: &mut P) -> BTreeMap<BigInt, BigInt> {
        factorize::factorize(self, primes)
    }

    /// 2^bits, built by digit shifting rather than exponentiation
    pub fn pow2(bits: u64) -> BigInt {
        let (index, rem) = bits.div_rem(&RADIX_BITS);
        let mut digits = vec![0; index as usize];
        digits.push(1 << rem);
        BigInt::from_digits(digits)
    }

    /// Take ownership of raw little-endian digits as a positive value
    pub(crate) fn from_digits(digits: Vec<Digit>) -> BigInt {
        let mut result = BigInt {
            sign: Sign::Plus,
            digits,
            base: 10,
        };
        result.normalize();
        result
    }

    /// Replace digits and sign from a native value, keeping the
    /// display base
    pub(crate) fn assign_native(&mut self, n: i64) {
        let mut value = BigInt::from(n);
        value.base = self.base;
        *self = value;
    }

    /// Replace digits and sign, keeping the display base
    pub(crate) fn assign_value(&mut self, value: BigInt) {
        self.sign = value.sign;
        self.digits = value.digits;
    }

    /// The value as a signed native digit, when it fits in one
    pub(crate) fn single_digit_signed(&self) -> Option<Digit> {
        match self.digits.len() {
            0 => Some(0),
            1 if self.sign == Sign::Minus => Some(-self.digits[0]),
            1 => Some(self.digits[0]),
            _ => None,
        }
    }

    /// Multiply by RADIX^n by prepending zero digits
    pub(crate) fn shift_digits(&mut self, n: usize) {
        if !self.is_zero() {
            self.digits.splice(0..0, std::iter::repeat(0).take(n));
        }
    }

    /// Restore canonical digit form after raw digit manipulation
    pub(crate) fn normalize(&mut self) {
        bigdigit::normalize(&mut self.digits, &mut self.sign);
    }
}


/// `n!`
///
/// Fails with UnrepresentableMagnitude when `n` is negative or too
/// large to even count to natively.
pub fn factorial(n: &BigInt) -> Result<BigInt, ArithmeticError> {
    let count = n.to_u64().ok_or(ArithmeticError::UnrepresentableMagnitude)?;
    let mut result = BigInt::one();
    for i in 2..=count {
        result *= i;
    }
    Ok(result)
}


impl std::iter::Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |sum, value| sum + value)
    }
}

impl<'a> std::iter::Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::zero(), |sum, value| sum + value)
    }
}

impl std::iter::Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |product, value| product * value)
    }
}

impl<'a> std::iter::Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
        iter.fold(BigInt::one(), |product, value| product * value)
    }
}


#[cfg(test)]
mod bigint_tests {
    use super::*;
    use crate::factorize::test::TrialPrimes;
    use std::str::FromStr;

    fn parsed(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn sign_arithmetic() {
        assert_eq!(-Sign::Plus, Sign::Minus);
        assert_eq!(-Sign::NoSign, Sign::NoSign);
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
        assert_eq!(Sign::Minus * Sign::Plus, Sign::Minus);
        assert_eq!(Sign::NoSign * Sign::Minus, Sign::NoSign);
        assert!(Sign::Minus < Sign::NoSign && Sign::NoSign < Sign::Plus);
    }

    #[test]
    fn default_is_zero() {
        let zero = BigInt::default();
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::NoSign);
        assert_eq!(zero.display_base(), 10);
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn adopt_replaces_value_and_base() {
        let mut n = BigInt::from_str_radix("ff", 16).unwrap();
        n.adopt(1000i64);
        assert_eq!(n.display_base(), 10);
        assert_eq!(n.to_string(), "1000");

        let other = BigInt::from_str_radix("-2a", 16).unwrap();
        n.adopt(other.clone());
        assert_eq!(n, other);
        assert_eq!(n.display_base(), 16);
        assert_eq!(n.to_string(), "-2a");
    }

    #[test]
    fn set_display_base_validates() {
        let mut n = parsed("255");
        assert_eq!(n.set_display_base(37), Err(ParseBigIntError::InvalidRadix(37)));
        n.set_display_base(2).unwrap();
        assert_eq!(n.to_string(), "11111111");
    }

    #[test]
    fn pow2_crosses_digit_boundaries() {
        assert_eq!(BigInt::pow2(0), parsed("1"));
        assert_eq!(BigInt::pow2(24), parsed("16777216"));
        assert_eq!(BigInt::pow2(25), parsed("33554432"));
        assert_eq!(BigInt::pow2(100), parsed("1267650600228229401496703205376"));
    }

    #[test]
    fn factorial_cases() {
        assert_eq!(factorial(&parsed("0")), Ok(parsed("1")));
        assert_eq!(factorial(&parsed("1")), Ok(parsed("1")));
        assert_eq!(factorial(&parsed("5")), Ok(parsed("120")));
        assert_eq!(
            factorial(&parsed("30")),
            Ok(parsed("265252859812191058636308480000000"))
        );
        assert_eq!(factorial(&parsed("-1")), Err(ArithmeticError::UnrepresentableMagnitude));
    }

    #[test]
    fn zero_and_one_conventions() {
        let zero = parsed("0");
        let one = parsed("1");
        assert_eq!(BigInt::pow(&zero, &zero), one);
        assert_eq!(BigInt::pow(&parsed("7"), &zero), one);
        assert_eq!(BigInt::pow(&zero, &parsed("9")), zero);
        let x = parsed("-123456789123456789");
        assert_eq!(BigInt::pow(&x, &one), x);
    }

    #[test]
    fn pure_methods_leave_operands_untouched() {
        let a = parsed("-123456789123456789123456789");
        let exp = parsed("3");
        let divisor = parsed("997");
        let modulus = parsed("1000003");
        let (a0, exp0, divisor0, modulus0) =
            (a.clone(), exp.clone(), divisor.clone(), modulus.clone());

        let _ = a.square();
        let _ = BigInt::pow(&a, &exp);
        let _ = &a * &divisor;
        let _ = a.divmod(&divisor, RoundingMode::Floor).unwrap();
        let _ = a.modulo(&divisor, RoundingMode::Truncate).unwrap();
        let _ = a.powmod(&exp, &modulus).unwrap();

        assert_eq!(a, a0);
        assert_eq!(exp, exp0);
        assert_eq!(divisor, divisor0);
        assert_eq!(modulus, modulus0);

        // trial division wants a value with small prime factors
        let b = parsed("-1208925819614629174706176");
        let b_before = b.clone();
        let _ = b.factorize(&mut TrialPrimes::new());
        assert_eq!(b, b_before);
    }

    #[test]
    fn reconstruction_property_under_both_modes() {
        let cases = [
            ("1000000000000000000000000", "997"),
            ("-1000000000000000000000000", "997"),
            ("123456789123456789", "-987654321987"),
            ("-1", "123456789123456789123"),
        ];
        for (a_str, b_str) in cases.iter() {
            let a = parsed(a_str);
            let b = parsed(b_str);
            for mode in [RoundingMode::Truncate, RoundingMode::Floor].iter().copied() {
                let (q, r) = a.divmod(&b, mode).unwrap();
                assert_eq!(&(&q * &b) + &r, a, "{} / {} in {:?}", a_str, b_str, mode);
                match mode {
                    RoundingMode::Floor => assert!(r.sign() != Sign::Minus),
                    RoundingMode::Truncate => {
                        assert!(r.is_zero() || r.sign() == a.sign());
                    }
                }
                assert_eq!(a.modulo(&b, mode).unwrap(), r);
            }
        }
    }

    #[test]
    fn powmod_matches_pow_then_modulo() {
        let a = parsed("987654321");
        let e = parsed("45");
        let m = parsed("1000000007000000003");
        let direct = a.powmod(&e, &m).unwrap();
        let slow = a.pow(&e).modulo(&m, RoundingMode::Truncate).unwrap();
        assert_eq!(direct, slow);
    }

    #[test]
    fn sum_and_product_of_iterators() {
        let values: Vec<BigInt> = (1i64..=10).map(BigInt::from).collect();
        let sum: BigInt = values.iter().sum();
        assert_eq!(sum, BigInt::from(55i64));
        let product: BigInt = values.into_iter().product();
        assert_eq!(product, BigInt::from(3628800i64));
    }

    #[test]
    fn factorize_scenario() {
        let factors = parsed("360").factorize(&mut TrialPrimes::new());
        let expected: BTreeMap<BigInt, BigInt> = [(2i64, 3i64), (3, 2), (5, 1)]
            .iter()
            .map(|&(p, e)| (BigInt::from(p), BigInt::from(e)))
            .collect();
        assert_eq!(factors, expected);
    }
}
