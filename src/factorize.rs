//!
//! Trial-division factorization against an external prime sequence
//!

use crate::arithmetic::division::divmod;
use crate::{BigInt, RoundingMode, Sign};

use num_traits::{One, Zero};

use std::collections::BTreeMap;

/// Supplier of candidate primes, and of native factorization for
/// values small enough to skip the digit engine entirely.
pub trait PrimeSource {
    /// Yield the next candidate prime, in ascending order starting at 2.
    fn next_prime(&mut self) -> u64;

    /// Factor a native value, returning prime => exponent.
    fn factorize_native(&mut self, n: u64) -> BTreeMap<u64, u64>;
}


/// Factor |n| into primes with their exponents
///
/// Values no larger than one have no prime factorization and yield an
/// empty map. Exponents are tracked as full values since repeated
/// small factors have no native bound in principle.
pub(crate) fn factorize<P: PrimeSource>(n: &BigInt, primes: &mut P) -> BTreeMap<BigInt, BigInt> {
    let mut num = n.clone();
    if !num.is_zero() {
        num.sign = Sign::Plus;
    }

    let mut factors = BTreeMap::new();
    if num <= BigInt::one() {
        return factors;
    }
    if let Some(value) = num.single_digit_signed() {
        for (prime, exponent) in primes.factorize_native(value as u64) {
            factors.insert(BigInt::from(prime), BigInt::from(exponent));
        }
        return factors;
    }

    loop {
        let prime = primes.next_prime();
        let prime_big = BigInt::from(prime);

        if &prime_big * &prime_big > num {
            // what remains is itself prime
            factors.insert(num, BigInt::one());
            return factors;
        }

        let mut count = BigInt::zero();
        loop {
            let (quotient, remainder) = match divmod(&num, &prime_big, RoundingMode::Truncate) {
                Ok(parts) => parts,
                // next_prime never yields zero
                Err(_) => break,
            };
            if !remainder.is_zero() {
                break;
            }
            num = quotient;
            count += 1i64;
        }
        if !count.is_zero() {
            factors.insert(prime_big, count);
        }
        if num.is_one() {
            return factors;
        }
    }
}
