//! Implementation of comparison operations
//!
//! Ordering is decided by sign first, then by magnitude; for negative
//! values the magnitude comparison is reversed. The display base is
//! cosmetic and never participates in equality or hashing.
//!

use crate::*;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};


impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, rhs: &BigInt) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for BigInt {
    fn cmp(&self, rhs: &BigInt) -> Ordering {
        match self.sign().cmp(&rhs.sign()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let by_magnitude = arithmetic::addition::cmp_magnitude(&self.digits, &rhs.digits);
        match self.sign() {
            Sign::Minus => by_magnitude.reverse(),
            _ => by_magnitude,
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.digits.hash(state);
    }
}
