//! Serialization with the serde crate
//!
//! Values serialize as decimal strings regardless of their display
//! base, so round-trips never depend on cosmetic state. Deserializing
//! accepts either a numeral string or a native integer.
//!

use crate::*;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;


impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let abs_str = self.magnitude_to_str_radix(10);
        if self.sign() == Sign::Minus {
            serializer.collect_str(&format_args!("-{}", abs_str))
        } else {
            serializer.serialize_str(&abs_str)
        }
    }
}

struct BigIntVisitor;

impl<'de> de::Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an integer or integer string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<BigInt, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<BigInt, E> {
        Ok(BigInt::from(value))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
