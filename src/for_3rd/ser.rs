//! Serialization of BigInt and Rational.
//! Serialization to a string uses the canonical decimal form.

use crate::int::BigInt;
use crate::rational::Rational;
use serde::{Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
