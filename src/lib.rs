//! Arbitrary precision signed integers and exact rational numbers implemented purely in Rust.
//!
//! `BigInt` stores a sign and an unbounded sequence of decimal digits, and
//! implements addition, subtraction, multiplication, truncating division
//! and remainder, comparison, and canonical decimal formatting. `Rational`
//! is a pair of `BigInt` numerator and denominator kept fully reduced with
//! a positive denominator, and adds exact fraction arithmetic, truncated
//! decimal expansion, and a best-effort `f64` conversion.
//!
//! ``` rust
//! use bigratio::{BigInt, Rational};
//!
//! let x = BigInt::parse("170141183460469231731687303715884105727").unwrap();
//! let y = x + 1i32;
//! assert_eq!(y.to_string(), "170141183460469231731687303715884105728");
//!
//! let r = Rational::from_parts(BigInt::from_i64(1), BigInt::from_i64(3)).unwrap();
//! assert_eq!(r.as_decimal(5), "0.33333");
//! ```

#![deny(clippy::suspicious)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::comparison_chain)]

mod common;
mod conv;
mod defs;
mod int;
mod magnitude;
mod parser;
mod rational;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

#[cfg(test)]
mod proptests;

pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::int::BigInt;
pub use crate::rational::Rational;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_bigratio() {
        // 30! computed exactly
        let mut f = BigInt::from_u8(1);
        for i in 1u32..=30 {
            f *= i;
        }
        assert_eq!(f.to_string(), "265252859812191058636308480000000");

        // and divided back down
        for i in 1u32..=30 {
            f /= i;
        }
        assert_eq!(f, BigInt::from_u8(1));

        // exact fractions: 1/2 + 1/3 + 1/6 == 1
        let r = Rational::parse("1/2")
            .unwrap()
            .add(&Rational::parse("1/3").unwrap())
            .add(&Rational::parse("1/6").unwrap());
        assert!(r.is_integer());
        assert_eq!(r.to_string(), "1");

        // the expansion of 355/113 starts like pi
        let r = Rational::from_parts(BigInt::from_i64(355), BigInt::from_i64(113)).unwrap();
        assert_eq!(r.as_decimal(6), "3.141592");
    }
}
