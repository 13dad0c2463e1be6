//! Conversions between native integers and BigInt, and mixed-operand
//! arithmetic with native integers.
//!
//! Mixed operators convert the native operand first and dispatch to the
//! BigInt implementation; they carry no arithmetic of their own.

use crate::defs::Sign;
use crate::int::BigInt;
use crate::magnitude::Magnitude;
use crate::rational::Rational;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

impl BigInt {
    /// Converts `self` to a native integer.
    /// Returns `None` if the value does not fit in an i128.
    pub fn to_i128(&self) -> Option<i128> {
        let neg = self.is_negative();
        let mut v: i128 = 0;

        for d in self.magnitude().digits().iter().rev() {
            v = v.checked_mul(10)?;
            v = if neg {
                v.checked_sub(*d as i128)?
            } else {
                v.checked_add(*d as i128)?
            };
        }

        Some(v)
    }

    /// Converts `self` to a native integer.
    /// Returns `None` if the value does not fit in an i64.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| v.try_into().ok())
    }
}

macro_rules! impl_signed_conv {
    ($s:ty, $from_s:ident) => {
        impl BigInt {
            /// Construct BigInt from integer value.
            pub fn $from_s(i: $s) -> Self {
                let s = if i < 0 { Sign::Neg } else { Sign::Pos };
                Self::from_raw_parts(s, Magnitude::from_u128(i.unsigned_abs() as u128))
            }
        }

        impl From<$s> for BigInt {
            fn from(i: $s) -> Self {
                BigInt::$from_s(i)
            }
        }

        impl From<$s> for Rational {
            fn from(i: $s) -> Self {
                Rational::from(BigInt::$from_s(i))
            }
        }
    };
}

macro_rules! impl_unsigned_conv {
    ($s:ty, $from_s:ident) => {
        impl BigInt {
            /// Construct BigInt from integer value.
            pub fn $from_s(i: $s) -> Self {
                Self::from_raw_parts(Sign::Pos, Magnitude::from_u128(i as u128))
            }
        }

        impl From<$s> for BigInt {
            fn from(i: $s) -> Self {
                BigInt::$from_s(i)
            }
        }

        impl From<$s> for Rational {
            fn from(i: $s) -> Self {
                Rational::from(BigInt::$from_s(i))
            }
        }
    };
}

impl_signed_conv!(i8, from_i8);
impl_signed_conv!(i16, from_i16);
impl_signed_conv!(i32, from_i32);
impl_signed_conv!(i64, from_i64);
impl_signed_conv!(i128, from_i128);

impl_unsigned_conv!(u8, from_u8);
impl_unsigned_conv!(u16, from_u16);
impl_unsigned_conv!(u32, from_u32);
impl_unsigned_conv!(u64, from_u64);
impl_unsigned_conv!(u128, from_u128);

macro_rules! impl_native_ops {
    ($s:ty) => {
        impl Add<$s> for BigInt {
            type Output = BigInt;
            fn add(self, rhs: $s) -> Self::Output {
                BigInt::add(&self, &BigInt::from(rhs))
            }
        }

        impl Add<BigInt> for $s {
            type Output = BigInt;
            fn add(self, rhs: BigInt) -> Self::Output {
                BigInt::add(&BigInt::from(self), &rhs)
            }
        }

        impl AddAssign<$s> for BigInt {
            fn add_assign(&mut self, rhs: $s) {
                *self = BigInt::add(self, &BigInt::from(rhs))
            }
        }

        impl Sub<$s> for BigInt {
            type Output = BigInt;
            fn sub(self, rhs: $s) -> Self::Output {
                BigInt::sub(&self, &BigInt::from(rhs))
            }
        }

        impl Sub<BigInt> for $s {
            type Output = BigInt;
            fn sub(self, rhs: BigInt) -> Self::Output {
                BigInt::sub(&BigInt::from(self), &rhs)
            }
        }

        impl SubAssign<$s> for BigInt {
            fn sub_assign(&mut self, rhs: $s) {
                *self = BigInt::sub(self, &BigInt::from(rhs))
            }
        }

        impl Mul<$s> for BigInt {
            type Output = BigInt;
            fn mul(self, rhs: $s) -> Self::Output {
                BigInt::mul(&self, &BigInt::from(rhs))
            }
        }

        impl Mul<BigInt> for $s {
            type Output = BigInt;
            fn mul(self, rhs: BigInt) -> Self::Output {
                BigInt::mul(&BigInt::from(self), &rhs)
            }
        }

        impl MulAssign<$s> for BigInt {
            fn mul_assign(&mut self, rhs: $s) {
                *self = BigInt::mul(self, &BigInt::from(rhs))
            }
        }

        impl Div<$s> for BigInt {
            type Output = BigInt;
            fn div(self, rhs: $s) -> Self::Output {
                self / BigInt::from(rhs)
            }
        }

        impl Div<BigInt> for $s {
            type Output = BigInt;
            fn div(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) / rhs
            }
        }

        impl DivAssign<$s> for BigInt {
            fn div_assign(&mut self, rhs: $s) {
                *self /= BigInt::from(rhs)
            }
        }

        impl Rem<$s> for BigInt {
            type Output = BigInt;
            fn rem(self, rhs: $s) -> Self::Output {
                self % BigInt::from(rhs)
            }
        }

        impl Rem<BigInt> for $s {
            type Output = BigInt;
            fn rem(self, rhs: BigInt) -> Self::Output {
                BigInt::from(self) % rhs
            }
        }

        impl RemAssign<$s> for BigInt {
            fn rem_assign(&mut self, rhs: $s) {
                *self %= BigInt::from(rhs)
            }
        }
    };
}

impl_native_ops!(i32);
impl_native_ops!(i64);
impl_native_ops!(u32);
impl_native_ops!(u64);

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_from_native() {
        assert_eq!(BigInt::from_i8(-128).to_string(), "-128");
        assert_eq!(BigInt::from_u8(255).to_string(), "255");
        assert_eq!(BigInt::from_i32(0).to_string(), "0");
        assert_eq!(
            BigInt::from_i128(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(
            BigInt::from_u128(u128::MAX).to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(BigInt::from(-7i64), BigInt::from_i64(-7));
    }

    #[test]
    fn test_to_native() {
        for v in [0i64, 1, -1, i64::MAX, i64::MIN, 1000000007] {
            assert_eq!(BigInt::from_i64(v).to_i64(), Some(v));
            assert_eq!(BigInt::from_i64(v).to_i128(), Some(v as i128));
        }

        assert_eq!(BigInt::from_i128(i128::MIN).to_i128(), Some(i128::MIN));
        assert_eq!(BigInt::from_i128(i128::MAX).to_i128(), Some(i128::MAX));
        assert_eq!(BigInt::from_u128(u128::MAX).to_i128(), None);
        assert_eq!(BigInt::from_i128(i64::MAX as i128 + 1).to_i64(), None);
    }

    #[test]
    fn test_mixed_ops() {
        let x = BigInt::from_i32(40);

        assert_eq!(x.clone() + 2, BigInt::from_i32(42));
        assert_eq!(2 + x.clone(), BigInt::from_i32(42));
        assert_eq!(x.clone() - 50, BigInt::from_i32(-10));
        assert_eq!(50 - x.clone(), BigInt::from_i32(10));
        assert_eq!(x.clone() * 3, BigInt::from_i32(120));
        assert_eq!(3 * x.clone(), BigInt::from_i32(120));
        assert_eq!(x.clone() / 7, BigInt::from_i32(5));
        assert_eq!(100 / x.clone(), BigInt::from_i32(2));
        assert_eq!(x.clone() % 7, BigInt::from_i32(5));

        // increment and decrement
        let mut x = BigInt::from_i32(9);
        x += 1;
        assert_eq!(x, BigInt::from_i32(10));
        x -= 1;
        assert_eq!(x, BigInt::from_i32(9));
    }

    #[test]
    fn test_rational_from_native() {
        let r = Rational::from(3i32);
        assert_eq!(r.to_string(), "3");
        assert_eq!(Rational::from(-2i64).to_string(), "-2");
        assert_eq!(Rational::from(7u8).to_string(), "7");
    }
}
