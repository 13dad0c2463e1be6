//! BigInt definition, arithmetic, comparison, and number manipulation operations.

use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::defs::{Error, Sign};
use crate::magnitude::Magnitude;
use core::cmp::Ordering;
use core::iter::Product;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

#[cfg(feature = "random")]
use rand::random;

/// An arbitrary precision signed integer: a sign and an unbounded decimal
/// magnitude.
///
/// The representation is always canonical: the magnitude carries no
/// superfluous most significant zero digits, and zero is non-negative.
/// Every operation re-establishes this form before returning, so two equal
/// values always compare equal field by field.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    s: Sign,
    m: Magnitude,
}

impl BigInt {
    /// Returns a new BigInt with the value of zero.
    pub fn new() -> Self {
        BigInt {
            s: Sign::Pos,
            m: Magnitude::new(),
        }
    }

    // Assemble a number from a sign and a magnitude, forcing the canonical
    // non-negative zero.
    pub(crate) fn from_raw_parts(s: Sign, m: Magnitude) -> Self {
        let s = if m.is_zero() { Sign::Pos } else { s };
        BigInt { s, m }
    }

    #[inline]
    pub(crate) fn magnitude(&self) -> &Magnitude {
        &self.m
    }

    /// Returns the sign of `self`. Zero is positive.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if `self` is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.s.is_positive() && !self.m.is_zero()
    }

    /// Returns true if `self` is less than zero.
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns the sign of `self` as -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        if self.m.is_zero() {
            0
        } else {
            self.s as i8
        }
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        BigInt {
            s: Sign::Pos,
            m: self.m.clone(),
        }
    }

    /// Returns a copy of `self` with the opposite sign. Zero keeps the
    /// non-negative sign.
    pub fn inv_sign(&self) -> Self {
        Self::from_raw_parts(self.s.invert(), self.m.clone())
    }

    /// Adds `d2` to `self` and returns the result of the addition.
    ///
    /// Operands of the same sign add their magnitudes; operands of opposite
    /// signs subtract the smaller magnitude from the larger one, and the
    /// result takes the sign of the larger operand.
    pub fn add(&self, d2: &Self) -> Self {
        if self.s == d2.s {
            Self::from_raw_parts(self.s, self.m.add(&d2.m))
        } else {
            match self.m.cmp(&d2.m) {
                Ordering::Greater => Self::from_raw_parts(self.s, self.m.sub(&d2.m)),
                Ordering::Less => Self::from_raw_parts(d2.s, d2.m.sub(&self.m)),
                Ordering::Equal => Self::new(),
            }
        }
    }

    /// Subtracts `d2` from `self` and returns the result: the addition of
    /// the negated `d2`.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&d2.inv_sign())
    }

    /// Multiplies `self` by `d2` and returns the result of the
    /// multiplication. The sign of the product combines the operand signs.
    pub fn mul(&self, d2: &Self) -> Self {
        Self::from_raw_parts(self.s.combine(d2.s), self.m.mul(&d2.m))
    }

    /// Returns the quotient and the remainder of the division of `self` by
    /// `d2`. The quotient is truncated toward zero; a non-zero remainder
    /// takes the sign of `self`, so that `q * d2 + r == self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div_rem(&self, d2: &Self) -> Result<(Self, Self), Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (q, r) = self.m.div_rem(&d2.m);

        Ok((
            Self::from_raw_parts(self.s.combine(d2.s), q),
            Self::from_raw_parts(self.s, r),
        ))
    }

    /// Returns the quotient of the division of `self` by `d2`, truncated
    /// toward zero.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn checked_div(&self, d2: &Self) -> Result<Self, Error> {
        self.div_rem(d2).map(|(q, _)| q)
    }

    /// Returns the remainder of the division of `self` by `d2`. A non-zero
    /// remainder takes the sign of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn checked_rem(&self, d2: &Self) -> Result<Self, Error> {
        self.div_rem(d2).map(|(_, r)| r)
    }

    /// Returns the greatest common divisor of `self` and `d2` computed with
    /// the Euclidean algorithm. The result is non-negative;
    /// `gcd(0, 0)` is zero.
    pub fn gcd(&self, d2: &Self) -> Self {
        let mut a = self.m.clone();
        let mut b = d2.m.clone();

        while !b.is_zero() {
            let (_, r) = a.div_rem(&b);
            a = b;
            b = r;
        }

        Self::from_raw_parts(Sign::Pos, a)
    }

    /// Returns a random number of `len` decimal digits with a random sign.
    /// The most significant digit is non-zero, `len` of zero gives zero.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    #[cfg(feature = "random")]
    pub fn random_with_len(len: usize) -> Self {
        use crate::common::buf::DigitBuf;

        if len == 0 {
            return Self::new();
        }

        let mut m = DigitBuf::with_capacity(len);
        for _ in 0..len - 1 {
            m.push(random::<u8>() % 10);
        }
        m.push(random::<u8>() % 9 + 1);

        let s = if random::<u8>() & 1 == 0 { Sign::Pos } else { Sign::Neg };

        Self::from_raw_parts(s, Magnitude::from_digits(m))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.s != other.s {
            if self.s.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else {
            let ord = self.m.cmp(&other.m);
            if self.s.is_negative() {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// ops traits
//

impl Add for BigInt {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        BigInt::add(&self, &rhs)
    }
}

impl Add<&BigInt> for BigInt {
    type Output = Self;
    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::add(&self, rhs)
    }
}

impl Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: Self) -> Self::Output {
        BigInt::add(self, rhs)
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = BigInt::add(self, &rhs)
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::add(self, rhs)
    }
}

impl Sub for BigInt {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        BigInt::sub(&self, &rhs)
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = Self;
    fn sub(self, rhs: &BigInt) -> Self::Output {
        BigInt::sub(&self, rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: Self) -> Self::Output {
        BigInt::sub(self, rhs)
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = BigInt::sub(self, &rhs)
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::sub(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        BigInt::mul(&self, &rhs)
    }
}

impl Mul<&BigInt> for BigInt {
    type Output = Self;
    fn mul(self, rhs: &BigInt) -> Self::Output {
        BigInt::mul(&self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: Self) -> Self::Output {
        BigInt::mul(self, rhs)
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = BigInt::mul(self, &rhs)
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = BigInt::mul(self, rhs)
    }
}

impl Div for BigInt {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl Div<&BigInt> for BigInt {
    type Output = Self;
    fn div(self, rhs: &BigInt) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Div for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Rem for BigInt {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(&rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = Self;
    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.checked_rem(rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Rem for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.checked_rem(&rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.checked_rem(rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Neg for BigInt {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        let mut acc = ZERO.clone();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        let mut acc = ZERO.clone();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        let mut acc = ONE.clone();
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        let mut acc = ONE.clone();
        for v in iter {
            acc *= v;
        }
        acc
    }
}
