//! Rational definition and exact fraction arithmetic built on BigInt.

use crate::common::consts::ONE;
use crate::defs::{Error, Sign};
use crate::int::BigInt;
use core::cmp::Ordering;
use core::iter::Product;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Fractional decimal digits used by the f64 narrowing conversion.
const F64_CONV_PRECISION: usize = 17;

/// An exact rational number: a pair of BigInt numerator and denominator.
///
/// The pair is kept in canonical form: the fraction is fully reduced, the
/// denominator is positive, and a zero numerator forces a denominator of
/// one. Every operation re-establishes this form before returning.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    n: BigInt,
    d: BigInt,
}

impl Rational {
    /// Returns a new Rational with the value of zero.
    pub fn new() -> Self {
        Rational {
            n: BigInt::new(),
            d: ONE.clone(),
        }
    }

    /// Builds a fraction from a numerator and a denominator, reducing it
    /// and normalizing the denominator sign.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d` is zero.
    pub fn from_parts(n: BigInt, d: BigInt) -> Result<Self, Error> {
        if d.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::normalized(n, d))
    }

    // Reduce the fraction by the gcd of its parts and make the denominator
    // positive. `d` must not be zero.
    fn normalized(mut n: BigInt, mut d: BigInt) -> Self {
        debug_assert!(!d.is_zero());

        if n.is_zero() {
            return Rational {
                n,
                d: ONE.clone(),
            };
        }

        if d.is_negative() {
            n = n.inv_sign();
            d = d.inv_sign();
        }

        let g = n.gcd(&d);
        if g != *ONE {
            // g is non-zero, both divisions are exact
            let (qn, _) = n.magnitude().div_rem(g.magnitude());
            let (qd, _) = d.magnitude().div_rem(g.magnitude());
            n = BigInt::from_raw_parts(n.sign(), qn);
            d = BigInt::from_raw_parts(Sign::Pos, qd);
        }

        Rational { n, d }
    }

    /// Returns the numerator of the reduced fraction.
    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.n
    }

    /// Returns the denominator of the reduced fraction. Always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.d
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.n.is_zero()
    }

    /// Returns true if the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.d == *ONE
    }

    /// Returns the sign of `self` as -1, 0, or 1.
    pub fn signum(&self) -> i8 {
        self.n.signum()
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Rational {
            n: self.n.abs(),
            d: self.d.clone(),
        }
    }

    /// Returns a copy of `self` with the opposite sign.
    pub fn inv_sign(&self) -> Self {
        Rational {
            n: self.n.inv_sign(),
            d: self.d.clone(),
        }
    }

    /// Adds `r2` to `self` and returns the reduced result.
    pub fn add(&self, r2: &Self) -> Self {
        let n = BigInt::add(&BigInt::mul(&self.n, &r2.d), &BigInt::mul(&r2.n, &self.d));
        let d = BigInt::mul(&self.d, &r2.d);
        Self::normalized(n, d)
    }

    /// Subtracts `r2` from `self`: the addition of the negated `r2`.
    pub fn sub(&self, r2: &Self) -> Self {
        self.add(&r2.inv_sign())
    }

    /// Multiplies `self` by `r2` and returns the reduced result.
    pub fn mul(&self, r2: &Self) -> Self {
        Self::normalized(BigInt::mul(&self.n, &r2.n), BigInt::mul(&self.d, &r2.d))
    }

    /// Returns the reciprocal of `self`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn recip(&self) -> Result<Self, Error> {
        if self.n.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::normalized(self.d.clone(), self.n.clone()))
    }

    /// Divides `self` by `r2`: the multiplication by the reciprocal of `r2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `r2` is zero.
    pub fn checked_div(&self, r2: &Self) -> Result<Self, Error> {
        Ok(self.mul(&r2.recip()?))
    }

    /// Renders the truncated decimal expansion of `self` with `precision`
    /// fractional digits. The numerator is scaled by 10^`precision`,
    /// divided by the denominator, and the decimal point is inserted
    /// `precision` digits from the right; the expansion is truncated, not
    /// rounded. A `precision` of zero renders the integer part alone.
    pub fn as_decimal(&self, precision: usize) -> String {
        let mut scaled = self.n.magnitude().clone();
        scaled.shift_up(precision);
        let (q, _) = scaled.div_rem(self.d.magnitude());

        let digits = q.digits();
        let mut s = String::new();

        if self.n.is_negative() {
            s.push('-');
        }

        if digits.len() <= precision {
            s.push_str("0.");
            for _ in 0..precision - digits.len() {
                s.push('0');
            }
            for d in digits.iter().rev() {
                s.push((b'0' + *d) as char);
            }
        } else {
            let int_len = digits.len() - precision;
            for (i, d) in digits.iter().rev().enumerate() {
                s.push((b'0' + *d) as char);
                if precision > 0 && i + 1 == int_len {
                    s.push('.');
                }
            }
        }

        s
    }

    /// Converts `self` to an f64, reassembling the scaled quotient digit by
    /// digit. The conversion window is fixed, and the result is a
    /// best-effort approximation.
    pub fn to_f64(&self) -> f64 {
        let mut scaled = self.n.magnitude().clone();
        scaled.shift_up(F64_CONV_PRECISION);
        let (q, _) = scaled.div_rem(self.d.magnitude());

        let mut f = 0f64;
        for d in q.digits().iter().rev() {
            f = f * 10f64 + *d as f64;
        }
        f /= 10f64.powi(F64_CONV_PRECISION as i32);

        if self.n.is_negative() {
            -f
        } else {
            f
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational {
            n,
            d: ONE.clone(),
        }
    }
}

impl Ord for Rational {
    /// Cross-multiplication ordering: valid because denominators are
    /// always positive.
    fn cmp(&self, other: &Self) -> Ordering {
        BigInt::mul(&self.n, &other.d).cmp(&BigInt::mul(&other.n, &self.d))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// ops traits
//

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Rational::add(&self, &rhs)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;
    fn add(self, rhs: &Rational) -> Self::Output {
        Rational::add(&self, rhs)
    }
}

impl Add for &Rational {
    type Output = Rational;
    fn add(self, rhs: Self) -> Self::Output {
        Rational::add(self, rhs)
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = Rational::add(self, &rhs)
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = Rational::add(self, rhs)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Rational::sub(&self, &rhs)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;
    fn sub(self, rhs: &Rational) -> Self::Output {
        Rational::sub(&self, rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;
    fn sub(self, rhs: Self) -> Self::Output {
        Rational::sub(self, rhs)
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Rational::sub(self, &rhs)
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = Rational::sub(self, rhs)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Rational::mul(&self, &rhs)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;
    fn mul(self, rhs: &Rational) -> Self::Output {
        Rational::mul(&self, rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;
    fn mul(self, rhs: Self) -> Self::Output {
        Rational::mul(self, rhs)
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Rational::mul(self, &rhs)
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = Rational::mul(self, rhs)
    }
}

impl Div for Rational {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;
    fn div(self, rhs: &Rational) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Div for &Rational {
    type Output = Rational;
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl DivAssign<&Rational> for Rational {
    fn div_assign(&mut self, rhs: &Rational) {
        *self = self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        let mut acc = Rational::new();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        let mut acc = Rational::new();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        let mut acc = Rational::from(ONE.clone());
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        let mut acc = Rational::from(ONE.clone());
        for v in iter {
            acc *= v;
        }
        acc
    }
}
