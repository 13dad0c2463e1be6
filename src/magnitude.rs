//! Magnitude of a number: unsigned sequence of decimal digits,
//! least significant digit first.

use crate::common::buf::DigitBuf;
use crate::common::util::add_carry;
use crate::common::util::sub_borrow;
use crate::defs::{Digit, DoubleDigit, SignedDigit, DIGIT_BASE};
use core::cmp::Ordering;
use itertools::izip;

/// Unsigned magnitude in canonical form: at least one digit, and the most
/// significant digit is non-zero unless the value is zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Magnitude {
    m: DigitBuf,
}

impl Magnitude {
    /// New magnitude with value of zero.
    pub fn new() -> Self {
        let mut m = DigitBuf::new();
        m.push(0);
        Magnitude { m }
    }

    /// Magnitude from a raw digit buffer, canonicalized.
    pub fn from_digits(mut m: DigitBuf) -> Self {
        if m.is_empty() {
            m.push(0);
        } else {
            m.trunc_leading_zeroes();
        }
        Magnitude { m }
    }

    /// Magnitude of a native unsigned integer, decomposed into decimal digits.
    pub fn from_u128(mut v: u128) -> Self {
        let mut m = DigitBuf::new();
        if v == 0 {
            m.push(0);
        }
        while v > 0 {
            m.push((v % DIGIT_BASE as u128) as Digit);
            v /= DIGIT_BASE as u128;
        }
        Magnitude { m }
    }

    /// Return true if the magnitude represents zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.len() == 1 && self.m[0] == 0
    }

    /// Return true if the magnitude represents ten.
    #[inline]
    pub fn is_ten(&self) -> bool {
        self.m.len() == 2 && self.m[0] == 0 && self.m[1] == 1
    }

    /// Number of decimal digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.len()
    }

    /// Digits, least significant first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.m
    }

    /// Multiply by 10^n by prepending zero least significant digits.
    /// Zero stays zero.
    pub fn shift_up(&mut self, n: usize) {
        if n > 0 && !self.is_zero() {
            self.m.shift_up(n);
        }
    }

    /// Compare magnitudes.
    pub fn cmp(&self, s2: &Self) -> Ordering {
        if self.m.len() != s2.m.len() {
            return self.m.len().cmp(&s2.m.len());
        }

        for (a, b) in core::iter::zip(self.m.iter().rev(), s2.m.iter().rev()) {
            let diff = *a as SignedDigit - *b as SignedDigit;
            if diff != 0 {
                return diff.cmp(&0);
            }
        }

        Ordering::Equal
    }

    /// Sum of two magnitudes.
    pub fn add(&self, s2: &Self) -> Self {
        let (short, long) = if self.m.len() < s2.m.len() {
            (&self.m, &s2.m)
        } else {
            (&s2.m, &self.m)
        };

        let mut m3 = DigitBuf::with_capacity(long.len() + 1);
        let mut c = 0;
        let mut r = 0;

        for (a, b) in izip!(short.iter(), long.iter()) {
            c = add_carry(*a, *b, c, &mut r);
            m3.push(r);
        }

        for b in long[short.len()..].iter() {
            c = add_carry(0, *b, c, &mut r);
            m3.push(r);
        }

        if c > 0 {
            m3.push(c);
        }

        Magnitude::from_digits(m3)
    }

    /// Difference of two magnitudes.
    /// Prerequisite: the value of `self` is not smaller than the value of `s2`.
    pub fn sub(&self, s2: &Self) -> Self {
        debug_assert!(self.cmp(s2) != Ordering::Less);

        let mut m3 = DigitBuf::with_capacity(self.m.len());
        let mut c = 0;
        let mut r = 0;

        for (b, a) in izip!(s2.m.iter(), self.m.iter()) {
            c = sub_borrow(*a, *b, c, &mut r);
            m3.push(r);
        }

        for a in self.m[s2.m.len()..].iter() {
            c = sub_borrow(*a, 0, c, &mut r);
            m3.push(r);
        }

        debug_assert!(c == 0);

        Magnitude::from_digits(m3)
    }

    /// Schoolbook product of two magnitudes.
    /// Multiplication by ten short-cuts to a digit shift.
    pub fn mul(&self, s2: &Self) -> Self {
        if s2.is_ten() {
            let mut ret = self.clone();
            ret.shift_up(1);
            return ret;
        }

        let mut m3 = DigitBuf::zeroed(self.m.len() + s2.m.len());

        for (i, d1) in self.m.iter().enumerate() {
            let d1 = *d1 as DoubleDigit;
            if d1 == 0 {
                continue;
            }

            let mut k = 0;
            for (j, d2) in s2.m.iter().enumerate() {
                let m = d1 * (*d2 as DoubleDigit) + m3[i + j] as DoubleDigit + k;

                m3[i + j] = (m % DIGIT_BASE) as Digit;
                k = m / DIGIT_BASE;
            }
            m3[i + s2.m.len()] += k as Digit;
        }

        Magnitude::from_digits(m3)
    }

    /// Quotient and remainder of long division by `d2`, scanning from the
    /// most significant digit with a running remainder.
    /// Prerequisite: `d2` is not zero.
    pub fn div_rem(&self, d2: &Self) -> (Self, Self) {
        debug_assert!(!d2.is_zero());

        let mut rem = Magnitude::new();
        let mut quo = DigitBuf::with_capacity(self.m.len());

        for d in self.m.iter().rev() {
            // rem = rem * 10 + d
            rem.shift_up(1);
            rem.m[0] = *d;

            let mut q = 0;
            while rem.cmp(d2) != Ordering::Less {
                rem = rem.sub(d2);
                q += 1;
            }
            quo.push(q);
        }

        quo.reverse();

        (Magnitude::from_digits(quo), rem)
    }
}
