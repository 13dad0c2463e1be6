//! BigInt and Rational formatting and string parsing.

use crate::common::buf::DigitBuf;
use crate::defs::Error;
use crate::int::BigInt;
use crate::magnitude::Magnitude;
use crate::parser;
use crate::rational::Rational;
use core::fmt::{self, Display, Formatter, Write};
use core::str::FromStr;

impl BigInt {
    /// Parses a number from the decimal string `s`. The accepted form is an
    /// optional leading minus followed by one or more decimal digits;
    /// `"-0"` is accepted and normalizes to zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `s` does not match the accepted form.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parser::parse(s);
        if !ps.is_valid() {
            return Err(Error::InvalidArgument);
        }

        let (digits, sign) = ps.raw_parts();
        let mut m = DigitBuf::with_capacity(digits.len());
        for d in digits.iter().rev() {
            m.push(*d);
        }

        Ok(BigInt::from_raw_parts(sign, Magnitude::from_digits(m)))
    }
}

impl Rational {
    /// Parses a number from the string `s`: either a decimal integer, or
    /// two decimal integers separated by `/`, where the denominator carries
    /// no sign. The result is reduced.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `s` does not match the accepted form.
    ///  - DivisionByZero: the denominator is zero.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.split_once('/') {
            Some((n, d)) => {
                let n = BigInt::parse(n)?;
                let d = BigInt::parse(d)?;
                if d.is_negative() {
                    return Err(Error::InvalidArgument);
                }
                Rational::from_parts(n, d)
            }
            None => Ok(Rational::from(BigInt::parse(s)?)),
        }
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.sign().is_negative() {
            f.write_char('-')?;
        }
        for d in self.magnitude().digits().iter().rev() {
            f.write_char((b'0' + *d) as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

impl FromStr for Rational {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::parse(s)
    }
}
