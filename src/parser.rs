//! Parser of decimal integer tokens.
//!
//! The accepted grammar is an optional leading minus followed by one or
//! more decimal digits. Anything else invalidates the whole token.

use crate::defs::Digit;
use crate::defs::Sign;
use std::str::Chars;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<Digit>,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            valid: false,
        }
    }

    /// Returns the next character of the string, or None if the string end
    /// is reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the digits in the order they appeared (most significant
    /// first), and the sign.
    pub fn raw_parts(&self) -> (&[Digit], Sign) {
        (&self.digits, self.sign)
    }
}

/// Parse a decimal integer token.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some('-') = ch {
        parser_state.sign = Sign::Neg;
        ch = parser_state.next_char();
    }

    while let Some(c) = ch {
        match c.to_digit(10) {
            Some(d) => parser_state.digits.push(d as Digit),
            None => return parser_state,
        }
        ch = parser_state.next_char();
    }

    parser_state.valid = !parser_state.digits.is_empty();
    parser_state
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    pub fn test_parser() {
        let ps = parse("12345");
        assert!(ps.is_valid());
        let (digits, sign) = ps.raw_parts();
        assert_eq!(digits, &[1, 2, 3, 4, 5]);
        assert_eq!(sign, Sign::Pos);

        let ps = parse("-987");
        assert!(ps.is_valid());
        let (digits, sign) = ps.raw_parts();
        assert_eq!(digits, &[9, 8, 7]);
        assert_eq!(sign, Sign::Neg);

        let ps = parse("-0");
        assert!(ps.is_valid());
        let (digits, sign) = ps.raw_parts();
        assert_eq!(digits, &[0]);
        assert_eq!(sign, Sign::Neg);

        let ps = parse("0007");
        assert!(ps.is_valid());
        let (digits, _) = ps.raw_parts();
        assert_eq!(digits, &[0, 0, 0, 7]);

        for s in ["", "-", "+1", "12a3", "1.5", " 1", "1 ", "--1", "1-"] {
            assert!(!parse(s).is_valid(), "accepted {:?}", s);
        }
    }
}
