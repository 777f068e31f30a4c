// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading ratios from text.
//!
//! A ratio is written as two integers, separated either by `/` or by
//! whitespace: `3/4`, `-6/8`, `3 4`. A decimal point after the numerator is
//! rejected, so `1.5/2` is not a ratio.
//!
//! `Scanner` reads ratios one after another from any source of `char`s;
//! `str::parse` reads exactly one.
//!
//! ```
//! use num_fixed_ratio::parse::Scanner;
//! use num_fixed_ratio::Rational;
//!
//! let mut input = Scanner::new("1/2  3 4\n-10/4".chars());
//! let a: Rational = input.next_ratio().unwrap();
//! let b: Rational = input.next_ratio().unwrap();
//! let c: Rational = input.next_ratio().unwrap();
//! assert_eq!((a.to_string(), b.to_string(), c.to_string()),
//!            ("1/2".to_string(), "3/4".to_string(), "-5/2".to_string()));
//! assert!(input.is_exhausted());
//! ```

use std::iter::Peekable;
use std::str::FromStr;

use log::debug;
use num_integer::Integer;
use num_traits::{PrimInt, Signed};

use crate::{Ratio, RatioError};

/// Reads whitespace-separated ratios from a sequence of characters.
pub struct Scanner<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new<S>(source: S) -> Scanner<I>
        where S: IntoIterator<Item = char, IntoIter = I>
    {
        Scanner { chars: source.into_iter().peekable() }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
    }

    /// Returns true once only whitespace is left.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.chars.peek().is_none()
    }

    /// Reads an optionally signed decimal integer, skipping leading
    /// whitespace.
    fn read_integer<T: PrimInt>(&mut self) -> Result<T, RatioError> {
        self.skip_whitespace();

        let mut digits = String::new();
        if let Some(&c) = self.chars.peek() {
            if c == '-' || c == '+' {
                digits.push(c);
                self.chars.next();
            }
        }
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.chars.next();
        }

        T::from_str_radix(&digits, 10).map_err(|_| {
            debug!("expected an integer, found {:?}", digits);
            RatioError::InvalidInput
        })
    }

    /// Reads the next ratio.
    ///
    /// Fails with `InvalidInput` if either integer is missing or malformed,
    /// or if the numerator is followed by anything other than `/` or
    /// whitespace, and with `DivisionByZero` if the denominator is zero.
    pub fn next_ratio<T>(&mut self) -> Result<Ratio<T>, RatioError>
        where T: PrimInt + Integer + Signed
    {
        let numer = self.read_integer()?;

        match self.chars.peek().cloned() {
            Some('/') => {
                self.chars.next();
            }
            Some(c) if !c.is_whitespace() => {
                debug!("unexpected {:?} after numerator", c);
                return Err(RatioError::InvalidInput);
            }
            _ => {}
        }

        let denom: T = self.read_integer()?;
        if denom.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ratio::try_new(numer, denom)
    }
}

impl<T> FromStr for Ratio<T>
    where T: PrimInt + Integer + Signed
{
    type Err = RatioError;

    /// Parses `numer/denom` or `numer denom`, with optional surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Ratio<T>, RatioError> {
        let mut scanner = Scanner::new(s.chars());
        let ratio = scanner.next_ratio()?;
        if !scanner.is_exhausted() {
            return Err(RatioError::InvalidInput);
        }
        Ok(ratio)
    }
}

#[cfg(test)]
mod test {
    use super::Scanner;
    use super::super::{Ratio, Rational, Rational64, RatioError};

    #[test]
    fn test_to_from_str() {
        fn test(r: Rational, s: &str) {
            assert_eq!(s.parse(), Ok(r));
            assert_eq!(r.to_string(), s);
        }
        test(Ratio::new(1, 1), "1/1");
        test(Ratio::new(0, 1), "0/1");
        test(Ratio::new(1, 2), "1/2");
        test(Ratio::new(3, 2), "3/2");
        test(Ratio::new(-1, 2), "-1/2");
        test(Ratio::from_integer(i32::MIN), "-2147483648/1");
    }

    #[test]
    fn test_from_str_normalizes() {
        assert_eq!("4/8".parse(), Ok(Rational::new(1, 2)));
        assert_eq!("3 4".parse(), Ok(Rational::new(3, 4)));
        assert_eq!("-3/-6".parse(), Ok(Rational::new(1, 2)));
        assert_eq!("+6/4".parse(), Ok(Rational::new(3, 2)));
        assert_eq!("  5/ 10 \n".parse(), Ok(Rational::new(1, 2)));
        assert_eq!("7\t-14".parse(), Ok(Rational::new(-1, 2)));
        assert_eq!("9000000000/3".parse(), Ok(Rational64::new(3000000000, 1)));
    }

    #[test]
    fn test_from_str_fail() {
        fn test(s: &str) {
            let rational: Result<Rational, _> = s.parse();
            assert_eq!(rational, Err(RatioError::InvalidInput), "{:?}", s);
        }

        let xs = ["", "abc", "1", "1/", "1.5/2", "1.5 2", "--1/2", "3/2/1", "1 / 2",
                  "1:2", "1/2.5", "1/2 x", "9999999999/1", "1/-"];
        for &s in xs.iter() {
            test(s);
        }
    }

    #[test]
    fn test_from_str_zero_denominator() {
        assert_eq!("5 0".parse::<Rational>(), Err(RatioError::DivisionByZero));
        assert_eq!("5/0".parse::<Rational>(), Err(RatioError::DivisionByZero));
        assert_eq!("0/-0".parse::<Rational>(), Err(RatioError::DivisionByZero));
    }

    #[test]
    fn test_from_str_overflow() {
        assert_eq!("-2147483648/-1".parse::<Rational>(), Err(RatioError::Overflow));
    }

    #[test]
    fn test_scanner_sequence() {
        let mut input = Scanner::new("1/2 3 4\n-5/10 6".chars());
        assert_eq!(input.next_ratio(), Ok(Rational::new(1, 2)));
        assert_eq!(input.next_ratio(), Ok(Rational::new(3, 4)));
        assert!(!input.is_exhausted());
        assert_eq!(input.next_ratio(), Ok(Rational::new(-1, 2)));
        assert_eq!(input.next_ratio::<i32>(), Err(RatioError::InvalidInput));
        assert!(input.is_exhausted());
    }

    #[test]
    fn test_scanner_stops_at_decimal_point() {
        let mut input = Scanner::new("12.5 3".chars());
        assert_eq!(input.next_ratio::<i32>(), Err(RatioError::InvalidInput));
    }
}
