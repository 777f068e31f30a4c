// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rational numbers over fixed-width signed integers.
//!
//! A `Ratio` is always kept in lowest terms with a positive denominator.
//! Arithmetic never wraps: every intermediate product and sum is checked,
//! and a value that does not fit the integer type is reported as
//! `RatioError::Overflow`.
//!
//! Floats mix freely with ratios. An explicit conversion with
//! `Ratio::from_float` picks the smallest power-of-ten denominator that
//! holds the value rounded to three decimal digits; operators coerce their
//! float operand to thousandths.
//!
//! ## Example
//!
//! ```
//! use num_fixed_ratio::{Rational, RatioError};
//!
//! let half = Rational::new(4, 8);
//! assert_eq!(half.to_string(), "1/2");
//!
//! let mut r = half + Rational::new(1, 3);
//! assert_eq!(r, Rational::new(5, 6));
//!
//! r.increment().unwrap();
//! assert_eq!(r, Rational::new(11, 6));
//!
//! assert!(Rational::new(1, 3) == 0.333f32);
//! assert_eq!("5 0".parse::<Rational>(), Err(RatioError::DivisionByZero));
//! ```

use std::cmp;
use std::fmt;

use num_integer::Integer;
use num_traits::{One, PrimInt, Signed, ToPrimitive, Zero};

mod arith;
mod error;
mod float;
pub mod parse;
#[cfg(any(test, feature = "quickcheck"))]
mod quickcheck_impls;

pub use error::RatioError;
pub use float::{DECIMAL_SCALE, TOLERANCE};

/// Represents the ratio between 2 numbers, in lowest terms with `denom > 0`.
#[derive(Copy, Clone, Hash, Debug)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

/// Alias for a `Ratio` of 32-bit integers.
pub type Rational = Ratio<i32>;
pub type Rational64 = Ratio<i64>;

impl<T: PrimInt + Integer + Signed> Ratio<T> {
    /// Creates a new `Ratio` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero, or if moving the sign onto the numerator
    /// overflows (`T::MIN` over a negative denominator).
    #[inline]
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        error::or_panic(Ratio::try_new(numer, denom))
    }

    /// Creates a new `Ratio` in lowest terms, failing with
    /// `InvalidArgument` if `denom` is zero.
    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, RatioError> {
        if denom.is_zero() {
            return Err(RatioError::InvalidArgument);
        }
        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce()?;
        Ok(ret)
    }

    /// Creates a `Ratio` representing the integer `t`.
    #[inline]
    pub fn from_integer(t: T) -> Ratio<T> {
        Ratio::new_raw(t, T::one())
    }

    /// Creates a `Ratio` without checking for `denom == 0` or reducing.
    #[inline]
    pub(crate) fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    /// Gets an immutable reference to the numerator.
    #[inline]
    pub fn numer(&self) -> &T {
        &self.numer
    }

    /// Gets an immutable reference to the denominator.
    #[inline]
    pub fn denom(&self) -> &T {
        &self.denom
    }

    /// Replaces the numerator and puts the value back into lowest terms.
    ///
    /// This cannot fail: the stored denominator is already positive.
    pub fn set_numer(&mut self, numer: T) {
        let (numer, denom) = Ratio::reduced_parts(numer, self.denom);
        self.numer = numer;
        self.denom = denom;
    }

    /// Replaces the denominator and puts the value back into lowest terms.
    ///
    /// Fails with `InvalidArgument` if `denom` is zero. On failure the value
    /// is left as it was.
    pub fn set_denom(&mut self, denom: T) -> Result<(), RatioError> {
        *self = Ratio::try_new(self.numer, denom)?;
        Ok(())
    }

    /// Converts to an integer, rounding towards zero.
    #[inline]
    pub fn to_integer(&self) -> T {
        self.numer / self.denom
    }

    /// Returns true if the rational number is an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Puts self into lowest terms, with denom > 0.
    fn reduce(&mut self) -> Result<(), RatioError> {
        let (mut numer, mut denom) = Ratio::reduced_parts(self.numer, self.denom);

        // keep denom positive!
        if denom < T::zero() {
            numer = T::zero().checked_sub(&numer).ok_or(RatioError::Overflow)?;
            denom = T::zero().checked_sub(&denom).ok_or(RatioError::Overflow)?;
        }
        self.numer = numer;
        self.denom = denom;
        Ok(())
    }

    /// Divides both parts by their gcd, leaving the signs alone.
    fn reduced_parts(numer: T, denom: T) -> (T, T) {
        if numer.is_zero() {
            return (T::zero(), T::one());
        }
        // gcd(MIN, MIN) is not representable
        if numer == denom {
            return (T::one(), T::one());
        }
        let g = numer.gcd(&denom);
        (numer / g, denom / g)
    }

    /// Returns the reciprocal.
    ///
    /// # Panics
    ///
    /// Panics if the `Ratio` is zero, or if the reciprocal of a negative
    /// value overflows.
    #[inline]
    pub fn recip(&self) -> Ratio<T> {
        error::or_panic(self.try_recip())
    }

    /// Returns the reciprocal, failing with `DivisionByZero` on zero.
    pub fn try_recip(&self) -> Result<Ratio<T>, RatioError> {
        match self.numer.cmp(&T::zero()) {
            cmp::Ordering::Equal => Err(RatioError::DivisionByZero),
            cmp::Ordering::Greater => Ok(Ratio::new_raw(self.denom, self.numer)),
            cmp::Ordering::Less => {
                let numer = T::zero().checked_sub(&self.denom).ok_or(RatioError::Overflow)?;
                let denom = T::zero().checked_sub(&self.numer).ok_or(RatioError::Overflow)?;
                Ok(Ratio::new_raw(numer, denom))
            }
        }
    }

    /// Rounds towards minus infinity.
    #[inline]
    pub fn floor(&self) -> Ratio<T> {
        let (q, r) = self.numer.div_rem(&self.denom);
        if r < T::zero() {
            Ratio::from_integer(q - T::one())
        } else {
            Ratio::from_integer(q)
        }
    }

    /// Rounds towards plus infinity.
    #[inline]
    pub fn ceil(&self) -> Ratio<T> {
        let (q, r) = self.numer.div_rem(&self.denom);
        if r > T::zero() {
            Ratio::from_integer(q + T::one())
        } else {
            Ratio::from_integer(q)
        }
    }

    /// Rounds towards zero.
    #[inline]
    pub fn trunc(&self) -> Ratio<T> {
        Ratio::from_integer(self.to_integer())
    }

    /// Returns the fractional part of a number, with division rounded towards zero.
    ///
    /// Satisfies `self == self.trunc() + self.fract()`.
    #[inline]
    pub fn fract(&self) -> Ratio<T> {
        Ratio::new_raw(self.numer % self.denom, self.denom)
    }
}

impl<T: PrimInt + Integer + Signed> Default for Ratio<T> {
    /// The default ratio is `1/1`.
    fn default() -> Ratio<T> {
        Ratio::one()
    }
}

// From integer
impl<T> From<T> for Ratio<T>
    where T: PrimInt + Integer + Signed
{
    fn from(x: T) -> Ratio<T> {
        Ratio::from_integer(x)
    }
}

// From pair (through the `new` constructor)
impl<T> From<(T, T)> for Ratio<T>
    where T: PrimInt + Integer + Signed
{
    fn from(pair: (T, T)) -> Ratio<T> {
        Ratio::new(pair.0, pair.1)
    }
}

impl<T> Into<(T, T)> for Ratio<T> {
    fn into(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

// Comparisons

// Mathematically, comparing a/b and c/d is the same as comparing a*d and b*c, but it's very easy
// for those multiplications to overflow fixed-size integers, so we need to take care.

impl<T: PrimInt + Integer + Signed> Ord for Ratio<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // With equal denominators, the numerators can be directly compared
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }

        // With equal numerators, the denominators can be inversely compared
        if self.numer == other.numer {
            let ord = self.denom.cmp(&other.denom);
            return if self.numer < T::zero() {
                ord
            } else {
                ord.reverse()
            };
        }

        // Compare as floored integers and remainders
        let (self_int, self_rem) = self.numer.div_mod_floor(&self.denom);
        let (other_int, other_rem) = other.numer.div_mod_floor(&other.denom);
        match self_int.cmp(&other_int) {
            cmp::Ordering::Greater => cmp::Ordering::Greater,
            cmp::Ordering::Less => cmp::Ordering::Less,
            cmp::Ordering::Equal => {
                match (self_rem.is_zero(), other_rem.is_zero()) {
                    (true, true) => cmp::Ordering::Equal,
                    (true, false) => cmp::Ordering::Less,
                    (false, true) => cmp::Ordering::Greater,
                    (false, false) => {
                        // Compare the reciprocals of the remaining fractions in reverse
                        let self_recip = Ratio::new_raw(self.denom, self_rem);
                        let other_recip = Ratio::new_raw(other.denom, other_rem);
                        self_recip.cmp(&other_recip).reverse()
                    }
                }
            }
        }
    }
}

impl<T: PrimInt + Integer + Signed> PartialOrd for Ratio<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Both sides are in lowest terms, so equal values have equal parts.
impl<T: PrimInt + Integer + Signed> PartialEq for Ratio<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl<T: PrimInt + Integer + Signed> Eq for Ratio<T> {}

// Constants
impl<T: PrimInt + Integer + Signed> Zero for Ratio<T> {
    #[inline]
    fn zero() -> Ratio<T> {
        Ratio::new_raw(Zero::zero(), One::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T: PrimInt + Integer + Signed> One for Ratio<T> {
    #[inline]
    fn one() -> Ratio<T> {
        Ratio::new_raw(One::one(), One::one())
    }
}

impl<T: PrimInt + Integer + Signed> ToPrimitive for Ratio<T> {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.numer.to_f64()? / self.denom.to_f64()?)
    }
}

// String conversions
impl<T: fmt::Display> fmt::Display for Ratio<T> {
    /// Renders as `numer/denom`, also when the denominator is 1.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Ratio<T>
    where T: serde::Serialize
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        serde::Serialize::serialize(&(&self.numer, &self.denom), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Ratio<T>
    where T: serde::Deserialize<'de> + PrimInt + Integer + Signed
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        let (numer, denom): (T, T) = serde::Deserialize::deserialize(deserializer)?;
        Ratio::try_new(numer, denom).map_err(serde::de::Error::custom)
    }
}
