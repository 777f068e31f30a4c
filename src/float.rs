// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interoperation with floats.
//!
//! Two conversions exist. `Ratio::from_float` searches for the smallest
//! power-of-ten denominator holding the value rounded to three decimal
//! digits, and snaps values within `TOLERANCE` of an integer. Operators use
//! `Ratio::from_float_scaled`, which always produces thousandths, in both
//! operand orders.
//!
//! Equality against a float is approximate, within `TOLERANCE`. Ordering
//! against a float is exact against the float's thousandths. The two can
//! disagree: `1/3 == 0.334` holds while `1/3 < 0.334` also holds.

use std::cmp;
use std::ops::{Add, Div, Mul, Sub};

use log::trace;
use num_integer::Integer;
use num_traits::{cast, Float, PrimInt, Signed};

use crate::error::or_panic;
use crate::{Ratio, RatioError};

/// Distance within which a float counts as equal to a ratio, and within
/// which `Ratio::from_float` snaps to the nearest integer.
pub const TOLERANCE: f64 = 0.01;

/// Denominator of the thousandths that floats are rounded to.
pub const DECIMAL_SCALE: i32 = 1000;

fn to_int<T: PrimInt>(x: f64) -> Result<T, RatioError> {
    cast(x).ok_or(RatioError::Overflow)
}

fn finite<F: Float>(f: F) -> Result<f64, RatioError> {
    match f.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(RatioError::InvalidArgument),
    }
}

impl<T: PrimInt + Integer + Signed> Ratio<T> {
    /// Converts a float into a rational number, rounding it to three
    /// decimal digits first.
    ///
    /// A value within `TOLERANCE` of an integer becomes that integer.
    /// Otherwise the denominator is the smallest power of ten that holds
    /// the rounded fractional part, so `0.5` is `1/2` and `0.333` is
    /// `333/1000`.
    ///
    /// Fails with `InvalidArgument` for NaN or infinities and with
    /// `Overflow` if the result does not fit `T`.
    pub fn from_float<F: Float>(f: F) -> Result<Ratio<T>, RatioError> {
        let n = finite(f)?;

        let nearest = n.round();
        if (n - nearest).abs() < TOLERANCE {
            return Ok(Ratio::from_integer(to_int(nearest)?));
        }

        let scale = f64::from(DECIMAL_SCALE);
        let int_part = n.trunc();
        let fract = ((n - int_part) * scale).round() / scale;

        let mut denom = 1.0;
        while denom < scale && ((fract * denom).round() - fract * denom).abs() >= TOLERANCE {
            denom *= 10.0;
        }
        trace!("rationalizing {}: fractional part {} over {}", n, fract, denom);

        let d: T = to_int(denom)?;
        let whole = to_int::<T>(int_part)?.checked_mul(&d).ok_or(RatioError::Overflow)?;
        let numer = whole
            .checked_add(&to_int((fract * denom).round())?)
            .ok_or(RatioError::Overflow)?;
        Ratio::try_new(numer, d)
    }

    /// Converts a float into thousandths, `round(f * 1000) / 1000`, as the
    /// operators do with a float operand.
    ///
    /// Fails with `InvalidArgument` for NaN or infinities and with
    /// `Overflow` if the result does not fit `T`.
    pub fn from_float_scaled<F: Float>(f: F) -> Result<Ratio<T>, RatioError> {
        let n = finite(f)?;
        let scale = f64::from(DECIMAL_SCALE);
        Ratio::try_new(to_int((n * scale).round())?, to_int(scale)?)
    }

    /// Returns true if the decimal value of `self` is within `tolerance` of
    /// `other`.
    pub fn approx_eq<F: Float>(&self, other: F, tolerance: f64) -> bool {
        match (self.numer.to_f64(), self.denom.to_f64(), other.to_f64()) {
            (Some(n), Some(d), Some(o)) => (n / d - o).abs() < tolerance,
            _ => false,
        }
    }

    fn cmp_float<F: Float>(&self, other: F) -> Option<cmp::Ordering> {
        Ratio::from_float_scaled(other).ok().map(|r| self.cmp(&r))
    }
}

macro_rules! float_binop_impl {
    (impl $imp:ident, $method:ident, $try_method:ident for $f:ty) => {
        impl<T: PrimInt + Integer + Signed> $imp<$f> for Ratio<T> {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: $f) -> Ratio<T> {
                or_panic(Ratio::from_float_scaled(other).and_then(|r| self.$try_method(&r)))
            }
        }

        impl<'a, T: PrimInt + Integer + Signed> $imp<$f> for &'a Ratio<T> {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: $f) -> Ratio<T> {
                (*self).$method(other)
            }
        }

        impl<T: PrimInt + Integer + Signed> $imp<Ratio<T>> for $f {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                or_panic(Ratio::from_float_scaled(self).and_then(|r| r.$try_method(&other)))
            }
        }

        impl<'a, T: PrimInt + Integer + Signed> $imp<&'a Ratio<T>> for $f {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: &Ratio<T>) -> Ratio<T> {
                self.$method(*other)
            }
        }
    }
}

macro_rules! float_cmp_impl {
    ($($f:ty)*) => {$(
        impl<T: PrimInt + Integer + Signed> PartialEq<$f> for Ratio<T> {
            #[inline]
            fn eq(&self, other: &$f) -> bool {
                self.approx_eq(*other, TOLERANCE)
            }
        }

        impl<T: PrimInt + Integer + Signed> PartialEq<Ratio<T>> for $f {
            #[inline]
            fn eq(&self, other: &Ratio<T>) -> bool {
                other.approx_eq(*self, TOLERANCE)
            }
        }

        impl<T: PrimInt + Integer + Signed> PartialOrd<$f> for Ratio<T> {
            #[inline]
            fn partial_cmp(&self, other: &$f) -> Option<cmp::Ordering> {
                self.cmp_float(*other)
            }
        }

        impl<T: PrimInt + Integer + Signed> PartialOrd<Ratio<T>> for $f {
            #[inline]
            fn partial_cmp(&self, other: &Ratio<T>) -> Option<cmp::Ordering> {
                other.cmp_float(*self).map(cmp::Ordering::reverse)
            }
        }

        float_binop_impl!(impl Add, add, try_add for $f);
        float_binop_impl!(impl Sub, sub, try_sub for $f);
        float_binop_impl!(impl Mul, mul, try_mul for $f);
        float_binop_impl!(impl Div, div, try_div for $f);
    )*}
}

float_cmp_impl!(f32 f64);
