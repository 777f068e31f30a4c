// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Overflow-checked arithmetic.
//!
//! Every product and sum is formed with the integer type's checked
//! operations before the result is normalized. The `std::ops` impls panic
//! on failure; `try_*` and the `num_traits` `Checked*` impls report it.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, PrimInt, Signed};

use crate::error::or_panic;
use crate::{Ratio, RatioError};

#[inline]
fn checked<T>(value: Option<T>) -> Result<T, RatioError> {
    value.ok_or(RatioError::Overflow)
}

// Abstracts the a/b `op` c/d = (a*d `op` b*c) / (b*d) pattern
macro_rules! checked_arith_impl {
    ($(#[$attr:meta])* fn $name:ident, $checked:ident) => {
        $(#[$attr])*
        pub fn $name(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RatioError> {
            let ad = checked(self.numer.checked_mul(&rhs.denom))?;
            let bc = checked(self.denom.checked_mul(&rhs.numer))?;
            let numer = checked(ad.$checked(&bc))?;
            let denom = checked(self.denom.checked_mul(&rhs.denom))?;
            Ratio::try_new(numer, denom)
        }
    }
}

impl<T: PrimInt + Integer + Signed> Ratio<T> {
    checked_arith_impl! {
        /// a/b + c/d = (a*d + b*c)/(b*d), failing with `Overflow` if any
        /// intermediate value does not fit `T`.
        fn try_add, checked_add
    }

    checked_arith_impl! {
        /// a/b - c/d = (a*d - b*c)/(b*d), failing with `Overflow` if any
        /// intermediate value does not fit `T`.
        fn try_sub, checked_sub
    }

    /// a/b * c/d = (a*c)/(b*d), failing with `Overflow` if either product
    /// does not fit `T`.
    pub fn try_mul(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RatioError> {
        let numer = checked(self.numer.checked_mul(&rhs.numer))?;
        let denom = checked(self.denom.checked_mul(&rhs.denom))?;
        Ratio::try_new(numer, denom)
    }

    /// (a/b) / (c/d) = (a*d)/(b*c), failing with `DivisionByZero` if `rhs`
    /// is zero and `Overflow` if either product does not fit `T`.
    pub fn try_div(&self, rhs: &Ratio<T>) -> Result<Ratio<T>, RatioError> {
        if rhs.numer.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        let numer = checked(self.numer.checked_mul(&rhs.denom))?;
        let denom = checked(self.denom.checked_mul(&rhs.numer))?;
        Ratio::try_new(numer, denom)
    }

    /// Negates, failing with `Overflow` for a `T::MIN` numerator.
    pub fn try_neg(&self) -> Result<Ratio<T>, RatioError> {
        let numer = checked(T::zero().checked_sub(&self.numer))?;
        Ok(Ratio::new_raw(numer, self.denom))
    }

    /// Adds one in place and returns the new value, like a prefix `++`.
    ///
    /// On `Overflow` the value is left unchanged.
    pub fn increment(&mut self) -> Result<Ratio<T>, RatioError> {
        let numer = checked(self.numer.checked_add(&self.denom))?;
        self.set_numer(numer);
        Ok(*self)
    }

    /// Adds one in place and returns the prior value, like a postfix `++`.
    pub fn post_increment(&mut self) -> Result<Ratio<T>, RatioError> {
        let old = *self;
        self.increment()?;
        Ok(old)
    }

    /// Subtracts one in place and returns the new value, like a prefix `--`.
    ///
    /// On `Overflow` the value is left unchanged.
    pub fn decrement(&mut self) -> Result<Ratio<T>, RatioError> {
        let numer = checked(self.numer.checked_sub(&self.denom))?;
        self.set_numer(numer);
        Ok(*self)
    }

    /// Subtracts one in place and returns the prior value, like a postfix `--`.
    pub fn post_decrement(&mut self) -> Result<Ratio<T>, RatioError> {
        let old = *self;
        self.decrement()?;
        Ok(old)
    }
}

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<T: PrimInt + Integer + Signed> $imp<Ratio<T>> for Ratio<T> {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                (&self).$method(&other)
            }
        }
    }
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<Ratio<T>> for &'a Ratio<T> where
            T: PrimInt + Integer + Signed
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: Ratio<T>) -> Ratio<T> {
                self.$method(&other)
            }
        }
    }
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a, T> $imp<&'a Ratio<T>> for Ratio<T> where
            T: PrimInt + Integer + Signed
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, other: &Ratio<T>) -> Ratio<T> {
                (&self).$method(other)
            }
        }
    }
}

// The ref-ref impl panics with the error's message; the others forward to it.
macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        forward_val_val_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);

        impl<'a, 'b, T> $imp<&'b Ratio<T>> for &'a Ratio<T> where
            T: PrimInt + Integer + Signed
        {
            type Output = Ratio<T>;

            #[inline]
            fn $method(self, rhs: &Ratio<T>) -> Ratio<T> {
                or_panic(self.$try_method(rhs))
            }
        }
    }
}

arith_impl!(impl Add, add, try_add);
arith_impl!(impl Sub, sub, try_sub);
arith_impl!(impl Mul, mul, try_mul);
arith_impl!(impl Div, div, try_div);

macro_rules! checked_trait_impl {
    (impl $imp:ident, $method:ident, $try_method:ident) => {
        impl<T: PrimInt + Integer + Signed> $imp for Ratio<T> {
            #[inline]
            fn $method(&self, v: &Ratio<T>) -> Option<Ratio<T>> {
                self.$try_method(v).ok()
            }
        }
    }
}

checked_trait_impl!(impl CheckedAdd, checked_add, try_add);
checked_trait_impl!(impl CheckedSub, checked_sub, try_sub);
checked_trait_impl!(impl CheckedMul, checked_mul, try_mul);
checked_trait_impl!(impl CheckedDiv, checked_div, try_div);

impl<T> Neg for Ratio<T>
    where T: PrimInt + Integer + Signed
{
    type Output = Ratio<T>;

    #[inline]
    fn neg(self) -> Ratio<T> {
        or_panic(self.try_neg())
    }
}

impl<'a, T> Neg for &'a Ratio<T>
    where T: PrimInt + Integer + Signed
{
    type Output = Ratio<T>;

    #[inline]
    fn neg(self) -> Ratio<T> {
        -*self
    }
}

#[cfg(test)]
mod test {
    use super::super::{Ratio, Rational, RatioError};
    use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

    const _0: Rational = Ratio { numer: 0, denom: 1 };
    const _1: Rational = Ratio { numer: 1, denom: 1 };
    const _2: Rational = Ratio { numer: 2, denom: 1 };
    const _1_2: Rational = Ratio { numer: 1, denom: 2 };
    const _3_2: Rational = Ratio { numer: 3, denom: 2 };
    const _NEG1_2: Rational = Ratio { numer: -1, denom: 2 };
    const _MAX: Rational = Ratio { numer: i32::MAX, denom: 1 };
    const _MIN: Rational = Ratio { numer: i32::MIN, denom: 1 };

    #[test]
    fn test_add() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a + b, c);
            assert_eq!(&a + &b, c);
            assert_eq!(a.try_add(&b), Ok(c));
        }

        test(_1, _1_2, _3_2);
        test(_1, _1, _2);
        test(_1_2, _3_2, _2);
        test(_1_2, _NEG1_2, _0);
        test(Ratio::new(1, 6), Ratio::new(1, 3), _1_2);
    }

    #[test]
    fn test_sub() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a - b, c);
            assert_eq!(a - &b, c);
            assert_eq!(a.try_sub(&b), Ok(c));
        }

        test(_1, _1_2, _1_2);
        test(_3_2, _1_2, _1);
        test(_1, _NEG1_2, _3_2);
        test(_1_2, _1, _NEG1_2);
    }

    #[test]
    fn test_mul() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a * b, c);
            assert_eq!(&a * b, c);
            assert_eq!(a.try_mul(&b), Ok(c));
        }

        test(_1, _1_2, _1_2);
        test(_1_2, _3_2, Ratio::new(3, 4));
        test(_1_2, _NEG1_2, Ratio::new(-1, 4));
    }

    #[test]
    fn test_div() {
        fn test(a: Rational, b: Rational, c: Rational) {
            assert_eq!(a / b, c);
            assert_eq!(a.try_div(&b), Ok(c));
        }

        test(_1, _1_2, _2);
        test(_3_2, _1_2, _1 + _2);
        test(_1, _NEG1_2, _NEG1_2 + _NEG1_2 + _NEG1_2 + _NEG1_2);
        test(_NEG1_2, _NEG1_2, _1);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-_0, _0);
        assert_eq!(-_1_2, _NEG1_2);
        assert_eq!(-&_NEG1_2, _1_2);
        assert_eq!(_MIN.try_neg(), Err(RatioError::Overflow));
    }

    #[test]
    fn test_zero() {
        assert_eq!(_0 + _0, _0);
        assert_eq!(_0 * _0, _0);
        assert_eq!(_0 * _1, _0);
        assert_eq!(_0 / _NEG1_2, _0);
        assert_eq!(_0 - _0, _0);
    }

    #[test]
    fn test_div_0() {
        assert_eq!(_1.try_div(&_0), Err(RatioError::DivisionByZero));
        assert_eq!(_1.checked_div(&_0), None);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_0_panics() {
        let _a = _1 / _0;
    }

    #[test]
    fn test_overflow() {
        assert_eq!(_MAX.try_add(&_MAX), Err(RatioError::Overflow));
        assert_eq!(_MIN.try_sub(&_1), Err(RatioError::Overflow));
        assert_eq!(_MAX.try_mul(&_2), Err(RatioError::Overflow));
        assert_eq!(_MAX.try_div(&_1_2), Err(RatioError::Overflow));

        // the common denominator overflows even though the sum is small
        let a = Ratio::new(1, 65536);
        let b = Ratio::new(1, 65537);
        assert_eq!(a.try_add(&b), Err(RatioError::Overflow));
        assert_eq!(a.try_mul(&b), Err(RatioError::Overflow));

        // within range the same operands work at 64 bits
        let a = Ratio::new(1i64, 65536);
        let b = Ratio::new(1i64, 65537);
        assert_eq!(a + b, Ratio::new(131073, 65536 * 65537));

        assert_eq!(_MAX.checked_add(&_1), None);
        assert_eq!(_MAX.checked_sub(&_1), Some(Ratio::from_integer(i32::MAX - 1)));
        assert_eq!(_MAX.checked_mul(&_MAX), None);
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn test_overflow_panics() {
        let _a = _MAX + _MAX;
    }

    #[test]
    fn test_increment() {
        let mut a = _1_2;
        assert_eq!(a.increment(), Ok(_3_2));
        assert_eq!(a, _3_2);

        let mut b = _1_2;
        assert_eq!(b.post_increment(), Ok(_1_2));
        assert_eq!(b, _3_2);

        let mut c = _NEG1_2;
        assert_eq!(c.increment(), Ok(_1_2));
        assert_eq!(c.increment(), Ok(_3_2));
    }

    #[test]
    fn test_decrement() {
        let mut a = _3_2;
        assert_eq!(a.decrement(), Ok(_1_2));
        assert_eq!(a.decrement(), Ok(_NEG1_2));

        let mut b = _1;
        assert_eq!(b.post_decrement(), Ok(_1));
        assert!(b.is_zero());
        assert_eq!(b.denom(), &1);
    }

    #[test]
    fn test_increment_overflow() {
        let mut a = _MAX;
        assert_eq!(a.increment(), Err(RatioError::Overflow));
        assert_eq!(a, _MAX);

        let mut b = _MIN;
        assert_eq!(b.post_decrement(), Err(RatioError::Overflow));
        assert_eq!(b, _MIN);
    }

    #[test]
    fn test_operands_untouched() {
        let a = _1_2;
        let b = _3_2;
        let _ = a + b;
        let _ = a.try_div(&b);
        assert_eq!((a, b), (_1_2, _3_2));
    }
}
