// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Reasons a `Ratio` operation can fail.
///
/// Every fallible operation reports one of these instead of producing a
/// partial value. The operator traits, which cannot return a `Result`,
/// panic with the variant's message.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// A zero denominator was supplied, or a float that has no rational value.
    #[error("denominator cannot be zero")]
    InvalidArgument,

    /// The divisor is zero, or parsed text has a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate result does not fit the integer type.
    #[error("arithmetic overflow")]
    Overflow,

    /// Text could not be read as `numer/denom` or `numer denom`.
    #[error("invalid input")]
    InvalidInput,
}

/// Unwraps the result of a checked operation, panicking with the error's
/// message. Used by operator impls that have no way to report failure.
#[inline]
pub(crate) fn or_panic<T>(result: Result<T, RatioError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod test {
    use super::{or_panic, RatioError};

    #[test]
    fn test_messages() {
        assert_eq!(RatioError::InvalidArgument.to_string(), "denominator cannot be zero");
        assert_eq!(RatioError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(RatioError::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(RatioError::InvalidInput.to_string(), "invalid input");
    }

    #[test]
    fn test_or_panic_ok() {
        assert_eq!(or_panic(Ok::<i32, RatioError>(3)), 3);
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow")]
    fn test_or_panic_err() {
        or_panic::<i32>(Err(RatioError::Overflow));
    }
}
