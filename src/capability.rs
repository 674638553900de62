//! Capability contracts for optional and success/failure containers.
//!
//! The adapter never defines its own containers. Instead it works with any type
//! implementing [`Maybe`] (zero or one value) or [`Outcome`] (a value or an
//! error). `Option`, `Result` and `either::Either` implement them out of the box.
//!
//! # Examples
//!
//! ```rust
//! use assertive::{Maybe, Outcome};
//! use either::Either;
//!
//! let some: Option<i32> = Maybe::from_nullable(Some(3));
//! assert!(some.is_present());
//!
//! let failed: Either<&str, i32> = Outcome::failure("nope");
//! assert_eq!(failed.into_result(), Err("nope"));
//! ```

use either::Either;

/// A container carrying zero or one value and no error information.
pub trait Maybe: Sized {
    /// Type of the contained value
    type Value;

    /// Builds the present variant.
    fn present(value: Self::Value) -> Self;

    /// Builds the absent variant.
    fn absent() -> Self;

    /// Returns `true` if a value is contained.
    fn is_present(&self) -> bool;

    /// Takes the contained value out, if any.
    fn into_option(self) -> Option<Self::Value>;

    /// Builds the container from a nullable value.
    fn from_nullable(value: Option<Self::Value>) -> Self {
        match value {
            Some(v) => Self::present(v),
            None => Self::absent(),
        }
    }

    /// Returns `true` if no value is contained.
    fn is_absent(&self) -> bool {
        !self.is_present()
    }
}

/// A container carrying exactly one of a success value or an error.
pub trait Outcome: Sized {
    /// Type of the success value
    type Value;
    /// Type of the carried error
    type Error;

    /// Builds the success variant.
    fn success(value: Self::Value) -> Self;

    /// Builds the failure variant.
    fn failure(error: Self::Error) -> Self;

    /// Returns `true` for the success variant.
    fn is_success(&self) -> bool;

    /// Splits the container into a std `Result`.
    fn into_result(self) -> Result<Self::Value, Self::Error>;

    /// Builds the container from a std `Result`.
    fn from_result(result: Result<Self::Value, Self::Error>) -> Self {
        match result {
            Ok(v) => Self::success(v),
            Err(e) => Self::failure(e),
        }
    }

    /// Returns `true` for the failure variant.
    fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

impl<T> Maybe for Option<T> {
    type Value = T;

    #[inline]
    fn present(value: T) -> Self {
        Some(value)
    }

    #[inline]
    fn absent() -> Self {
        None
    }

    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T, E> Outcome for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn success(value: T) -> Self {
        Ok(value)
    }

    #[inline]
    fn failure(error: E) -> Self {
        Err(error)
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn into_result(self) -> Result<T, E> {
        self
    }
}

/// `Left` is the failure side and `Right` the success side.
impl<E, T> Outcome for Either<E, T> {
    type Value = T;
    type Error = E;

    #[inline]
    fn success(value: T) -> Self {
        Either::Right(value)
    }

    #[inline]
    fn failure(error: E) -> Self {
        Either::Left(error)
    }

    #[inline]
    fn is_success(&self) -> bool {
        self.is_right()
    }

    #[inline]
    fn into_result(self) -> Result<T, E> {
        match self {
            Either::Left(e) => Err(e),
            Either::Right(v) => Ok(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_maybe() {
        let present = <Option<u8> as Maybe>::present(4);
        let absent = <Option<u8> as Maybe>::absent();

        assert!(Maybe::is_present(&present));
        assert!(Maybe::is_absent(&absent));
        assert_eq!(present.into_option(), Some(4));
        assert_eq!(<Option<u8> as Maybe>::from_nullable(None), None);
    }

    #[test]
    fn test_result_outcome() {
        let ok: Result<u8, &str> = Outcome::success(1);
        let err: Result<u8, &str> = Outcome::failure("e");

        assert!(ok.is_success());
        assert!(err.is_failure());
        assert_eq!(<Result<u8, &str> as Outcome>::from_result(Err("x")), Err("x"));
    }

    #[test]
    fn test_either_outcome_sides() {
        let ok: Either<&str, u8> = Outcome::success(2);
        let err: Either<&str, u8> = Outcome::failure("left");

        assert_eq!(ok, Either::Right(2));
        assert_eq!(err, Either::Left("left"));
        assert!(ok.is_success());
        assert_eq!(err.into_result(), Err("left"));
    }
}
