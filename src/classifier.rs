//! Shape classification.
//!
//! [`Classify`] assigns a source output one of the six [`Shape`] variants. The
//! precedence between capabilities is fixed by which implementation a type
//! has, in this order:
//!
//! 1. result containers (`Result`, `Either`) classify as `ResultSuccess`/`ResultFailure`
//! 2. optional containers (`Option`) classify as `OptionalPresent`/`OptionalAbsent`
//! 3. a null [`Nullable`] classifies as `Nullish`
//! 4. anything else ([`Plain`], a non-null [`Nullable`]) classifies as `Plain`
//!
//! Only the outermost container is inspected: `Ok(None)` is a success carrying
//! `None`.
//!
//! # Examples
//!
//! ```rust
//! use assertive::{classify, Nullable, Shape};
//!
//! assert_eq!(classify::<_, ()>(Some(1)), Shape::OptionalPresent(1));
//! assert_eq!(classify::<_, &str>(Err::<i32, _>("bad")), Shape::ResultFailure("bad"));
//! assert_eq!(classify::<_, ()>(Nullable::<i32>::null()), Shape::Nullish);
//! ```
//!
//! A caller's own container only needs one line on top of a capability:
//!
//! ```rust
//! use assertive::{Classify, Maybe, Shape};
//!
//! enum Slot<T> {
//!     Filled(T),
//!     Empty,
//! }
//!
//! impl<T> Maybe for Slot<T> {
//!     type Value = T;
//!     fn present(value: T) -> Self { Slot::Filled(value) }
//!     fn absent() -> Self { Slot::Empty }
//!     fn is_present(&self) -> bool { matches!(self, Slot::Filled(_)) }
//!     fn into_option(self) -> Option<T> {
//!         match self {
//!             Slot::Filled(v) => Some(v),
//!             Slot::Empty => None,
//!         }
//!     }
//! }
//!
//! impl<T, E> Classify<E> for Slot<T> {
//!     type Value = T;
//!     fn classify(self) -> Shape<T, E> { Shape::from_maybe(self) }
//! }
//!
//! assert_eq!(Classify::<()>::classify(Slot::<u8>::Empty), Shape::OptionalAbsent);
//! ```

use either::Either;

use crate::{
    capability::{Maybe, Outcome},
    nullable::{Nullable, Plain},
    shape::Shape,
};

/// Classifies a value into a [`Shape`] whose error type is `E`.
///
/// A carried error of another type `C` is converted with `Into<E>`, which is
/// the identity when `C == E`, so carried errors reach the caller untouched.
pub trait Classify<E> {
    /// Type of the value carried by the "has value" shapes
    type Value;

    fn classify(self) -> Shape<Self::Value, E>;
}

/// Classify `value` into a [`Shape`].
#[inline]
pub fn classify<S, E>(value: S) -> Shape<S::Value, E>
where
    S: Classify<E>,
{
    value.classify()
}

impl<T, E> Shape<T, E> {
    /// Classifies an optional container.
    #[inline]
    pub fn from_maybe<M>(maybe: M) -> Self
    where
        M: Maybe<Value = T>,
    {
        match maybe.into_option() {
            Some(v) => Shape::OptionalPresent(v),
            None => Shape::OptionalAbsent,
        }
    }

    /// Classifies a success/failure container.
    #[inline]
    pub fn from_outcome<O>(outcome: O) -> Self
    where
        O: Outcome<Value = T, Error = E>,
    {
        match outcome.into_result() {
            Ok(v) => Shape::ResultSuccess(v),
            Err(e) => Shape::ResultFailure(e),
        }
    }
}

impl<T, C, E> Classify<E> for Result<T, C>
where
    C: Into<E>,
{
    type Value = T;

    #[inline]
    fn classify(self) -> Shape<T, E> {
        Shape::from_outcome(self).map_err(Into::into)
    }
}

impl<L, R, E> Classify<E> for Either<L, R>
where
    L: Into<E>,
{
    type Value = R;

    #[inline]
    fn classify(self) -> Shape<R, E> {
        Shape::from_outcome(self).map_err(Into::into)
    }
}

impl<T, E> Classify<E> for Option<T> {
    type Value = T;

    #[inline]
    fn classify(self) -> Shape<T, E> {
        Shape::from_maybe(self)
    }
}

impl<T, E> Classify<E> for Nullable<T> {
    type Value = T;

    #[inline]
    fn classify(self) -> Shape<T, E> {
        match self.into_inner() {
            Some(v) => Shape::Plain(v),
            None => Shape::Nullish,
        }
    }
}

impl<T, E> Classify<E> for Plain<T> {
    type Value = T;

    #[inline]
    fn classify(self) -> Shape<T, E> {
        Shape::Plain(self.into_inner())
    }
}

/// An already classified shape keeps its variant.
impl<T, C, E> Classify<E> for Shape<T, C>
where
    C: Into<E>,
{
    type Value = T;

    #[inline]
    fn classify(self) -> Shape<T, E> {
        self.map_err(Into::into)
    }
}
