//! The assertion factory.
//!
//! [`assertion`] turns a source computation into an [`Assertion`] exposing
//! three accessors over the same source:
//!
//! - [`Assertion::assert`] - unwraps the value or raises the error
//! - [`Assertion::optional`] - normalizes every "no value" form to `None`
//! - [`Assertion::result`] - normalizes every "no value" form to `Err`
//!
//! A sync source gets plain return values. A source returning a
//! [`Deferred`](crate::Deferred) gets futures of the same values.
//!
//! # Examples
//!
//! ```rust
//! use assertive::{assertion, AssertionFailed};
//!
//! let find = assertion(|id: u32| (id == 1).then_some("ada"));
//!
//! assert_eq!(find.assert(1), "ada");
//! assert_eq!(find.optional(2), None);
//! assert_eq!(find.result(2), Err(AssertionFailed));
//! ```

use std::{fmt, marker::PhantomData};

use either::Either;

use crate::{
    capability::{Maybe, Outcome},
    error::{AssertionFailed, DefaultErrorFactory, ErrorFactory},
    projection::{IntoMaybe, IntoOutcome, Raise},
    settle::{Settle, Then, Unwrapped},
};

/// A computation from an argument list to a classifiable output.
///
/// Implemented for every `Fn(Args) -> R`. Several arguments are passed as a
/// tuple.
pub trait Source<Args> {
    type Output;

    fn run(&self, args: Args) -> Self::Output;
}

impl<F, Args, R> Source<Args> for F
where
    F: Fn(Args) -> R,
{
    type Output = R;

    #[inline]
    fn run(&self, args: Args) -> R {
        self(args)
    }
}

/// Three accessors over one source computation.
///
/// `E` is the error type of the result and direct accessors. Errors carried by
/// the source are converted into it with `Into`; absent values get one from
/// the error factory `EF`.
pub struct Assertion<F, Args, EF = DefaultErrorFactory, E = AssertionFailed> {
    source: F,
    error_factory: EF,
    _marker: PhantomData<fn(Args) -> E>,
}

/// Create an [`Assertion`] over `source` with the default error factory.
///
/// Absent values fail with [`AssertionFailed`] until another factory or error
/// type is installed.
pub fn assertion<F, Args, R>(source: F) -> Assertion<F, Args>
where
    F: Fn(Args) -> R,
{
    Assertion {
        source,
        error_factory: DefaultErrorFactory,
        _marker: PhantomData,
    }
}

impl<F, Args, EF, E> Assertion<F, Args, EF, E> {
    /// Install a factory building the error for absent values from the call arguments.
    ///
    /// The factory runs on every failing call, never cached. Errors carried by
    /// the source still win over it.
    ///
    /// ```rust
    /// use assertive::assertion;
    ///
    /// let find = assertion(|id: u32| (id == 1).then_some("ada"))
    ///     .with_error_factory(|id: &u32| format!("no user {id}"));
    ///
    /// assert_eq!(find.result(7), Err("no user 7".to_string()));
    /// ```
    pub fn with_error_factory<G, E2>(self, error_factory: G) -> Assertion<F, Args, G, E2>
    where
        G: Fn(&Args) -> E2,
    {
        Assertion {
            source: self.source,
            error_factory,
            _marker: PhantomData,
        }
    }

    pub fn source(&self) -> &F {
        &self.source
    }
}

impl<F, Args, E> Assertion<F, Args, DefaultErrorFactory, E> {
    /// Keep the default factory but surface its error as `E2`.
    ///
    /// Useful when the source carries errors of its own and both need a
    /// common type.
    ///
    /// ```rust
    /// use assertive::assertion;
    /// use std::error::Error;
    ///
    /// let parse = assertion(|s: &'static str| s.parse::<u8>())
    ///     .with_error::<Box<dyn Error + Send + Sync>>();
    ///
    /// assert!(parse.result("x").is_err());
    /// assert_eq!(parse.result("7").ok(), Some(7));
    /// ```
    pub fn with_error<E2>(self) -> Assertion<F, Args, DefaultErrorFactory, E2>
    where
        E2: From<AssertionFailed>,
    {
        Assertion {
            source: self.source,
            error_factory: DefaultErrorFactory,
            _marker: PhantomData,
        }
    }
}

impl<F, Args, EF, E> Assertion<F, Args, EF, E>
where
    F: Source<Args>,
    F::Output: Settle<E>,
{
    /// Project the source output into an `Option`.
    ///
    /// Every "no value" form becomes `None`, including a failure carrying an
    /// error, which is dropped. The error factory is never called.
    pub fn optional(
        &self,
        args: Args,
    ) -> Then<F::Output, E, IntoMaybe<Option<Unwrapped<F::Output, E>>>> {
        self.optional_as::<Option<Unwrapped<F::Output, E>>>(args)
    }

    /// Like [`optional`](Self::optional), into any [`Maybe`] container.
    pub fn optional_as<M>(&self, args: Args) -> Then<F::Output, E, IntoMaybe<M>>
    where
        M: Maybe<Value = Unwrapped<F::Output, E>>,
    {
        let projection: IntoMaybe<M> = IntoMaybe::new();
        self.source.run(args).settle(projection)
    }

    /// Project the source output into a `Result`.
    ///
    /// Success values pass through; a carried error is kept as is; null and
    /// absent values fail with a fresh error from the factory.
    pub fn result(
        &self,
        args: Args,
    ) -> Then<F::Output, E, IntoOutcome<'_, Args, EF, Result<Unwrapped<F::Output, E>, E>>>
    where
        Args: Clone,
        EF: ErrorFactory<Args, E>,
    {
        self.result_as::<Result<Unwrapped<F::Output, E>, E>>(args)
    }

    /// Like [`result`](Self::result), into an `Either` with the error on the left.
    pub fn either(
        &self,
        args: Args,
    ) -> Then<F::Output, E, IntoOutcome<'_, Args, EF, Either<E, Unwrapped<F::Output, E>>>>
    where
        Args: Clone,
        EF: ErrorFactory<Args, E>,
    {
        self.result_as::<Either<E, Unwrapped<F::Output, E>>>(args)
    }

    /// Like [`result`](Self::result), into any [`Outcome`] container.
    pub fn result_as<O>(&self, args: Args) -> Then<F::Output, E, IntoOutcome<'_, Args, EF, O>>
    where
        Args: Clone,
        EF: ErrorFactory<Args, E>,
        O: Outcome<Value = Unwrapped<F::Output, E>, Error = E>,
    {
        let output = self.source.run(args.clone());
        let projection: IntoOutcome<'_, Args, EF, O> = IntoOutcome::new(args, &self.error_factory);
        output.settle(projection)
    }

    /// Unwrap the source output, raising the error of [`result`](Self::result) otherwise.
    ///
    /// # Panics
    ///
    /// Panics with the error itself as payload (see [`std::panic::panic_any`])
    /// when the result accessor would return `Err`. For a deferred source the
    /// panic happens when the returned future is polled to completion.
    ///
    /// ```rust
    /// use assertive::{assertion, AssertionFailed};
    /// use std::panic::{catch_unwind, AssertUnwindSafe};
    ///
    /// let find = assertion(|id: u32| (id == 1).then_some("ada"));
    ///
    /// let payload = catch_unwind(AssertUnwindSafe(|| find.assert(2))).unwrap_err();
    /// assert!(payload.downcast_ref::<AssertionFailed>().is_some());
    /// ```
    pub fn assert(
        &self,
        args: Args,
    ) -> Then<F::Output, E, Raise<IntoOutcome<'_, Args, EF, Result<Unwrapped<F::Output, E>, E>>>>
    where
        Args: Clone,
        EF: ErrorFactory<Args, E>,
        E: Send + 'static,
    {
        let output = self.source.run(args.clone());
        let projection: Raise<IntoOutcome<'_, Args, EF, Result<Unwrapped<F::Output, E>, E>>> =
            Raise::new(IntoOutcome::new(args, &self.error_factory));
        output.settle(projection)
    }
}

impl<F, Args, EF, E> Clone for Assertion<F, Args, EF, E>
where
    F: Clone,
    EF: Clone,
{
    fn clone(&self) -> Self {
        Assertion {
            source: self.source.clone(),
            error_factory: self.error_factory.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, Args, EF, E> fmt::Debug for Assertion<F, Args, EF, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion")
            .field("source", &std::any::type_name::<F>())
            .field("error", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::settle::deferred;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Record {
        foo: &'static str,
    }

    const RECORD: Record = Record { foo: "bar" };

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct CustomError(&'static str);

    fn raw(id: u32) -> Nullable<Record> {
        Nullable::from((id == 1).then_some(RECORD))
    }

    fn maybe(id: u32) -> Option<Record> {
        (id == 1).then_some(RECORD)
    }

    fn validated(id: u32) -> Result<Record, CustomError> {
        if id == 1 {
            Ok(RECORD)
        } else {
            Err(CustomError("Validation error"))
        }
    }

    fn raised<T>(f: impl FnOnce() -> T) -> Box<dyn std::any::Any + Send> {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(_) => panic!("expected the assertion to raise"),
            Err(payload) => payload,
        }
    }

    #[test]
    fn test_raw_source_default_error() {
        let find = assertion(raw);

        assert_eq!(find.assert(1), RECORD);
        assert_eq!(find.optional(1), Some(RECORD));
        assert_eq!(find.optional(2), None);
        assert_eq!(find.result(1), Ok(RECORD));
        assert_eq!(find.result(2), Err(AssertionFailed));
        assert_eq!(find.either(2), Either::Left(AssertionFailed));

        let payload = raised(|| find.assert(2));
        let error = payload.downcast::<AssertionFailed>().expect("default error");
        assert_eq!(error.to_string(), "Assertion failed");
    }

    #[test]
    fn test_optional_source_custom_error() {
        let find = assertion(maybe).with_error_factory(|_: &u32| CustomError("Failure"));

        assert_eq!(find.assert(1), RECORD);
        assert_eq!(find.optional(2), None);
        assert_eq!(find.result(2), Err(CustomError("Failure")));

        let payload = raised(|| find.assert(2));
        assert_eq!(
            payload.downcast_ref::<CustomError>(),
            Some(&CustomError("Failure"))
        );
    }

    #[test]
    fn test_carried_error_wins_over_factory() {
        let find = assertion(validated).with_error_factory(|_: &u32| CustomError("Failure"));

        assert_eq!(find.result(2), Err(CustomError("Validation error")));
        assert_eq!(find.optional(2), None);
        assert_eq!(
            raised(|| find.assert(2)).downcast_ref::<CustomError>(),
            Some(&CustomError("Validation error"))
        );
    }

    #[test]
    fn test_factory_receives_original_args_each_call() {
        let seen = RefCell::new(Vec::new());
        let find = assertion(|(id, _): (u32, &'static str)| id.checked_sub(10))
            .with_error_factory(|args: &(u32, &'static str)| {
                seen.borrow_mut().push(*args);
                args.1
            });

        assert_eq!(find.result((3, "first")), Err("first"));
        assert_eq!(find.result((3, "first")), Err("first"));
        assert_eq!(find.result((12, "unused")), Ok(2));
        assert_eq!(find.optional((4, "optional")), None);
        assert_eq!(&*seen.borrow(), &[(3, "first"), (3, "first")]);
    }

    #[test]
    fn test_custom_targets() {
        let find = assertion(maybe);

        let either = find.result_as::<Either<AssertionFailed, Record>>(1);
        assert_eq!(either, Either::Right(RECORD));

        let option = find.optional_as::<Option<Record>>(2);
        assert_eq!(option, None);
    }

    #[test]
    fn test_deferred_source_matches_sync() {
        let sync = assertion(validated).with_error_factory(|_: &u32| CustomError("Failure"));
        let later = assertion(|id: u32| deferred(async move { validated(id) }))
            .with_error_factory(|_: &u32| CustomError("Failure"));

        for id in [1, 2] {
            assert_eq!(block_on(later.result(id)), sync.result(id));
            assert_eq!(block_on(later.optional(id)), sync.optional(id));
            assert_eq!(block_on(later.either(id)), sync.either(id));
        }
        assert_eq!(block_on(later.assert(1)), sync.assert(1));
    }

    #[test]
    fn test_deferred_assert_rejects_with_error() {
        let find = assertion(|id: u32| deferred(async move { raw(id) }));

        let rejected = block_on(AssertUnwindSafe(find.assert(2)).catch_unwind());
        let payload = rejected.expect_err("assertion must reject");
        assert!(payload.downcast_ref::<AssertionFailed>().is_some());
    }

    #[test]
    fn test_deferred_assert_raises_only_when_polled() {
        let find = assertion(|id: u32| deferred(async move { raw(id) }));
        let pending = find.assert(2);
        drop(pending);
    }

    #[test]
    fn test_clone_and_debug() {
        let find = assertion(maybe);
        let copy = find.clone();
        assert_eq!(copy.optional(1), Some(RECORD));
        assert!(format!("{find:?}").starts_with("Assertion"));
    }
}
