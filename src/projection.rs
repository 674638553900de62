//! Projections from a classified [`Shape`] into an accessor's target shape.
//!
//! Each accessor is one projection:
//!
//! - [`IntoOutcome`] - the result accessor, synthesizing an error for absent values
//! - [`IntoMaybe`] - the optional accessor, discarding any carried error
//! - [`Raise`] - the direct accessor, unwrapping a result or raising its error
//!
//! Projections are values so that a deferred source can carry them into its
//! continuation and apply them once the output resolves.

use std::marker::PhantomData;

use crate::{
    capability::{Maybe, Outcome},
    error::ErrorFactory,
    shape::Shape,
};

/// Converts a classified shape into a target representation.
pub trait Projection<T, E> {
    type Output;

    fn project(self, shape: Shape<T, E>) -> Self::Output;
}

/// Projects into a success/failure container `O`.
///
/// Success values and carried errors pass through unchanged. `Nullish` and
/// `OptionalAbsent` become a failure built by the error factory from the
/// original arguments.
pub struct IntoOutcome<'a, Args, EF, O> {
    args: Args,
    error_factory: &'a EF,
    _target: PhantomData<fn() -> O>,
}

impl<'a, Args, EF, O> IntoOutcome<'a, Args, EF, O> {
    pub fn new(args: Args, error_factory: &'a EF) -> Self {
        IntoOutcome {
            args,
            error_factory,
            _target: PhantomData,
        }
    }
}

impl<Args, EF, O> Projection<O::Value, O::Error> for IntoOutcome<'_, Args, EF, O>
where
    O: Outcome,
    EF: ErrorFactory<Args, O::Error>,
{
    type Output = O;

    fn project(self, shape: Shape<O::Value, O::Error>) -> O {
        let origin = shape.origin();
        match shape {
            Shape::ResultSuccess(v) | Shape::OptionalPresent(v) | Shape::Plain(v) => O::success(v),
            Shape::ResultFailure(e) => O::failure(e),
            Shape::OptionalAbsent | Shape::Nullish => {
                tracing::debug!(?origin, "no value, synthesizing error from factory");
                O::failure(self.error_factory.make_error(&self.args))
            }
        }
    }
}

/// Projects into an optional container `M`.
///
/// The error factory is never consulted and a carried error is dropped.
pub struct IntoMaybe<M> {
    _target: PhantomData<fn() -> M>,
}

impl<M> IntoMaybe<M> {
    pub fn new() -> Self {
        IntoMaybe {
            _target: PhantomData,
        }
    }
}

impl<M> Default for IntoMaybe<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, E> Projection<M::Value, E> for IntoMaybe<M>
where
    M: Maybe,
{
    type Output = M;

    fn project(self, shape: Shape<M::Value, E>) -> M {
        match shape {
            Shape::ResultSuccess(v) | Shape::OptionalPresent(v) | Shape::Plain(v) => M::present(v),
            Shape::ResultFailure(_) => {
                tracing::trace!("discarding carried error in optional projection");
                M::absent()
            }
            Shape::OptionalAbsent | Shape::Nullish => M::absent(),
        }
    }
}

/// Unwraps the `Result` produced by an inner projection, raising its error.
///
/// The error is raised as the panic payload via [`std::panic::panic_any`],
/// so a caller catching the unwind can downcast it back to `E` unchanged.
pub struct Raise<P>(P);

impl<P> Raise<P> {
    pub fn new(inner: P) -> Self {
        Raise(inner)
    }
}

impl<T, E, P> Projection<T, E> for Raise<P>
where
    P: Projection<T, E, Output = Result<T, E>>,
    E: Send + 'static,
{
    type Output = T;

    fn project(self, shape: Shape<T, E>) -> T {
        match self.0.project(shape) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!("assertion failed, raising error");
                std::panic::panic_any(e)
            }
        }
    }
}
