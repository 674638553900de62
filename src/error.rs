//! Default error and error factories.
//!
//! When a source produces no value and carries no error of its own, the
//! result and direct accessors ask an [`ErrorFactory`] for one. The factory is
//! called with the original arguments on every failing call.

use thiserror::Error;

/// The error synthesized when no error factory is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("Assertion failed")]
pub struct AssertionFailed;

/// Builds an error from the arguments a source was called with.
///
/// Implemented for every `Fn(&Args) -> E`, so a closure is the usual factory.
pub trait ErrorFactory<Args, E> {
    fn make_error(&self, args: &Args) -> E;
}

impl<Args, E, F> ErrorFactory<Args, E> for F
where
    F: Fn(&Args) -> E,
{
    #[inline]
    fn make_error(&self, args: &Args) -> E {
        self(args)
    }
}

/// Ignores the arguments and builds [`AssertionFailed`], converted into any
/// error type that can absorb it.
///
/// ```rust
/// use assertive::{AssertionFailed, DefaultErrorFactory, ErrorFactory};
///
/// let plain: AssertionFailed = DefaultErrorFactory.make_error(&42);
/// let boxed: Box<dyn std::error::Error> = DefaultErrorFactory.make_error(&42);
///
/// assert_eq!(plain.to_string(), "Assertion failed");
/// assert_eq!(boxed.to_string(), "Assertion failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorFactory;

impl<Args, E> ErrorFactory<Args, E> for DefaultErrorFactory
where
    E: From<AssertionFailed>,
{
    #[inline]
    fn make_error(&self, _args: &Args) -> E {
        AssertionFailed.into()
    }
}
