//! Threading a projection through sync and deferred source outputs.
//!
//! [`Settle`] is what lets one accessor serve both kinds of source. A sync
//! output (`Option`, `Result`, `Either`, [`Nullable`], [`Plain`], [`Shape`]) is
//! classified and projected inline, so the accessor returns the projected
//! value directly. A [`Deferred`] output instead returns a [`Continuation`]
//! future that classifies and projects once the wrapped future resolves.
//!
//! Sync sources therefore never produce a future and deferred sources always do.
//!
//! ```rust
//! use assertive::{deferred, IntoMaybe, Settle};
//! use futures::executor::block_on;
//!
//! let now = Settle::<()>::settle(Some(3), IntoMaybe::<Option<i32>>::new());
//! assert_eq!(now, Some(3));
//!
//! let later = Settle::<()>::settle(
//!     deferred(async { Some(3) }),
//!     IntoMaybe::<Option<i32>>::new(),
//! );
//! assert_eq!(block_on(later), Some(3));
//! ```

use std::{
    fmt,
    future::Future,
    marker::PhantomData,
    pin::Pin,
    task::{Context, Poll},
};

use either::Either;
use futures::FutureExt;

use crate::{
    classifier::Classify,
    nullable::{Nullable, Plain},
    projection::Projection,
    shape::Shape,
};

/// A source output that a projection can be applied to, now or later.
pub trait Settle<E>: Sized {
    /// Type of the value carried by the "has value" shapes
    type Unwrapped;

    /// What applying projection `P` yields: `P::Output` for sync outputs, a
    /// future of it for deferred ones.
    type Then<P: Projection<Self::Unwrapped, E>>;

    fn settle<P: Projection<Self::Unwrapped, E>>(self, projection: P) -> Self::Then<P>;
}

/// Type of the value a source output unwraps to.
pub type Unwrapped<S, E> = <S as Settle<E>>::Unwrapped;

/// Type an accessor returns for source output `S` and projection `P`.
pub type Then<S, E, P> = <S as Settle<E>>::Then<P>;

macro_rules! settle_inline {
    ($([$($param:ident),*] $ty:ty;)*) => {$(
        impl<$($param),*> Settle<E> for $ty
        where
            $ty: Classify<E>,
        {
            type Unwrapped = <$ty as Classify<E>>::Value;
            type Then<P: Projection<Self::Unwrapped, E>> = P::Output;

            #[inline]
            fn settle<P: Projection<Self::Unwrapped, E>>(self, projection: P) -> P::Output {
                projection.project(self.classify())
            }
        }
    )*};
}

settle_inline! {
    [T, C, E] Result<T, C>;
    [L, R, E] Either<L, R>;
    [T, E] Option<T>;
    [T, E] Nullable<T>;
    [T, E] Plain<T>;
    [T, C, E] Shape<T, C>;
}

/// A source output that resolves later.
///
/// Wraps any future whose output is itself classifiable. The future is pinned
/// on the heap so the continuation built on it is `Unpin`.
#[must_use = "futures do nothing unless polled"]
pub struct Deferred<Fut> {
    future: Pin<Box<Fut>>,
}

impl<Fut> Deferred<Fut>
where
    Fut: Future,
{
    pub fn new(future: Fut) -> Self {
        Deferred {
            future: Box::pin(future),
        }
    }
}

/// Mark a future as a deferred source output.
///
/// ```rust
/// use assertive::{assertion, deferred};
/// use futures::executor::block_on;
///
/// let find = assertion(|id: u32| deferred(async move { (id == 1).then_some("one") }));
///
/// assert_eq!(block_on(find.optional(1)), Some("one"));
/// assert_eq!(block_on(find.optional(2)), None);
/// ```
pub fn deferred<Fut>(future: Fut) -> Deferred<Fut>
where
    Fut: Future,
{
    Deferred::new(future)
}

impl<Fut> fmt::Debug for Deferred<Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Awaiting a `Deferred` directly yields the raw, unclassified output.
impl<Fut> Future for Deferred<Fut>
where
    Fut: Future,
{
    type Output = Fut::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Fut::Output> {
        self.future.poll_unpin(cx)
    }
}

impl<Fut, E> Settle<E> for Deferred<Fut>
where
    Fut: Future,
    Fut::Output: Classify<E>,
{
    type Unwrapped = <Fut::Output as Classify<E>>::Value;
    type Then<P: Projection<Self::Unwrapped, E>> = Continuation<Fut, P, E>;

    fn settle<P: Projection<Self::Unwrapped, E>>(self, projection: P) -> Continuation<Fut, P, E> {
        Continuation {
            future: self.future,
            projection: Some(projection),
            _error: PhantomData,
        }
    }
}

/// A projection attached to a deferred source output.
///
/// Resolves to the projection's output once the source future resolves. The
/// projection runs exactly once.
#[must_use = "futures do nothing unless polled"]
pub struct Continuation<Fut, P, E> {
    future: Pin<Box<Fut>>,
    projection: Option<P>,
    _error: PhantomData<fn() -> E>,
}

// `projection` is never pinned.
impl<Fut, P, E> Unpin for Continuation<Fut, P, E> {}

impl<Fut, P, E> fmt::Debug for Continuation<Fut, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("complete", &self.projection.is_none())
            .finish_non_exhaustive()
    }
}

impl<Fut, P, E> Future for Continuation<Fut, P, E>
where
    Fut: Future,
    Fut::Output: Classify<E>,
    P: Projection<<Fut::Output as Classify<E>>::Value, E>,
{
    type Output = P::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<P::Output> {
        let this = self.get_mut();
        let Some(projection) = this.projection.take() else {
            panic!("Continuation polled after completion");
        };
        match this.future.poll_unpin(cx) {
            Poll::Ready(output) => Poll::Ready(projection.project(output.classify())),
            Poll::Pending => {
                this.projection = Some(projection);
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::IntoMaybe;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Returns `Pending` once before resolving, waking itself.
    struct YieldOnce<T> {
        value: Option<T>,
        yielded: bool,
    }

    impl<T: Unpin> Future for YieldOnce<T> {
        type Output = T;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
            if !self.yielded {
                self.yielded = true;
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            Poll::Ready(self.value.take().expect("polled after completion"))
        }
    }

    struct Counting(Rc<Cell<u32>>);

    impl<T, E> Projection<T, E> for Counting {
        type Output = bool;

        fn project(self, shape: Shape<T, E>) -> bool {
            self.0.set(self.0.get() + 1);
            shape.is_present()
        }
    }

    #[test]
    fn test_sync_outputs_project_inline() {
        let projection = IntoMaybe::<Option<u8>>::new();
        let settled: Option<u8> = Settle::<()>::settle(Ok::<u8, ()>(1), projection);
        assert_eq!(settled, Some(1));

        let settled: Option<u8> =
            Settle::<()>::settle(Nullable::<u8>::null(), IntoMaybe::<Option<u8>>::new());
        assert_eq!(settled, None);
    }

    #[test]
    fn test_deferred_projects_after_pending() {
        let calls = Rc::new(Cell::new(0));
        let source = deferred(YieldOnce {
            value: Some(Some(4_u8)),
            yielded: false,
        });

        let continuation = Settle::<()>::settle(source, Counting(Rc::clone(&calls)));
        assert_eq!(calls.get(), 0);

        assert!(block_on(continuation));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_deferred_projection_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let continuation = Settle::<()>::settle(
            deferred(ready(None::<u8>)),
            Counting(Rc::clone(&calls)),
        );
        drop(continuation);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_deferred_awaits_raw_output() {
        let raw = block_on(deferred(ready(Err::<u8, &str>("raw"))));
        assert_eq!(raw, Err("raw"));
    }

    #[test]
    #[should_panic(expected = "Continuation polled after completion")]
    fn test_continuation_polled_twice_panics() {
        let mut continuation = Settle::<()>::settle(
            deferred(ready(Some(1_u8))),
            IntoMaybe::<Option<u8>>::new(),
        );
        assert_eq!(block_on(&mut continuation), Some(1));
        let _ = block_on(&mut continuation);
    }
}
