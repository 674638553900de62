//! Raw values at the source boundary.
//!
//! A source that returns a bare value rather than a container wraps it in
//! [`Nullable`] (may be null) or [`Plain`] (never null), so the classifier can
//! tell it apart from an optional container.

/// A raw value that may be null.
///
/// Classifies as [`Shape::Nullish`](crate::Shape::Nullish) when null and as
/// [`Shape::Plain`](crate::Shape::Plain) otherwise.
///
/// ```rust
/// use assertive::Nullable;
///
/// let user = Nullable::value("ada");
/// let nobody: Nullable<&str> = Nullable::null();
///
/// assert!(!user.is_null());
/// assert!(nobody.is_null());
/// assert_eq!(Nullable::from(Some(1)).into_inner(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    /// A non-null raw value.
    #[inline]
    pub const fn value(value: T) -> Self {
        Nullable(Some(value))
    }

    /// The null value.
    #[inline]
    pub const fn null() -> Self {
        Nullable(None)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::null()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable(value)
    }
}

/// A raw value that is never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Plain<T>(pub T);

impl<T> Plain<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}
