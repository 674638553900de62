/// Which capability a [`Shape`] was classified from.
///
/// Raw values (nullable or plain) carry no container, optionals carry zero or
/// one value and results carry a value or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// A raw value, either null or plain.
    Raw,
    /// An optional container.
    Optional,
    /// A success/failure container.
    Result,
}

/// The classified shape of a source computation's output.
///
/// `Shape` is to this crate what `Option` is to nullable values: every value a
/// source can return is classified into exactly one of these variants, and
/// every accessor projects from here.
///
/// `Nullish`, `OptionalAbsent` and `ResultFailure` are the three forms of
/// "no value". `Plain`, `OptionalPresent` and `ResultSuccess` are the three
/// forms of "has value".
///
/// # Examples
///
/// ```rust
/// use assertive::Shape;
///
/// let found: Shape<i32, &str> = Shape::OptionalPresent(42);
/// let failed: Shape<i32, &str> = Shape::ResultFailure("missing");
///
/// assert!(found.is_present());
/// assert_eq!(failed.error(), Some("missing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape<T, E> {
    /// A raw null value.
    Nullish,
    /// An optional container holding a value.
    OptionalPresent(T),
    /// An empty optional container.
    OptionalAbsent,
    /// A result container holding a success value.
    ResultSuccess(T),
    /// A result container holding an error.
    ResultFailure(E),
    /// A raw, non-null value.
    Plain(T),
}

impl<T, E> Shape<T, E> {
    /// Returns `true` if the shape carries a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// assert!(Shape::<i32, ()>::Plain(1).is_present());
    /// assert!(Shape::<i32, ()>::ResultSuccess(1).is_present());
    /// assert!(!Shape::<i32, ()>::Nullish.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(
            self,
            Shape::Plain(_) | Shape::OptionalPresent(_) | Shape::ResultSuccess(_)
        )
    }

    /// Returns `true` if the shape carries no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// assert!(Shape::<i32, ()>::OptionalAbsent.is_absent());
    /// assert!(Shape::<i32, &str>::ResultFailure("boom").is_absent());
    /// assert!(!Shape::<i32, ()>::OptionalPresent(3).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the capability the shape was classified from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::{Origin, Shape};
    ///
    /// assert_eq!(Shape::<i32, ()>::Nullish.origin(), Origin::Raw);
    /// assert_eq!(Shape::<i32, ()>::OptionalAbsent.origin(), Origin::Optional);
    /// assert_eq!(Shape::<i32, ()>::ResultSuccess(1).origin(), Origin::Result);
    /// ```
    #[inline]
    pub const fn origin(&self) -> Origin {
        match self {
            Shape::Nullish | Shape::Plain(_) => Origin::Raw,
            Shape::OptionalPresent(_) | Shape::OptionalAbsent => Origin::Optional,
            Shape::ResultSuccess(_) | Shape::ResultFailure(_) => Origin::Result,
        }
    }

    /// Converts from `Shape<T, E>` to `Option<T>`, discarding any carried error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// assert_eq!(Shape::<i32, &str>::ResultSuccess(7).value(), Some(7));
    /// assert_eq!(Shape::<i32, &str>::ResultFailure("gone").value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Shape::Plain(v) | Shape::OptionalPresent(v) | Shape::ResultSuccess(v) => Some(v),
            Shape::Nullish | Shape::OptionalAbsent | Shape::ResultFailure(_) => None,
        }
    }

    /// Alias for [`Shape::value`], named after `Result::ok`'s sibling conversions.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value()
    }

    /// Returns the carried error, if the shape is a `ResultFailure`.
    ///
    /// Only result containers carry errors; every other absent form yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// assert_eq!(Shape::<i32, &str>::ResultFailure("gone").error(), Some("gone"));
    /// assert_eq!(Shape::<i32, &str>::Nullish.error(), None);
    /// ```
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Shape::ResultFailure(e) => Some(e),
            _ => None,
        }
    }

    /// Converts into a `Result`, computing the error from a closure when none is carried.
    ///
    /// A carried error always wins over the closure, which is only called for
    /// `Nullish` and `OptionalAbsent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// let carried: Shape<i32, &str> = Shape::ResultFailure("carried");
    /// assert_eq!(carried.into_result_or_else(|| "made"), Err("carried"));
    ///
    /// let absent: Shape<i32, &str> = Shape::OptionalAbsent;
    /// assert_eq!(absent.into_result_or_else(|| "made"), Err("made"));
    /// ```
    #[inline]
    pub fn into_result_or_else<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Shape::Plain(v) | Shape::OptionalPresent(v) | Shape::ResultSuccess(v) => Ok(v),
            Shape::ResultFailure(e) => Err(e),
            Shape::Nullish | Shape::OptionalAbsent => Err(f()),
        }
    }

    /// Maps the carried value, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// let x: Shape<i32, ()> = Shape::OptionalPresent(2);
    /// assert_eq!(x.map(|v| v * 2), Shape::OptionalPresent(4));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Shape<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Shape::Nullish => Shape::Nullish,
            Shape::OptionalPresent(v) => Shape::OptionalPresent(f(v)),
            Shape::OptionalAbsent => Shape::OptionalAbsent,
            Shape::ResultSuccess(v) => Shape::ResultSuccess(f(v)),
            Shape::ResultFailure(e) => Shape::ResultFailure(e),
            Shape::Plain(v) => Shape::Plain(f(v)),
        }
    }

    /// Maps the carried error, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assertive::Shape;
    ///
    /// let x: Shape<i32, &str> = Shape::ResultFailure("bad");
    /// assert_eq!(x.map_err(str::len), Shape::ResultFailure(3));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Shape<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Shape::Nullish => Shape::Nullish,
            Shape::OptionalPresent(v) => Shape::OptionalPresent(v),
            Shape::OptionalAbsent => Shape::OptionalAbsent,
            Shape::ResultSuccess(v) => Shape::ResultSuccess(v),
            Shape::ResultFailure(e) => Shape::ResultFailure(f(e)),
            Shape::Plain(v) => Shape::Plain(v),
        }
    }

    /// Converts from `&Shape<T, E>` to `Shape<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Shape<&T, &E> {
        match self {
            Shape::Nullish => Shape::Nullish,
            Shape::OptionalPresent(v) => Shape::OptionalPresent(v),
            Shape::OptionalAbsent => Shape::OptionalAbsent,
            Shape::ResultSuccess(v) => Shape::ResultSuccess(v),
            Shape::ResultFailure(e) => Shape::ResultFailure(e),
            Shape::Plain(v) => Shape::Plain(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(value: i32) -> [Shape<i32, &'static str>; 6] {
        [
            Shape::Nullish,
            Shape::OptionalPresent(value),
            Shape::OptionalAbsent,
            Shape::ResultSuccess(value),
            Shape::ResultFailure("failure"),
            Shape::Plain(value),
        ]
    }

    #[test]
    fn test_presence_partitions_variants() {
        let present: Vec<_> = all(1).into_iter().filter(Shape::is_present).collect();
        assert_eq!(
            present,
            vec![
                Shape::OptionalPresent(1),
                Shape::ResultSuccess(1),
                Shape::Plain(1)
            ]
        );

        for shape in all(1) {
            assert_ne!(shape.is_present(), shape.is_absent());
        }
    }

    #[test]
    fn test_present_forms_unwrap_to_same_value() {
        for shape in all(9).into_iter().filter(Shape::is_present) {
            assert_eq!(shape.value(), Some(9));
        }
    }

    #[test]
    fn test_only_result_failure_carries_error() {
        let errors: Vec<_> = all(0).into_iter().filter_map(Shape::error).collect();
        assert_eq!(errors, vec!["failure"]);
    }

    #[test]
    fn test_into_result_or_else_calls_closure_only_without_carried_error() {
        let mut calls = 0;
        for shape in all(5) {
            let _ = shape.into_result_or_else(|| {
                calls += 1;
                "synthesized"
            });
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_map_keeps_origin() {
        for shape in all(3) {
            let origin = shape.origin();
            assert_eq!(shape.map(|v| v + 1).origin(), origin);
            assert_eq!(shape.map_err(str::len).origin(), origin);
        }
    }

    #[test]
    fn test_as_ref() {
        let shape: Shape<String, String> = Shape::ResultFailure("oops".to_string());
        assert_eq!(shape.as_ref().error().map(String::as_str), Some("oops"));
        assert!(shape.as_ref().is_absent());
    }
}
