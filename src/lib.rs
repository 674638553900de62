//! # Assertive: one access surface for absent, optional and fallible lookups
//!
//! Wrap any lookup whose result may be null, an `Option`, a `Result` or an
//! `Either` (returned directly or from a future) and get three uniform
//! accessors over it.
//!
//! ## Core Pieces
//!
//! - **[`Shape`]**: the six classified forms of a source output
//! - **[`Classify`]**: assigns a source output its [`Shape`]
//! - **[`Assertion`]**: the direct, optional and result accessors over a source
//!
//! ## Key Features
//!
//! - **Uniform**: null, `None` and `Err` all count as "no value"
//! - **Carried errors win**: a source's own error is returned unchanged
//! - **Async transparent**: sync sources return values, [`Deferred`] sources return futures
//!
//! ## Example
//!
//! ```
//! use assertive::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct CustomError(&'static str);
//!
//! let validate = assertion(|id: u32| {
//!     if id == 1 { Ok("bar") } else { Err(CustomError("Validation error")) }
//! })
//! .with_error_factory(|_: &u32| CustomError("Failure"));
//!
//! assert_eq!(validate.assert(1), "bar");
//! assert_eq!(validate.optional(2), None);
//! assert_eq!(validate.result(2), Err(CustomError("Validation error")));
//! ```
//!
//! ## Common Functions
//!
//! **Building:**
//! - [`assertion(source)`] - assertion with the default "Assertion failed" error
//! - [`Assertion::with_error_factory`] - build errors for absent values from the arguments
//! - [`deferred(future)`] - mark a source output as resolving later
//!
//! **Accessing:**
//! - [`Assertion::assert`] - the value, or a panic carrying the error
//! - [`Assertion::optional`] - `Option` of the value
//! - [`Assertion::result`] - `Result` of the value

mod accessor;
mod capability;
mod classifier;
mod error;
mod nullable;
mod projection;
mod settle;
mod shape;

pub mod prelude;

pub use accessor::*;
pub use capability::*;
pub use classifier::*;
pub use error::*;
pub use nullable::*;
pub use projection::*;
pub use settle::*;
pub use shape::*;
