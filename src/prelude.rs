//! Commonly used imports
//!
//! Use `use assertive::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Assertion, AssertionFailed, Shape};

// Boundary wrappers
pub use crate::{deferred, Deferred, Nullable, Plain};

// Capabilities
pub use crate::{Classify, Maybe, Outcome};

// Construction
pub use crate::assertion;
