//! Immutable optional and success/failure containers with a closed set of combinators.
//!
//! [`Maybe`] holds zero or one value, [`Outcome`] holds either a success or a failure value. Neither
//! type has an accessor that panics: the unsafe accessors return [`NotFoundError`] or [`ValueError`]
//! when called on the wrong variant.

pub mod error;
pub mod maybe;
pub mod outcome;

pub mod app;

pub use error::{NotFoundError, ValueError};
pub use maybe::Maybe;
pub use outcome::Outcome;
