//! Errors returned by the unsafe accessors of [`Maybe`](crate::maybe::Maybe) and
//! [`Outcome`](crate::outcome::Outcome).

use std::borrow::Cow;

use thiserror::Error;

/// Message used when an unsafe accessor is called without a caller-supplied message.
pub const DEFAULT_MESSAGE: &str = "value not found";

/// A value was requested from an [absent](crate::maybe::Maybe::Absent) container.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct NotFoundError {
  message: Cow<'static, str>,
}
impl NotFoundError {
  #[inline]
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }
}
impl Default for NotFoundError {
  #[inline]
  fn default() -> Self { Self::new(DEFAULT_MESSAGE) }
}
impl From<&'static str> for NotFoundError {
  #[inline]
  fn from(message: &'static str) -> Self { Self::new(message) }
}
impl From<String> for NotFoundError {
  #[inline]
  fn from(message: String) -> Self { Self::new(message) }
}

/// A value was requested from the wrong variant of an [outcome](crate::outcome::Outcome).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{message}")]
pub struct ValueError {
  message: Cow<'static, str>,
}
impl ValueError {
  #[inline]
  pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
    Self { message: message.into() }
  }

  #[inline]
  pub fn message(&self) -> &str { &self.message }
}
impl Default for ValueError {
  #[inline]
  fn default() -> Self { Self::new(DEFAULT_MESSAGE) }
}
impl From<&'static str> for ValueError {
  #[inline]
  fn from(message: &'static str) -> Self { Self::new(message) }
}
impl From<String> for ValueError {
  #[inline]
  fn from(message: String) -> Self { Self::new(message) }
}


/// Either kind of accessor error, for call sites that use both container types.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Error {
  #[error(transparent)]
  NotFound(#[from] NotFoundError),
  #[error(transparent)]
  Value(#[from] ValueError),
}
impl Error {
  #[inline]
  pub fn message(&self) -> &str {
    match self {
      Error::NotFound(e) => e.message(),
      Error::Value(e) => e.message(),
    }
  }
}

/// Emits a debug event for a failing unsafe accessor when the `tracing` feature is enabled.
macro_rules! trace_failure {
  ($accessor:literal, $error:expr) => {{
    let error = $error;
    #[cfg(feature = "tracing")] {
      tracing::debug!(accessor = $accessor, error = error.message(), "unsafe accessor called on the wrong variant");
    }
    error
  }};
}
pub(crate) use trace_failure;
