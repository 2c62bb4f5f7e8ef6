//! Success or failure values: a container that holds either a [success](Outcome::Success) value of
//! type `T` or a [failure](Outcome::Failure) value of type `E`.

use std::borrow::Cow;
use std::slice;

use crate::error::{trace_failure, ValueError};
use crate::maybe::Maybe;

/// Exactly one of a success value `T` or a failure value `E`.
///
/// [and](Self::and) and [and_then](Self::and_then) keep the failure type and pass the original failure
/// through; [or](Self::or) and [or_else](Self::or_else) keep the success type and may change the failure
/// type. The `expect`/`unwrap` family returns a [`ValueError`] on the wrong variant.
///
/// Ordering puts any `Success` before any `Failure`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Outcome<T, E> {
  Success(T),
  Failure(E),
}
use self::Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn success(value: T) -> Self { Success(value) }
  #[inline]
  pub const fn failure(error: E) -> Self { Failure(error) }


  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Success(_)) }
  #[inline]
  pub const fn is_failure(&self) -> bool { !self.is_success() }

  #[inline]
  pub fn is_success_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Success(value) => f(value),
      Failure(_) => false,
    }
  }
  #[inline]
  pub fn is_failure_and(&self, f: impl FnOnce(&E) -> bool) -> bool {
    match self {
      Success(_) => false,
      Failure(error) => f(error),
    }
  }


  /// Converts into the success value, discarding a failure.
  #[inline]
  pub fn to_maybe(self) -> Maybe<T> {
    match self {
      Success(value) => Maybe::Present(value),
      Failure(_) => Maybe::Absent,
    }
  }
  /// Converts into the failure value, discarding a success.
  #[inline]
  pub fn to_failure_maybe(self) -> Maybe<E> {
    match self {
      Success(_) => Maybe::Absent,
      Failure(error) => Maybe::Present(error),
    }
  }
  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(error),
    }
  }
  /// Iterates over the success value, if any.
  #[inline]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    let values: &[T] = match self {
      Success(value) => slice::from_ref(value),
      Failure(_) => &[],
    };
    values.iter()
  }


  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Success(value) = &self {
      f(value);
    }
    self
  }
  #[inline]
  pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Self {
    if let Failure(error) = &self {
      f(error);
    }
    self
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Success(value) => Success(f(value)),
      Failure(error) => Failure(error),
    }
  }
  #[inline]
  pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(error) => Failure(f(error)),
    }
  }
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Success(value) => f(value),
      Failure(_) => default,
    }
  }
  /// Maps the success value with `f`, or the failure value with `default`.
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Success(value) => f(value),
      Failure(error) => default(error),
    }
  }


  #[inline]
  pub fn expect(self, message: impl Into<Cow<'static, str>>) -> Result<T, ValueError> {
    match self {
      Success(value) => Ok(value),
      Failure(_) => Err(trace_failure!("Outcome::expect", ValueError::new(message))),
    }
  }
  #[inline]
  pub fn unwrap(self) -> Result<T, ValueError> {
    match self {
      Success(value) => Ok(value),
      Failure(_) => Err(trace_failure!("Outcome::unwrap", ValueError::default())),
    }
  }
  #[inline]
  pub fn expect_failure(self, message: impl Into<Cow<'static, str>>) -> Result<E, ValueError> {
    match self {
      Success(_) => Err(trace_failure!("Outcome::expect_failure", ValueError::new(message))),
      Failure(error) => Ok(error),
    }
  }
  #[inline]
  pub fn unwrap_failure(self) -> Result<E, ValueError> {
    match self {
      Success(_) => Err(trace_failure!("Outcome::unwrap_failure", ValueError::default())),
      Failure(error) => Ok(error),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Success(value) => value,
      Failure(_) => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Success(value) => value,
      Failure(error) => f(error),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(|_| T::default())
  }


  /// Returns `other` on success; passes the original failure through otherwise.
  #[inline]
  pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Success(_) => other,
      Failure(error) => Failure(error),
    }
  }
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Success(value) => f(value),
      Failure(error) => Failure(error),
    }
  }
  /// Passes the original success through; returns `other`, which may have a different failure type,
  /// otherwise.
  #[inline]
  pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(_) => other,
    }
  }
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Success(value) => Success(value),
      Failure(error) => f(error),
    }
  }


  /// Pairs two success values; the first failure, from left to right, wins.
  #[inline]
  pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
    self.zip_with(other, |a, b| (a, b))
  }
  #[inline]
  pub fn zip_with<U, V>(self, other: Outcome<U, E>, f: impl FnOnce(T, U) -> V) -> Outcome<V, E> {
    match (self, other) {
      (Success(a), Success(b)) => Success(f(a, b)),
      (Failure(error), _) | (Success(_), Failure(error)) => Failure(error),
    }
  }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> Outcome<T, E> {
    match self {
      Success(inner) => inner,
      Failure(error) => Failure(error),
    }
  }
}

impl<T, E> Outcome<Maybe<T>, E> {
  /// `Success(Absent)` becomes `Absent`, `Success(Present(v))` becomes `Present(Success(v))`, and
  /// `Failure(e)` becomes `Present(Failure(e))`.
  #[inline]
  pub fn transpose(self) -> Maybe<Outcome<T, E>> {
    match self {
      Success(Maybe::Present(value)) => Maybe::Present(Success(value)),
      Success(Maybe::Absent) => Maybe::Absent,
      Failure(error) => Maybe::Present(Failure(error)),
    }
  }
}


/// Removes one level of nesting. An outer failure wins; otherwise the inner outcome is returned as-is.
#[inline]
pub fn flatten<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> { outcome.flatten() }

/// Turns an `Outcome<Maybe<T>, E>` into a `Maybe<Outcome<T, E>>`.
#[inline]
pub fn transpose<T, E>(outcome: Outcome<Maybe<T>, E>) -> Maybe<Outcome<T, E>> { outcome.transpose() }


impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Success(value),
      Err(error) => Failure(error),
    }
  }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self {
    match outcome {
      Success(value) => Ok(value),
      Failure(error) => Err(error),
    }
  }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { Option::<T>::from(self.to_maybe()).into_iter() }
}
impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
