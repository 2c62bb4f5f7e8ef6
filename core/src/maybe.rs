//! Optional values: a container that is either [present](Maybe::Present) with a value, or
//! [absent](Maybe::Absent).

use std::borrow::Cow;
use std::slice;

use crate::error::{NotFoundError, trace_failure};
use crate::outcome::Outcome;

/// Zero or one value of type `T`. Absence is a variant, never a sentinel value.
///
/// Every combinator consumes `self` and returns a new container. Operations that extract the value
/// without a fallback ([get](Self::get), [expect](Self::expect), [unwrap](Self::unwrap)) return a
/// [`NotFoundError`] when the container is absent.
///
/// Ordering puts `Absent` before any `Present` value.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Maybe<T> {
  Absent,
  Present(T),
}
use self::Maybe::{Absent, Present};

impl<T> Default for Maybe<T> {
  #[inline]
  fn default() -> Self { Absent }
}

impl<T> Maybe<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Present(value) }
  #[inline]
  pub const fn absent() -> Self { Absent }


  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { !self.is_present() }

  /// Returns `f(value)` if present; `false` without calling `f` if absent.
  #[inline]
  pub fn is_present_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Present(value) => f(value),
      Absent => false,
    }
  }
  /// Returns `f(value)` if present; `true` without calling `f` if absent.
  #[inline]
  pub fn is_absent_or(&self, f: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Present(value) => f(value),
      Absent => true,
    }
  }


  /// Returns the value, or a [`NotFoundError`] with the default message if absent.
  #[inline]
  pub fn get(self) -> Result<T, NotFoundError> {
    match self {
      Present(value) => Ok(value),
      Absent => Err(trace_failure!("Maybe::get", NotFoundError::default())),
    }
  }
  /// Returns the value, or a [`NotFoundError`] with `message` if absent.
  ///
  /// Prefer the total accessors; use this only where an absent value is a broken invariant.
  #[inline]
  pub fn expect(self, message: impl Into<Cow<'static, str>>) -> Result<T, NotFoundError> {
    match self {
      Present(value) => Ok(value),
      Absent => Err(trace_failure!("Maybe::expect", NotFoundError::new(message))),
    }
  }
  /// Same as [get](Self::get), except that a failure is logged under the `Maybe::unwrap` accessor name.
  #[inline]
  pub fn unwrap(self) -> Result<T, NotFoundError> {
    match self {
      Present(value) => Ok(value),
      Absent => Err(trace_failure!("Maybe::unwrap", NotFoundError::default())),
    }
  }

  #[inline]
  pub fn get_or_default(self, default: T) -> T { self.unwrap_or(default) }
  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Present(value) => value,
      Absent => default,
    }
  }
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Present(value) => value,
      Absent => f(),
    }
  }
  #[inline]
  pub fn unwrap_or_default(self) -> T where T: Default {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Present(value) => Present(f(value)),
      Absent => Absent,
    }
  }
  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => f(value),
      Absent => default,
    }
  }
  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Present(value) => f(value),
      Absent => default(),
    }
  }

  /// Calls `f` with a reference to the value if present, then returns `self` unchanged.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Present(value) = &self {
      f(value);
    }
    self
  }


  /// Converts into a sequence of zero or one elements.
  #[inline]
  pub fn to_sequence(self) -> Vec<T> {
    match self {
      Present(value) => vec![value],
      Absent => Vec::new(),
    }
  }
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    match self {
      Present(value) => slice::from_ref(value),
      Absent => &[],
    }
  }
  #[inline]
  pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }
  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Present(value) => Present(value),
      Absent => Absent,
    }
  }


  /// `Present(v)` becomes `Success(v)`; `Absent` becomes `Failure(error)`.
  #[inline]
  pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Present(value) => Outcome::Success(value),
      Absent => Outcome::Failure(error),
    }
  }
  /// Like [to_outcome](Self::to_outcome), but the error is only created when absent.
  #[inline]
  pub fn to_outcome_else<E>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
    match self {
      Present(value) => Outcome::Success(value),
      Absent => Outcome::Failure(f()),
    }
  }


  /// Returns `other` if present, `Absent` otherwise. `other` is already evaluated by the caller.
  #[inline]
  pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
    match self {
      Present(_) => other,
      Absent => Absent,
    }
  }
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Present(value) => f(value),
      Absent => Absent,
    }
  }
  #[inline]
  pub fn or(self, other: Maybe<T>) -> Maybe<T> {
    match self {
      Present(_) => self,
      Absent => other,
    }
  }
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
    match self {
      Present(_) => self,
      Absent => f(),
    }
  }
  /// Returns whichever of `self` and `other` is present when exactly one is, `Absent` otherwise.
  #[inline]
  pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
    match (self, other) {
      (a @ Present(_), Absent) => a,
      (Absent, b @ Present(_)) => b,
      _ => Absent,
    }
  }


  #[inline]
  pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
    match (self, other) {
      (Present(a), Present(b)) => Present((a, b)),
      _ => Absent,
    }
  }
  #[inline]
  pub fn zip_with<U, V>(self, other: Maybe<U>, f: impl FnOnce(T, U) -> V) -> Maybe<V> {
    match (self, other) {
      (Present(a), Present(b)) => Present(f(a, b)),
      _ => Absent,
    }
  }
}

impl<T, U> Maybe<(T, U)> {
  #[inline]
  pub fn unzip(self) -> (Maybe<T>, Maybe<U>) {
    match self {
      Present((a, b)) => (Present(a), Present(b)),
      Absent => (Absent, Absent),
    }
  }
}

impl<T> Maybe<Maybe<T>> {
  #[inline]
  pub fn flatten(self) -> Maybe<T> {
    match self {
      Present(inner) => inner,
      Absent => Absent,
    }
  }
}

impl<T, E> Maybe<Outcome<T, E>> {
  /// `Absent` becomes `Success(Absent)`, `Present(Success(v))` becomes `Success(Present(v))`, and
  /// `Present(Failure(e))` becomes `Failure(e)`.
  #[inline]
  pub fn transpose(self) -> Outcome<Maybe<T>, E> {
    match self {
      Present(Outcome::Success(value)) => Outcome::Success(Present(value)),
      Present(Outcome::Failure(error)) => Outcome::Failure(error),
      Absent => Outcome::Success(Absent),
    }
  }
}

impl<T: Clone> Maybe<&T> {
  #[inline]
  pub fn cloned(self) -> Maybe<T> { self.map(T::clone) }
}
impl<T: Copy> Maybe<&T> {
  #[inline]
  pub fn copied(self) -> Maybe<T> { self.map(|value| *value) }
}


/// Splits a present pair into two present values, or two absent ones.
#[inline]
pub fn unzip<T, U>(maybe: Maybe<(T, U)>) -> (Maybe<T>, Maybe<U>) { maybe.unzip() }

/// Removes one level of nesting; absent if either level is absent.
#[inline]
pub fn flatten<T>(maybe: Maybe<Maybe<T>>) -> Maybe<T> { maybe.flatten() }

/// Turns a `Maybe<Outcome<T, E>>` into an `Outcome<Maybe<T>, E>`.
#[inline]
pub fn transpose<T, E>(maybe: Maybe<Outcome<T, E>>) -> Outcome<Maybe<T>, E> { maybe.transpose() }


impl<T> From<T> for Maybe<T> {
  #[inline]
  fn from(value: T) -> Self { Present(value) }
}
impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => Present(value),
      None => Absent,
    }
  }
}
impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self {
    match maybe {
      Present(value) => Some(value),
      Absent => None,
    }
  }
}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { Option::<T>::from(self).into_iter() }
}
impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
