use std::cell::Cell;

use outcome_core::error::Error;
use outcome_core::{maybe, outcome, Maybe, NotFoundError, Outcome, ValueError};

#[test]
fn present_map_get() {
  assert_eq!(Maybe::present(5).map(|x| x * 2).get(), Ok(10));
}

#[test]
fn absent_default_and_get() {
  assert_eq!(Maybe::<i32>::absent().get_or_default(10), 10);
  let error = Maybe::<i32>::absent().get().unwrap_err();
  assert_eq!(error, NotFoundError::new("value not found"));
  assert_eq!(error.to_string(), "value not found");
}

#[test]
fn transpose_maybe_of_outcome() {
  assert_eq!(maybe::transpose(Maybe::present(Outcome::<i32, &str>::success(5))), Outcome::success(Maybe::present(5)));
  assert_eq!(maybe::transpose(Maybe::present(Outcome::<i32, &str>::failure("e"))), Outcome::failure("e"));
  assert_eq!(maybe::transpose(Maybe::<Outcome<i32, &str>>::absent()), Outcome::success(Maybe::absent()));
}

#[test]
fn flatten_nested_outcome() {
  assert_eq!(outcome::flatten(Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"))), Outcome::failure("inner"));
  assert_eq!(outcome::flatten(Outcome::<Outcome<i32, &str>, &str>::failure("outer")), Outcome::failure("outer"));
}

#[test]
fn xor_scenarios() {
  assert_eq!(Maybe::present(5).xor(Maybe::present(10)), Maybe::absent());
  assert_eq!(Maybe::present(5).xor(Maybe::absent()), Maybe::present(5));
}

#[test]
fn map_failure_scenarios() {
  assert_eq!(Outcome::<i32, &str>::success(5).map_failure(str::len), Outcome::success(5));
  assert_eq!(Outcome::<i32, &str>::failure("error").map_failure(str::len), Outcome::failure(5));
}

#[test]
fn eager_and_lazy_arguments() {
  let evaluated = Cell::new(0);
  let make = || {
    evaluated.set(evaluated.get() + 1);
    Maybe::present(1)
  };
  // `and` and `zip` take values the caller already built.
  let _ = Maybe::<i32>::absent().and(make());
  let _ = Maybe::<i32>::absent().zip(make());
  assert_eq!(evaluated.get(), 2);
  // `and_then` and `or_else` only call their continuation when needed.
  let _ = Maybe::<i32>::absent().and_then(|_| make());
  let _ = Maybe::present(1).or_else(make);
  assert_eq!(evaluated.get(), 2);
}

#[test]
fn accessor_errors_propagate_with_question_mark() {
  fn sum(a: Maybe<i32>, b: Outcome<i32, &str>) -> Result<i32, Error> {
    Ok(a.get()? + b.expect("b must succeed")?)
  }
  assert_eq!(sum(Maybe::present(1), Outcome::success(2)), Ok(3));
  assert_eq!(sum(Maybe::absent(), Outcome::success(2)), Err(Error::NotFound(NotFoundError::default())));
  assert_eq!(sum(Maybe::present(1), Outcome::failure("no")), Err(Error::Value(ValueError::new("b must succeed"))));
}

#[test]
fn conversions_between_containers() {
  assert_eq!(Maybe::present(5).to_outcome("missing").to_maybe(), Maybe::present(5));
  assert_eq!(Maybe::<i32>::absent().to_outcome("missing").to_failure_maybe(), Maybe::present("missing"));
  let as_std: Result<i32, &str> = Outcome::<i32, &str>::success(5).into();
  assert_eq!(as_std, Ok(5));
}

#[test]
fn containers_are_send_and_sync() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Maybe<String>>();
  assert_send_sync::<Outcome<String, NotFoundError>>();
}
