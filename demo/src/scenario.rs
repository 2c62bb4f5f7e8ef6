use tracing::trace;

use outcome_core::error::Error as AccessorError;
use outcome_core::{maybe, outcome, Maybe, NotFoundError, Outcome};

/// Result of running one scenario.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Report {
  pub name: &'static str,
  pub summary: String,
}

/// A scenario produced a value other than the one it was built to demonstrate.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
  #[error("Scenario '{name}' produced '{actual}', expected '{expected}'")]
  Mismatch { name: &'static str, expected: String, actual: String },
  #[error("Scenario '{name}' failed on an unsafe accessor: {source}")]
  Accessor { name: &'static str, source: AccessorError },
}

/// Runs the combinator scenarios over a seed value.
pub struct Scenarios {
  seed: i64,
}
impl Scenarios {
  #[inline]
  pub fn new(seed: i64) -> Self { Self { seed } }

  pub fn run(&self) -> Result<Vec<Report>, ScenarioError> {
    let reports = vec![
      self.map_then_get()?,
      self.absent_fallbacks()?,
      self.transpose_maybe()?,
      self.flatten_outcome()?,
      self.xor()?,
      self.map_failure()?,
    ];
    Ok(reports)
  }

  fn map_then_get(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "map then get";
    let value = Maybe::present(self.seed)
      .inspect(|v| trace!(v, "doubling"))
      .map(|v| v * 2)
      .get()
      .map_err(|e| accessor(NAME, e))?;
    check(NAME, self.seed * 2, value)
  }

  fn absent_fallbacks(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "absent fallbacks";
    let absent = Maybe::<i64>::absent();
    let default = absent.get_or_default(self.seed);
    let error = absent.get().err();
    check(NAME, (self.seed, Some(NotFoundError::default())), (default, error))
  }

  fn transpose_maybe(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "transpose";
    let success = maybe::transpose(Maybe::present(Outcome::<i64, &str>::success(self.seed)));
    let failure = maybe::transpose(Maybe::present(Outcome::<i64, &str>::failure("e")));
    let absent = maybe::transpose(Maybe::<Outcome<i64, &str>>::absent());
    check(
      NAME,
      (Outcome::success(Maybe::present(self.seed)), Outcome::failure("e"), Outcome::success(Maybe::absent())),
      (success, failure, absent),
    )
  }

  fn flatten_outcome(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "flatten";
    let inner = outcome::flatten(Outcome::<Outcome<i64, &str>, &str>::success(Outcome::failure("inner")));
    let outer = outcome::flatten(Outcome::<Outcome<i64, &str>, &str>::failure("outer"));
    let inner = inner.expect_failure("inner failure").map_err(|e| accessor(NAME, e))?;
    let outer = outer.expect_failure("outer failure").map_err(|e| accessor(NAME, e))?;
    check(NAME, ("inner", "outer"), (inner, outer))
  }

  fn xor(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "xor";
    let both = Maybe::present(self.seed).xor(Maybe::present(self.seed * 2));
    let one = Maybe::present(self.seed).xor(Maybe::absent());
    check(NAME, (Maybe::absent(), Maybe::present(self.seed)), (both, one))
  }

  fn map_failure(&self) -> Result<Report, ScenarioError> {
    const NAME: &str = "map failure";
    let success = Outcome::<i64, &str>::success(self.seed).map_failure(str::len);
    let failure = Outcome::<i64, &str>::failure("error").map_failure(str::len);
    check(NAME, (Outcome::success(self.seed), Outcome::failure(5)), (success, failure))
  }
}

fn check<T: PartialEq + std::fmt::Debug>(name: &'static str, expected: T, actual: T) -> Result<Report, ScenarioError> {
  if expected == actual {
    Ok(Report { name, summary: format!("{:?}", actual) })
  } else {
    Err(ScenarioError::Mismatch { name, expected: format!("{:?}", expected), actual: format!("{:?}", actual) })
  }
}

#[inline]
fn accessor(name: &'static str, error: impl Into<AccessorError>) -> ScenarioError {
  ScenarioError::Accessor { name, source: error.into() }
}
