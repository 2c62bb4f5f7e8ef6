use proptest::prelude::*;

use outcome_core::{maybe, outcome, Maybe, Outcome};

fn any_maybe() -> impl Strategy<Value=Maybe<i32>> {
  prop_oneof![
    any::<i32>().prop_map(Maybe::Present),
    Just(Maybe::Absent),
  ]
}

fn any_outcome() -> impl Strategy<Value=Outcome<i32, String>> {
  prop_oneof![
    any::<i32>().prop_map(Outcome::Success),
    "[a-z]{0,8}".prop_map(Outcome::Failure),
  ]
}

fn half(x: i32) -> i32 { x / 2 }
fn negate(x: i32) -> i32 { x.wrapping_neg() }

fn halve_if_even(x: i32) -> Maybe<i32> {
  if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Absent }
}
fn checked_double(x: i32) -> Outcome<i32, String> {
  match x.checked_mul(2) {
    Some(v) => Outcome::Success(v),
    None => Outcome::Failure(format!("{} overflows", x)),
  }
}

proptest! {
  #[test]
  fn maybe_map_identity(m in any_maybe()) {
    prop_assert_eq!(m.map(|x| x), m);
  }

  #[test]
  fn outcome_map_identity(o in any_outcome()) {
    prop_assert_eq!(o.clone().map(|x| x), o);
  }

  #[test]
  fn maybe_map_composition(m in any_maybe()) {
    prop_assert_eq!(m.map(half).map(negate), m.map(|x| negate(half(x))));
  }

  #[test]
  fn outcome_map_composition(o in any_outcome()) {
    prop_assert_eq!(o.clone().map(half).map(negate), o.map(|x| negate(half(x))));
  }

  #[test]
  fn maybe_left_identity(x in any::<i32>()) {
    prop_assert_eq!(Maybe::present(x).and_then(halve_if_even), halve_if_even(x));
  }

  #[test]
  fn outcome_left_identity(x in any::<i32>()) {
    prop_assert_eq!(Outcome::<i32, String>::success(x).and_then(checked_double), checked_double(x));
  }

  #[test]
  fn maybe_flatten_is_bind_with_identity(inner in any_maybe(), present in any::<bool>()) {
    let nested = if present { Maybe::Present(inner) } else { Maybe::Absent };
    prop_assert_eq!(maybe::flatten(nested), nested.and_then(|m| m));
  }

  #[test]
  fn outcome_flatten_is_bind_with_identity(inner in any_outcome(), outer_failure in proptest::option::of("[a-z]{1,4}")) {
    let nested = match outer_failure {
      Some(e) => Outcome::Failure(e),
      None => Outcome::Success(inner),
    };
    prop_assert_eq!(outcome::flatten(nested.clone()), nested.and_then(|o| o));
  }

  #[test]
  fn unzip_inverts_zip(a in any::<i32>(), b in any::<i32>(), right in any_maybe()) {
    prop_assert_eq!(maybe::unzip(Maybe::present(a).zip(Maybe::present(b))), (Maybe::Present(a), Maybe::Present(b)));
    prop_assert_eq!(maybe::unzip(Maybe::<i32>::absent().zip(right)), (Maybe::Absent, Maybe::Absent));
  }

  #[test]
  fn transpose_round_trips_from_maybe(m in proptest::option::of(any_outcome())) {
    let m: Maybe<Outcome<i32, String>> = m.into();
    prop_assert_eq!(outcome::transpose(maybe::transpose(m.clone())), m);
  }

  #[test]
  fn transpose_round_trips_from_outcome(o in any_outcome(), absent in any::<bool>()) {
    let o: Outcome<Maybe<i32>, String> = if absent { o.map(|_| Maybe::Absent) } else { o.map(Maybe::Present) };
    prop_assert_eq!(maybe::transpose(outcome::transpose(o.clone())), o);
  }

  #[test]
  fn xor_is_commutative(a in any_maybe(), b in any_maybe()) {
    prop_assert_eq!(a.xor(b), b.xor(a));
  }

  #[test]
  fn xor_keeps_exactly_one_present(a in any_maybe(), b in any_maybe()) {
    let expected = match (a, b) {
      (Maybe::Present(x), Maybe::Absent) | (Maybe::Absent, Maybe::Present(x)) => Maybe::Present(x),
      _ => Maybe::Absent,
    };
    prop_assert_eq!(a.xor(b), expected);
  }

  #[test]
  fn xor_with_self_is_absent(a in any_maybe()) {
    prop_assert_eq!(a.xor(a), Maybe::Absent);
  }

  #[test]
  fn absent_and_short_circuits(other in any_maybe()) {
    prop_assert_eq!(Maybe::<i32>::absent().and(other), Maybe::Absent);
  }

  #[test]
  fn failure_and_keeps_original_failure(e in "[a-z]{1,8}", other in any_outcome()) {
    prop_assert_eq!(Outcome::<i32, String>::failure(e.clone()).and(other), Outcome::Failure(e));
  }
}
