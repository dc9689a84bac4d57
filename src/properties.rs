// Property checks at runtime.
//
// `Property::def(name).for_all(arbitrary).such_that(predicate).check(size, tries)`
// draws `tries` samples from a size-indexed generator and runs them through
// proptest's `TestRunner`, which also shrinks any counterexample it finds.

use crate::config::PropertyConfig;
use crate::error::{Result, WorkshopError};
use crate::lesson::Transcript;
use proptest::strategy::Strategy;
use proptest::test_runner::{Config, TestCaseError, TestError, TestRunner};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::info;

pub const DEFAULT_SIZE: u32 = 100;
pub const DEFAULT_TRIES: u32 = 1_000;

/// Integers bounded by the generator size: size `n` draws from `-n..=n`.
pub fn arbitrary_integer() -> impl Fn(u32) -> RangeInclusive<i64> {
    |size| {
        let bound = i64::from(size);
        -bound..=bound
    }
}

/// Overflowing squares count as counterexamples.
pub fn square_is_non_negative(i: &i64) -> bool {
    i.checked_mul(*i).is_some_and(|square| square >= 0)
}

#[derive(Debug, Clone)]
pub struct Property {
    name: String,
}

impl Property {
    pub fn def(name: impl Into<String>) -> Self {
        Property { name: name.into() }
    }

    pub fn for_all<A, S>(self, arbitrary: A) -> ForAll<A>
    where
        A: Fn(u32) -> S,
        S: Strategy,
    {
        ForAll {
            name: self.name,
            arbitrary,
        }
    }
}

pub struct ForAll<A> {
    name: String,
    arbitrary: A,
}

impl<A> ForAll<A> {
    pub fn such_that<P>(self, predicate: P) -> Checker<A, P> {
        Checker {
            name: self.name,
            arbitrary: self.arbitrary,
            predicate,
        }
    }
}

pub struct Checker<A, P> {
    name: String,
    arbitrary: A,
    predicate: P,
}

impl<A, S, P> Checker<A, P>
where
    A: Fn(u32) -> S,
    S: Strategy,
    P: Fn(&S::Value) -> bool,
{
    pub fn check(&self, size: u32, tries: u32) -> CheckResult {
        let strategy = (self.arbitrary)(size);
        let mut runner = TestRunner::new(Config {
            cases: tries,
            failure_persistence: None,
            ..Config::default()
        });

        let outcome = runner.run(&strategy, |value| {
            if (self.predicate)(&value) {
                Ok(())
            } else {
                Err(TestCaseError::fail(format!("{value:?}")))
            }
        });

        let result = match outcome {
            Ok(()) => CheckResult::Satisfied {
                name: self.name.clone(),
                count: tries,
            },
            Err(TestError::Fail(_, sample)) => CheckResult::Falsified {
                name: self.name.clone(),
                sample: format!("{sample:?}"),
            },
            Err(TestError::Abort(reason)) => CheckResult::Erroneous {
                name: self.name.clone(),
                reason: reason.to_string(),
            },
        };
        info!(property = %self.name, size, tries, satisfied = result.is_satisfied(), "property checked");
        result
    }

    pub fn check_with_defaults(&self) -> CheckResult {
        self.check(DEFAULT_SIZE, DEFAULT_TRIES)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Satisfied { name: String, count: u32 },
    Falsified { name: String, sample: String },
    Erroneous { name: String, reason: String },
}

impl CheckResult {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckResult::Satisfied { .. })
    }

    pub fn assert_is_satisfied(&self) -> Result<()> {
        match self {
            CheckResult::Satisfied { .. } => Ok(()),
            CheckResult::Falsified { name, sample } => Err(WorkshopError::PropertyFailed {
                name: name.clone(),
                detail: format!("falsified with sample {sample}"),
            }),
            CheckResult::Erroneous { name, reason } => Err(WorkshopError::PropertyFailed {
                name: name.clone(),
                detail: reason.clone(),
            }),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Satisfied { name, count } => {
                write!(f, "{name}: OK, passed {count} tests.")
            }
            CheckResult::Falsified { name, sample } => {
                write!(f, "{name}: Falsified with sample {sample}.")
            }
            CheckResult::Erroneous { name, reason } => write!(f, "{name}: Errored: {reason}."),
        }
    }
}

pub fn lesson(config: &PropertyConfig, out: &Transcript) -> Result<()> {
    let result = Property::def("square(int) >= 0")
        .for_all(arbitrary_integer())
        .such_that(square_is_non_negative)
        .check(config.size, config.tries);
    out.say(result.to_string());
    result.assert_is_satisfied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_square_property_holds() {
        let result = Property::def("square(int) >= 0")
            .for_all(arbitrary_integer())
            .such_that(square_is_non_negative)
            .check(100, 1_000);

        assert_eq!(result.to_string(), "square(int) >= 0: OK, passed 1000 tests.");
        assert!(result.assert_is_satisfied().is_ok());
    }

    #[test]
    fn test_false_property_is_shrunk() {
        let result = Property::def("i < 50")
            .for_all(arbitrary_integer())
            .such_that(|i: &i64| *i < 50)
            .check(100, 1_000);

        // shrinking lands on the smallest counterexample
        assert_eq!(
            result,
            CheckResult::Falsified {
                name: "i < 50".to_string(),
                sample: "50".to_string(),
            }
        );
        assert!(matches!(
            result.assert_is_satisfied(),
            Err(WorkshopError::PropertyFailed { .. })
        ));
    }

    #[test]
    fn test_overflow_is_a_counterexample() {
        assert!(square_is_non_negative(&3_037_000_499));
        assert!(!square_is_non_negative(&i64::MAX));
    }

    #[test]
    fn test_arbitrary_integer_respects_size() {
        let range = arbitrary_integer()(7);
        assert_eq!(range, -7..=7);
    }

    #[test]
    fn test_lesson_output() {
        let out = Transcript::new();
        lesson(&PropertyConfig::default(), &out).unwrap();
        assert_eq!(out.lines(), vec!["square(int) >= 0: OK, passed 1000 tests."]);
    }

    #[test]
    fn test_check_with_defaults() {
        let result = Property::def("abs(i) >= 0")
            .for_all(arbitrary_integer())
            .such_that(|i: &i64| i.abs() >= 0)
            .check_with_defaults();
        assert!(result.is_satisfied());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1_000))]

        #[test]
        fn test_square_non_negative(i in -100i64..=100) {
            prop_assert!(i * i >= 0);
        }
    }

    #[quickcheck]
    fn square_of_small_int_is_non_negative(i: i16) -> bool {
        square_is_non_negative(&i64::from(i))
    }
}
