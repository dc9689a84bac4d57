// Applicative validation: run every check, collect every failure.
//
// Unlike `Result` chained with `?`, combining validations does not stop at the
// first error. `combine(a, b).ap(f)` applies `f` only when all inputs are
// valid, and otherwise returns all their errors in argument order.

use crate::collections::List;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Validation<E, T> {
    Valid(T),
    Invalid(E),
}

impl<E, T> Validation<E, T> {
    pub fn valid(value: T) -> Self {
        Validation::Valid(value)
    }

    pub fn invalid(error: E) -> Self {
        Validation::Invalid(error)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Validation<E, U> {
        match self {
            Validation::Valid(value) => Validation::Valid(f(value)),
            Validation::Invalid(error) => Validation::Invalid(error),
        }
    }

    pub fn map_error<D, F: FnOnce(E) -> D>(self, f: F) -> Validation<D, T> {
        match self {
            Validation::Valid(value) => Validation::Valid(value),
            Validation::Invalid(error) => Validation::Invalid(f(error)),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Valid(value) => Ok(value),
            Validation::Invalid(error) => Err(error),
        }
    }

    pub fn combine<U>(self, other: Validation<E, U>) -> Builder<E, T, U> {
        Builder {
            first: self,
            second: other,
        }
    }

    pub fn combine3<U, V>(
        self,
        second: Validation<E, U>,
        third: Validation<E, V>,
    ) -> Builder3<E, T, U, V> {
        Builder3 {
            first: self,
            second,
            third,
        }
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Valid(value),
            Err(error) => Validation::Invalid(error),
        }
    }
}

impl<E: fmt::Display, T: fmt::Display> fmt::Display for Validation<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid(value) => write!(f, "Valid({value})"),
            Validation::Invalid(error) => write!(f, "Invalid({error})"),
        }
    }
}

fn errors<E, T>(validations: impl IntoIterator<Item = Option<E>>) -> Validation<List<E>, T> {
    Validation::Invalid(validations.into_iter().flatten().collect())
}

fn parts<E, T>(validation: Validation<E, T>) -> (Option<T>, Option<E>) {
    match validation {
        Validation::Valid(value) => (Some(value), None),
        Validation::Invalid(error) => (None, Some(error)),
    }
}

#[derive(Debug)]
pub struct Builder<E, T, U> {
    first: Validation<E, T>,
    second: Validation<E, U>,
}

impl<E, T, U> Builder<E, T, U> {
    pub fn ap<R, F: FnOnce(T, U) -> R>(self, f: F) -> Validation<List<E>, R> {
        match (parts(self.first), parts(self.second)) {
            ((Some(a), _), (Some(b), _)) => Validation::Valid(f(a, b)),
            ((_, e1), (_, e2)) => errors([e1, e2]),
        }
    }
}

#[derive(Debug)]
pub struct Builder3<E, T, U, V> {
    first: Validation<E, T>,
    second: Validation<E, U>,
    third: Validation<E, V>,
}

impl<E, T, U, V> Builder3<E, T, U, V> {
    pub fn ap<R, F: FnOnce(T, U, V) -> R>(self, f: F) -> Validation<List<E>, R> {
        match (
            parts(self.first),
            parts(self.second),
            parts(self.third),
        ) {
            ((Some(a), _), (Some(b), _), (Some(c), _)) => Validation::Valid(f(a, b, c)),
            ((_, e1), (_, e2), (_, e3)) => errors([e1, e2, e3]),
        }
    }
}
