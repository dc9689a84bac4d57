// Option, Try and Either: absence and failure as values.
//
// `Option` models absence, `Result` plays the role of Try, and
// `itertools::Either` is the unbiased two-way sum.

use crate::collections::List;
use crate::error::{Result, WorkshopError};
use crate::lesson::Transcript;
use itertools::Either;

/// `None` becomes `Err(NoSuchElement)`.
pub fn option_to_try<T>(option: Option<T>) -> Result<T> {
    option.ok_or(WorkshopError::NoSuchElement)
}

/// Failures go left, successes go right.
pub fn try_to_either<T>(attempt: Result<T>) -> Either<WorkshopError, T> {
    match attempt {
        Ok(value) => Either::Right(value),
        Err(err) => Either::Left(err),
    }
}

/// Drops the error: only presence survives.
pub fn try_to_option<T>(attempt: Result<T>) -> Option<T> {
    attempt.ok()
}

/// Keeps the defined values, in order.
pub fn defined<T: Copy>(options: &List<Option<T>>) -> List<T> {
    options.flat_map(|option| *option)
}

/// Runs the success or failure callback, then the finally step.
pub fn report<T>(out: &Transcript, attempt: &Result<T>) {
    let _ = attempt
        .as_ref()
        .inspect_err(|_| out.say("ops"))
        .inspect(|_| out.say("yeee"));
    out.say("try done");
}

pub fn lesson(out: &Transcript) -> Result<()> {
    let o: Option<String> = Some(10).map(|_| String::new());
    let nested: Option<Option<i32>> = Some(10).map(|_| None);
    let flat: Option<i32> = Some(10).and_then(|_| None);
    out.say(format!("map: {o:?}"));
    out.say(format!("map to option: {nested:?}"));
    out.say(format!("and_then: {flat:?}"));

    let options = List::of([None, Some(1), None]);
    let filtered = options
        .filter(Option::is_some)
        .map(|option| option.unwrap_or_default());
    out.say(format!("{options:?} filtered: {filtered}"));
    out.say(format!("{options:?} flat_mapped: {}", defined(&options)));

    let attempt = option_to_try(o.clone());
    report(out, &attempt);
    report(out, &option_to_try(None::<String>));

    let either = try_to_either(attempt)
        .map_right(|s| s.len())
        .map_left(|err| err.to_string());
    out.say(format!("either: {either:?}"));

    // the failure is gone once we go back to Option
    let lost = try_to_option(option_to_try(None::<String>));
    out.say(format!("back to option: {lost:?}"));

    Ok(())
}
