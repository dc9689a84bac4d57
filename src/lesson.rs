// Lesson registry and the transcript lessons write their console output to.

use crate::config::WorkshopConfig;
use crate::error::{Result, WorkshopError};
use crate::{control, functions, matching, person, properties, stream};
use itertools::Itertools;
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Collects the lines a lesson prints, in order.
///
/// Lessons take `&Transcript` so closures passed to combinators can write to
/// it as a side effect (see the memoization lesson).
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        trace!(%line, "say");
        self.lines.borrow_mut().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == line).count()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into_inner()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    Functions,
    Memoization,
    Partial,
    Option,
    Stream,
    PatternMatching,
    Validators,
    Properties,
}

impl Lesson {
    pub const ALL: [Lesson; 8] = [
        Lesson::Functions,
        Lesson::Memoization,
        Lesson::Partial,
        Lesson::Option,
        Lesson::Stream,
        Lesson::PatternMatching,
        Lesson::Validators,
        Lesson::Properties,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Functions => "functions",
            Lesson::Memoization => "memoization",
            Lesson::Partial => "partial",
            Lesson::Option => "option",
            Lesson::Stream => "stream",
            Lesson::PatternMatching => "pattern_matching",
            Lesson::Validators => "validators",
            Lesson::Properties => "properties",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lesson::Functions => "Functions: arity, currying, composition, laziness",
            Lesson::Memoization => "Functions: memoization",
            Lesson::Partial => "Functions: partial vs total",
            Lesson::Option => "Option, Try and Either",
            Lesson::Stream => "Lazy streams",
            Lesson::PatternMatching => "Pattern matching",
            Lesson::Validators => "Applicative validation",
            Lesson::Properties => "Property checking",
        }
    }

    pub fn run(self, config: &WorkshopConfig) -> Result<Transcript> {
        debug!(lesson = self.name(), "running lesson");
        let out = Transcript::new();
        match self {
            Lesson::Functions => functions::lesson(&out)?,
            Lesson::Memoization => functions::memoization_lesson(&out)?,
            Lesson::Partial => functions::partial_lesson(&out)?,
            Lesson::Option => control::lesson(&out)?,
            Lesson::Stream => stream::lesson(&config.stream, &out)?,
            Lesson::PatternMatching => matching::lesson(&out)?,
            Lesson::Validators => person::lesson(&out)?,
            Lesson::Properties => properties::lesson(&config.property, &out)?,
        }
        Ok(out)
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| WorkshopError::UnknownLesson {
                name: s.to_string(),
                available: Lesson::ALL.iter().join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_records_in_order() {
        let out = Transcript::new();
        out.say("one");
        out.say(String::from("two"));
        out.say("one");
        assert_eq!(out.count("one"), 2);
        assert_eq!(out.into_lines(), vec!["one", "two", "one"]);
    }

    #[test]
    fn test_parse_lesson_names() {
        for lesson in Lesson::ALL {
            assert_eq!(lesson.name().parse::<Lesson>().unwrap(), lesson);
        }
        assert_eq!("Pattern-Matching".parse::<Lesson>().unwrap(), Lesson::PatternMatching);
    }

    #[test]
    fn test_unknown_lesson_lists_choices() {
        let err = "monads".parse::<Lesson>().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("monads"));
        assert!(display.contains("pattern_matching"));
    }

    #[test]
    fn test_every_lesson_runs() {
        let config = WorkshopConfig::default();
        for lesson in Lesson::ALL {
            let transcript = lesson.run(&config).unwrap();
            assert!(!transcript.lines().is_empty(), "{lesson} printed nothing");
        }
    }

    #[test]
    fn test_lessons_are_independent() {
        let config = WorkshopConfig::default();
        let first = Lesson::Memoization.run(&config).unwrap();
        let second = Lesson::Memoization.run(&config).unwrap();
        assert_eq!(first.lines(), second.lines());
    }
}
