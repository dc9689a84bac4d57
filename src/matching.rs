// Pattern matching: values, kinds, options, tuples and command-line flags.

use crate::error::{Result, WorkshopError};
use crate::lesson::Transcript;
use std::fmt;

pub fn spell(i: i32) -> &'static str {
    match i {
        1 => "one",
        2 => "two",
        _ => "?",
    }
}

/// A number whose concrete kind is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i32),
    Double(f64),
    Long(i64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Double(d) => write!(f, "{d:?}"),
            Number::Long(l) => write!(f, "{l}L"),
        }
    }
}

/// Increments ints and doubles; every other kind falls through to the
/// catch-all arm and is rejected.
pub fn plus_one(n: Number) -> Result<Number> {
    match n {
        Number::Int(i) => i
            .checked_add(1)
            .map(Number::Int)
            .ok_or_else(|| WorkshopError::NumberFormat(n.to_string())),
        Number::Double(d) => Ok(Number::Double(d + 1.0)),
        other => Err(WorkshopError::NumberFormat(other.to_string())),
    }
}

pub fn describe_option(value: Option<i32>) -> &'static str {
    match value {
        Some(1) => "uno",
        Some(_) => "default",
        None => "empty",
    }
}

pub fn swap<A, B>((a, b): (A, B)) -> (B, A) {
    (b, a)
}

pub fn describe_pair(pair: (i32, i32)) -> String {
    match pair {
        (0, 0) => "origin".to_string(),
        (x, y) if x == y => format!("diagonal at {x}"),
        (x, 0) | (0, x) => format!("on an axis at {x}"),
        (x, y) => format!("({x}, {y})"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
}

impl Command {
    pub fn parse(arg: &str) -> Result<Command> {
        match arg {
            "-h" | "--help" => Ok(Command::Help),
            "-v" | "--version" => Ok(Command::Version),
            _ => Err(WorkshopError::IllegalArgument(arg.to_string())),
        }
    }

    pub fn run(self, out: &Transcript) {
        match self {
            Command::Help => display_help(out),
            Command::Version => display_version(out),
        }
    }
}

fn display_help(out: &Transcript) {
    out.say("display help");
}

fn display_version(out: &Transcript) {
    out.say("display version");
}

pub fn lesson(out: &Transcript) -> Result<()> {
    let i = 1;
    out.say(spell(i));

    let plus = plus_one(Number::Int(i))?;
    out.say(plus.to_string());
    match plus_one(Number::Long(1)) {
        Ok(n) => out.say(n.to_string()),
        Err(err) => out.say(format!("catch-all: {err}")),
    }

    out.say(describe_option(None));

    let tuple = (1, 2);
    let (first, second) = tuple;
    out.say(format!("Tuple({first}, {second}) swapped: {:?}", swap(tuple)));
    out.say(describe_pair(tuple));

    let arg = "-h";
    Command::parse(arg)?.run(out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell() {
        assert_eq!(spell(1), "one");
        assert_eq!(spell(2), "two");
        assert_eq!(spell(3), "?");
        assert_eq!(spell(-1), "?");
    }

    #[test]
    fn test_plus_one_by_kind() {
        assert_eq!(plus_one(Number::Int(1)).unwrap(), Number::Int(2));
        assert_eq!(plus_one(Number::Double(1.5)).unwrap(), Number::Double(2.5));
        assert!(matches!(
            plus_one(Number::Long(1)),
            Err(WorkshopError::NumberFormat(_))
        ));
    }

    #[test]
    fn test_plus_one_overflow() {
        assert!(plus_one(Number::Int(i32::MAX)).is_err());
    }

    #[test]
    fn test_describe_option() {
        assert_eq!(describe_option(Some(1)), "uno");
        assert_eq!(describe_option(Some(7)), "default");
        assert_eq!(describe_option(None), "empty");
    }

    #[test]
    fn test_tuples() {
        assert_eq!(swap((1, "a")), ("a", 1));
        assert_eq!(describe_pair((0, 0)), "origin");
        assert_eq!(describe_pair((3, 3)), "diagonal at 3");
        assert_eq!(describe_pair((0, 4)), "on an axis at 4");
        assert_eq!(describe_pair((1, 2)), "(1, 2)");
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("-h").unwrap(), Command::Help);
        assert_eq!(Command::parse("--help").unwrap(), Command::Help);
        assert_eq!(Command::parse("-v").unwrap(), Command::Version);
        assert_eq!(Command::parse("--version").unwrap(), Command::Version);

        let err = Command::parse("-x").unwrap_err();
        assert!(matches!(err, WorkshopError::IllegalArgument(ref arg) if arg == "-x"));
    }

    #[test]
    fn test_command_run() {
        let out = Transcript::new();
        Command::Help.run(&out);
        Command::Version.run(&out);
        assert_eq!(out.lines(), vec!["display help", "display version"]);
    }

    #[test]
    fn test_lesson_output() {
        let out = Transcript::new();
        lesson(&out).unwrap();
        let lines = out.lines();
        assert_eq!(lines[0], "one");
        assert_eq!(lines[1], "2");
        assert!(lines[2].starts_with("catch-all"));
        assert_eq!(lines[3], "empty");
        assert_eq!(lines.last().unwrap(), "display help");
    }
}
