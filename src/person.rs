// Person and its two-field validator.

use crate::collections::List;
use crate::error::Result;
use crate::lesson::Transcript;
use crate::validation::Validation;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

lazy_static! {
    static ref VALID_NAME_CHARS: Regex = Regex::new("[a-zA-Z ]").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: String, age: i32) -> Self {
        Person { name, age }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({}, {})", self.name, self.age)
    }
}

pub struct PersonValidator;

impl PersonValidator {
    pub const MIN_AGE: i32 = 0;

    pub fn validate_person(name: &str, age: i32) -> Validation<List<String>, Person> {
        Self::validate_name(name)
            .combine(Self::validate_age(age))
            .ap(Person::new)
    }

    /// Only letters and spaces; offenders are reported once each, sorted.
    pub fn validate_name(name: &str) -> Validation<String, String> {
        let rest = VALID_NAME_CHARS.replace_all(name, "");
        if rest.is_empty() {
            Validation::valid(name.to_string())
        } else {
            let offenders: String = rest.chars().collect::<BTreeSet<_>>().into_iter().collect();
            Validation::invalid(format!("Name contains invalid characters: '{offenders}'"))
        }
    }

    pub fn validate_age(age: i32) -> Validation<String, i32> {
        if age < Self::MIN_AGE {
            Validation::invalid(format!("Age must be at least {}", Self::MIN_AGE))
        } else {
            Validation::valid(age)
        }
    }
}

pub fn lesson(out: &Transcript) -> Result<()> {
    let valid_name = Validation::<String, _>::valid("Daniel".to_string());
    let valid_age = Validation::valid(5);
    let built = valid_name.combine(valid_age).ap(Person::new);
    out.say(built.to_string());

    out.say(PersonValidator::validate_person("John Doe", 30).to_string());
    out.say(PersonValidator::validate_person("John? Doe!4", -1).to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_person() {
        let result = PersonValidator::validate_person("John Doe", 30);
        assert_eq!(result, Validation::Valid(Person::new("John Doe".to_string(), 30)));
        assert_eq!(result.to_string(), "Valid(Person(John Doe, 30))");
    }

    #[test]
    fn test_both_fields_invalid() {
        let result = PersonValidator::validate_person("John? Doe!4", -1);
        assert_eq!(
            result.to_string(),
            "Invalid(List(Name contains invalid characters: '!4?', Age must be at least 0))"
        );
    }

    #[test]
    fn test_only_age_invalid() {
        let result = PersonValidator::validate_person("Ada", -5);
        let errors = result.into_result().unwrap_err();
        assert_eq!(errors, List::of(["Age must be at least 0".to_string()]));
    }

    #[test]
    fn test_offenders_are_distinct_and_sorted() {
        let result = PersonValidator::validate_name("b??a!!_1");
        assert_eq!(
            result,
            Validation::Invalid("Name contains invalid characters: '!1?_'".to_string())
        );
    }

    #[test]
    fn test_boundaries() {
        assert!(PersonValidator::validate_age(0).is_valid());
        assert!(!PersonValidator::validate_age(-1).is_valid());
        assert!(PersonValidator::validate_name("").is_valid());
        assert!(PersonValidator::validate_name("   ").is_valid());
        assert!(!PersonValidator::validate_name("José").is_valid());
    }

    #[test]
    fn test_lesson_output() {
        let out = Transcript::new();
        lesson(&out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Valid(Person(Daniel, 5))",
                "Valid(Person(John Doe, 30))",
                "Invalid(List(Name contains invalid characters: '!4?', Age must be at least 0))",
            ]
        );
    }
}
