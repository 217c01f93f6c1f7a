//! Explicit validation pass over model values.
//!
//! Constructors never validate. A caller runs [`Validate::validate`] once the
//! value is complete and gets back every violation at once, each tagged with
//! the dotted path of the offending field.

use std::fmt;

use crate::config::Limits;

/// The constraint a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NotBlank,
    MaxChars(usize),
    MaxBytes(usize),
    Range,
    /// A payload that is missing or not allowed for the value's kind.
    Payload,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NotBlank => f.write_str("not_blank"),
            Rule::MaxChars(n) => write!(f, "max_chars({n})"),
            Rule::MaxBytes(n) => write!(f, "max_bytes({n})"),
            Rule::Range => f.write_str("range"),
            Rule::Payload => f.write_str("payload"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.rule, self.message)
    }
}

/// Every violation found by one validation pass. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("validation failed ({} violation(s)){}", .0.len(), render_list(.0))]
pub struct ValidationErrors(Vec<Violation>);

fn render_list(violations: &[Violation]) -> String {
    violations.iter().map(|v| format!("; {v}")).collect()
}

impl ValidationErrors {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths of the offending fields, in the order they were checked.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|v| v.field.as_str())
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Accumulates violations for one validation pass.
#[derive(Debug)]
pub struct Validator<'a> {
    limits: &'a Limits,
    path: Vec<String>,
    violations: Vec<Violation>,
}

impl<'a> Validator<'a> {
    pub fn new(limits: &'a Limits) -> Self {
        Self {
            limits,
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    pub fn limits(&self) -> &Limits {
        self.limits
    }

    pub fn not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, Rule::NotBlank, "must not be blank".to_string());
        }
    }

    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) {
        let count = value.chars().count();
        if count > max {
            self.push(
                field,
                Rule::MaxChars(max),
                format!("is {count} characters long, at most {max} allowed"),
            );
        }
    }

    pub fn max_bytes(&mut self, field: &str, value: &str, max: usize) {
        if value.len() > max {
            self.push(
                field,
                Rule::MaxBytes(max),
                format!("is {} bytes long, at most {max} allowed", value.len()),
            );
        }
    }

    /// Inclusive range check. Non-finite values always fail.
    pub fn range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !(min..=max).contains(&value) {
            self.push(
                field,
                Rule::Range,
                format!("{value} is outside [{min}, {max}]"),
            );
        }
    }

    pub fn payload(&mut self, field: &str, message: impl Into<String>) {
        self.push(field, Rule::Payload, message.into());
    }

    /// Validate a nested value with `field` as path prefix.
    pub fn nested<T: Validate + ?Sized>(&mut self, field: &str, value: &T) {
        self.path.push(field.to_string());
        value.validate_into(self);
        self.path.pop();
    }

    /// Validate each item of a slice as `field[i]`.
    pub fn nested_each<T: Validate>(&mut self, field: &str, items: &[T]) {
        for (idx, item) in items.iter().enumerate() {
            self.nested(&format!("{field}[{idx}]"), item);
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            violations = self.violations.len(),
            first = %self.violations[0],
            "validation failed"
        );
        Err(ValidationErrors(self.violations))
    }

    fn push(&mut self, field: &str, rule: Rule, message: String) {
        let field = if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.path.join("."))
        };
        self.violations.push(Violation {
            field,
            rule,
            message,
        });
    }
}

/// A value that can report its own constraint violations.
pub trait Validate {
    fn validate_into(&self, v: &mut Validator<'_>);

    fn validate(&self) -> Result<(), ValidationErrors> {
        self.validate_with(&Limits::default())
    }

    fn validate_with(&self, limits: &Limits) -> Result<(), ValidationErrors> {
        let mut v = Validator::new(limits);
        self.validate_into(&mut v);
        v.finish()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_into(&self, v: &mut Validator<'_>) {
        if let Some(inner) = self {
            inner.validate_into(v);
        }
    }
}
