// ============================
// crates/schedura-lib/src/validation/mod.rs
// ============================
//! Declarative form validation.
//!
//! A [`FormSchema`] is an ordered list of fields, each with an ordered list of
//! rules. Validation visits every field; within a field the first failing rule
//! produces that field's message and the remaining rules are skipped.

pub mod rules;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use zeroize::Zeroizing;

use schedura_common::FormKind;

pub use rules::{schema_for, RegistrationPolicy};

// local@domain.tld, no whitespace, exactly one '@'
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Current values of a form, keyed by field name.
///
/// Values are wiped from memory when replaced or dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, Zeroizing<String>>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        // the replaced value is zeroized on drop
        self.0.insert(field.into(), Zeroizing::new(value.into()));
    }

    /// Value of a field; a missing field reads as the empty string
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(|v| v.as_str()).unwrap_or("")
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Wipe every value (passwords included) and drop the fields
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, "<redacted>")))
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
                .collect(),
        )
    }
}

/// Field name → message of the first failing rule, in form order.
///
/// An absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Predicate part of a rule
#[derive(Debug, Clone)]
pub enum Check {
    /// Value must not be empty
    Required,
    /// Value must have the `local@domain.tld` shape
    Email,
    /// At least this many characters
    MinLength(usize),
    /// At most this many characters
    MaxLength(usize),
    /// Pattern must match somewhere in the value
    Matches(Regex),
    /// Value must equal the current value of another field
    EqualsField(&'static str),
}

impl Check {
    /// Evaluate against `value`; `values` is the whole form as it is right now
    pub fn passes(&self, value: &str, values: &FormValues) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::Email => EMAIL_REGEX.is_match(value),
            Check::MinLength(min) => value.chars().count() >= *min,
            Check::MaxLength(max) => value.chars().count() <= *max,
            Check::Matches(pattern) => pattern.is_match(value),
            Check::EqualsField(other) => value == values.get(other),
        }
    }
}

/// A predicate plus the message reported when it fails
#[derive(Debug, Clone)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// Ordered rules for one field
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, check: Check, message: &'static str) -> Self {
        self.rules.push(Rule { check, message });
        self
    }

    pub fn required(self, message: &'static str) -> Self {
        self.rule(Check::Required, message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.rule(Check::Email, message)
    }

    pub fn min_length(self, min: usize, message: &'static str) -> Self {
        self.rule(Check::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: &'static str) -> Self {
        self.rule(Check::MaxLength(max), message)
    }

    pub fn matches(self, pattern: &Regex, message: &'static str) -> Self {
        self.rule(Check::Matches(pattern.clone()), message)
    }

    pub fn equals_field(self, other: &'static str, message: &'static str) -> Self {
        self.rule(Check::EqualsField(other), message)
    }

    /// Message of the first failing rule, if any
    pub fn first_failure(&self, values: &FormValues) -> Option<&'static str> {
        let value = values.get(self.field);
        self.rules
            .iter()
            .find(|rule| !rule.check.passes(value, values))
            .map(|rule| rule.message)
    }
}

/// The full rule set of one form
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub kind: FormKind,
    pub fields: Vec<FieldRules>,
}

impl FormSchema {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Names of the declared fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.field)
    }

    /// Validate every declared field and return the complete error map.
    ///
    /// Fields missing from `values` are validated as empty strings.
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in &self.fields {
            if let Some(message) = field.first_failure(values) {
                errors.insert(field.field, message);
            }
        }
        errors
    }
}

/// Validate `values` against the schema of `kind`
pub fn validate(kind: FormKind, policy: RegistrationPolicy, values: &FormValues) -> FieldErrors {
    schema_for(kind, policy).validate(values)
}
