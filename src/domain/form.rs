//! Submitted form data.
//!
//! Form payloads arrive as loosely typed JSON objects. Values are narrowed to
//! [`FormValue`] so truthiness and stringification are defined per variant.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single submitted form value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Multi-select answers.
    List(Vec<FormValue>),
}

impl FormValue {
    /// Whether the value counts as "supplied".
    ///
    /// `null`, `false`, zero, the empty string and the empty list are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            FormValue::Null => false,
            FormValue::Bool(value) => *value,
            FormValue::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
            FormValue::Text(text) => !text.is_empty(),
            FormValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for FormValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormValue::Null => Ok(()),
            FormValue::Bool(value) => write!(f, "{}", value),
            FormValue::Number(number) => write!(f, "{}", number),
            FormValue::Text(text) => f.write_str(text),
            FormValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Bool(value)
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Number(value.into())
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        FormValue::from(i64::from(value))
    }
}

impl From<f64> for FormValue {
    /// Non-finite floats have no JSON representation and become `Null`.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map(FormValue::Number).unwrap_or(FormValue::Null)
    }
}

/// A submitted form: field name to value.
///
/// Keys are kept sorted so serialized submissions are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    values: BTreeMap<String, FormValue>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the submission.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FormValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the value submitted for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    /// Whether `name` was submitted with a truthy value.
    pub fn is_supplied(&self, name: &str) -> bool {
        self.get(name).is_some_and(FormValue::is_truthy)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Parse a JSON object into a submission.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormSubmission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}
