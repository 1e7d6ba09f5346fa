use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw field value handed to the validator
///
/// Length rules only look at `Text`, numeric bounds only look at `Number`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerces form text to a number the way an `<input>` value would be.
    ///
    /// Blank text becomes `0`, anything unparsable becomes `NaN` (which then
    /// fails every numeric bound).
    pub fn numeric_from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::Number(0.0);
        }
        Self::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Optional rules for one field. Bounds are inclusive; absent rules always pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Constraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A value paired with the rules it has to satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>, constraints: Constraints) -> Self {
        Self {
            value: value.into(),
            constraints,
        }
    }
}

/// Returns true only if every present constraint holds.
///
/// `required` trims the textual form of the value. Length is counted in
/// characters.
pub fn validate(input: &Validatable) -> bool {
    let rules = &input.constraints;

    if rules.required && input.value.to_string().trim().is_empty() {
        return false;
    }

    match &input.value {
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if rules.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if rules.max_length.is_some_and(|max| len > max) {
                return false;
            }
        }
        FieldValue::Number(n) => {
            // NaN satisfies no bound
            if rules.min.is_some_and(|min| n.is_nan() || *n < min) {
                return false;
            }
            if rules.max.is_some_and(|max| n.is_nan() || *n > max) {
                return false;
            }
        }
    }

    true
}
