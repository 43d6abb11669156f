use super::*;
use serde::Serialize;

/// Value read from a bound input: checkboxes yield their checked state,
/// everything else yields the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Checked(checked) => !checked,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Checked(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Checked(checked) => write!(f, "{checked}"),
        }
    }
}

/// Static definition of one form field: identity, requiredness, validation
/// rule, error message, and the input it reads from. The household set is
/// fixed at construction and never changes.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub validator: fn(&FieldValue) -> bool,
    pub error_message: &'static str,
    pub input: InputId,
}

impl FieldDescriptor {
    /// A field fails when it is required but empty, or when its validator
    /// rejects the current value. Pure read.
    pub fn failing(&self, value: &FieldValue) -> bool {
        (self.required && value.is_empty()) || !(self.validator)(value)
    }
}

fn age_is_positive(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => text
            .trim()
            .parse::<f64>()
            .map(|age| age > 0.0)
            .unwrap_or(false),
        FieldValue::Checked(_) => false,
    }
}

fn always_valid(_value: &FieldValue) -> bool {
    true
}

/// The fixed household field set: required positive age, required
/// relationship, optional smoker flag.
pub fn household_fields(age: InputId, rel: InputId, smoker: InputId) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            id: "age",
            label: "Age",
            required: true,
            validator: age_is_positive,
            error_message: "Age is required and must be greater than 1",
            input: age,
        },
        FieldDescriptor {
            id: "rel",
            label: "Relationship",
            required: true,
            validator: always_valid,
            error_message: "Relationship is required",
            input: rel,
        },
        FieldDescriptor {
            id: "smoker",
            label: "Smoker",
            required: false,
            validator: always_valid,
            error_message: "",
            input: smoker,
        },
    ]
}
