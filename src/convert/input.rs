use serde_json::Value;
use thiserror::Error;

/// Errors produced while converting an input value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("expected a string, but received {found}")]
    InvalidType { found: &'static str },
}

/// An untyped argument handed to a conversion function.
///
/// Callers working with plain Rust strings get `Text` through the `From`
/// impls; values coming from outside the process (JSON payloads, CLI
/// arguments parsed as JSON) go through `Json` and are type-checked.
#[derive(Debug, Clone, Copy)]
pub enum RawInput<'a> {
    Absent,
    Text(&'a str),
    Json(&'a Value),
}

impl RawInput<'_> {
    /// Name of the observed type, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            RawInput::Absent => "undefined",
            RawInput::Text(_) => "string",
            RawInput::Json(value) => json_type_name(value),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> Self {
        RawInput::Text(text)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(text: &'a String) -> Self {
        RawInput::Text(text.as_str())
    }
}

impl<'a> From<&'a Value> for RawInput<'a> {
    fn from(value: &'a Value) -> Self {
        RawInput::Json(value)
    }
}

impl<'a> From<Option<&'a Value>> for RawInput<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(RawInput::Absent, RawInput::Json)
    }
}

impl<'a> From<Option<&'a str>> for RawInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(RawInput::Absent, RawInput::Text)
    }
}

/// Check that the input is a string and trim surrounding whitespace.
///
/// An input that trims down to nothing is still valid and yields `""`.
pub fn validate<'a>(input: impl Into<RawInput<'a>>) -> Result<&'a str, CaseError> {
    let input = input.into();
    match input {
        RawInput::Text(text) => Ok(text.trim()),
        RawInput::Json(Value::String(text)) => Ok(text.trim()),
        other => Err(CaseError::InvalidType {
            found: other.type_name(),
        }),
    }
}
