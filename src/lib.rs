pub mod cli;
pub mod comments;
pub mod config;
pub mod convert;

use thiserror::Error;

pub use config::Config;
pub use convert::{
    convert, convert_with, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, tokenize,
    validate, CaseError, CaseFormat, Convention, RawInput, WordSequence,
};

/// Outcome of converting a batch of inputs, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub entries: Vec<Conversion>,
}

impl BatchResult {
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.output.is_err()).count()
    }
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: Result<String, InputError>,
}

/// Why a single batch input could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("input is not valid JSON: {0}")]
    Json(String),
}
