pub mod output;

use crate::{
    convert, tokenize, validate, BatchResult, Conversion, Convention, InputError, RawInput,
};
use rayon::prelude::*;
use serde_json::Value;

/// What the CLI produces for each input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Convert(Convention),
    Words,
}

/// Convert every input in parallel. Results keep the order of `inputs`.
///
/// With `parse_json` each input is decoded as a JSON value first, so
/// non-string values are rejected by validation instead of being treated
/// as text.
pub fn run_batch(inputs: &[String], mode: Mode, parse_json: bool) -> BatchResult {
    let entries = inputs
        .par_iter()
        .map(|input| Conversion {
            input: input.clone(),
            output: convert_one(input, mode, parse_json),
        })
        .collect();

    BatchResult { entries }
}

fn convert_one(input: &str, mode: Mode, parse_json: bool) -> Result<String, InputError> {
    if parse_json {
        let value: Value =
            serde_json::from_str(input).map_err(|e| InputError::Json(e.to_string()))?;
        apply(&value, mode)
    } else {
        apply(input, mode)
    }
}

fn apply<'a>(input: impl Into<RawInput<'a>>, mode: Mode) -> Result<String, InputError> {
    match mode {
        Mode::Convert(convention) => Ok(convert(input, convention)?),
        Mode::Words => {
            let text = validate(input)?;
            Ok(tokenize(text).join(" "))
        }
    }
}
