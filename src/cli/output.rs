use crate::{BatchResult, Convention};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonEntry {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    /// `None` when printing words instead of a conversion
    convention: Option<String>,
    total: usize,
    failed: usize,
    results: Vec<JsonEntry>,
}

pub fn print_results(
    result: &BatchResult,
    convention: Option<Convention>,
    colored_output: bool,
    format: &OutputFormat,
) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(result, colored_output);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json(result, convention)?);
            Ok(())
        }
    }
}

fn print_text_results(result: &BatchResult, colored_output: bool) {
    for entry in &result.entries {
        match &entry.output {
            Ok(output) => println!("{}", output),
            Err(err) => {
                if colored_output {
                    eprintln!(
                        "{} {} {}",
                        "error:".red().bold(),
                        format!("{:?}", entry.input).yellow(),
                        err
                    );
                } else {
                    eprintln!("error: {:?} {}", entry.input, err);
                }
            }
        }
    }
}

pub fn render_json(
    result: &BatchResult,
    convention: Option<Convention>,
) -> serde_json::Result<String> {
    let results = result
        .entries
        .iter()
        .map(|e| match &e.output {
            Ok(output) => JsonEntry {
                input: e.input.clone(),
                output: Some(output.clone()),
                error: None,
            },
            Err(err) => JsonEntry {
                input: e.input.clone(),
                output: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let output = JsonOutput {
        convention: convention.map(|c| c.to_string()),
        total: result.entries.len(),
        failed: result.failed_count(),
        results,
    };

    serde_json::to_string_pretty(&output)
}

pub fn print_failure_summary(failed: usize, total: usize, colored: bool) {
    if failed == 0 {
        return;
    }

    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} could not be converted",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} could not be converted", failed, total, input_word);
    }
}

pub fn print_conventions(colored: bool) {
    const SAMPLE: &str = "hello world-example";

    for convention in Convention::ALL {
        let example = crate::convert(SAMPLE, convention).unwrap_or_default();
        if colored {
            println!(
                "  {} {:<12} {}",
                format!("{:<8}", convention.short_name()).cyan().bold(),
                convention.to_string(),
                example.green()
            );
        } else {
            println!(
                "  {:<8} {:<12} {}",
                convention.short_name(),
                convention.to_string(),
                example
            );
        }
    }
}
