use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Deref;

lazy_static! {
    // lowercase letter directly followed by an uppercase one: helloWorld -> hello World
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();
    // anything that is not an ASCII letter or digit
    static ref SEPARATOR: Regex = Regex::new(r"[^a-zA-Z0-9]+").unwrap();
}

/// Ordered words extracted from an input string.
///
/// Every word is non-empty and made only of ASCII letters and digits, in the
/// order and casing they had in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

impl Deref for WordSequence {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Split text into words at separator runs and lowercase→uppercase transitions
pub fn tokenize(text: &str) -> WordSequence {
    if text.is_empty() {
        return WordSequence::default();
    }

    // A match always ends on an uppercase letter, which can never start the
    // next match, so one pass catches every transition.
    let split = CASE_BOUNDARY.replace_all(text, "$1 $2");

    let words = SEPARATOR
        .split(&split)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect();

    WordSequence { words }
}
