use super::Convention;

/// A strategy that renders a word sequence in some naming convention.
///
/// Words handed to a formatter are non-empty ASCII alphanumerics, so
/// implementations can rely on byte-wise ASCII case mapping.
pub trait CaseFormat {
    fn format(&self, words: &[String]) -> String;
}

impl CaseFormat for Convention {
    fn format(&self, words: &[String]) -> String {
        match self {
            Convention::Camel => camel(words),
            Convention::Pascal => pascal(words),
            Convention::Kebab => join_lowercase(words, '-'),
            Convention::Dot => join_lowercase(words, '.'),
        }
    }
}

fn camel(words: &[String]) -> String {
    let mut out = String::with_capacity(total_len(words));
    let mut words = words.iter();

    if let Some(first) = words.next() {
        out.push_str(&first.to_ascii_lowercase());
    }
    for word in words {
        push_capitalized(&mut out, word);
    }

    out
}

fn pascal(words: &[String]) -> String {
    let mut out = String::with_capacity(total_len(words));
    for word in words {
        push_capitalized(&mut out, word);
    }
    out
}

fn join_lowercase(words: &[String], separator: char) -> String {
    let mut out = String::with_capacity(total_len(words) + words.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&word.to_ascii_lowercase());
    }
    out
}

/// First character uppercased, the rest lowercased
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

fn total_len(words: &[String]) -> usize {
    words.iter().map(String::len).sum()
}
