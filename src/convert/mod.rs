pub mod formatter;
pub mod input;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use formatter::CaseFormat;
pub use input::{validate, CaseError, RawInput};
pub use tokenizer::{tokenize, WordSequence};

/// Naming conventions supported out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Camel,
    Pascal,
    Kebab,
    Dot,
}

impl Convention {
    pub const ALL: [Convention; 4] = [
        Convention::Camel,
        Convention::Pascal,
        Convention::Kebab,
        Convention::Dot,
    ];

    /// Character placed between words, if the convention uses one
    pub fn separator(&self) -> Option<char> {
        match self {
            Convention::Camel | Convention::Pascal => None,
            Convention::Kebab => Some('-'),
            Convention::Dot => Some('.'),
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Convention::Camel => "camel",
            Convention::Pascal => "pascal",
            Convention::Kebab => "kebab",
            Convention::Dot => "dot",
        }
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Convention::Camel),
            "pascal" | "pascalcase" => Ok(Convention::Pascal),
            "kebab" | "kebab-case" => Ok(Convention::Kebab),
            "dot" | "dot.case" => Ok(Convention::Dot),
            _ => Err(format!("Unknown convention: {}", s)),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Camel => write!(f, "camelCase"),
            Convention::Pascal => write!(f, "PascalCase"),
            Convention::Kebab => write!(f, "kebab-case"),
            Convention::Dot => write!(f, "dot.case"),
        }
    }
}

/// Validate, tokenize and render `input` with any formatting strategy
pub fn convert_with<'a, F>(input: impl Into<RawInput<'a>>, format: &F) -> Result<String, CaseError>
where
    F: CaseFormat + ?Sized,
{
    let text = validate(input)?;
    Ok(format.format(&tokenize(text)))
}

pub fn convert<'a>(input: impl Into<RawInput<'a>>, convention: Convention) -> Result<String, CaseError> {
    convert_with(input, &convention)
}

/// Convert to camelCase.
///
/// ```
/// assert_eq!(recase::to_camel_case(" Hello_world-test ").unwrap(), "helloWorldTest");
/// ```
pub fn to_camel_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Convention::Camel)
}

/// Convert to PascalCase.
///
/// ```
/// assert_eq!(recase::to_pascal_case("hello_world").unwrap(), "HelloWorld");
/// ```
pub fn to_pascal_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Convention::Pascal)
}

/// Convert to kebab-case.
///
/// ```
/// assert_eq!(recase::to_kebab_case("helloWorldTest").unwrap(), "hello-world-test");
/// ```
pub fn to_kebab_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Convention::Kebab)
}

/// Convert to dot.case.
///
/// ```
/// assert_eq!(recase::to_dot_case("HelloWorld").unwrap(), "hello.world");
/// ```
pub fn to_dot_case<'a>(input: impl Into<RawInput<'a>>) -> Result<String, CaseError> {
    convert(input, Convention::Dot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convention_parsing() {
        assert_eq!("camel".parse::<Convention>(), Ok(Convention::Camel));
        assert_eq!("camelCase".parse::<Convention>(), Ok(Convention::Camel));
        assert_eq!("PascalCase".parse::<Convention>(), Ok(Convention::Pascal));
        assert_eq!("KEBAB".parse::<Convention>(), Ok(Convention::Kebab));
        assert_eq!("dot.case".parse::<Convention>(), Ok(Convention::Dot));
        assert!("snake".parse::<Convention>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for convention in Convention::ALL {
            let name = convention.to_string();
            assert_eq!(name.parse::<Convention>(), Ok(convention));
            assert_eq!(convention.short_name().parse::<Convention>(), Ok(convention));
        }
    }

    #[test]
    fn test_serde_uses_short_names() {
        let encoded = serde_json::to_string(&Convention::Kebab).unwrap();
        assert_eq!(encoded, "\"kebab\"");
        let decoded: Convention = serde_json::from_str("\"pascal\"").unwrap();
        assert_eq!(decoded, Convention::Pascal);
    }

    #[test]
    fn test_original_examples() {
        assert_eq!(to_camel_case("hello world").unwrap(), "helloWorld");
        assert_eq!(to_camel_case(" Hello_world-test ").unwrap(), "helloWorldTest");
        assert_eq!(to_camel_case("first name").unwrap(), "firstName");
        assert_eq!(to_camel_case("user_id").unwrap(), "userId");
        assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
        assert_eq!(to_pascal_case("hello-world").unwrap(), "HelloWorld");
        assert_eq!(to_dot_case("hello world").unwrap(), "hello.world");
        assert_eq!(to_dot_case("hello_world-test").unwrap(), "hello.world.test");
        assert_eq!(to_kebab_case("hello world").unwrap(), "hello-world");
    }

    #[test]
    fn test_json_string_input() {
        assert_eq!(to_kebab_case(&json!("fooBar baz")).unwrap(), "foo-bar-baz");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            to_camel_case(&json!(123)),
            Err(CaseError::InvalidType { found: "number" })
        );
        assert_eq!(
            to_dot_case(&json!(null)),
            Err(CaseError::InvalidType { found: "null" })
        );
    }

    #[test]
    fn test_trait_object_strategy() {
        let strategies: Vec<Box<dyn CaseFormat>> =
            Convention::ALL.iter().map(|c| Box::new(*c) as Box<dyn CaseFormat>).collect();
        let outputs: Vec<String> = strategies
            .iter()
            .map(|s| convert_with("two words", &**s).unwrap())
            .collect();
        assert_eq!(outputs, vec!["twoWords", "TwoWords", "two-words", "two.words"]);
    }
}
