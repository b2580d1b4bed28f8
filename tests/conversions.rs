use recase::{
    to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, tokenize, CaseError, Convention,
};
use serde_json::json;

const CORPUS: &[&str] = &[
    "hello world",
    " Hello_world-test ",
    "helloWorldTest",
    "HelloWorld",
    "Hello_World-Test",
    "already-kebab-case",
    "already.dot.case",
    "SCREEN_NAME",
    "parseHTTPResponse",
    "XMLHttpRequest",
    "getHTMLParserForURLs",
    "ABCDef ghiJKL",
    "  --leading and trailing__  ",
    "version2Update v1.2.3",
    "a",
    "snake_case_words_here",
    "mixed   separators\t\nand-lines",
    "héllo wörld",
    "",
    "   ",
    "___",
];

fn segments(output: &str, separator: char) -> Vec<String> {
    if output.is_empty() {
        return Vec::new();
    }
    output.split(separator).map(|s| s.to_lowercase()).collect()
}

/// Reference behaviour: apply the lowercase→uppercase rule repeatedly until
/// nothing changes, then split on separators.
fn multi_pass_words(text: &str) -> Vec<String> {
    let mut current: Vec<char> = text.trim().chars().collect();
    loop {
        let mut next = Vec::with_capacity(current.len());
        let mut changed = false;
        for (i, &c) in current.iter().enumerate() {
            if i > 0 && current[i - 1].is_ascii_lowercase() && c.is_ascii_uppercase() {
                next.push(' ');
                changed = true;
            }
            next.push(c);
        }
        current = next;
        if !changed {
            break;
        }
    }

    current
        .split(|c: &char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.iter().collect())
        .collect()
}

#[test]
fn kebab_and_dot_are_idempotent() {
    assert_eq!(to_kebab_case("already-kebab-case").unwrap(), "already-kebab-case");
    assert_eq!(to_dot_case("already.dot.case").unwrap(), "already.dot.case");

    for input in CORPUS {
        let kebab = to_kebab_case(*input).unwrap();
        assert_eq!(to_kebab_case(kebab.as_str()).unwrap(), kebab, "input {:?}", input);

        let dot = to_dot_case(*input).unwrap();
        assert_eq!(to_dot_case(dot.as_str()).unwrap(), dot, "input {:?}", input);
    }
}

#[test]
fn word_count_matches_kebab_segments() {
    for input in CORPUS {
        let words = tokenize(input.trim());
        let kebab = to_kebab_case(*input).unwrap();
        assert_eq!(words.len(), segments(&kebab, '-').len(), "input {:?}", input);
    }
}

#[test]
fn case_boundary_splitting() {
    assert_eq!(to_kebab_case("helloWorldTest").unwrap(), "hello-world-test");
    assert_eq!(to_pascal_case("helloWorldTest").unwrap(), "HelloWorldTest");
}

#[test]
fn mixed_separators_normalize() {
    assert_eq!(to_kebab_case("Hello_World-Test").unwrap(), "hello-world-test");
    assert_eq!(to_camel_case("Hello_World-Test").unwrap(), "helloWorldTest");
    assert_eq!(to_dot_case("Hello_World-Test").unwrap(), "hello.world.test");
}

#[test]
fn empty_and_whitespace_only() {
    assert_eq!(to_camel_case("").unwrap(), "");
    assert_eq!(to_kebab_case("   ").unwrap(), "");
    for convention in Convention::ALL {
        assert_eq!(recase::convert(" \t ", convention).unwrap(), "");
        assert_eq!(recase::convert("-_-", convention).unwrap(), "");
    }
}

#[test]
fn type_validation() {
    assert_eq!(
        to_camel_case(&json!(123)),
        Err(CaseError::InvalidType { found: "number" })
    );
    assert_eq!(
        to_dot_case(&json!(null)),
        Err(CaseError::InvalidType { found: "null" })
    );

    let missing: Option<&str> = None;
    let err = to_pascal_case(missing).unwrap_err();
    assert_eq!(err.to_string(), "expected a string, but received undefined");
}

#[test]
fn kebab_and_dot_agree_on_words() {
    for input in CORPUS {
        let kebab = to_kebab_case(*input).unwrap();
        let dot = to_dot_case(*input).unwrap();
        assert_eq!(segments(&kebab, '-'), segments(&dot, '.'), "input {:?}", input);
    }
}

#[test]
fn no_separator_leakage() {
    for input in CORPUS {
        for convention in Convention::ALL {
            let out = recase::convert(*input, convention).unwrap();
            match convention.separator() {
                Some(sep) => {
                    let doubled: String = [sep, sep].iter().collect();
                    assert!(!out.starts_with(sep), "{:?} -> {:?}", input, out);
                    assert!(!out.ends_with(sep), "{:?} -> {:?}", input, out);
                    assert!(!out.contains(&doubled), "{:?} -> {:?}", input, out);
                }
                None => {
                    assert!(out.chars().all(|c| c.is_ascii_alphanumeric()), "{:?}", out);
                }
            }
        }
    }
}

#[test]
fn single_pass_matches_repeated_boundary_rule() {
    for input in CORPUS {
        assert_eq!(
            tokenize(input.trim()).into_vec(),
            multi_pass_words(input),
            "input {:?}",
            input
        );
    }
}

#[test]
fn acronyms_stay_together() {
    assert_eq!(to_kebab_case("parseHTTPResponse").unwrap(), "parse-httpresponse");
    assert_eq!(to_camel_case("getHTMLParserForURLs").unwrap(), "getHtmlparserForUrls");
    assert_eq!(to_pascal_case("ABCDef ghiJKL").unwrap(), "AbcdefGhiJkl");
}

#[test]
fn conversions_are_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("worker{}Input value", i);
                to_kebab_case(input.as_str()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("worker{}input-value", i));
    }
}
