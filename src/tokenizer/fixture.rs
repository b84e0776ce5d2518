use crate::tokenizer::token::Token;
use crate::tokenizer::ContentModel;
use crate::types::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Holds all tests as found in a tokenizer fixture file
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub tests: Vec<TestSpec>,
}

/// A single tokenizer test case as authored in the fixture file
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSpec {
    pub description: String,
    pub input: String,
    /// Expected token stream; entries are either the bare string
    /// "ParseError" or a tagged array
    pub output: Vec<Value>,
    #[serde(default)]
    pub content_model_flags: Option<Vec<String>>,
    #[serde(default)]
    pub content_model_flag: Option<String>,
    #[serde(default)]
    pub last_start_tag: Option<String>,
    #[serde(default)]
    pub double_escaped: Option<bool>,
}

impl TestSpec {
    /// Content models this case runs under. Defaults to PCDATA when the
    /// fixture lists none.
    pub fn content_models(&self) -> Result<Vec<ContentModel>> {
        if let Some(flags) = &self.content_model_flags {
            return flags.iter().map(|f| ContentModel::from_flag(f)).collect();
        }
        if let Some(flag) = &self.content_model_flag {
            return Ok(vec![ContentModel::from_flag(flag)?]);
        }
        Ok(vec![ContentModel::default()])
    }

    /// True when the fixture names its content models rather than relying on
    /// the PCDATA default. Generated method names only carry a model suffix
    /// for these cases.
    #[must_use]
    pub fn has_explicit_content_models(&self) -> bool {
        self.content_model_flags.is_some() || self.content_model_flag.is_some()
    }

    /// The input text with `\uXXXX` sequences decoded for double-escaped
    /// fixtures
    #[must_use]
    pub fn unescaped_input(&self) -> String {
        if self.double_escaped.unwrap_or(false) {
            unescape(&self.input)
        } else {
            self.input.clone()
        }
    }

    /// Decodes the expected output into the token model, applying
    /// double-escaping to text payloads where the fixture asks for it
    pub fn tokens(&self) -> Result<Vec<Token>> {
        let mut tokens = self
            .output
            .iter()
            .map(Token::from_value)
            .collect::<Result<Vec<_>>>()?;

        if self.double_escaped.unwrap_or(false) {
            for token in &mut tokens {
                match token {
                    Token::Character(text) | Token::Comment(text) => {
                        *text = unescape(text);
                    }
                    _ => {}
                }
            }
        }

        Ok(tokens)
    }
}

lazy_static! {
    static ref UNICODE_ESCAPE: Regex =
        Regex::new(r"\\u([0-9a-fA-F]{4})").expect("valid escape pattern");
}

/// Decodes `\uXXXX` sequences in double-escaped fixture strings. Lone
/// surrogates become U+FFFD.
#[must_use]
pub fn unescape(input: &str) -> String {
    UNICODE_ESCAPE
        .replace_all(input, |caps: &regex::Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
                .to_string()
        })
        .into_owned()
}

/// Reads a tokenizer fixture file. Malformed JSON is fatal.
pub fn read_fixture_from_path(path: impl AsRef<Path>) -> Result<Root> {
    let contents = fs::read_to_string(&path)?;
    let root: Root = serde_json::from_str(&contents)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::ContentModel;

    #[test]
    fn minimal_case() {
        let root: Root = serde_json::from_str(
            r#"{"tests": [{"description": "basic", "input": "a", "output": [["Character", "a"]]}]}"#,
        )
        .unwrap();

        assert_eq!(root.tests.len(), 1);
        let spec = &root.tests[0];
        assert_eq!(spec.description, "basic");
        assert_eq!(spec.content_models().unwrap(), vec![ContentModel::Pcdata]);
        assert!(!spec.has_explicit_content_models());
        assert_eq!(spec.tokens().unwrap(), vec![Token::Character("a".into())]);
    }

    #[test]
    fn content_model_flags() {
        let root: Root = serde_json::from_str(
            r#"{"tests": [{
                "description": "cm",
                "input": "<b>",
                "output": [],
                "contentModelFlags": ["RCDATA", "CDATA"],
                "lastStartTag": "textarea"
            }]}"#,
        )
        .unwrap();

        let spec = &root.tests[0];
        assert!(spec.has_explicit_content_models());
        assert_eq!(
            spec.content_models().unwrap(),
            vec![ContentModel::Rcdata, ContentModel::Cdata]
        );
        assert_eq!(spec.last_start_tag.as_deref(), Some("textarea"));
    }

    #[test]
    fn singular_content_model_flag() {
        let root: Root = serde_json::from_str(
            r#"{"tests": [{
                "description": "cm",
                "input": "x",
                "output": [],
                "contentModelFlag": "PLAINTEXT"
            }]}"#,
        )
        .unwrap();

        assert_eq!(
            root.tests[0].content_models().unwrap(),
            vec![ContentModel::Plaintext]
        );
    }

    #[test]
    fn unknown_content_model_flag_is_fatal() {
        let root: Root = serde_json::from_str(
            r#"{"tests": [{
                "description": "cm",
                "input": "x",
                "output": [],
                "contentModelFlags": ["SGML"]
            }]}"#,
        )
        .unwrap();

        assert!(root.tests[0].content_models().is_err());
    }

    #[test]
    fn double_escaped_input_and_output() {
        let root: Root = serde_json::from_str(
            r#"{"tests": [{
                "description": "de",
                "input": "\\u0041",
                "output": [["Character", "\\u0041"]],
                "doubleEscaped": true
            }]}"#,
        )
        .unwrap();

        let spec = &root.tests[0];
        assert_eq!(spec.unescaped_input(), "A");
        assert_eq!(spec.tokens().unwrap(), vec![Token::Character("A".into())]);
    }

    #[test]
    fn unescape_leaves_plain_text_alone() {
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape("\\u00e9"), "é");
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(serde_json::from_str::<Root>(r#"{"tests": ["#).is_err());
    }
}
