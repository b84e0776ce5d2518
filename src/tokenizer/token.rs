use crate::types::{Error, Result};
use serde_json::Value;

/// A single token as declared in a fixture's expected output. The JSON form
/// is heterogeneous: a bare `"ParseError"` string, or a `[kind, ...fields]`
/// array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    ParseError,
    /// Error marker only the oldest fixture files carry; emitted verbatim
    /// and never relocated by normalization
    AtheistParseError,
    Doctype {
        name: String,
        correct: bool,
    },
    StartTag {
        name: String,
        /// Attributes in fixture insertion order, keys unique within a tag
        attributes: Vec<(String, String)>,
    },
    EndTag {
        name: String,
    },
    Comment(String),
    Character(String),
}

impl Token {
    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(self, Self::Character(_))
    }

    /// Decodes a single token from its fixture representation
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) if s == "ParseError" => Ok(Self::ParseError),
            Value::String(s) if s == "AtheistParseError" => Ok(Self::AtheistParseError),
            Value::Array(parts) => Self::from_parts(parts),
            _ => Err(Error::Fixture(format!("unsupported token value: {value}")).into()),
        }
    }

    fn from_parts(parts: &[Value]) -> Result<Self> {
        let kind = parts
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Fixture("token array without a kind tag".into()))?;

        match kind {
            "DOCTYPE" => Ok(Self::Doctype {
                // A doctype name can be JSON null in the fixtures
                name: parts.get(1).and_then(Value::as_str).unwrap_or_default().into(),
                correct: parts.get(2).and_then(Value::as_bool).unwrap_or(false),
            }),
            "StartTag" => Ok(Self::StartTag {
                name: text_field(parts, 1, kind)?,
                attributes: attributes_field(parts.get(2))?,
            }),
            "EndTag" => Ok(Self::EndTag {
                name: text_field(parts, 1, kind)?,
            }),
            "Comment" => Ok(Self::Comment(text_field(parts, 1, kind)?)),
            "Character" => Ok(Self::Character(text_field(parts, 1, kind)?)),
            _ => Err(Error::Fixture(format!("unknown token kind: {kind}")).into()),
        }
    }
}

fn text_field(parts: &[Value], index: usize, kind: &str) -> Result<String> {
    parts
        .get(index)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::Fixture(format!("{kind} token is missing field {index}")).into())
}

/// An absent or null attribute map is a valid fixture spelling for "no
/// attributes". With `preserve_order` enabled the map iterates in insertion
/// order, which the emitters rely on for stable output.
fn attributes_field(value: Option<&Value>) -> Result<Vec<(String, String)>> {
    let map = match value {
        None | Some(Value::Null) => return Ok(vec![]),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(Error::Fixture(format!("unsupported attribute map: {other}")).into());
        }
    };

    let mut attributes = Vec::with_capacity(map.len());
    for (key, value) in map {
        let value = value
            .as_str()
            .ok_or_else(|| Error::Fixture(format!("non-string attribute value for {key}")))?;
        attributes.push((key.clone(), value.into()));
    }

    Ok(attributes)
}
