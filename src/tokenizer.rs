//! Tokenization fixtures: the JSON test-case format, the expected token
//! stream model and its canonicalization.

pub mod fixture;
pub mod normalizer;
pub mod token;

use crate::types::{Error, Result};

/// Tokenizer state a test case must be run under, as declared by the
/// fixture's content-model flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentModel {
    #[default]
    Pcdata,
    Rcdata,
    Cdata,
    Plaintext,
}

impl ContentModel {
    /// Parses the flag spelling used in fixture files
    pub fn from_flag(flag: &str) -> Result<Self> {
        match flag {
            "PCDATA" => Ok(Self::Pcdata),
            "RCDATA" => Ok(Self::Rcdata),
            "CDATA" => Ok(Self::Cdata),
            "PLAINTEXT" => Ok(Self::Plaintext),
            _ => Err(Error::Fixture(format!("unknown content model flag: {flag}")).into()),
        }
    }

    /// The flag spelling, used as a method name suffix in generated sources
    #[must_use]
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Pcdata => "PCDATA",
            Self::Rcdata => "RCDATA",
            Self::Cdata => "CDATA",
            Self::Plaintext => "PLAINTEXT",
        }
    }

    /// The C# enum member the generated test passes to the harness
    #[must_use]
    pub fn binding(&self) -> &'static str {
        match self {
            Self::Pcdata => "ContentModel.Pcdata",
            Self::Rcdata => "ContentModel.Rcdata",
            Self::Cdata => "ContentModel.Cdata",
            Self::Plaintext => "ContentModel.PlainText",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_flags() {
        assert_eq!(ContentModel::from_flag("PCDATA").unwrap(), ContentModel::Pcdata);
        assert_eq!(ContentModel::from_flag("PLAINTEXT").unwrap(), ContentModel::Plaintext);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(ContentModel::from_flag("SCRIPT DATA").is_err());
    }

    #[test]
    fn bindings() {
        assert_eq!(ContentModel::Rcdata.binding(), "ContentModel.Rcdata");
        assert_eq!(ContentModel::Plaintext.binding(), "ContentModel.PlainText");
    }
}
