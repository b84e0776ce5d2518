use crate::emitter::csharp::string_literal;
use crate::emitter::EmitterConfig;
use crate::tokenizer::fixture::{Root, TestSpec};
use crate::tokenizer::normalizer::normalize;
use crate::tokenizer::token::Token;
use crate::types::Result;

/// Which generation of the hand-written `DoTest` harness the generated
/// methods bind to. The two evolved independently and disagree on how an
/// empty attribute set is spelled; both are kept on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Generation {
    /// `DoTest(input, expectedOutput)`; an empty or absent attribute set is
    /// emitted as `null`
    Legacy,
    /// `DoTest(input, expectedOutput, contentModel, lastStartTag)`;
    /// attribute sets are always an explicit collection literal, and one
    /// method is emitted per declared content model
    #[default]
    Current,
}

/// Renders all cases of a tokenizer fixture into one compilable source file
pub fn generate(root: &Root, config: &EmitterConfig, generation: Generation) -> Result<String> {
    let prefix = config.method_prefix();
    let mut out = header(config);

    log::debug!("emitting {} tokenizer cases", root.tests.len());

    for (index, spec) in root.tests.iter().enumerate() {
        let mut tokens = spec.tokens()?;
        normalize(&mut tokens);

        let description = string_literal(&spec.description, config.syntax)?;
        let input = string_literal(&spec.unescaped_input(), config.syntax)?;
        let expected = expected_output(&tokens, config, generation)?;

        match generation {
            Generation::Legacy => {
                let name = format!("Test_{prefix}_{index}");
                push_method(
                    &mut out,
                    &description,
                    &name,
                    &format!("DoTest({input}, {expected});"),
                );
            }
            Generation::Current => {
                let last_start_tag =
                    string_literal(spec.last_start_tag.as_deref().unwrap_or_default(), config.syntax)?;

                for model in spec.content_models()? {
                    let name = if spec.has_explicit_content_models() {
                        format!("Test_{prefix}_{index}_{}", model.flag())
                    } else {
                        format!("Test_{prefix}_{index}")
                    };
                    push_method(
                        &mut out,
                        &description,
                        &name,
                        &format!(
                            "DoTest({input}, {expected}, {}, {last_start_tag});",
                            model.binding()
                        ),
                    );
                }
            }
        }
    }

    out.push_str(FOOTER);
    Ok(out)
}

/// Renders the expected token stream as a `new object[] { ... }` literal
fn expected_output(tokens: &[Token], config: &EmitterConfig, generation: Generation) -> Result<String> {
    let mut out = String::from("new object[] { ");

    for token in tokens {
        match token {
            Token::ParseError => out.push_str("\"ParseError\", "),
            Token::AtheistParseError => out.push_str("\"AtheistParseError\", "),
            Token::Doctype { name, correct } => {
                out.push_str(&format!(
                    "new object[] {{ \"DOCTYPE\", {}, {} }}, ",
                    string_literal(name, config.syntax)?,
                    if *correct { "true" } else { "false" }
                ));
            }
            Token::StartTag { name, attributes } => {
                out.push_str(&format!(
                    "new object[] {{ \"StartTag\", {}, {} }}, ",
                    string_literal(name, config.syntax)?,
                    attribute_literal(attributes, config, generation)?
                ));
            }
            Token::EndTag { name } => {
                out.push_str(&format!(
                    "new string[] {{ \"EndTag\", {} }}, ",
                    string_literal(name, config.syntax)?
                ));
            }
            Token::Comment(text) => {
                out.push_str(&format!(
                    "new string[] {{ \"Comment\", {} }}, ",
                    string_literal(text, config.syntax)?
                ));
            }
            Token::Character(text) => {
                out.push_str(&format!(
                    "new string[] {{ \"Character\", {} }}, ",
                    string_literal(text, config.syntax)?
                ));
            }
        }
    }

    out.push('}');
    Ok(out)
}

fn attribute_literal(
    attributes: &[(String, String)],
    config: &EmitterConfig,
    generation: Generation,
) -> Result<String> {
    // The legacy harness expects null rather than an empty collection
    if attributes.is_empty() && generation == Generation::Legacy {
        return Ok("null".into());
    }

    let mut out = String::from("new KeyValuePair<string,string>[] { ");
    for (key, value) in attributes {
        out.push_str(&format!(
            "new KeyValuePair<string,string>({}, {}), ",
            string_literal(key, config.syntax)?,
            string_literal(value, config.syntax)?
        ));
    }
    out.push('}');
    Ok(out)
}

fn push_method(out: &mut String, description: &str, name: &str, body: &str) {
    out.push_str(&format!(
        r#"
#if !NUNIT
        [TestMethod]
        [Description({description})]
#else
        [TestMethod(Description={description})]
#endif
        public void {name}()
        {{
            {body}
        }}
"#
    ));
}

fn header(config: &EmitterConfig) -> String {
    format!(
        r#"#if !NUNIT
using Microsoft.VisualStudio.TestTools.UnitTesting;
#else
using NUnit.Framework;
using TestClass = NUnit.Framework.TestFixtureAttribute;
using TestMethod = NUnit.Framework.TestAttribute;
using TestInitialize = NUnit.Framework.SetUpAttribute;
using TestCleanup = NUnit.Framework.TearDownAttribute;
using ClassInitialize = NUnit.Framework.TestFixtureSetUpAttribute;
using ClassCleanup = NUnit.Framework.TestFixtureTearDownAttribute;
#endif

using System;
using System.Collections.Generic;

namespace {}
{{
    public partial class {}
    {{
"#,
        config.namespace, config.class
    )
}

const FOOTER: &str = "    }\n}\n";
