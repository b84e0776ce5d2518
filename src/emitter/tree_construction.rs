use crate::emitter::csharp::string_literal;
use crate::emitter::EmitterConfig;
use crate::tree_construction::parser::TestSpec;
use crate::types::Result;

/// How the generated `DoTest` call reports the `#errors` section. The two
/// harness generations disagree: one compares error messages, the other only
/// counts them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorStyle {
    /// `DoTest(input, fragmentContainer, expectedOutput, string[] errors)`
    #[default]
    Messages,
    /// `DoTest(input, errorCount, expectedOutput)`
    Count,
}

/// Renders all records of a tree-construction fixture into one compilable
/// source file
pub fn generate(tests: &[TestSpec], config: &EmitterConfig, style: ErrorStyle) -> Result<String> {
    let prefix = config.method_prefix();
    let mut out = header(config);

    log::debug!("emitting {} tree-construction cases", tests.len());

    for (index, spec) in tests.iter().enumerate() {
        let input = string_literal(&spec.data, config.syntax)?;
        let document = string_literal(&spec.document, config.syntax)?;

        let invocation = match style {
            ErrorStyle::Messages => {
                let fragment = match &spec.document_fragment {
                    Some(container) => string_literal(container, config.syntax)?,
                    None => "null".into(),
                };
                let mut errors = String::from("new string[] { ");
                for (n, error) in spec.errors.iter().enumerate() {
                    if n > 0 {
                        errors.push_str(", ");
                    }
                    errors.push_str(&string_literal(error, config.syntax)?);
                }
                errors.push_str(" }");
                format!("DoTest({input}, {fragment}, {document}, {errors});")
            }
            ErrorStyle::Count => {
                format!("DoTest({input}, {}, {document});", spec.errors.len())
            }
        };

        out.push_str(&format!(
            r#"
        [TestMethod]
        [Description({input})]
#if NUNIT
        [Category("TreeConstruction.{prefix}")]
#endif
        public void Test_{prefix}_{index}()
        {{
            {invocation}
        }}
"#
        ));
    }

    out.push_str(FOOTER);
    Ok(out)
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

namespace {}
{{
    public partial class {}
    {{
"#,
        config.namespace, config.class
    )
}

const FOOTER: &str = "    }\n}\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_construction::parser::{parse_fixture, FixtureFormat};

    fn config() -> EmitterConfig {
        EmitterConfig::new("tests1.dat", "Html5.Tests", "HtmlTreeConstructionTest")
    }

    fn specs(input: &str, format: FixtureFormat) -> Vec<TestSpec> {
        parse_fixture(input, format).unwrap()
    }

    #[test]
    fn empty_fixture_emits_only_boilerplate() {
        let source = generate(&[], &config(), ErrorStyle::Messages).unwrap();

        assert!(source.starts_with("#if !NUNIT"));
        assert!(!source.contains("public void Test_"));
        assert!(source.ends_with("    }\n}\n"));
    }

    #[test]
    fn message_style_invocation() {
        let tests = specs(
            "#data\nTest\n#errors\nexpected-doctype-but-got-chars\n#document\n| <html>\n| \"Test\"\n",
            FixtureFormat::Sections,
        );
        let source = generate(&tests, &config(), ErrorStyle::Messages).unwrap();

        assert!(source.contains("public void Test_tests1_dat_0()"));
        assert!(source.contains("[Category(\"TreeConstruction.tests1_dat\")]"));
        assert!(source.contains(
            "DoTest(\"Test\", null, \"| <html>\\n| \\\"Test\\\"\", new string[] { \"expected-doctype-but-got-chars\" });"
        ));
    }

    #[test]
    fn message_style_with_fragment_container() {
        let tests = specs(
            "#data\n<td>x\n#errors\ne\n#document-fragment\ntable\n#document\n| <td>\n",
            FixtureFormat::Sections,
        );
        let source = generate(&tests, &config(), ErrorStyle::Messages).unwrap();

        assert!(source.contains("DoTest(\"<td>x\", \"table\", \"| <td>\", new string[] { \"e\" });"));
    }

    #[test]
    fn count_style_invocation() {
        let tests = specs(
            "#data\na\n#errors\ne1\ne2\n#document\n| \"a\"\n\n",
            FixtureFormat::Markers,
        );
        let source = generate(&tests, &config(), ErrorStyle::Count).unwrap();

        assert!(source.contains("DoTest(\"a\", 2, \"| \\\"a\\\"\");"));
        assert!(!source.contains("new string[]"));
    }

    #[test]
    fn description_carries_the_escaped_input() {
        let tests = specs(
            "#data\n<div>\n<p>\n#errors\n#document\n| <div>\n",
            FixtureFormat::Sections,
        );
        let source = generate(&tests, &config(), ErrorStyle::Messages).unwrap();

        assert!(source.contains("[Description(\"<div>\\n<p>\")]"));
    }

    #[test]
    fn one_method_per_record() {
        let tests = specs(
            "#data\na\n#errors\n#document\n| \"a\"\n\n#data\nb\n#errors\n#document\n| \"b\"\n",
            FixtureFormat::Sections,
        );
        let source = generate(&tests, &config(), ErrorStyle::Messages).unwrap();

        assert_eq!(source.matches("public void Test_").count(), 2);
        assert!(source.contains("Test_tests1_dat_0()"));
        assert!(source.contains("Test_tests1_dat_1()"));
    }
}
