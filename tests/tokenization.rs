use html5lib_testgen::emitter::tokenization::{self, Generation};
use html5lib_testgen::emitter::EmitterConfig;
use html5lib_testgen::tokenizer::fixture::read_fixture_from_path;
use html5lib_testgen::tokenizer::normalizer::normalize;
use test_case::test_case;

const FIXTURE_ROOT: &str = "./tests/data/tokenizer";

fn generate(generation: Generation) -> String {
    let root = read_fixture_from_path(format!("{FIXTURE_ROOT}/sample.test")).expect("fixture");
    let config = EmitterConfig::new("sample.test", "Html5.Tests", "HtmlTokenizationTest");
    tokenization::generate(&root, &config, generation).expect("generated source")
}

// The fixture holds five cases; one declares two content models, which only
// the current harness generation expands.
#[test_case(Generation::Current, 6)]
#[test_case(Generation::Legacy, 5)]
fn method_count_matches_cases(generation: Generation, expected: usize) {
    let source = generate(generation);
    assert_eq!(source.matches("public void Test_").count(), expected);
}

#[test]
fn current_generation_end_to_end() {
    let source = generate(Generation::Current);

    assert!(source.starts_with("#if !NUNIT"));
    assert!(source.contains("namespace Html5.Tests"));
    assert!(source.contains("public partial class HtmlTokenizationTest"));

    // Zero-based indices in arrival order, model suffix only on the case
    // that declares its content models
    assert!(source.contains("public void Test_sample_test_0()"));
    assert!(source.contains("public void Test_sample_test_3_RCDATA()"));
    assert!(source.contains("public void Test_sample_test_3_CDATA()"));
    assert!(source.contains("public void Test_sample_test_4()"));

    // The interrupted character run is merged and the error pulled in front
    assert!(source.contains(
        "DoTest(\"a&b\", new object[] { \"ParseError\", new string[] { \"Character\", \"a&b\" }, }"
    ));

    // Attribute order from the fixture survives into the emitted literal
    assert!(source.contains(
        "new KeyValuePair<string,string>(\"id\", \"x\"), new KeyValuePair<string,string>(\"class\", \"y\"), "
    ));

    // Quotes in the input are escaped in the emitted literal
    assert!(source.contains("DoTest(\"<a id=\\\"x\\\" class=\\\"y\\\">\""));

    assert!(source.contains("ContentModel.Rcdata, \"title\""));
    assert!(source.ends_with("    }\n}\n"));
}

#[test]
fn legacy_generation_end_to_end() {
    let source = generate(Generation::Legacy);

    assert!(source.contains("public void Test_sample_test_3()"));
    assert!(!source.contains("ContentModel."));
    assert!(!source.contains("_RCDATA"));
}

#[test]
fn normalization_is_idempotent_over_the_fixture() {
    let root = read_fixture_from_path(format!("{FIXTURE_ROOT}/sample.test")).expect("fixture");

    for spec in &root.tests {
        let mut tokens = spec.tokens().expect("tokens");
        normalize(&mut tokens);

        for pair in tokens.windows(2) {
            assert!(!(pair[0].is_character() && pair[1].is_character()));
        }

        let once = tokens.clone();
        normalize(&mut tokens);
        assert_eq!(tokens, once);
    }
}
