// See https://github.com/html5lib/html5lib-tests/tree/master/tree-construction
use crate::types::Result;
use std::collections::HashMap;

/// Heading that opens a new record in the heading-driven flavor
const NEW_TEST_HEADING: &str = "data";

/// The two on-disk flavors of the fixture format. They are kept as separate
/// reader strategies because the harnesses generated for them expect
/// different things from the `#errors` section (message list vs. bare count).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FixtureFormat {
    /// `#`-prefixed section headings with free-form names; a recurring
    /// `data` heading starts the next record
    #[default]
    Sections,
    /// Literal `#data`/`#errors`/`#document` marker lines; a blank line is
    /// required to terminate each record
    Markers,
}

/// A single tree-construction test case
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestSpec {
    /// 1-based line number of the record in the fixture file
    pub line: usize,
    /// #data section
    pub data: String,
    /// #errors section, one entry per reported error
    pub errors: Vec<String>,
    /// #document-fragment section: container element for fragment cases
    pub document_fragment: Option<String>,
    /// #document section
    pub document: String,
}

/// Parses a fixture file into its test records using the given strategy
pub fn parse_fixture(input: &str, format: FixtureFormat) -> Result<Vec<TestSpec>> {
    match format {
        FixtureFormat::Sections => Ok(parse_sections(input)),
        FixtureFormat::Markers => Ok(parse_markers(input)),
    }
}

/// Heading-driven scan. Section bodies accumulate line by line under the most
/// recently seen heading; CR/LF line endings are normalized away.
fn parse_sections(input: &str) -> Vec<TestSpec> {
    let mut tests = Vec::new();
    let mut sections: HashMap<String, String> = HashMap::new();
    let mut current: Option<String> = None;
    let mut start_line = 1;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(heading) = line.strip_prefix('#') {
            let heading = heading.trim();

            if heading == NEW_TEST_HEADING && !sections.is_empty() {
                // The blank separator line was accumulated into the open
                // section; drop it before closing the record.
                if let Some(open) = current.as_ref().and_then(|key| sections.get_mut(key)) {
                    trim_last_newline(open);
                }
                tests.push(build_spec(&sections, start_line));
                sections.clear();
                start_line = index + 1;
            }

            current = Some(heading.to_string());
            sections.insert(heading.to_string(), String::new());
        } else if let Some(key) = &current {
            if let Some(body) = sections.get_mut(key) {
                body.push_str(line);
                body.push('\n');
            }
        }
        // Lines before the first heading are ignored
    }

    // End of input closes the open section. A record closed by the next
    // `data` heading is complete even when sections are missing (they default
    // to empty), but a trailing record that never reached a document section
    // is an editor artifact and is dropped.
    if sections.contains_key("document") {
        tests.push(build_spec(&sections, start_line));
    }

    tests
}

fn build_spec(sections: &HashMap<String, String>, line: usize) -> TestSpec {
    TestSpec {
        line,
        data: section(sections, NEW_TEST_HEADING).unwrap_or_default(),
        errors: section(sections, "errors")
            .map(|body| body.lines().map(String::from).collect())
            .unwrap_or_default(),
        document_fragment: section(sections, "document-fragment"),
        document: section(sections, "document").unwrap_or_default(),
    }
}

/// Returns a section body with the newline introduced by line accumulation
/// stripped, or None when the section is absent
fn section(sections: &HashMap<String, String>, key: &str) -> Option<String> {
    let mut body = sections.get(key)?.clone();
    trim_last_newline(&mut body);
    Some(body)
}

/// Trims only a single newline, even when there are multiple trailing ones
fn trim_last_newline(body: &mut String) {
    if body.ends_with('\n') {
        body.pop();
    }
}

/// Literal-marker scan. A record runs `#data` lines `#errors` lines
/// `#document` lines and is terminated by a blank line; a trailing record
/// left open at end of input is dropped.
fn parse_markers(input: &str) -> Vec<TestSpec> {
    let lines: Vec<&str> = input
        .lines()
        .map(|raw| raw.strip_suffix('\r').unwrap_or(raw))
        .collect();

    let mut tests = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i] != "#data" {
            i += 1;
            continue;
        }
        let start_line = i + 1;
        i += 1;

        let mut data = Vec::new();
        while i < lines.len() && lines[i] != "#errors" {
            data.push(lines[i]);
            i += 1;
        }
        if i == lines.len() {
            break;
        }
        i += 1;

        let mut errors = Vec::new();
        while i < lines.len() && lines[i] != "#document" {
            errors.push(lines[i].to_string());
            i += 1;
        }
        if i == lines.len() {
            break;
        }
        i += 1;

        let mut document = Vec::new();
        let mut terminated = false;
        while i < lines.len() {
            if lines[i].is_empty() {
                terminated = true;
                i += 1;
                break;
            }
            document.push(lines[i]);
            i += 1;
        }
        if !terminated {
            break;
        }

        tests.push(TestSpec {
            line: start_line,
            data: data.join("\n"),
            errors,
            document_fragment: None,
            document: document.join("\n"),
        });
    }

    tests
}
