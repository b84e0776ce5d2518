use crate::tree_construction::parser::{parse_fixture, FixtureFormat, TestSpec};
use crate::types::Result;
use std::fs;
use std::path::Path;

/// Holds all tests as found in the given fixture file
#[derive(Debug, PartialEq)]
pub struct FixtureFile {
    /// All the tests extracted from this fixture file
    pub tests: Vec<TestSpec>,
    /// Path to the fixture file
    pub path: String,
}

/// Reads a given fixture file and extracts all test records
pub fn read_fixture_from_path(path: impl AsRef<Path>, format: FixtureFormat) -> Result<FixtureFile> {
    let input = fs::read_to_string(&path)?;
    let path = path.as_ref().to_string_lossy().into_owned();

    let tests = parse_fixture(&input, format)?;

    Ok(FixtureFile { tests, path })
}
