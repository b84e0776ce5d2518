//! Emission of generated C# test sources from parsed fixture cases.

pub mod csharp;
pub mod tokenization;
pub mod tree_construction;

use crate::emitter::csharp::StringSyntax;

/// Settings shared by the emitters
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Caller-supplied prefix spliced into generated method names. May be a
    /// dotted identifier such as a fixture file name; dots are rewritten
    /// before use.
    pub prefix: String,
    /// Namespace of the emitted partial class
    pub namespace: String,
    /// Name of the emitted partial class
    pub class: String,
    /// How string literals are rendered
    pub syntax: StringSyntax,
}

impl EmitterConfig {
    #[must_use]
    pub fn new(prefix: impl Into<String>, namespace: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            namespace: namespace.into(),
            class: class.into(),
            syntax: StringSyntax::default(),
        }
    }

    /// The prefix as it appears in method names: `.` becomes `_` so a file
    /// name like `test1.test` yields valid identifiers
    #[must_use]
    pub fn method_prefix(&self) -> String {
        self.prefix.replace('.', "_")
    }
}
