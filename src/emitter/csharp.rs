use crate::types::{Error, Result};

/// How string values are rendered as C# literals
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringSyntax {
    /// Regular `"..."` literals with backslash escapes
    #[default]
    Escaped,
    /// Verbatim `@"..."` literals: quotes doubled, newlines kept as-is
    Verbatim,
}

/// Renders a value as a C# string literal, quotes included. A control
/// character the target syntax cannot carry is a fatal emit error.
pub fn string_literal(value: &str, syntax: StringSyntax) -> Result<String> {
    match syntax {
        StringSyntax::Escaped => escaped_literal(value),
        StringSyntax::Verbatim => Ok(verbatim_literal(value)),
    }
}

fn escaped_literal(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x20 => {
                return Err(Error::Emit(format!(
                    "cannot represent control character U+{:04X} in a string literal",
                    c as u32
                ))
                .into());
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}

fn verbatim_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 3);
    out.push_str("@\"");
    for c in value.chars() {
        if c == '"' {
            out.push_str("\"\"");
        } else {
            out.push(c);
        }
    }
    out.push('"');
    out
}
