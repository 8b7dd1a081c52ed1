//! Value marshalers.
//!
//! - [`text`]: literal syntax the query language parses back into an Equal
//!   value, compact or indented.
//! - [`json`]: JSON interchange; does not round-trip the Integer/Double split
//!   or blobs.
//! - [`literal`]: reader for the text marshaler's output.
//!
//! Both marshalers validate the whole value before writing anything, so a
//! failed call never yields partial output.

pub mod json;
pub mod literal;
mod number;
pub mod text;


use crate::{
    Kind,
    error::{MarshalReason, ValueError},
    value::Value,
};

// re-exports
pub use json::{JsonMarshaler, marshal_json};
pub use literal::{LiteralError, LiteralErrorReason, LiteralReader, parse_literal};
pub use text::{TextMarshaler, marshal_text, marshal_text_indent};

/// Reject values neither marshaler can spell.
pub(crate) fn check_renderable(value: &Value, max_depth: usize) -> Result<(), ValueError> {
    let mut pending = vec![(value, 0usize)];

    while let Some((value, depth)) = pending.pop() {
        match value {
            Value::Double(f) if !f.is_finite() => {
                tracing::debug!(value = %f, "refusing to marshal non-finite double");
                return Err(ValueError::marshal(
                    Kind::Double,
                    MarshalReason::NonFiniteDouble,
                ));
            }
            Value::Array(items) => {
                let depth = enter(value.kind(), depth, max_depth)?;
                pending.extend(items.iter().map(|item| (item, depth)));
            }
            Value::Document(doc) => {
                let depth = enter(value.kind(), depth, max_depth)?;
                pending.extend(doc.iter().map(|(_, field)| (field, depth)));
            }
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::Text(_)
            | Value::Blob(_) => {}
        }
    }

    Ok(())
}

fn enter(kind: Kind, depth: usize, max_depth: usize) -> Result<usize, ValueError> {
    let depth = depth + 1;
    if depth > max_depth {
        tracing::debug!(%kind, depth, limit = max_depth, "refusing to marshal over-deep value");
        return Err(ValueError::marshal(
            kind,
            MarshalReason::TooDeep { limit: max_depth },
        ));
    }

    Ok(depth)
}

// Words the literal grammar claims; field names spelled like these are quoted.
const KEYWORDS: [&str; 3] = ["NULL", "TRUE", "FALSE"];

/// True when `name` can appear unquoted as a document field name.
#[must_use]
pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}
