///
/// DoubleStyle
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DoubleStyle {
    /// Literal syntax: integral doubles keep a `.0` so they stay distinct from
    /// integers.
    Literal,
    /// JSON number: no `.0` suffix.
    Json,
}

// Magnitudes outside [1e-6, 1e15) switch to exponent notation.
const EXP_LOW: f64 = 1e-6;
const EXP_HIGH: f64 = 1e15;

/// Shortest decimal that parses back to the same double.
///
/// Caller guarantees `value` is finite.
pub(crate) fn format_double(value: f64, style: DoubleStyle) -> String {
    let abs = value.abs();
    if abs != 0.0 && !(EXP_LOW..EXP_HIGH).contains(&abs) {
        return exponent_form(value);
    }

    let mut out = value.to_string();
    if style == DoubleStyle::Literal && !out.contains('.') {
        out.push_str(".0");
    }

    out
}

// `{:e}` gives the shortest mantissa but no explicit `+` on the exponent.
fn exponent_form(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}
