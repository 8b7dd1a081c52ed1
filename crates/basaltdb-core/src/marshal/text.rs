use crate::{
    config::ValueConfig,
    error::ValueError,
    marshal::{
        check_renderable, is_bare_identifier,
        number::{DoubleStyle, format_double},
    },
    value::{Document, Value},
};

///
/// TextMarshaler
///
/// Renders values as query-language literals:
///
/// | kind     | literal                                  |
/// |----------|------------------------------------------|
/// | null     | `NULL`                                   |
/// | bool     | `true` / `false`                         |
/// | integer  | `-12`                                    |
/// | double   | `10.0`, `0.5`, `1e+15`                   |
/// | text     | `"a \"quoted\" word"`                    |
/// | blob     | `"\x626172"`                             |
/// | array    | `[1, "a"]`                               |
/// | document | ``{a: 1, `b c`: 2}`` (insertion order)   |
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextMarshaler {
    max_depth: usize,
}

impl TextMarshaler {
    #[must_use]
    pub const fn new(config: &ValueConfig) -> Self {
        Self {
            max_depth: config.depth_limit(),
        }
    }

    /// Single-line literal.
    pub fn marshal(&self, value: &Value) -> Result<String, ValueError> {
        self.render(value, None)
    }

    /// Multi-line literal: one container element per line, each nesting
    /// level prefixed by another copy of `indent`.
    pub fn marshal_indent(
        &self,
        value: &Value,
        newline: &str,
        indent: &str,
    ) -> Result<String, ValueError> {
        self.render(value, Some(Layout { newline, indent }))
    }

    fn render(&self, value: &Value, layout: Option<Layout<'_>>) -> Result<String, ValueError> {
        check_renderable(value, self.max_depth)?;

        let mut writer = TextWriter {
            out: String::new(),
            layout,
        };
        writer.value(value, 0);

        Ok(writer.out)
    }
}

impl Default for TextMarshaler {
    fn default() -> Self {
        Self::new(&ValueConfig::default())
    }
}

pub fn marshal_text(value: &Value) -> Result<String, ValueError> {
    TextMarshaler::default().marshal(value)
}

pub fn marshal_text_indent(value: &Value, newline: &str, indent: &str) -> Result<String, ValueError> {
    TextMarshaler::default().marshal_indent(value, newline, indent)
}

///
/// Layout
///

#[derive(Clone, Copy)]
struct Layout<'a> {
    newline: &'a str,
    indent: &'a str,
}

///
/// TextWriter
///
/// Infallible once `check_renderable` has passed; recursion is bounded by
/// the same depth limit.
///

struct TextWriter<'a> {
    out: String,
    layout: Option<Layout<'a>>,
}

impl TextWriter<'_> {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.out.push_str("NULL"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => self.out.push_str(&i.to_string()),
            Value::Double(f) => self.out.push_str(&format_double(*f, DoubleStyle::Literal)),
            Value::Text(s) => write_quoted(&mut self.out, s),
            Value::Blob(bytes) => {
                self.out.push_str("\"\\x");
                self.out.push_str(&hex::encode(bytes));
                self.out.push('"');
            }
            Value::Array(items) => self.array(items, depth),
            Value::Document(doc) => self.document(doc, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        self.out.push('[');
        for (index, item) in items.iter().enumerate() {
            self.separator(index, depth + 1);
            self.value(item, depth + 1);
        }
        self.close(!items.is_empty(), depth);
        self.out.push(']');
    }

    fn document(&mut self, doc: &Document, depth: usize) {
        self.out.push('{');
        for (index, (name, field)) in doc.iter().enumerate() {
            self.separator(index, depth + 1);
            self.field_name(name);
            self.out.push_str(": ");
            self.value(field, depth + 1);
        }
        self.close(!doc.is_empty(), depth);
        self.out.push('}');
    }

    // Emit what goes before the element at `index` inside a container.
    fn separator(&mut self, index: usize, depth: usize) {
        match self.layout {
            Some(layout) => {
                if index > 0 {
                    self.out.push(',');
                }
                self.line(layout, depth);
            }
            None if index > 0 => self.out.push_str(", "),
            None => {}
        }
    }

    fn close(&mut self, non_empty: bool, depth: usize) {
        if let Some(layout) = self.layout
            && non_empty
        {
            self.line(layout, depth);
        }
    }

    fn line(&mut self, layout: Layout<'_>, depth: usize) {
        self.out.push_str(layout.newline);
        for _ in 0..depth {
            self.out.push_str(layout.indent);
        }
    }

    fn field_name(&mut self, name: &str) {
        if is_bare_identifier(name) {
            self.out.push_str(name);
            return;
        }

        self.out.push('`');
        self.out.push_str(&name.replace('`', "``"));
        self.out.push('`');
    }
}

/// Double-quoted text. Control characters use `\uXXXX` so a text never opens
/// with the `\x` blob marker.
fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
}
