use crate::{
    config::ValueConfig,
    error::{MarshalReason, ValueError},
    marshal::{
        check_renderable,
        number::{DoubleStyle, format_double},
    },
    value::Value,
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Serialize, Serializer};
use serde_json::ser::Formatter;
use std::io;

///
/// JsonMarshaler
///
/// Interchange JSON. Separators carry one space (`[1, 2]`, `{"a": 1}`),
/// integral doubles drop their fraction, blobs become base64 strings.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JsonMarshaler {
    max_depth: usize,
}

impl JsonMarshaler {
    #[must_use]
    pub const fn new(config: &ValueConfig) -> Self {
        Self {
            max_depth: config.depth_limit(),
        }
    }

    pub fn marshal(&self, value: &Value) -> Result<String, ValueError> {
        check_renderable(value, self.max_depth)?;

        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
        JsonValue(value)
            .serialize(&mut serializer)
            .map_err(|err| encoder_failure(value, &err))?;

        String::from_utf8(out).map_err(|err| encoder_failure(value, &err))
    }
}

impl Default for JsonMarshaler {
    fn default() -> Self {
        Self::new(&ValueConfig::default())
    }
}

pub fn marshal_json(value: &Value) -> Result<String, ValueError> {
    JsonMarshaler::default().marshal(value)
}

// serde_json writing into a Vec only fails on a bug in this module
fn encoder_failure(value: &Value, err: &dyn std::error::Error) -> ValueError {
    tracing::debug!(kind = %value.kind(), error = %err, "json encoder failed");
    ValueError::marshal(value.kind(), MarshalReason::Encoder)
}

///
/// JsonValue
///
/// Serialize view of a value with the interchange mapping applied.
///

struct JsonValue<'a>(&'a Value);

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            // finite: `check_renderable` ran first
            Value::Double(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Blob(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
            Value::Array(items) => serializer.collect_seq(items.iter().map(JsonValue)),
            Value::Document(doc) => {
                serializer.collect_map(doc.iter().map(|(name, field)| (name, JsonValue(field))))
            }
        }
    }
}

///
/// SpacedFormatter
///
/// Compact JSON with `", "` and `": "` separators and the shared double
/// formatting.
///

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_double(value, DoubleStyle::Json).as_bytes())
    }
}
