pub mod compare;
mod document;
mod json;

#[cfg(test)]
mod tests;

use crate::{Kind, error::ValueError};

// re-exports
pub use document::Document;

///
/// Value
///
/// One database value. The payload always matches the kind; there is no way
/// to change the kind of an existing value.
///
/// NOTE:
/// The derived `PartialEq` is structural identity (document field order
/// matters, `Integer(2) != Double(2.0)`, `NaN != NaN`). Query semantics go
/// through [`compare`](crate::value::compare) instead.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    Array(Vec<Self>),
    Document(Document),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(bytes.into())
    }

    /// Build an array from anything convertible into values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a document from `(name, value)` pairs. Later duplicates replace
    /// earlier ones in place.
    pub fn document<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Document(fields.into_iter().collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Integer(_) => Kind::Integer,
            Self::Double(_) => Kind::Double,
            Self::Text(_) => Kind::Text,
            Self::Blob(_) => Kind::Blob,
            Self::Array(_) => Kind::Array,
            Self::Document(_) => Kind::Document,
        }
    }

    /// Stable lowercase kind label, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().label()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    ///
    /// ACCESSORS
    ///

    pub const fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(ValueError::type_mismatch(Kind::Bool, other.kind())),
        }
    }

    pub const fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            Self::Integer(i) => Ok(*i),
            other => Err(ValueError::type_mismatch(Kind::Integer, other.kind())),
        }
    }

    pub const fn as_double(&self) -> Result<f64, ValueError> {
        match self {
            Self::Double(f) => Ok(*f),
            other => Err(ValueError::type_mismatch(Kind::Double, other.kind())),
        }
    }

    pub const fn as_text(&self) -> Result<&str, ValueError> {
        match self {
            Self::Text(s) => Ok(s.as_str()),
            other => Err(ValueError::type_mismatch(Kind::Text, other.kind())),
        }
    }

    pub const fn as_blob(&self) -> Result<&[u8], ValueError> {
        match self {
            Self::Blob(b) => Ok(b.as_slice()),
            other => Err(ValueError::type_mismatch(Kind::Blob, other.kind())),
        }
    }

    pub const fn as_array(&self) -> Result<&[Self], ValueError> {
        match self {
            Self::Array(items) => Ok(items.as_slice()),
            other => Err(ValueError::type_mismatch(Kind::Array, other.kind())),
        }
    }

    pub const fn as_document(&self) -> Result<&Document, ValueError> {
        match self {
            Self::Document(doc) => Ok(doc),
            other => Err(ValueError::type_mismatch(Kind::Document, other.kind())),
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool     => Bool,
    i8       => Integer,
    i16      => Integer,
    i32      => Integer,
    i64      => Integer,
    u8       => Integer,
    u16      => Integer,
    u32      => Integer,
    f32      => Double,
    f64      => Double,
    &str     => Text,
    String   => Text,
    Vec<u8>  => Blob,
    &[u8]    => Blob,
    Document => Document,
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_try_from_value {
    ( $( $type:ty => $accessor:ident ),* $(,)? ) => {
        $(
            impl TryFrom<&Value> for $type {
                type Error = ValueError;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    value.$accessor().map(Into::into)
                }
            }
        )*
    };
}

impl_try_from_value! {
    bool    => as_bool,
    i64     => as_integer,
    f64     => as_double,
    String  => as_text,
    Vec<u8> => as_blob,
}
