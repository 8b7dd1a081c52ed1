use crate::{Kind, marshal::literal::LiteralError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Every failure the value layer can report. Incomparable top-level kinds are
/// not errors and never surface here.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    #[error("cannot marshal {kind} value: {reason}")]
    Marshal { kind: Kind, reason: MarshalReason },

    #[error("container nesting exceeds depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error(transparent)]
    Literal(#[from] LiteralError),
}

impl ValueError {
    pub(crate) const fn type_mismatch(expected: Kind, found: Kind) -> Self {
        Self::TypeMismatch { expected, found }
    }

    pub(crate) const fn marshal(kind: Kind, reason: MarshalReason) -> Self {
        Self::Marshal { kind, reason }
    }

    /// Return a stable error kind independent of message text.
    #[must_use]
    pub const fn kind(&self) -> ValueErrorKind {
        match self {
            Self::TypeMismatch { .. } => ValueErrorKind::TypeMismatch,
            Self::Marshal { .. } => ValueErrorKind::Marshal,
            Self::DepthLimitExceeded { .. } => ValueErrorKind::DepthLimitExceeded,
            Self::Literal(_) => ValueErrorKind::Literal,
        }
    }
}

///
/// ValueErrorKind
///
/// Stable error-kind taxonomy for value-layer failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueErrorKind {
    TypeMismatch,
    Marshal,
    DepthLimitExceeded,
    Literal,
}

impl ValueErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::Marshal => "marshal",
            Self::DepthLimitExceeded => "depth_limit_exceeded",
            Self::Literal => "literal",
        }
    }
}

impl fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// MarshalReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarshalReason {
    /// NaN or an infinity; neither literal syntax nor JSON can spell it.
    NonFiniteDouble,
    /// Nesting deeper than the configured limit.
    TooDeep { limit: usize },
    /// The underlying encoder rejected already-validated output.
    Encoder,
}

impl fmt::Display for MarshalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteDouble => f.write_str("non-finite double has no literal form"),
            Self::TooDeep { limit } => write!(f, "nesting exceeds depth limit of {limit}"),
            Self::Encoder => f.write_str("encoder failure"),
        }
    }
}
