//! Comparison engine.
//!
//! Two orders live here:
//!
//! - [`compare`] is the predicate order. It answers `None` for top-level
//!   kind pairs that cannot be compared (see [`table`]), which every
//!   relational operator treats as "not satisfied" and `!=` as satisfied.
//! - [`canonical_cmp`] is the total order used inside containers, for sort
//!   keys and index keys. Mixed kinds are ordered by nested rank.
//!
//! For every top-level pair that *is* comparable the two orders agree, and
//! any storage encoding of a value must be monotonic with [`canonical_cmp`].

mod nested;
mod numeric;
pub mod table;


use crate::{config::ValueConfig, error::ValueError, value::Value};
use std::{cmp::Ordering, fmt};

// re-exports
pub use table::Comparability;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Gt, Self::Gte, Self::Lt, Self::Lte];

    /// Query-language spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Operator with its operands swapped (`a > b` ⇔ `b < a`).
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Eq => Self::Eq,
            Self::Ne => Self::Ne,
            Self::Gt => Self::Lt,
            Self::Gte => Self::Lte,
            Self::Lt => Self::Gt,
            Self::Lte => Self::Gte,
        }
    }

    /// Decide the operator from a predicate-order result.
    #[must_use]
    pub const fn holds(self, ordering: Option<Ordering>) -> bool {
        match ordering {
            Some(ord) => match self {
                Self::Eq => ord.is_eq(),
                Self::Ne => ord.is_ne(),
                Self::Gt => ord.is_gt(),
                Self::Gte => ord.is_ge(),
                Self::Lt => ord.is_lt(),
                Self::Lte => ord.is_le(),
            },
            None => matches!(self, Self::Ne),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// Comparator
///
/// Comparison entry points bound to a nesting limit. The free functions in
/// this module use the default limit.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Comparator {
    max_depth: usize,
}

impl Comparator {
    #[must_use]
    pub const fn new(config: &ValueConfig) -> Self {
        Self {
            max_depth: config.depth_limit(),
        }
    }

    /// Predicate order; `None` when the top-level kinds are incomparable.
    pub fn compare(&self, left: &Value, right: &Value) -> Result<Option<Ordering>, ValueError> {
        match table::top_level(left.kind(), right.kind()) {
            Comparability::Incomparable => Ok(None),
            Comparability::Ordered => self.canonical_cmp(left, right).map(Some),
        }
    }

    /// Canonical total order.
    pub fn canonical_cmp(&self, left: &Value, right: &Value) -> Result<Ordering, ValueError> {
        nested::canonical_cmp(left, right, self.max_depth)
    }

    /// Evaluate one relational operator.
    pub fn eval(&self, op: CompareOp, left: &Value, right: &Value) -> Result<bool, ValueError> {
        self.compare(left, right).map(|ord| op.holds(ord))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(&ValueConfig::default())
    }
}

///
/// FREE FUNCTIONS
///

pub fn compare(left: &Value, right: &Value) -> Result<Option<Ordering>, ValueError> {
    Comparator::default().compare(left, right)
}

pub fn canonical_cmp(left: &Value, right: &Value) -> Result<Ordering, ValueError> {
    Comparator::default().canonical_cmp(left, right)
}

pub fn eval(op: CompareOp, left: &Value, right: &Value) -> Result<bool, ValueError> {
    Comparator::default().eval(op, left, right)
}

pub fn equal(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Eq, left, right)
}

pub fn not_equal(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Ne, left, right)
}

pub fn greater_than(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Gt, left, right)
}

pub fn greater_or_equal(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Gte, left, right)
}

pub fn less_than(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Lt, left, right)
}

pub fn less_or_equal(left: &Value, right: &Value) -> Result<bool, ValueError> {
    eval(CompareOp::Lte, left, right)
}
