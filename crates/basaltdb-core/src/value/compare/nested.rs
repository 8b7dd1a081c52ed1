//! Canonical total order.
//!
//! Values are ordered by nested rank first, then by payload. Containers are
//! walked with an explicit heap stack; the walk stops at the configured
//! depth.

use crate::{
    error::ValueError,
    value::{
        Value,
        compare::numeric::{cmp_f64, cmp_i64_f64},
    },
};
use std::cmp::Ordering;

///
/// Frame
///
/// One open container pair. `index` is the next position to compare.
///

enum Frame<'a> {
    Array {
        left: &'a [Value],
        right: &'a [Value],
        index: usize,
    },
    Document {
        left: Vec<(&'a str, &'a Value)>,
        right: Vec<(&'a str, &'a Value)>,
        index: usize,
    },
}

///
/// Advance
///

enum Advance<'a> {
    /// Both sides produced an element at the same position.
    Pair(&'a Value, &'a Value),
    /// The frame is settled with this ordering.
    Settled(Ordering),
}

impl<'a> Frame<'a> {
    fn advance(&mut self) -> Advance<'a> {
        match self {
            Self::Array { left, right, index } => {
                let (left, right) = (*left, *right);
                match (left.get(*index), right.get(*index)) {
                    (Some(l), Some(r)) => {
                        *index += 1;
                        Advance::Pair(l, r)
                    }
                    _ => Advance::Settled(left.len().cmp(&right.len())),
                }
            }
            Self::Document { left, right, index } => {
                match (left.get(*index), right.get(*index)) {
                    (Some(&(left_name, l)), Some(&(right_name, r))) => {
                        *index += 1;
                        match left_name.as_bytes().cmp(right_name.as_bytes()) {
                            Ordering::Equal => Advance::Pair(l, r),
                            other => Advance::Settled(other),
                        }
                    }
                    _ => Advance::Settled(left.len().cmp(&right.len())),
                }
            }
        }
    }
}

///
/// Step
///

enum Step<'a> {
    Done(Ordering),
    Descend(Frame<'a>),
}

// Compare two values without looking inside containers; same-kind container
// pairs are handed back as a frame to walk.
fn step<'a>(left: &'a Value, right: &'a Value) -> Step<'a> {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => Step::Descend(Frame::Array {
            left: l,
            right: r,
            index: 0,
        }),
        (Value::Document(l), Value::Document(r)) => Step::Descend(Frame::Document {
            left: l.sorted_fields(),
            right: r.sorted_fields(),
            index: 0,
        }),
        _ => Step::Done(cmp_flat(left, right)),
    }
}

// Order two values that are not a same-kind container pair.
fn cmp_flat(left: &Value, right: &Value) -> Ordering {
    let rank = left
        .kind()
        .nested_rank()
        .cmp(&right.kind().nested_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    #[allow(clippy::match_same_arms)]
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Double(a), Value::Double(b)) => cmp_f64(*a, *b),
        (Value::Integer(a), Value::Double(b)) => cmp_i64_f64(*a, *b),
        (Value::Double(a), Value::Integer(b)) => cmp_i64_f64(*b, *a).reverse(),
        (Value::Text(a), Value::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
        (Value::Blob(a), Value::Blob(b)) => a.as_slice().cmp(b.as_slice()),

        // Same-kind container pairs are walked by `step`. What remains is two
        // different kinds sharing a rank; order them by tag so they never
        // collapse to Equal.
        (Value::Array(_) | Value::Document(_), _)
        | (_, Value::Array(_) | Value::Document(_))
        | (
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::Text(_)
            | Value::Blob(_),
            Value::Null
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Double(_)
            | Value::Text(_)
            | Value::Blob(_),
        ) => tie_break(left, right),
    }
}

fn tie_break(left: &Value, right: &Value) -> Ordering {
    let (left, right) = (left.kind(), right.kind());
    if left != right {
        tracing::debug!(%left, %right, "distinct kinds share a nested rank");
    }

    left.tag().cmp(&right.tag())
}

/// Walk two values under the canonical total order.
pub(crate) fn canonical_cmp(
    left: &Value,
    right: &Value,
    max_depth: usize,
) -> Result<Ordering, ValueError> {
    let mut stack = match step(left, right) {
        Step::Done(ord) => return Ok(ord),
        Step::Descend(frame) => vec![frame],
    };
    check_depth(stack.len(), max_depth)?;

    while let Some(frame) = stack.last_mut() {
        match frame.advance() {
            Advance::Settled(Ordering::Equal) => {
                stack.pop();
            }
            Advance::Settled(ord) => return Ok(ord),
            Advance::Pair(l, r) => match step(l, r) {
                Step::Done(Ordering::Equal) => {}
                Step::Done(ord) => return Ok(ord),
                Step::Descend(frame) => {
                    stack.push(frame);
                    check_depth(stack.len(), max_depth)?;
                }
            },
        }
    }

    Ok(Ordering::Equal)
}

fn check_depth(depth: usize, limit: usize) -> Result<(), ValueError> {
    if depth > limit {
        tracing::debug!(depth, limit, "value comparison exceeded nesting limit");
        return Err(ValueError::DepthLimitExceeded { limit });
    }

    Ok(())
}
