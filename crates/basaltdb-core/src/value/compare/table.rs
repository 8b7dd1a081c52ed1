use crate::Kind;

///
/// Comparability
///
/// Whether two top-level kinds can be compared at all.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparability {
    /// Ordered by the canonical comparator.
    Ordered,
    /// Relational operators and `=` are unsatisfied, `!=` is satisfied.
    Incomparable,
}

use Comparability::{Incomparable as X, Ordered as O};

// Rows and columns follow `Kind` declaration order.
// Integer/Double is the only cross-kind pair that is ordered.
#[rustfmt::skip]
const TOP_LEVEL: [[Comparability; 8]; 8] = [
    //          null bool int  dbl  text blob arr  doc
    /* null */ [O,   X,   X,   X,   X,   X,   X,   X],
    /* bool */ [X,   O,   X,   X,   X,   X,   X,   X],
    /* int  */ [X,   X,   O,   O,   X,   X,   X,   X],
    /* dbl  */ [X,   X,   O,   O,   X,   X,   X,   X],
    /* text */ [X,   X,   X,   X,   O,   X,   X,   X],
    /* blob */ [X,   X,   X,   X,   X,   O,   X,   X],
    /* arr  */ [X,   X,   X,   X,   X,   X,   O,   X],
    /* doc  */ [X,   X,   X,   X,   X,   X,   X,   O],
];

/// Look up the top-level comparability of two kinds.
#[must_use]
pub const fn top_level(left: Kind, right: Kind) -> Comparability {
    TOP_LEVEL[left as usize][right as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_follow_kind_order() {
        for (index, kind) in Kind::ALL.into_iter().enumerate() {
            assert_eq!(kind as usize, index, "{kind} is out of table order");
        }
    }

    #[test]
    fn table_is_symmetric() {
        for left in Kind::ALL {
            for right in Kind::ALL {
                assert_eq!(top_level(left, right), top_level(right, left));
            }
        }
    }

    #[test]
    fn only_same_kind_or_numeric_pairs_are_ordered() {
        for left in Kind::ALL {
            for right in Kind::ALL {
                let expected = left == right || (left.is_numeric() && right.is_numeric());
                assert_eq!(
                    top_level(left, right) == Comparability::Ordered,
                    expected,
                    "{left} vs {right}"
                );
            }
        }
    }
}
