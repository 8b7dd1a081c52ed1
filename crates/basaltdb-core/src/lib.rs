//! Value layer for BasaltDB: the dynamically typed [`Value`](value::Value),
//! the comparison engine behind query predicates and sort keys, and the
//! text and JSON marshalers.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod error;
pub mod marshal;
pub mod value;

// re-exports
pub use basaltdb_primitives::{Kind, KindMetadata};

///
/// Prelude
///
/// Value vocabulary only. No marshalers, configs or errors.
///

pub mod prelude {
    pub use crate::{
        Kind,
        value::{
            Document, Value,
            compare::{CompareOp, Comparability},
        },
    };
}
