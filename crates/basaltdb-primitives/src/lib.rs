//! Kind registry shared by the value layer and the storage codec.
//!
//! Nothing here knows about payloads; it only names the eight kinds a value
//! can take and the fixed tables hung off them.

#[macro_use]
mod macros;

use std::fmt;

///
/// Kind
///
/// Discriminant of a value. The set is closed: consumers are expected to
/// match exhaustively so a new kind is a compile error everywhere it matters.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Double,
    Text,
    Blob,
    Array,
    Document,
}

impl Kind {
    /// Every kind in registry order.
    pub const ALL: [Self; 8] = kind_registry!(all_kinds_from_registry);

    /// Return the full metadata descriptor for one kind.
    #[must_use]
    pub const fn metadata(self) -> KindMetadata {
        kind_registry!(metadata_from_registry, self)
    }

    /// Resolve a kind from its stable tag byte.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        kind_registry!(kind_from_tag_from_registry, tag)
    }

    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Stable wire tag for this kind.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self.metadata().tag
    }

    /// Rank used to order values of different kinds nested inside containers.
    ///
    /// IMPORTANT:
    /// This order backs composite index keys and must not change without a
    /// storage migration.
    #[must_use]
    pub const fn nested_rank(self) -> u8 {
        self.metadata().nested_rank
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.metadata().is_numeric
    }

    #[must_use]
    pub const fn is_container(self) -> bool {
        self.metadata().is_container
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// KindMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct KindMetadata {
    pub label: &'static str,
    pub tag: u8,
    pub nested_rank: u8,
    pub is_numeric: bool,
    pub is_container: bool,
}

///
/// TESTS
///
