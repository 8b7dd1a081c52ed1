///
/// Kind Registry
///
/// Single source of truth for per-kind metadata. Every table derived from
/// this list (tags, nested rank, labels, capability flags) is generated, so
/// adding a kind here forces every `match` over `Kind` to be revisited.
///

// NOTE: tags are persisted by the storage codec and must never be reused.
// NOTE: Integer and Double share a nested rank on purpose; ties between them
// are broken numerically by the comparison engine, not by rank.
#[macro_export]
macro_rules! kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Null,
                label = "null",
                tag = 0x01,
                nested_rank = 0,
                is_numeric = false,
                is_container = false
            ),
            (
                Bool,
                label = "bool",
                tag = 0x02,
                nested_rank = 1,
                is_numeric = false,
                is_container = false
            ),
            (
                Integer,
                label = "integer",
                tag = 0x03,
                nested_rank = 2,
                is_numeric = true,
                is_container = false
            ),
            (
                Double,
                label = "double",
                tag = 0x04,
                nested_rank = 2,
                is_numeric = true,
                is_container = false
            ),
            (
                Text,
                label = "text",
                tag = 0x05,
                nested_rank = 3,
                is_numeric = false,
                is_container = false
            ),
            (
                Blob,
                label = "blob",
                tag = 0x06,
                nested_rank = 4,
                is_numeric = false,
                is_container = false
            ),
            (
                Array,
                label = "array",
                tag = 0x07,
                nested_rank = 5,
                is_numeric = false,
                is_container = true
            ),
            (
                Document,
                label = "document",
                tag = 0x08,
                nested_rank = 6,
                is_numeric = false,
                is_container = true
            ),
        }
    };
}

#[macro_export]
macro_rules! kind_registry {
    ($macro:ident) => {
        $crate::kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($name:ident, label = $label:expr, tag = $tag:literal, nested_rank = $rank:expr, is_numeric = $is_numeric:expr, is_container = $is_container:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::Kind::$name => $crate::KindMetadata {
                    label: $label,
                    tag: $tag,
                    nested_rank: $rank,
                    is_numeric: $is_numeric,
                    is_container: $is_container,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($name:ident, label = $label:expr, tag = $tag:literal, nested_rank = $rank:expr, is_numeric = $is_numeric:expr, is_container = $is_container:expr) ),* $(,)? ) => {
        [ $( $crate::Kind::$name ),* ]
    };
}

macro_rules! kind_from_tag_from_registry {
    ( @args $byte:expr; @entries $( ($name:ident, label = $label:expr, tag = $tag:literal, nested_rank = $rank:expr, is_numeric = $is_numeric:expr, is_container = $is_container:expr) ),* $(,)? ) => {
        match $byte {
            $( $tag => Some($crate::Kind::$name), )*
            _ => None,
        }
    };
}
