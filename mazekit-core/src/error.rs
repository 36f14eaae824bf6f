//! Error types for the mazekit core library.
//!
//! Defines the invalid-argument errors raised by the containers and strategy
//! structures, together with the stable error-code macro shared by the solver
//! modules. Structural infeasibility (a disconnected graph, an unreachable
//! vertex) is never an error; the solvers report it through their result
//! enums instead.

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced when a map is configured with invalid parameters.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MapConfigError {
    /// The resizing load-factor threshold must be positive and finite.
    #[error("resizing load factor threshold must be positive and finite (got {got})")]
    InvalidLoadFactorThreshold {
        /// The threshold supplied by the caller.
        got: f64,
    },
    /// A hash map needs at least one chain.
    #[error("initial chain count must be at least 1")]
    ZeroChainCount,
    /// Chains created by a hash map need room for at least one entry.
    #[error("initial chain capacity must be at least 1")]
    ZeroChainCapacity,
    /// An array map needs room for at least one entry.
    #[error("initial capacity must be at least 1")]
    ZeroCapacity,
}

define_error_codes! {
    /// Stable codes describing [`MapConfigError`] variants.
    enum MapConfigErrorCode for MapConfigError {
        /// The resizing load-factor threshold must be positive and finite.
        InvalidLoadFactorThreshold => InvalidLoadFactorThreshold { .. } => "MAP_INVALID_LOAD_FACTOR_THRESHOLD",
        /// A hash map needs at least one chain.
        ZeroChainCount => ZeroChainCount => "MAP_ZERO_CHAIN_COUNT",
        /// Chains created by a hash map need room for at least one entry.
        ZeroChainCapacity => ZeroChainCapacity => "MAP_ZERO_CHAIN_CAPACITY",
        /// An array map needs room for at least one entry.
        ZeroCapacity => ZeroCapacity => "MAP_ZERO_CAPACITY",
    }
}

/// An error produced by [`crate::DisjointSets`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The item was never registered through `make_set`.
    #[error("item passed to `{operation}` was never registered with `make_set`")]
    UnknownItem {
        /// Name of the operation that received the unknown item.
        operation: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The item was never registered through `make_set`.
        UnknownItem => UnknownItem { .. } => "DISJOINT_SET_UNKNOWN_ITEM",
    }
}

/// An error produced by [`crate::ExtrinsicMinPq`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PriorityQueueError {
    /// `add` was called for an item that is already queued.
    #[error("item is already present in the priority queue")]
    DuplicateItem,
    /// `change_priority` was called for an item that is not queued.
    #[error("item is not present in the priority queue")]
    MissingItem,
    /// The queue has no items to inspect or remove.
    #[error("priority queue is empty")]
    Empty,
    /// Priorities must be comparable numbers.
    #[error("priority must not be NaN")]
    NanPriority,
}

define_error_codes! {
    /// Stable codes describing [`PriorityQueueError`] variants.
    enum PriorityQueueErrorCode for PriorityQueueError {
        /// `add` was called for an item that is already queued.
        DuplicateItem => DuplicateItem => "PRIORITY_QUEUE_DUPLICATE_ITEM",
        /// `change_priority` was called for an item that is not queued.
        MissingItem => MissingItem => "PRIORITY_QUEUE_MISSING_ITEM",
        /// The queue has no items to inspect or remove.
        Empty => Empty => "PRIORITY_QUEUE_EMPTY",
        /// Priorities must be comparable numbers.
        NanPriority => NanPriority => "PRIORITY_QUEUE_NAN_PRIORITY",
    }
}
