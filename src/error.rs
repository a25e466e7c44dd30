//! Persistence configuration error types.
//!
//! Every error here is a startup configuration error: it is returned as a
//! value, never retried, and the caller decides whether to abort or report.
//! [`ConfigError`] is the top-level type returned by validation; the
//! consistency errors nest inside it so the failing store and settings
//! category stay visible in the message.

use std::path::PathBuf;

use crate::consistency::ConsistencyCategory;
use crate::persistence::StoreRole;

/// A consistency name that is not a known consistency level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid consistency {value:?}")]
pub struct ParseConsistencyError {
    /// The rejected name, as provided.
    pub value: String,
}

/// A serial consistency name that is not a known serial level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid serial consistency {value:?}")]
pub struct ParseSerialConsistencyError {
    /// The rejected name, after upper-casing.
    pub value: String,
}

/// Validation failure for a single consistency settings pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    /// The `consistency` field is not a known level.
    #[error("bad cassandra consistency: {0}")]
    BadConsistency(#[from] ParseConsistencyError),

    /// The `serialConsistency` field is not a known serial level.
    #[error("bad cassandra serial consistency: {0}")]
    BadSerialConsistency(#[from] ParseSerialConsistencyError),
}

/// Validation failure inside a consistency tree, tagged with the category
/// whose resolved settings were rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{category} consistency settings: {source}")]
pub struct ConsistencyTreeError {
    /// Category that failed validation.
    pub category: ConsistencyCategory,
    /// Underlying settings error.
    #[source]
    pub source: ConsistencyError,
}

/// Errors produced while validating a [`crate::persistence::PersistenceConfig`].
///
/// | Variant              | Meaning                                          |
/// |----------------------|--------------------------------------------------|
/// | `MissingDatastore`   | a required role names a store that is not defined |
/// | `BackendUnspecified` | neither `sql` nor `cassandra` is set             |
/// | `BackendConflict`    | both `sql` and `cassandra` are set               |
/// | `InvalidConsistency` | a resolved consistency level failed to parse     |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The default or visibility store has no entry in `dataStores`.
    #[error("persistence config: missing config for {role} datastore {name:?}")]
    MissingDatastore {
        /// Role the store was required for.
        role: StoreRole,
        /// Name that was looked up.
        name: String,
    },

    /// Neither backend is configured for the store.
    #[error(
        "persistence config: datastore {name:?}: must provide config for one of cassandra or sql stores"
    )]
    BackendUnspecified {
        /// Store name.
        name: String,
    },

    /// Both backends are configured for the store.
    #[error("persistence config: datastore {name:?}: only one of sql or cassandra can be specified")]
    BackendConflict {
        /// Store name.
        name: String,
    },

    /// The store's consistency tree did not resolve to valid levels.
    #[error("persistence config: datastore {store:?}: {source}")]
    InvalidConsistency {
        /// Store name.
        store: String,
        /// Failing category and reason.
        #[source]
        source: ConsistencyTreeError,
    },
}

/// Errors produced while reading a persistence configuration document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read persistence config {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid persistence configuration.
    #[error("failed to parse persistence config: {0}")]
    Parse(#[from] serde_json::Error),
}
