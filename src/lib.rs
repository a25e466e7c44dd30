//! # persistence-config
//!
//! Validation and default resolution for a service's persistence
//! configuration, run once at startup before a storage backend is selected.
//!
//! ## Architecture
//!
//! ```text
//! PersistenceConfig::resolve (persistence/)
//!     │
//!     ├── DatastoreConfig::resolve   exactly one of sql / cassandra
//!     │       └── SQL: numShards 0 → 1
//!     │
//!     └── ConsistencyTree::resolve (consistency/)
//!             ├── ConsistencySettings::fill   global → default → category
//!             └── Consistency / SerialConsistency parsing
//! ```
//!
//! Resolution never mutates its input. A successful result has every
//! consistency slot of both required stores filled with a valid level.

pub mod config;
pub mod consistency;
pub mod error;
pub mod persistence;
