//! Cassandra consistency configuration.
//!
//! Level parsing lives in [`level`], a single `(consistency, serialConsistency)`
//! pair and its defaulting in [`settings`], and the per-category cascade in
//! [`tree`].

pub mod level;
pub mod settings;
pub mod tree;

pub use level::{Consistency, SerialConsistency};
pub use settings::{ConsistencySettings, DEFAULT_CONSISTENCY, DEFAULT_SERIAL_CONSISTENCY};
pub use tree::{ConsistencyCategory, ConsistencyTree};
