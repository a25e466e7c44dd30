//! Persistence configuration: datastore models, loading, and validation.
//!
//! A [`PersistenceConfig`] names a default and a visibility store, each of
//! which must be backed by exactly one of SQL or Cassandra. Call
//! [`PersistenceConfig::resolve`] once at startup, before any store is
//! opened, and hand the resolved copy to the connection code.

pub mod loader;
pub mod models;
pub mod validate;

pub use models::{
    CassandraConfig, DatastoreConfig, PersistenceConfig, SqlConfig, StoreRole, StoreType,
};
pub use validate::DEFAULT_NUM_SHARDS;
