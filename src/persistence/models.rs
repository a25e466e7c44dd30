//! Persistence configuration models.
//!
//! These mirror the configuration document one-to-one. Keys are camelCase
//! (`defaultStore`, `numShards`, `serialConsistency`, ...).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consistency::ConsistencyTree;

/// Backend kind of a datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    /// Relational store.
    Sql,
    /// Cassandra column-family store.
    Cassandra,
}

impl StoreType {
    /// Returns `"sql"` or `"cassandra"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Cassandra => "cassandra",
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a datastore is required for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreRole {
    /// Primary store for all non-visibility data.
    Default,
    /// Store for visibility records.
    Visibility,
}

impl fmt::Display for StoreRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Visibility => f.write_str("visibility"),
        }
    }
}

/// Top-level persistence configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceConfig {
    /// Name of the default datastore; must be a key of `data_stores`.
    #[serde(default)]
    pub default_store: String,
    /// Name of the visibility datastore; must be a key of `data_stores`.
    #[serde(default)]
    pub visibility_store: String,
    /// Name of the advanced visibility store. Non-empty enables the feature.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub advanced_visibility_store: String,
    /// Datastores by name.
    #[serde(default, alias = "datastores")]
    pub data_stores: BTreeMap<String, DatastoreConfig>,
}

/// A named datastore. Exactly one of `sql` and `cassandra` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Relational backend settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql: Option<SqlConfig>,
    /// Cassandra backend settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cassandra: Option<CassandraConfig>,
}

impl DatastoreConfig {
    /// Creates a SQL-backed datastore.
    #[must_use]
    pub fn sql(config: SqlConfig) -> Self {
        Self {
            sql: Some(config),
            cassandra: None,
        }
    }

    /// Creates a Cassandra-backed datastore.
    #[must_use]
    pub fn cassandra(config: CassandraConfig) -> Self {
        Self {
            sql: None,
            cassandra: Some(config),
        }
    }
}

/// Relational store settings.
///
/// Only `num_shards` is defaulted here; the remaining fields are passed
/// through to the SQL plugin untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SqlConfig {
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// SQL plugin name (e.g. `"postgres"`, `"mysql"`).
    pub plugin_name: String,
    /// Database name.
    pub database_name: String,
    /// `host:port` of the database.
    pub connect_addr: String,
    /// Transport protocol (`"tcp"` or `"unix"`).
    pub connect_protocol: String,
    /// Extra driver connection attributes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub connect_attributes: BTreeMap<String, String>,
    /// Maximum open connections (0 = driver default).
    pub max_conns: u32,
    /// Maximum idle connections (0 = driver default).
    pub max_idle_conns: u32,
    /// Maximum connection lifetime in seconds (0 = unlimited).
    pub max_conn_lifetime_secs: u64,
    /// Number of shards the store is split across. `0` means unset.
    pub num_shards: u32,
}

/// Cassandra store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CassandraConfig {
    /// Comma-separated contact points.
    pub hosts: String,
    /// CQL native port (0 = driver default).
    pub port: u16,
    /// Authentication user.
    pub user: String,
    /// Authentication password.
    pub password: String,
    /// Keyspace to use.
    pub keyspace: String,
    /// Local datacenter for DC-aware routing.
    pub datacenter: String,
    /// Maximum connections per host (0 = driver default).
    pub max_conns: u32,
    /// Consistency overrides; absent means all defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ConsistencyTree>,
}

impl CassandraConfig {
    /// Splits `hosts` into trimmed, non-empty contact points.
    pub fn host_list(&self) -> impl Iterator<Item = &str> {
        self.hosts
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
    }
}
