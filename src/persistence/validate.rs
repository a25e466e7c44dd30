//! Validation and default resolution for [`PersistenceConfig`].
//!
//! Resolution is pure: [`PersistenceConfig::resolve`] returns a new,
//! fully-resolved configuration and leaves the input untouched. Only the
//! default and visibility stores are checked; other entries in
//! `dataStores` are carried through as written.

use super::models::{DatastoreConfig, PersistenceConfig, SqlConfig, StoreRole, StoreType};
use crate::consistency::ConsistencyTree;
use crate::error::ConfigError;

/// Shard count applied when a SQL store leaves `numShards` at zero.
pub const DEFAULT_NUM_SHARDS: u32 = 1;

impl PersistenceConfig {
    /// Returns a copy of this configuration with every required store
    /// validated and its defaults filled in.
    ///
    /// For the default and visibility stores (in that order):
    /// - the store must exist in `data_stores`
    /// - exactly one of `sql` and `cassandra` must be set
    /// - SQL `num_shards == 0` becomes [`DEFAULT_NUM_SHARDS`]
    /// - Cassandra consistency settings are resolved and validated
    ///
    /// Resolving an already-resolved configuration returns an equal value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn resolve(&self) -> Result<Self, ConfigError> {
        let mut resolved = self.clone();
        for (role, name) in self.required_stores() {
            let store = self.datastore(role, name)?;
            let store = store.resolve(name)?;
            resolved.data_stores.insert(name.to_string(), store);
        }
        tracing::info!(
            default_store = %self.default_store,
            visibility_store = %self.visibility_store,
            advanced_visibility = self.has_advanced_visibility(),
            "persistence config resolved"
        );
        Ok(resolved)
    }

    /// Checks the configuration without keeping the resolved copy.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PersistenceConfig::resolve`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Returns the backend kind of the default store.
    ///
    /// The store must exist and have exactly one backend configured; this
    /// is checked again here so that an unvalidated configuration never
    /// yields a guessed answer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatastore`],
    /// [`ConfigError::BackendUnspecified`] or [`ConfigError::BackendConflict`].
    pub fn default_store_type(&self) -> Result<StoreType, ConfigError> {
        self.datastore(StoreRole::Default, &self.default_store)?
            .store_type(&self.default_store)
    }

    /// Returns `true` if an advanced visibility store is named.
    #[must_use]
    pub fn has_advanced_visibility(&self) -> bool {
        !self.advanced_visibility_store.is_empty()
    }

    fn required_stores(&self) -> [(StoreRole, &str); 2] {
        [
            (StoreRole::Default, self.default_store.as_str()),
            (StoreRole::Visibility, self.visibility_store.as_str()),
        ]
    }

    fn datastore(&self, role: StoreRole, name: &str) -> Result<&DatastoreConfig, ConfigError> {
        self.data_stores
            .get(name)
            .ok_or_else(|| ConfigError::MissingDatastore {
                role,
                name: name.to_string(),
            })
    }
}

impl DatastoreConfig {
    /// Returns which backend this store uses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BackendUnspecified`] if neither backend is set
    /// and [`ConfigError::BackendConflict`] if both are.
    pub fn store_type(&self, name: &str) -> Result<StoreType, ConfigError> {
        match (&self.sql, &self.cassandra) {
            (Some(_), None) => Ok(StoreType::Sql),
            (None, Some(_)) => Ok(StoreType::Cassandra),
            (None, None) => Err(ConfigError::BackendUnspecified {
                name: name.to_string(),
            }),
            (Some(_), Some(_)) => Err(ConfigError::BackendConflict {
                name: name.to_string(),
            }),
        }
    }

    /// Returns a resolved copy of this store. `name` is used in errors.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the backend choice is ambiguous or the
    /// Cassandra consistency settings are invalid.
    pub fn resolve(&self, name: &str) -> Result<Self, ConfigError> {
        let mut resolved = self.clone();
        match self.store_type(name)? {
            StoreType::Sql => {
                if let Some(sql) = resolved.sql.as_mut() {
                    apply_sql_defaults(name, sql);
                }
            }
            StoreType::Cassandra => {
                if let Some(cassandra) = resolved.cassandra.as_mut() {
                    let tree = cassandra.consistency.take().unwrap_or_default();
                    let tree = resolve_tree(name, &tree)?;
                    cassandra.consistency = Some(tree);
                }
            }
        }
        Ok(resolved)
    }
}

fn apply_sql_defaults(name: &str, sql: &mut SqlConfig) {
    if sql.num_shards == 0 {
        tracing::debug!(
            store = name,
            num_shards = DEFAULT_NUM_SHARDS,
            "defaulting sql shard count"
        );
        sql.num_shards = DEFAULT_NUM_SHARDS;
    }
}

fn resolve_tree(name: &str, tree: &ConsistencyTree) -> Result<ConsistencyTree, ConfigError> {
    tree.resolve().map_err(|source| {
        tracing::warn!(
            store = name,
            category = %source.category,
            error = %source.source,
            "invalid consistency settings"
        );
        ConfigError::InvalidConsistency {
            store: name.to_string(),
            source,
        }
    })
}
