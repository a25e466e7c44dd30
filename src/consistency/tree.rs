//! Per-category consistency overrides and their resolution.
//!
//! A [`ConsistencyTree`] has a `default` slot and one slot per
//! [`ConsistencyCategory`]. Resolution runs in two levels:
//!
//! ```text
//! global default (LOCAL_QUORUM / LOCAL_SERIAL)
//!     └── default slot
//!             ├── clusterMetadata
//!             ├── history
//!             ├── ...
//!             └── execution
//! ```
//!
//! Each level only fills fields that are empty, so an explicit override
//! always wins over an inherited value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::settings::ConsistencySettings;
use crate::error::ConsistencyTreeError;

/// A slot in the consistency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsistencyCategory {
    /// Fallback for every other category.
    Default,
    /// Cluster membership and metadata.
    ClusterMetadata,
    /// Workflow history events.
    History,
    /// Namespace registry.
    NamespaceMetadata,
    /// Shard ownership records.
    Shard,
    /// Task queues.
    Task,
    /// Internal message queues.
    Queue,
    /// Visibility records.
    Visibility,
    /// Mutable execution state.
    Execution,
}

impl ConsistencyCategory {
    /// Every slot, `Default` first.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::ClusterMetadata,
        Self::History,
        Self::NamespaceMetadata,
        Self::Shard,
        Self::Task,
        Self::Queue,
        Self::Visibility,
        Self::Execution,
    ];

    /// Returns the configuration key for this slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ClusterMetadata => "clusterMetadata",
            Self::History => "history",
            Self::NamespaceMetadata => "namespaceMetadata",
            Self::Shard => "shard",
            Self::Task => "task",
            Self::Queue => "queue",
            Self::Visibility => "visibility",
            Self::Execution => "execution",
        }
    }
}

impl fmt::Display for ConsistencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consistency overrides for a Cassandra store.
///
/// Absent slots inherit from `default`; an absent `default` inherits from
/// the global defaults. After [`ConsistencyTree::resolve`] every slot is
/// present and holds its own copy of its settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsistencyTree {
    /// Fallback for every category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ConsistencySettings>,
    /// Cluster metadata override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_metadata: Option<ConsistencySettings>,
    /// History override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<ConsistencySettings>,
    /// Namespace metadata override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_metadata: Option<ConsistencySettings>,
    /// Shard override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<ConsistencySettings>,
    /// Task override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<ConsistencySettings>,
    /// Queue override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue: Option<ConsistencySettings>,
    /// Visibility override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ConsistencySettings>,
    /// Execution override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution: Option<ConsistencySettings>,
}

impl ConsistencyTree {
    /// Returns the settings stored in `category`'s slot, if any.
    #[must_use]
    pub const fn get(&self, category: ConsistencyCategory) -> Option<&ConsistencySettings> {
        self.slot(category).as_ref()
    }

    /// Returns the settings `category` resolves to without validating them.
    ///
    /// On a resolved tree this is the slot itself.
    #[must_use]
    pub fn effective(&self, category: ConsistencyCategory) -> ConsistencySettings {
        let default =
            ConsistencySettings::fill(self.default.as_ref(), &ConsistencySettings::global_default());
        match category {
            ConsistencyCategory::Default => default,
            other => ConsistencySettings::fill(self.get(other), &default),
        }
    }

    /// Returns a fully-resolved copy of this tree.
    ///
    /// The `default` slot is resolved against the global defaults first,
    /// then every category against the resolved `default`. Each slot is
    /// validated right after it is filled; the first invalid slot aborts
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyTreeError`] naming the first category whose
    /// resolved settings are not valid levels.
    pub fn resolve(&self) -> Result<Self, ConsistencyTreeError> {
        let mut resolved = Self::default();
        for category in ConsistencyCategory::ALL {
            let settings = self.effective(category);
            if self.get(category).is_none() {
                tracing::debug!(%category, "consistency settings absent, inheriting");
            }
            settings
                .validate()
                .map_err(|source| ConsistencyTreeError { category, source })?;
            *resolved.slot_mut(category) = Some(settings);
        }
        Ok(resolved)
    }

    const fn slot(&self, category: ConsistencyCategory) -> &Option<ConsistencySettings> {
        match category {
            ConsistencyCategory::Default => &self.default,
            ConsistencyCategory::ClusterMetadata => &self.cluster_metadata,
            ConsistencyCategory::History => &self.history,
            ConsistencyCategory::NamespaceMetadata => &self.namespace_metadata,
            ConsistencyCategory::Shard => &self.shard,
            ConsistencyCategory::Task => &self.task,
            ConsistencyCategory::Queue => &self.queue,
            ConsistencyCategory::Visibility => &self.visibility,
            ConsistencyCategory::Execution => &self.execution,
        }
    }

    fn slot_mut(&mut self, category: ConsistencyCategory) -> &mut Option<ConsistencySettings> {
        match category {
            ConsistencyCategory::Default => &mut self.default,
            ConsistencyCategory::ClusterMetadata => &mut self.cluster_metadata,
            ConsistencyCategory::History => &mut self.history,
            ConsistencyCategory::NamespaceMetadata => &mut self.namespace_metadata,
            ConsistencyCategory::Shard => &mut self.shard,
            ConsistencyCategory::Task => &mut self.task,
            ConsistencyCategory::Queue => &mut self.queue,
            ConsistencyCategory::Visibility => &mut self.visibility,
            ConsistencyCategory::Execution => &mut self.execution,
        }
    }
}
