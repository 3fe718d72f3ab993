//! Plugin registry — host-side bookkeeping of loaded entry points.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entry::PluginEntry;
use crate::error::PluginError;

/// Metadata about a loaded plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin index the entry symbol was resolved for.
    pub index: u32,
    /// Negotiated API version.
    pub api_version: u32,
    /// Where the plugin came from (library path, or `compiled-in`).
    pub origin: String,
}

/// Registry of loaded plugins, keyed by plugin index.
///
/// Calls through the ABI are synchronous, so plain reader/writer locks
/// are enough; a poisoned lock is recovered rather than propagated
/// since the maps hold no invariants a panicking reader could break.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Plugin index → entry point.
    plugins: RwLock<HashMap<u32, PluginEntry>>,
    /// Plugin index → metadata.
    metadata: RwLock<HashMap<u32, PluginInfo>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a loaded entry point under its plugin index.
    pub fn register(&self, entry: PluginEntry, origin: impl Into<String>) -> Result<(), PluginError> {
        let index = entry.index();

        let mut plugins = self.plugins.write().unwrap_or_else(|e| e.into_inner());
        let mut metadata = self.metadata.write().unwrap_or_else(|e| e.into_inner());

        if plugins.contains_key(&index) {
            return Err(PluginError::AlreadyRegistered { index });
        }

        let info = PluginInfo {
            index,
            api_version: entry.api_version(),
            origin: origin.into(),
        };

        info!(
            index,
            api_version = info.api_version,
            origin = %info.origin,
            "Registering plugin"
        );

        plugins.insert(index, entry);
        metadata.insert(index, info);

        Ok(())
    }

    /// Unregisters a plugin by index.
    pub fn unregister(&self, index: u32) -> Result<PluginEntry, PluginError> {
        let mut plugins = self.plugins.write().unwrap_or_else(|e| e.into_inner());
        let mut metadata = self.metadata.write().unwrap_or_else(|e| e.into_inner());

        let entry = plugins
            .remove(&index)
            .ok_or(PluginError::NotRegistered { index })?;

        metadata.remove(&index);

        info!(index, "Plugin unregistered");

        Ok(entry)
    }

    /// Gets a plugin entry by index.
    pub fn get(&self, index: u32) -> Option<PluginEntry> {
        let plugins = self.plugins.read().unwrap_or_else(|e| e.into_inner());
        plugins.get(&index).copied()
    }

    /// Lists all registered plugin metadata, ordered by index.
    pub fn list(&self) -> Vec<PluginInfo> {
        let metadata = self.metadata.read().unwrap_or_else(|e| e.into_inner());
        let mut infos: Vec<PluginInfo> = metadata.values().cloned().collect();
        infos.sort_by_key(|info| info.index);
        infos
    }

    /// Returns the number of registered plugins.
    pub fn count(&self) -> usize {
        let plugins = self.plugins.read().unwrap_or_else(|e| e.into_inner());
        plugins.len()
    }

    /// Checks whether a plugin index is registered.
    pub fn contains(&self, index: u32) -> bool {
        let plugins = self.plugins.read().unwrap_or_else(|e| e.into_inner());
        plugins.contains_key(&index)
    }
}
