//! Host-side error type for loading and registry failures.
//!
//! These errors never cross the plugin boundary — the ABI carries only
//! the status byte. They cover what can go wrong on the host before or
//! around a call.

use thiserror::Error;

/// Errors raised while loading, resolving, or registering plugins.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The shared library could not be opened.
    #[error("failed to load plugin library '{path}': {source}")]
    LibraryLoad {
        /// Path of the library that failed to open.
        path: String,
        /// Underlying loader error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The library exports no entry point for any supported API version.
    #[error("plugin {index} exports no entry point for API versions 0..={max_version}")]
    EntryPointNotFound {
        /// Plugin index the symbols were probed for.
        index: u32,
        /// Highest API version that was probed.
        max_version: u32,
    },

    /// A plugin with the same index is already registered.
    #[error("plugin {index} is already registered")]
    AlreadyRegistered {
        /// The conflicting plugin index.
        index: u32,
    },

    /// The requested plugin index is not registered.
    #[error("plugin {index} is not registered")]
    NotRegistered {
        /// The missing plugin index.
        index: u32,
    },
}
