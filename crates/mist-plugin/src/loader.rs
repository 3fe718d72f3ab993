//! Dynamic plugin loader using `libloading` (feature-gated).

#[cfg(feature = "dynamic")]
pub mod dynamic_loader {
    use std::path::Path;

    use tracing::{debug, info};

    use crate::entry::PluginEntry;
    use crate::error::PluginError;
    use crate::ffi::abi::{self, MAX_SUPPORTED_API_VERSION, PluginMainFn};

    /// Loads plugin entry points from shared libraries (.so / .dll / .dylib).
    ///
    /// Loaded libraries are kept alive for the lifetime of the loader,
    /// so every [`PluginEntry`] it produced must be dropped before the
    /// loader is.
    pub struct DynamicLoader {
        /// Loaded libraries (kept alive for the lifetime of the loader).
        _libraries: Vec<libloading::Library>,
    }

    impl DynamicLoader {
        /// Creates a new dynamic loader.
        pub fn new() -> Self {
            Self {
                _libraries: Vec::new(),
            }
        }

        /// Loads the entry point for plugin `index` from a shared library.
        ///
        /// Probes exported symbols from the highest supported API version
        /// downward and resolves the first match, so a newer host keeps
        /// loading plugins built against older API versions.
        ///
        /// # Safety
        /// This function loads arbitrary code from a shared library and
        /// the returned entry will execute it. Only load trusted plugins.
        pub unsafe fn load_from_path(
            &mut self,
            path: &Path,
            index: u32,
        ) -> Result<PluginEntry, PluginError> {
            let lib = unsafe { libloading::Library::new(path) }.map_err(|e| {
                PluginError::LibraryLoad {
                    path: path.display().to_string(),
                    source: Box::new(e),
                }
            })?;

            let entry = unsafe { Self::resolve_entry(&lib, index) }?;

            info!(
                path = %path.display(),
                index,
                api_version = entry.api_version(),
                "Dynamic plugin loaded"
            );

            self._libraries.push(lib);

            Ok(entry)
        }

        /// Resolves the highest exported entry symbol for `index`.
        ///
        /// # Safety
        /// The exported symbol must match the entry-point signature; a
        /// symbol with the right name and the wrong type is undefined
        /// behavior once invoked.
        unsafe fn resolve_entry(
            lib: &libloading::Library,
            index: u32,
        ) -> Result<PluginEntry, PluginError> {
            let resolved = negotiate(MAX_SUPPORTED_API_VERSION, |version| {
                let symbol = abi::entry_symbol(index, version);
                match unsafe { lib.get::<PluginMainFn>(symbol.as_bytes()) } {
                    Ok(main) => {
                        debug!(%symbol, "Resolved plugin entry point");
                        Some(*main)
                    }
                    Err(_) => {
                        debug!(%symbol, "Symbol not exported, probing older version");
                        None
                    }
                }
            });

            match resolved {
                Some((version, main)) => Ok(PluginEntry::new(index, version, main)),
                None => Err(PluginError::EntryPointNotFound {
                    index,
                    max_version: MAX_SUPPORTED_API_VERSION,
                }),
            }
        }
    }

    /// Picks the highest API version the lookup can produce an entry for,
    /// probing from `max_version` downward.
    fn negotiate(
        max_version: u32,
        mut lookup: impl FnMut(u32) -> Option<PluginMainFn>,
    ) -> Option<(u32, PluginMainFn)> {
        (0..=max_version)
            .rev()
            .find_map(|version| lookup(version).map(|main| (version, main)))
    }

    impl std::fmt::Debug for DynamicLoader {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("DynamicLoader")
                .field("loaded_count", &self._libraries.len())
                .finish()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        unsafe extern "C" fn noop(
            _count: usize,
            _pointers: *const *const u8,
            _lengths: *const usize,
        ) -> u8 {
            0
        }

        fn lookup_among(exported: &[u32]) -> impl FnMut(u32) -> Option<PluginMainFn> + '_ {
            move |version| exported.contains(&version).then_some(noop as PluginMainFn)
        }

        #[test]
        fn test_negotiate_picks_highest_exported_version() {
            let resolved = negotiate(2, lookup_among(&[0, 1]));
            assert_eq!(resolved.map(|(version, _)| version), Some(1));

            let resolved = negotiate(2, lookup_among(&[0, 1, 2]));
            assert_eq!(resolved.map(|(version, _)| version), Some(2));
        }

        #[test]
        fn test_negotiate_skips_versions_newer_than_the_host() {
            // Only version 5 exported, host supports up to 2.
            let resolved = negotiate(2, lookup_among(&[5]));
            assert!(resolved.is_none());
        }

        #[test]
        fn test_negotiate_with_nothing_exported() {
            assert!(negotiate(MAX_SUPPORTED_API_VERSION, lookup_among(&[])).is_none());
        }
    }
}

/// Stub loader when dynamic feature is not enabled.
#[cfg(not(feature = "dynamic"))]
pub mod dynamic_loader {
    /// Stub dynamic loader.
    #[derive(Debug)]
    pub struct DynamicLoader;

    impl DynamicLoader {
        /// Creates a stub loader.
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for DynamicLoader {
        fn default() -> Self {
            Self::new()
        }
    }
}

pub use dynamic_loader::DynamicLoader;
