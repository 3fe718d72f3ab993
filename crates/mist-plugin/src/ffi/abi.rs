//! C ABI definitions shared by the host and dynamic plugins.
//!
//! Defines the exported-symbol naming grammar and the fixed entry-point
//! signature every plugin must export.

/// Highest plugin API version this host understands.
///
/// A plugin may export one entry point per API version; the loader probes
/// from this version downward and dispatches to the highest match.
pub const MAX_SUPPORTED_API_VERSION: u32 = 0;

/// Type signature of a plugin entry point.
///
/// The C equivalent:
///
/// ```c
/// uint8_t _MIST_PLUGIN_<index>_<version>_MAIN(size_t count,
///                                             const uint8_t *const *pointers,
///                                             const size_t *lengths);
/// ```
///
/// `pointers` and `lengths` are parallel arrays of `count` entries each;
/// `pointers[i]` addresses `lengths[i]` readable bytes. The host owns all
/// three for the duration of the call only — the plugin must copy out
/// anything it wants to keep before returning. The return value is a
/// status byte from [`crate::ErrorCode`].
pub type PluginMainFn =
    unsafe extern "C" fn(count: usize, pointers: *const *const u8, lengths: *const usize) -> u8;

/// Formats the exported symbol name for a plugin index and API version.
///
/// Both numbers are rendered in decimal with no leading zeros: index 1,
/// version 0 becomes `_MIST_PLUGIN_1_0_MAIN`.
pub fn entry_symbol(index: u32, version: u32) -> String {
    format!("_MIST_PLUGIN_{index}_{version}_MAIN")
}
