//! The entry-point declaration macro for plugin crates.

/// Declares the exported entry point for a plugin.
///
/// Expands to an `unsafe extern "C"` function exported under the symbol
/// `_MIST_PLUGIN_<index>_<version>_MAIN` that decodes the raw argument
/// vector, contains panics, and delegates to `main`, a
/// `fn(Vec<String>) -> ErrorCode`.
///
/// `index` and `version` must be non-negative integer literals written
/// in decimal with no leading zeros — they are spliced into the symbol
/// name verbatim. `entry` names the generated function so the crate's
/// own tests can call it directly.
///
/// A plugin supporting several API versions invokes the macro once per
/// version, each with a distinct `entry` name.
///
/// # Example
/// ```rust,ignore
/// use mist_plugin_sdk::prelude::*;
///
/// fn run(args: Vec<String>) -> ErrorCode {
///     println!("got {} arguments", args.len());
///     ErrorCode::Success
/// }
///
/// mist_plugin_main!(index: 1, version: 0, entry: my_plugin_entry, main: run);
/// ```
#[macro_export]
macro_rules! mist_plugin_main {
    (index: $index:literal, version: $version:literal, entry: $entry:ident, main: $main:expr) => {
        #[unsafe(export_name = concat!(
            "_MIST_PLUGIN_",
            stringify!($index),
            "_",
            stringify!($version),
            "_MAIN"
        ))]
        pub unsafe extern "C" fn $entry(
            count: usize,
            pointers: *const *const u8,
            lengths: *const usize,
        ) -> u8 {
            // SAFETY: the host upholds the argument-vector contract for
            // the duration of this call.
            unsafe { $crate::entry::run_entry(count, pointers, lengths, $main) }
        }
    };
}
