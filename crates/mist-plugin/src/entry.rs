//! A resolved plugin entry point and its synchronous dispatch.

use tracing::{debug, warn};

use crate::error_code::ErrorCode;
use crate::ffi::abi::PluginMainFn;
use crate::ffi::args::ArgumentVector;

/// A plugin entry point the host can invoke.
///
/// Holds the resolved function pointer together with the plugin index
/// and the negotiated API version. Entries come from the dynamic loader
/// (which keeps the backing library alive — see
/// [`crate::DynamicLoader`]) or from compiled-in plugins.
#[derive(Debug, Clone, Copy)]
pub struct PluginEntry {
    /// Plugin index the entry symbol was resolved for.
    index: u32,
    /// Negotiated API version.
    api_version: u32,
    /// The entry function itself.
    main: PluginMainFn,
}

impl PluginEntry {
    /// Creates an entry from an already resolved function pointer.
    ///
    /// Used by the dynamic loader after symbol resolution, and directly
    /// for compiled-in plugins.
    pub fn new(index: u32, api_version: u32, main: PluginMainFn) -> Self {
        Self {
            index,
            api_version,
            main,
        }
    }

    /// Plugin index this entry was resolved for.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// API version this entry was negotiated at.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Invokes the entry point once with the given arguments.
    ///
    /// Builds a call-scoped argument vector, blocks until the plugin
    /// returns, and maps the raw status byte into [`ErrorCode`].
    /// Reserved bytes a conforming plugin must not produce are logged
    /// and reported as [`ErrorCode::UnknownError`].
    pub fn invoke(&self, args: &[String]) -> ErrorCode {
        let argv = ArgumentVector::new(args);

        debug!(
            index = self.index,
            api_version = self.api_version,
            arg_count = argv.count(),
            "Invoking plugin entry point"
        );

        // SAFETY: `argv` borrows `args` for the duration of the call,
        // so every pointer/length pair addresses a live argument and
        // both arrays hold exactly `count` entries.
        let raw = unsafe { (self.main)(argv.count(), argv.pointers(), argv.lengths()) };

        match ErrorCode::from_raw(raw) {
            Some(code) => code,
            None => {
                warn!(
                    index = self.index,
                    status = raw,
                    "Plugin returned a reserved status byte"
                );
                ErrorCode::UnknownError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::args::decode_args;

    unsafe extern "C" fn succeed(
        _count: usize,
        _pointers: *const *const u8,
        _lengths: *const usize,
    ) -> u8 {
        0
    }

    unsafe extern "C" fn require_args(
        count: usize,
        _pointers: *const *const u8,
        _lengths: *const usize,
    ) -> u8 {
        if count == 0 { 2 } else { 0 }
    }

    unsafe extern "C" fn reserved_status(
        _count: usize,
        _pointers: *const *const u8,
        _lengths: *const usize,
    ) -> u8 {
        255
    }

    unsafe extern "C" fn expect_abc(
        count: usize,
        pointers: *const *const u8,
        lengths: *const usize,
    ) -> u8 {
        let args = unsafe { decode_args(count, pointers, lengths) };
        if args == ["a", "bb", "ccc"] { 0 } else { 97 }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_invoke_maps_success() {
        let entry = PluginEntry::new(0, 0, succeed);
        assert_eq!(entry.invoke(&[]), ErrorCode::Success);
    }

    #[test]
    fn test_invoke_without_required_args_is_usage_error() {
        let entry = PluginEntry::new(0, 0, require_args);
        assert_eq!(entry.invoke(&[]), ErrorCode::UsageError);
        assert_eq!(entry.invoke(&args(&["one"])), ErrorCode::Success);
    }

    #[test]
    fn test_invoke_passes_arguments_through_the_abi() {
        let entry = PluginEntry::new(3, 0, expect_abc);
        assert_eq!(entry.invoke(&args(&["a", "bb", "ccc"])), ErrorCode::Success);
        assert_eq!(
            entry.invoke(&args(&["a", "bb", "wrong"])),
            ErrorCode::InvalidArgument
        );
    }

    #[test]
    fn test_reserved_status_maps_to_unknown_error() {
        let entry = PluginEntry::new(0, 0, reserved_status);
        assert_eq!(entry.invoke(&[]), ErrorCode::UnknownError);
    }

    #[test]
    fn test_accessors() {
        let entry = PluginEntry::new(4, 1, succeed);
        assert_eq!(entry.index(), 4);
        assert_eq!(entry.api_version(), 1);
    }
}
