//! # mist-plugin-sdk
//!
//! SDK for developing plugins for the MIST host.
//!
//! A plugin is a shared library exporting one entry point per supported
//! API version. This crate turns a plain `fn(Vec<String>) -> ErrorCode`
//! into a conforming entry point: the raw argument vector is decoded
//! into owned strings before the body runs, and no panic ever crosses
//! the boundary back into the host.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mist_plugin_sdk::prelude::*;
//!
//! fn run(args: Vec<String>) -> ErrorCode {
//!     if args.is_empty() {
//!         return ErrorCode::UsageError;
//!     }
//!     println!("got {} arguments", args.len());
//!     ErrorCode::Success
//! }
//!
//! mist_plugin_main!(index: 1, version: 0, entry: my_plugin_entry, main: run);
//! ```
//!
//! Build the crate as a `cdylib` and the host resolves the exported
//! `_MIST_PLUGIN_1_0_MAIN` symbol at load time.

pub mod entry;
pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use mist_plugin::error_code::ErrorCode;
    pub use mist_plugin::ffi::abi::PluginMainFn;
    pub use mist_plugin::ffi::args::decode_args;

    pub use crate::mist_plugin_main;
}
