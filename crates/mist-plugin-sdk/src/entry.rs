//! The callee-side shim behind [`mist_plugin_main!`](crate::mist_plugin_main).

use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use mist_plugin::error_code::ErrorCode;
use mist_plugin::ffi::args::decode_args;

/// Decodes the raw argument vector, runs the plugin body, and returns
/// the status byte the host expects.
///
/// The arguments are copied out of the host's buffers before the body
/// runs, so the body may keep them as long as it likes. No unwind may
/// cross the ABI boundary — the body runs under `catch_unwind`, and a
/// contained panic is reported as [`ErrorCode::UnknownError`].
///
/// # Safety
///
/// Same contract as [`decode_args`]: when `count` is non-zero, the host
/// must supply `count` readable pointer/length pairs, each addressing
/// that many readable bytes, for the duration of the call.
pub unsafe fn run_entry<F>(
    count: usize,
    pointers: *const *const u8,
    lengths: *const usize,
    main: F,
) -> u8
where
    F: FnOnce(Vec<String>) -> ErrorCode,
{
    // SAFETY: forwarded host contract, see above.
    let args = unsafe { decode_args(count, pointers, lengths) };

    match panic::catch_unwind(AssertUnwindSafe(move || main(args))) {
        Ok(code) => u8::from(code),
        Err(_) => {
            error!("Plugin body panicked; reporting unknown_error to the host");
            u8::from(ErrorCode::UnknownError)
        }
    }
}
