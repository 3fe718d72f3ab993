//! Example plugin: prints a greeting and the arguments it was given.
//!
//! Exports `_MIST_PLUGIN_1_0_MAIN`. Requires at least one argument and
//! returns `usage_error` when invoked with none. Build as a `cdylib`
//! and point the host at the resulting library:
//!
//! ```text
//! mist-host --index 1 target/release/libplugin_greeter.so hello world
//! ```

use std::io::{self, Write};

use mist_plugin_sdk::prelude::*;

mist_plugin_main!(index: 1, version: 0, entry: greeter_entry, main: greet);

/// Plugin body: greets and echoes the argument list to stdout.
fn greet(args: Vec<String>) -> ErrorCode {
    if args.is_empty() {
        return ErrorCode::UsageError;
    }

    match write_greeting(&args) {
        Ok(()) => ErrorCode::Success,
        Err(_) => ErrorCode::WriteFailure,
    }
}

fn write_greeting(args: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Hello from the greeter plugin!")?;

    write!(out, "My arguments are:")?;
    for arg in args {
        write!(out, " {arg}")?;
    }
    writeln!(out)?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn call(args: &[&str]) -> u8 {
        let pointers: Vec<*const u8> = args.iter().map(|a| a.as_ptr()).collect();
        let lengths: Vec<usize> = args.iter().map(|a| a.len()).collect();
        unsafe { greeter_entry(args.len(), pointers.as_ptr(), lengths.as_ptr()) }
    }

    #[test]
    fn test_no_arguments_is_a_usage_error() {
        let status = unsafe { greeter_entry(0, ptr::null(), ptr::null()) };
        assert_eq!(status, 2);
    }

    #[test]
    fn test_arguments_decode_and_succeed() {
        assert_eq!(call(&["a", "bb", "ccc"]), 0);
    }

    #[test]
    fn test_single_argument_succeeds() {
        assert_eq!(call(&["mist"]), 0);
    }
}
