//! Argument vector encoding and decoding.
//!
//! Arguments cross the plugin boundary as parallel arrays of byte
//! pointers and byte lengths. The host builds a call-scoped
//! [`ArgumentVector`]; the callee copies everything out with
//! [`decode_args`] before the call returns, because buffer ownership
//! reverts to the host the instant the entry point returns.

use std::marker::PhantomData;
use std::{ptr, slice};

/// Decodes a raw argument vector into owned strings.
///
/// Every entry is copied eagerly: the returned strings share no storage
/// with the input arrays, so they stay valid after the host reclaims or
/// mutates its buffers. Entries are returned in index order; a
/// zero-length entry decodes to an empty string at its index, not an
/// omission. Overlapping or aliased entries are permitted — decoding
/// only reads. Bytes that are not valid UTF-8 are replaced with U+FFFD
/// so the entry count is always preserved.
///
/// A `count` of zero yields an empty vector; the arrays may be null in
/// that case.
///
/// # Safety
///
/// When `count` is non-zero, `pointers` and `lengths` must each address
/// `count` readable elements, and every `pointers[i]` must address at
/// least `lengths[i]` readable bytes for the duration of the call.
/// Violating this is undefined behavior; it is a caller precondition
/// that cannot be detected or reported through this interface.
pub unsafe fn decode_args(
    count: usize,
    pointers: *const *const u8,
    lengths: *const usize,
) -> Vec<String> {
    if count == 0 || pointers.is_null() || lengths.is_null() {
        return Vec::new();
    }

    let mut args = Vec::with_capacity(count);
    for i in 0..count {
        // SAFETY: the caller guarantees both arrays hold `count`
        // elements, so `add(i)` stays in bounds and the offset
        // arithmetic cannot overflow.
        let (arg_ptr, arg_len) = unsafe { (*pointers.add(i), *lengths.add(i)) };

        if arg_len == 0 {
            args.push(String::new());
            continue;
        }

        // SAFETY: the caller guarantees `arg_ptr` addresses at least
        // `arg_len` readable bytes. The slice is copied into an owned
        // string immediately; no foreign-derived address survives this
        // iteration.
        let bytes = unsafe { slice::from_raw_parts(arg_ptr, arg_len) };
        args.push(String::from_utf8_lossy(bytes).into_owned());
    }

    args
}

/// A call-scoped argument vector built by the host.
///
/// Borrows the argument strings and exposes the raw parallel arrays the
/// entry-point signature expects. The vector is valid only while the
/// borrowed arguments are alive; the borrow checker enforces exactly
/// the call-scoped lifetime the convention requires.
#[derive(Debug)]
pub struct ArgumentVector<'a> {
    pointers: Vec<*const u8>,
    lengths: Vec<usize>,
    _args: PhantomData<&'a [String]>,
}

impl<'a> ArgumentVector<'a> {
    /// Builds the parallel pointer and length arrays over `args`.
    pub fn new(args: &'a [String]) -> Self {
        Self {
            pointers: args.iter().map(|arg| arg.as_ptr()).collect(),
            lengths: args.iter().map(String::len).collect(),
            _args: PhantomData,
        }
    }

    /// Number of arguments in the vector.
    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    /// Base address of the pointer array, or null when empty.
    pub fn pointers(&self) -> *const *const u8 {
        if self.pointers.is_empty() {
            ptr::null()
        } else {
            self.pointers.as_ptr()
        }
    }

    /// Base address of the length array, or null when empty.
    pub fn lengths(&self) -> *const usize {
        if self.lengths.is_empty() {
            ptr::null()
        } else {
            self.lengths.as_ptr()
        }
    }
}
