//! The closed status-byte domain entry points return to the host.
//!
//! The numeric values are the wire contract between host and plugin and
//! must never change. Codes are independent flags, not a hierarchy; the
//! category grouping is documentation only. Byte values outside this
//! table are reserved and must not be produced by a conforming plugin.

use serde::{Deserialize, Serialize};

/// Status byte returned by a plugin entry point.
///
/// Zero always means success; any other value communicates a coarse
/// failure category only — no message, no context.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // ── Generic ──
    /// The call completed without failure.
    Success = 0,
    /// An unclassified failure.
    UnknownError = 1,
    /// The plugin was invoked with unusable arguments.
    UsageError = 2,

    // ── Filesystem ──
    /// A file did not exist.
    FileNotFound = 16,
    /// Permission was denied on a filesystem object.
    AccessDenied = 17,
    /// The current working directory no longer exists.
    CwdNotFound = 18,
    /// A path component exceeded the platform name limit.
    NameTooLong = 19,
    /// A directory was expected.
    NotDir = 20,
    /// A regular file was expected.
    NotFile = 21,
    /// Symbolic link resolution looped.
    SymLinkLoop = 22,

    // ── I/O ──
    /// A read operation failed.
    ReadFailure = 32,
    /// A write operation failed.
    WriteFailure = 33,
    /// A generic input/output failure.
    InputOutput = 34,
    /// The other end of a pipe went away.
    BrokenPipe = 35,

    // ── Variables ──
    /// A variable reference was invalid.
    InvalidVariable = 48,
    /// An environment variable was missing or malformed.
    InvalidEnvVariable = 49,

    // ── System ──
    /// Memory allocation failed.
    OutOfMemory = 64,
    /// The storage device is full.
    NoSpaceLeft = 65,
    /// A comparison expected equality and did not get it.
    NotEqual = 66,
    /// A system resource limit was hit.
    SystemResources = 67,

    // ── Encoding ──
    /// Input data failed to decode or decompress.
    CorruptInput = 80,

    // ── Misc ──
    /// A predicate evaluated to false.
    False = 96,
    /// An argument value was rejected.
    InvalidArgument = 97,

    // ── Exec ──
    /// A command was found but could not be executed.
    CommandCannotExecute = 126,
    /// A command was not found.
    CommandNotFound = 127,
}

impl ErrorCode {
    /// Maps a raw status byte back into the closed domain.
    ///
    /// Returns `None` for reserved byte values.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Success),
            1 => Some(Self::UnknownError),
            2 => Some(Self::UsageError),
            16 => Some(Self::FileNotFound),
            17 => Some(Self::AccessDenied),
            18 => Some(Self::CwdNotFound),
            19 => Some(Self::NameTooLong),
            20 => Some(Self::NotDir),
            21 => Some(Self::NotFile),
            22 => Some(Self::SymLinkLoop),
            32 => Some(Self::ReadFailure),
            33 => Some(Self::WriteFailure),
            34 => Some(Self::InputOutput),
            35 => Some(Self::BrokenPipe),
            48 => Some(Self::InvalidVariable),
            49 => Some(Self::InvalidEnvVariable),
            64 => Some(Self::OutOfMemory),
            65 => Some(Self::NoSpaceLeft),
            66 => Some(Self::NotEqual),
            67 => Some(Self::SystemResources),
            80 => Some(Self::CorruptInput),
            96 => Some(Self::False),
            97 => Some(Self::InvalidArgument),
            126 => Some(Self::CommandCannotExecute),
            127 => Some(Self::CommandNotFound),
            _ => None,
        }
    }

    /// Whether this code reports success.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the snake_case name of this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::UnknownError => "unknown_error",
            Self::UsageError => "usage_error",
            Self::FileNotFound => "file_not_found",
            Self::AccessDenied => "access_denied",
            Self::CwdNotFound => "cwd_not_found",
            Self::NameTooLong => "name_too_long",
            Self::NotDir => "not_dir",
            Self::NotFile => "not_file",
            Self::SymLinkLoop => "sym_link_loop",
            Self::ReadFailure => "read_failure",
            Self::WriteFailure => "write_failure",
            Self::InputOutput => "input_output",
            Self::BrokenPipe => "broken_pipe",
            Self::InvalidVariable => "invalid_variable",
            Self::InvalidEnvVariable => "invalid_env_variable",
            Self::OutOfMemory => "out_of_memory",
            Self::NoSpaceLeft => "no_space_left",
            Self::NotEqual => "not_equal",
            Self::SystemResources => "system_resources",
            Self::CorruptInput => "corrupt_input",
            Self::False => "false",
            Self::InvalidArgument => "invalid_argument",
            Self::CommandCannotExecute => "command_cannot_execute",
            Self::CommandNotFound => "command_not_found",
        }
    }

    /// Returns the documentation category this code belongs to.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Success | Self::UnknownError | Self::UsageError => "generic",
            Self::FileNotFound
            | Self::AccessDenied
            | Self::CwdNotFound
            | Self::NameTooLong
            | Self::NotDir
            | Self::NotFile
            | Self::SymLinkLoop => "filesystem",
            Self::ReadFailure | Self::WriteFailure | Self::InputOutput | Self::BrokenPipe => "io",
            Self::InvalidVariable | Self::InvalidEnvVariable => "variables",
            Self::OutOfMemory | Self::NoSpaceLeft | Self::NotEqual | Self::SystemResources => {
                "system"
            }
            Self::CorruptInput => "encoding",
            Self::False | Self::InvalidArgument => "misc",
            Self::CommandCannotExecute | Self::CommandNotFound => "exec",
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code as u8
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(ErrorCode, u8); 25] = [
        (ErrorCode::Success, 0),
        (ErrorCode::UnknownError, 1),
        (ErrorCode::UsageError, 2),
        (ErrorCode::FileNotFound, 16),
        (ErrorCode::AccessDenied, 17),
        (ErrorCode::CwdNotFound, 18),
        (ErrorCode::NameTooLong, 19),
        (ErrorCode::NotDir, 20),
        (ErrorCode::NotFile, 21),
        (ErrorCode::SymLinkLoop, 22),
        (ErrorCode::ReadFailure, 32),
        (ErrorCode::WriteFailure, 33),
        (ErrorCode::InputOutput, 34),
        (ErrorCode::BrokenPipe, 35),
        (ErrorCode::InvalidVariable, 48),
        (ErrorCode::InvalidEnvVariable, 49),
        (ErrorCode::OutOfMemory, 64),
        (ErrorCode::NoSpaceLeft, 65),
        (ErrorCode::NotEqual, 66),
        (ErrorCode::SystemResources, 67),
        (ErrorCode::CorruptInput, 80),
        (ErrorCode::False, 96),
        (ErrorCode::InvalidArgument, 97),
        (ErrorCode::CommandCannotExecute, 126),
        (ErrorCode::CommandNotFound, 127),
    ];

    #[test]
    fn test_exact_wire_values() {
        for (code, value) in ALL {
            assert_eq!(u8::from(code), value, "{} drifted", code.as_str());
        }
    }

    #[test]
    fn test_from_raw_roundtrip() {
        for (code, value) in ALL {
            assert_eq!(ErrorCode::from_raw(value), Some(code));
        }
    }

    #[test]
    fn test_from_raw_rejects_reserved_values() {
        let known: Vec<u8> = ALL.iter().map(|(_, v)| *v).collect();
        for raw in 0..=u8::MAX {
            if !known.contains(&raw) {
                assert_eq!(ErrorCode::from_raw(raw), None, "byte {raw} is reserved");
            }
        }
    }

    #[test]
    fn test_only_zero_is_success() {
        for (code, value) in ALL {
            assert_eq!(code.is_success(), value == 0);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::Success.category(), "generic");
        assert_eq!(ErrorCode::SymLinkLoop.category(), "filesystem");
        assert_eq!(ErrorCode::BrokenPipe.category(), "io");
        assert_eq!(ErrorCode::InvalidEnvVariable.category(), "variables");
        assert_eq!(ErrorCode::SystemResources.category(), "system");
        assert_eq!(ErrorCode::CorruptInput.category(), "encoding");
        assert_eq!(ErrorCode::False.category(), "misc");
        assert_eq!(ErrorCode::CommandNotFound.category(), "exec");
    }
}
