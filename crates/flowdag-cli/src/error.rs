//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `flowdag` binary.
//! Every variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read or parse
//!   the input at all. These errors terminate early before any analysis
//!   runs.
//! - Exit code **1** — logical failure: the tool ran to completion but
//!   the result is a well-defined failure (the pipeline is cyclic).
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `flowdag` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with
/// each variant. [`CliError::message`] returns the human-readable error
/// string that should be printed to stderr before exiting; it is empty
/// for variants whose output has already been emitted.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-input-size` limit.
    InputTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or
        /// the filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None`
        /// for stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// A generic I/O error while reading input or writing output.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid pipeline JSON document.
    ParseFailed {
        /// Parser detail, including line and column.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The analyzed pipeline contains at least one cycle.
    ///
    /// The report has already been printed; this variant exists so `main`
    /// can exit with code 1 cleanly.
    CyclicPipeline,
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::InputTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,
            Self::CyclicPipeline => 1,
        }
    }

    /// Returns the message to print to stderr, or an empty string when
    /// the relevant output has already been emitted.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("permission denied reading {}", path.display())
            }
            Self::InputTooLarge {
                source,
                limit,
                actual,
            } => match actual {
                Some(actual) => {
                    format!("input {source} is {actual} bytes, exceeding the {limit}-byte limit")
                }
                None => format!("input {source} exceeds the {limit}-byte limit"),
            },
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!("input {source} is not valid UTF-8 (first bad byte at offset {byte_offset})")
            }
            Self::IoError { source, detail } => {
                format!("I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("not a valid pipeline document: {detail}")
            }
            Self::CyclicPipeline => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_failures_exit_2() {
        let err = CliError::ParseFailed {
            detail: "line 1, column 1: expected value".to_owned(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("line 1"));
    }

    #[test]
    fn cyclic_pipeline_exits_1_silently() {
        let err = CliError::CyclicPipeline;
        assert_eq!(err.exit_code(), 1);
        assert!(err.message().is_empty());
    }
}
