// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the PCM encoder library.
///
/// Every failure is fatal for the current encoding run; nothing is retried
/// internally. The caller decides whether to retry with different input.
#[derive(Error, Debug)]
pub enum CodecError {
    /// An error occurred during I/O operations while persisting or reloading
    /// an encoded payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input audio format is not supported (wrong channel count or bit
    /// depth). Reported before any processing starts.
    #[error("unsupported sample format: {0}")]
    FormatUnsupported(String),

    /// A bit index points beyond the end of a bit buffer.
    #[error("bit index {index} out of range for buffer of {len} bits")]
    IndexOutOfRange { index: usize, len: usize },

    /// Encoded data is corrupted or incompatible with its decode table:
    /// the bit stream ran out in the middle of a code word, a table walk
    /// left the table, or a degenerate tree was asked for a serialization
    /// it cannot have.
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    /// The encoder was asked for a symbol that is absent from the
    /// histogram-derived dictionary, meaning the input sequence is not the
    /// one the tree was built from.
    #[error("symbol {0} is absent from the encoding dictionary")]
    DictionaryMiss(i32),

    /// An invalid argument was provided to a function.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

/// A specialized `Result` type for encoder operations.
pub type Result<T> = std::result::Result<T, CodecError>;
