use std::io;

use thiserror::Error;

/// Errors that may occur when coding byte buffers.
///
/// Malformed Manchester data is not an error; see
/// [`Manchester::is_valid`](crate::Manchester::is_valid) for that.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Source and destination lengths do not match the 2:1 ratio
    /// of the transform, or are not a multiple of the chunk size.
    #[error(
        "buffer size mismatch: source has {input} bytes, destination has {output} bytes, chunks are {chunk} bytes"
    )]
    SizeMismatch {
        input: usize,
        output: usize,
        chunk: usize,
    },

    /// The requested chunk width is not supported by the operation.
    #[error("unsupported chunk width of {0} bits")]
    UnsupportedWidth(u32),
}

impl From<CodecError> for io::Error {
    fn from(value: CodecError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}
