//! Blob decoding errors.

use std::io;

use super::HEADER_SIZE;

/// Coarse error classes, one per failure mode of the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The blob could not be opened or fully read.
    Io,
    /// A fixed-size record runs past the available bytes.
    TruncatedInput,
    /// Declared sizes, counts or offsets contradict the blob's own bounds.
    CorruptBlob,
}

/// Blob load or decode error.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("read blob data returned {actual} bytes, expected {expected}")]
    ShortRead { expected: u64, actual: usize },
    #[error(
        "truncated input: {context} needs {needed} bytes at offset {offset}, \
         only {available} available"
    )]
    Truncated {
        context: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("string offset {offset:#x} outside string table of {table_size} bytes")]
    StringOffsetOutOfRange { offset: u32, table_size: u32 },
    #[error(
        "string entry at {offset:#x} ({len} bytes) overruns string table of {table_size} bytes"
    )]
    StringOverrun {
        offset: u32,
        len: usize,
        table_size: u32,
    },
    #[error(
        "structure #{index}: {record} record needs {needed} bytes at struct offset {offset}, \
         struct data is {region_size} bytes"
    )]
    StructRegionOverrun {
        index: u32,
        record: &'static str,
        offset: usize,
        needed: u64,
        region_size: u32,
    },
    #[error("blob size overflows: header ({HEADER_SIZE}) + {struct_data_size} + {string_table_data_size}")]
    SizeOverflow {
        struct_data_size: u32,
        string_table_data_size: u32,
    },
}

impl BlobError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlobError::Io(_) | BlobError::ShortRead { .. } => ErrorKind::Io,
            BlobError::Truncated { .. } => ErrorKind::TruncatedInput,
            BlobError::StringOffsetOutOfRange { .. }
            | BlobError::StringOverrun { .. }
            | BlobError::StructRegionOverrun { .. }
            | BlobError::SizeOverflow { .. } => ErrorKind::CorruptBlob,
        }
    }
}
