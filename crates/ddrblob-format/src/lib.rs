//! Decoder for DDR structure blobs.
//!
//! This crate contains:
//! - Blob format definitions (Header, record layouts, string entries)
//! - The decoding engine (ByteCursor, StringTable, StructDecoder)
//! - The report renderer (`dump`) and a blob encoder for fixtures

pub mod blob;
pub mod colors;

// Re-export commonly used items at crate root
pub use blob::{
    Blob, BlobBuilder, BlobError, BlobStr, ByteCursor, ByteOrder, ByteStorage, CORE_VERSION,
    Constant, DecodedHeader, ErrorKind, Field, HEADER_SIZE, Header, NO_SUPER_NAME, StringEntries,
    StringEntry, StringTable, StructBuilder, StructDecoder, Structure, dump, dump_header,
    dump_strings, dump_structures, sort_structures, swap16, swap32, swap64_mirror,
};
pub use colors::Colors;
