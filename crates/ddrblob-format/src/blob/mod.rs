//! DDR blob format and decoding engine.
//!
//! Layout: Header → StructData → StringTable. All multi-byte integers are
//! in the producing machine's native byte order.

mod builder;
mod constants;
mod cursor;
mod dump;
mod endian;
mod error;
mod header;
mod storage;
mod strings;
mod structs;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod endian_tests;
#[cfg(test)]
mod storage_tests;

pub use builder::{BlobBuilder, StructBuilder};
pub use constants::{
    CONSTANT_RECORD_SIZE, CORE_VERSION, FIELD_RECORD_SIZE, HEADER_SIZE, NO_SUPER_NAME,
    STRUCT_RECORD_SIZE, SWAP_THRESHOLD,
};
pub use cursor::{ByteCursor, OutOfBounds};
pub use dump::{dump, dump_header, dump_strings, dump_structures, sort_structures};
pub use endian::{ByteOrder, swap16, swap32, swap64_mirror};
pub use error::{BlobError, ErrorKind};
pub use header::{DecodedHeader, Header};
pub use storage::{Blob, ByteStorage};
pub use strings::{BlobStr, StringEntries, StringEntry, StringTable};
pub use structs::{Constant, Field, StructDecoder, Structure};
