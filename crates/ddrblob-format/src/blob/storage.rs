//! Blob storage and the loaded-blob façade.
//!
//! [`Blob`] owns the bytes and validates only the header and the overall
//! length up front. String and structure views borrow from it and decode
//! on demand.

use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

use super::endian::ByteOrder;
use super::error::BlobError;
use super::header::{DecodedHeader, Header};
use super::strings::StringTable;
use super::structs::{StructDecoder, Structure};

/// Owned blob bytes.
#[derive(Debug)]
pub struct ByteStorage(Vec<u8>);

impl Deref for ByteStorage {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ByteStorage {
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Read a whole file into memory.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self(bytes))
    }

    /// Drain a reader into memory.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self(bytes))
    }
}

/// A loaded blob.
#[derive(Debug)]
pub struct Blob {
    storage: ByteStorage,
    header: Header,
    byte_order: ByteOrder,
    /// Declared length; bytes past it are ignored.
    len: usize,
}

impl Blob {
    /// Load a blob from owned bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, BlobError> {
        Self::from_storage(ByteStorage::from_vec(bytes))
    }

    /// Load a blob from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BlobError> {
        let storage = ByteStorage::from_file(&path)?;
        Self::from_storage(storage)
    }

    /// Load a blob from storage.
    pub fn from_storage(storage: ByteStorage) -> Result<Self, BlobError> {
        let decoded = Header::decode(&storage)?;
        Self::from_decoded(storage, decoded)
    }

    /// Finish loading once the header has already been decoded.
    ///
    /// Lets callers report the header before the rest of the blob is checked.
    pub fn from_decoded(storage: ByteStorage, decoded: DecodedHeader) -> Result<Self, BlobError> {
        let DecodedHeader { header, byte_order } = decoded;

        let expected = header.blob_len();
        let len = usize::try_from(expected).map_err(|_| BlobError::SizeOverflow {
            struct_data_size: header.struct_data_size,
            string_table_data_size: header.string_table_data_size,
        })?;
        if storage.len() < len {
            return Err(BlobError::ShortRead {
                expected,
                actual: storage.len(),
            });
        }
        if storage.len() > len {
            log::debug!(
                "ignoring {} trailing bytes after the {len}-byte blob",
                storage.len() - len
            );
        }

        log::debug!(
            "struct data {:?}, string table {:?}, {} structures",
            header.struct_region(),
            header.string_region(),
            header.structure_count
        );

        Ok(Self {
            storage,
            header,
            byte_order,
            len,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// The blob bytes, up to the declared length.
    pub fn bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// View of the string table.
    pub fn strings(&self) -> StringTable<'_> {
        StringTable::new(&self.storage[self.header.string_region()], self.byte_order)
    }

    /// Sequential decoder over the struct records.
    pub fn structures(&self) -> StructDecoder<'_> {
        StructDecoder::new(self.bytes(), &self.header, self.strings(), self.byte_order)
    }

    /// Decode every structure, in file order.
    pub fn decode_structures(&self) -> Result<Vec<Structure<'_>>, BlobError> {
        self.structures().collect()
    }
}
