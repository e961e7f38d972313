//! Blob header (20 bytes).
//!
//! Layout:
//! - 0-3: coreVersion (u32)
//! - 4-7: sizeofBool, sizeofUDATA, bitfieldFormat, padding (4 × u8)
//! - 8-19: structDataSize, stringTableDataSize, structureCount (3 × u32)

use std::ops::Range;

use super::cursor::{ByteCursor, OutOfBounds};
use super::endian::{ByteOrder, swap32};
use super::error::BlobError;
use super::{CORE_VERSION, HEADER_SIZE, SWAP_THRESHOLD};

/// Blob header with all fields in reader byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub core_version: u32,
    pub sizeof_bool: u8,
    pub sizeof_udata: u8,
    /// Bitfield encoding used by the producer's compiler.
    pub bitfield_format: u8,
    pub padding: u8,
    /// Size of the struct record region in bytes.
    pub struct_data_size: u32,
    /// Size of the string table in bytes, length prefixes and padding included.
    pub string_table_data_size: u32,
    pub structure_count: u32,
}

/// A decoded header together with the byte order every later read must use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedHeader {
    pub header: Header,
    pub byte_order: ByteOrder,
}

impl Header {
    /// Decode and normalize the header at the start of `bytes`.
    ///
    /// Every real `coreVersion` is small, so a raw value above `0xFFFF`
    /// means the blob was written with the opposite byte order.
    pub fn decode(bytes: &[u8]) -> Result<DecodedHeader, BlobError> {
        let mut cursor = ByteCursor::new(bytes);
        let truncated = |_: OutOfBounds| BlobError::Truncated {
            context: "blob header",
            offset: 0,
            needed: HEADER_SIZE,
            available: bytes.len(),
        };
        let raw: [u8; HEADER_SIZE] = cursor.read_array().map_err(truncated)?;

        let mut header = Self::from_raw(&raw);
        let byte_order = if header.core_version > SWAP_THRESHOLD {
            header.endian_swap();
            ByteOrder::Swapped
        } else {
            ByteOrder::Native
        };

        log::debug!(
            "blob header: version {} written {} ({:?})",
            header.core_version,
            byte_order.producer_endianness(),
            byte_order
        );
        if header.core_version != CORE_VERSION {
            log::warn!(
                "unexpected blob coreVersion {} (reader knows {CORE_VERSION})",
                header.core_version
            );
        }

        Ok(DecodedHeader { header, byte_order })
    }

    /// Read fields without normalization.
    fn from_raw(raw: &[u8; HEADER_SIZE]) -> Self {
        let u32_at =
            |at: usize| u32::from_ne_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]]);
        Self {
            core_version: u32_at(0),
            sizeof_bool: raw[4],
            sizeof_udata: raw[5],
            bitfield_format: raw[6],
            padding: raw[7],
            struct_data_size: u32_at(8),
            string_table_data_size: u32_at(12),
            structure_count: u32_at(16),
        }
    }

    /// Reverse the multi-byte fields. Single-byte fields are left alone.
    fn endian_swap(&mut self) {
        self.core_version = swap32(self.core_version);
        self.struct_data_size = swap32(self.struct_data_size);
        self.string_table_data_size = swap32(self.string_table_data_size);
        self.structure_count = swap32(self.structure_count);
    }

    /// Encode to 20 bytes in the given byte order.
    pub fn encode(&self, order: ByteOrder) -> [u8; HEADER_SIZE] {
        let u32_bytes = |v: u32| order.normalize_u32(v).to_ne_bytes();
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&u32_bytes(self.core_version));
        bytes[4] = self.sizeof_bool;
        bytes[5] = self.sizeof_udata;
        bytes[6] = self.bitfield_format;
        bytes[7] = self.padding;
        bytes[8..12].copy_from_slice(&u32_bytes(self.struct_data_size));
        bytes[12..16].copy_from_slice(&u32_bytes(self.string_table_data_size));
        bytes[16..20].copy_from_slice(&u32_bytes(self.structure_count));
        bytes
    }

    /// Total blob length declared by the header.
    pub fn blob_len(&self) -> u64 {
        HEADER_SIZE as u64 + self.struct_data_size as u64 + self.string_table_data_size as u64
    }

    /// Byte range of the struct record region.
    pub fn struct_region(&self) -> Range<usize> {
        let start = HEADER_SIZE;
        start..start + self.struct_data_size as usize
    }

    /// Byte range of the string table.
    pub fn string_region(&self) -> Range<usize> {
        let start = self.struct_region().end;
        start..start + self.string_table_data_size as usize
    }
}
