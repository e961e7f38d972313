//! Byte-order normalization.
//!
//! Blobs are written in the producer's native byte order. When the producer
//! and the reader disagree, every multi-byte field must be reversed before
//! use. Single-byte fields are never touched.

/// Reverse the 2 bytes of a value.
#[inline]
pub fn swap16(value: u16) -> u16 {
    value.swap_bytes()
}

/// Reverse the 4 bytes of a value.
#[inline]
pub fn swap32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Mirror an 8-byte constant value stored as two adjacent 32-bit words.
///
/// The storage is only 4-byte aligned, so the value is handled as an opaque
/// byte array. This is a full 8-byte mirror: the two words trade places as
/// well as being reversed internally.
#[inline]
pub fn swap64_mirror(mut bytes: [u8; 8]) -> [u8; 8] {
    bytes.reverse();
    bytes
}

/// Relationship between the blob's byte order and the reader's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Written on a machine with the reader's byte order.
    #[default]
    Native,
    /// Written on a machine with the opposite byte order.
    Swapped,
}

impl ByteOrder {
    #[inline]
    pub fn swaps_needed(self) -> bool {
        self == ByteOrder::Swapped
    }

    #[inline]
    pub fn normalize_u16(self, raw: u16) -> u16 {
        match self {
            ByteOrder::Native => raw,
            ByteOrder::Swapped => swap16(raw),
        }
    }

    #[inline]
    pub fn normalize_u32(self, raw: u32) -> u32 {
        match self {
            ByteOrder::Native => raw,
            ByteOrder::Swapped => swap32(raw),
        }
    }

    /// Reconstruct a constant's 64-bit value from its 8 stored bytes.
    #[inline]
    pub fn normalize_constant(self, raw: [u8; 8]) -> u64 {
        let bytes = match self {
            ByteOrder::Native => raw,
            ByteOrder::Swapped => swap64_mirror(raw),
        };
        u64::from_ne_bytes(bytes)
    }

    /// Byte order of the producing machine, for display.
    pub fn producer_endianness(self) -> &'static str {
        let native_little = cfg!(target_endian = "little");
        match (self, native_little) {
            (ByteOrder::Native, true) | (ByteOrder::Swapped, false) => "little-endian",
            (ByteOrder::Native, false) | (ByteOrder::Swapped, true) => "big-endian",
        }
    }
}
