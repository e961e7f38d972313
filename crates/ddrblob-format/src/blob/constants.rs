//! Blob format constants.

/// Blob format version this decoder was written against.
pub const CORE_VERSION: u32 = 1;

/// Raw `coreVersion` values above this were written with the opposite byte order.
pub const SWAP_THRESHOLD: u32 = 0xFFFF;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 20;

/// Struct record: name, superName, sizeOf, fieldCount, constCount (5 × u32).
pub const STRUCT_RECORD_SIZE: usize = 20;

/// Field record: declaredName, declaredType, offset (3 × u32).
pub const FIELD_RECORD_SIZE: usize = 12;

/// Constant record: name (u32) followed by the 8 value bytes.
pub const CONSTANT_RECORD_SIZE: usize = 12;

/// `superNameOffset` sentinel for a structure without a super type.
pub const NO_SUPER_NAME: u32 = u32::MAX;
