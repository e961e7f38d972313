//! Structure, field and constant records.
//!
//! Records carry no framing of their own. A struct record is followed by
//! exactly `fieldCount` field records and then `constCount` constant
//! records, and the next struct record starts right after them. The region
//! can only be walked front to back.

use super::cursor::{ByteCursor, OutOfBounds};
use super::endian::ByteOrder;
use super::error::BlobError;
use super::header::Header;
use super::strings::{BlobStr, StringTable};
use super::{CONSTANT_RECORD_SIZE, FIELD_RECORD_SIZE, NO_SUPER_NAME, STRUCT_RECORD_SIZE};

/// A decoded structure with its fields and constants in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Structure<'a> {
    pub name: BlobStr<'a>,
    pub super_name: Option<BlobStr<'a>>,
    /// `sizeof` of the native type.
    pub size: u32,
    pub fields: Vec<Field<'a>>,
    pub constants: Vec<Constant<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: BlobStr<'a>,
    pub type_name: BlobStr<'a>,
    /// Byte offset within the structure.
    pub offset: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant<'a> {
    pub name: BlobStr<'a>,
    pub value: u64,
}

/// Struct record as stored, after byte-order normalization.
#[derive(Clone, Copy, Debug)]
struct StructRecord {
    name_offset: u32,
    super_name_offset: u32,
    size_of: u32,
    field_count: u32,
    const_count: u32,
}

/// Sequential decoder over the struct record region.
///
/// Yields exactly `structureCount` structures, or stops after the first error.
#[derive(Clone, Debug)]
pub struct StructDecoder<'a> {
    cursor: ByteCursor<'a>,
    strings: StringTable<'a>,
    byte_order: ByteOrder,
    region_size: u32,
    count: u32,
    decoded: u32,
    failed: bool,
}

impl<'a> StructDecoder<'a> {
    /// Decoder over `bytes`, which must hold the whole blob.
    pub fn new(
        bytes: &'a [u8],
        header: &Header,
        strings: StringTable<'a>,
        byte_order: ByteOrder,
    ) -> Self {
        let region = header.struct_region();
        Self {
            cursor: ByteCursor::with_bounds(bytes, region.start, region.end),
            strings,
            byte_order,
            region_size: header.struct_data_size,
            count: header.structure_count,
            decoded: 0,
            failed: false,
        }
    }

    /// Structures not yet decoded.
    pub fn remaining(&self) -> u32 {
        self.count - self.decoded
    }

    fn decode_next(&mut self) -> Result<Structure<'a>, BlobError> {
        let index = self.decoded;
        let record = self.read_struct_record(index)?;

        // Reject counts the region cannot hold before allocating for them.
        let trailing = record.field_count as u64 * FIELD_RECORD_SIZE as u64
            + record.const_count as u64 * CONSTANT_RECORD_SIZE as u64;
        if trailing > self.cursor.remaining() as u64 {
            return Err(BlobError::StructRegionOverrun {
                index,
                record: "field/constant",
                offset: self.region_offset(),
                needed: trailing,
                region_size: self.region_size,
            });
        }

        let name = self.strings.entry_at(record.name_offset)?;
        let super_name = match record.super_name_offset {
            NO_SUPER_NAME => None,
            offset => Some(self.strings.entry_at(offset)?),
        };

        let mut fields = Vec::with_capacity(record.field_count as usize);
        for _ in 0..record.field_count {
            fields.push(self.read_field(index)?);
        }

        let mut constants = Vec::with_capacity(record.const_count as usize);
        for _ in 0..record.const_count {
            constants.push(self.read_constant(index)?);
        }

        log::trace!(
            "structure #{index} {name}: {} fields, {} constants",
            fields.len(),
            constants.len()
        );

        Ok(Structure {
            name,
            super_name,
            size: record.size_of,
            fields,
            constants,
        })
    }

    fn read_struct_record(&mut self, index: u32) -> Result<StructRecord, BlobError> {
        self.ensure(index, "struct", STRUCT_RECORD_SIZE)?;
        Ok(StructRecord {
            name_offset: self.read_u32(index, "struct")?,
            super_name_offset: self.read_u32(index, "struct")?,
            size_of: self.read_u32(index, "struct")?,
            field_count: self.read_u32(index, "struct")?,
            const_count: self.read_u32(index, "struct")?,
        })
    }

    fn read_field(&mut self, index: u32) -> Result<Field<'a>, BlobError> {
        self.ensure(index, "field", FIELD_RECORD_SIZE)?;
        let name_offset = self.read_u32(index, "field")?;
        let type_offset = self.read_u32(index, "field")?;
        let offset = self.read_u32(index, "field")?;
        Ok(Field {
            name: self.strings.entry_at(name_offset)?,
            type_name: self.strings.entry_at(type_offset)?,
            offset,
        })
    }

    fn read_constant(&mut self, index: u32) -> Result<Constant<'a>, BlobError> {
        self.ensure(index, "constant", CONSTANT_RECORD_SIZE)?;
        let name_offset = self.read_u32(index, "constant")?;
        let raw: [u8; 8] = self
            .cursor
            .read_array()
            .map_err(|e| self.overrun(index, "constant", e))?;
        Ok(Constant {
            name: self.strings.entry_at(name_offset)?,
            value: self.byte_order.normalize_constant(raw),
        })
    }

    /// Check a whole record fits before reading any of it.
    fn ensure(&self, index: u32, record: &'static str, size: usize) -> Result<(), BlobError> {
        if size > self.cursor.remaining() {
            return Err(BlobError::StructRegionOverrun {
                index,
                record,
                offset: self.region_offset(),
                needed: size as u64,
                region_size: self.region_size,
            });
        }
        Ok(())
    }

    fn read_u32(&mut self, index: u32, record: &'static str) -> Result<u32, BlobError> {
        self.cursor
            .read_u32()
            .map(|raw| self.byte_order.normalize_u32(raw))
            .map_err(|e| self.overrun(index, record, e))
    }

    fn overrun(&self, index: u32, record: &'static str, e: OutOfBounds) -> BlobError {
        BlobError::StructRegionOverrun {
            index,
            record,
            offset: e.offset - self.cursor.start(),
            needed: e.needed as u64,
            region_size: self.region_size,
        }
    }

    /// Cursor position relative to the start of the struct region.
    fn region_offset(&self) -> usize {
        self.cursor.position() - self.cursor.start()
    }
}

impl<'a> Iterator for StructDecoder<'a> {
    type Item = Result<Structure<'a>, BlobError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.decoded >= self.count {
            return None;
        }

        let result = self.decode_next();
        match &result {
            Ok(_) => {
                self.decoded += 1;
                if self.decoded == self.count && !self.cursor.is_at_end() {
                    log::warn!(
                        "{} bytes of struct data left after {} structures",
                        self.cursor.remaining(),
                        self.count
                    );
                }
            }
            Err(_) => self.failed = true,
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, Some(self.remaining() as usize))
    }
}

impl std::iter::FusedIterator for StructDecoder<'_> {}
