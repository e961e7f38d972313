//! Blob encoder.
//!
//! Produces blobs in either byte order, for fixtures and tests. Strings are
//! deduplicated and padded to an even length, the way the DDR generator
//! writes them.

use std::collections::HashMap;

use super::endian::{ByteOrder, swap64_mirror};
use super::header::Header;
use super::{CORE_VERSION, NO_SUPER_NAME};

/// A structure to be written, with names held as text until interning.
#[derive(Clone, Debug, Default)]
pub struct StructBuilder {
    name: String,
    super_name: Option<String>,
    size: u32,
    fields: Vec<(String, String, u32)>,
    constants: Vec<(String, u64)>,
}

impl StructBuilder {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            ..Default::default()
        }
    }

    pub fn super_name(mut self, name: impl Into<String>) -> Self {
        self.super_name = Some(name.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
        offset: u32,
    ) -> Self {
        self.fields.push((name.into(), type_name.into(), offset));
        self
    }

    pub fn constant(mut self, name: impl Into<String>, value: u64) -> Self {
        self.constants.push((name.into(), value));
        self
    }
}

/// Builds a complete blob: header, struct records and string table.
#[derive(Debug)]
pub struct BlobBuilder {
    byte_order: ByteOrder,
    core_version: u32,
    sizeof_bool: u8,
    sizeof_udata: u8,
    bitfield_format: u8,
    struct_data: Vec<u8>,
    structure_count: u32,
    string_data: Vec<u8>,
    /// Offset of each interned string's entry.
    string_offsets: HashMap<String, u32>,
}

impl Default for BlobBuilder {
    fn default() -> Self {
        Self::new(ByteOrder::Native)
    }
}

impl BlobBuilder {
    /// Builder writing in `byte_order` relative to this machine.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            core_version: CORE_VERSION,
            sizeof_bool: 4,
            sizeof_udata: std::mem::size_of::<usize>() as u8,
            bitfield_format: 1,
            struct_data: Vec::new(),
            structure_count: 0,
            string_data: Vec::new(),
            string_offsets: HashMap::new(),
        }
    }

    pub fn core_version(mut self, version: u32) -> Self {
        self.core_version = version;
        self
    }

    pub fn sizes(mut self, sizeof_bool: u8, sizeof_udata: u8) -> Self {
        self.sizeof_bool = sizeof_bool;
        self.sizeof_udata = sizeof_udata;
        self
    }

    pub fn bitfield_format(mut self, format: u8) -> Self {
        self.bitfield_format = format;
        self
    }

    /// Intern a string, returning the offset of its table entry.
    ///
    /// # Panics
    /// Panics if the string is longer than `u16::MAX` bytes.
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&offset) = self.string_offsets.get(s) {
            return offset;
        }

        let len = u16::try_from(s.len())
            .unwrap_or_else(|_| panic!("string of {} bytes does not fit a u16 length", s.len()));
        let offset = self.string_data.len() as u32;
        self.string_data
            .extend_from_slice(&self.byte_order.normalize_u16(len).to_ne_bytes());
        self.string_data.extend_from_slice(s.as_bytes());
        if len % 2 == 1 {
            self.string_data.push(0);
        }
        self.string_offsets.insert(s.to_string(), offset);
        offset
    }

    /// Append a structure with its fields and constants.
    pub fn structure(&mut self, st: StructBuilder) -> &mut Self {
        let name = self.intern(&st.name);
        let super_name = match &st.super_name {
            Some(s) => self.intern(s),
            None => NO_SUPER_NAME,
        };

        self.push_u32(name);
        self.push_u32(super_name);
        self.push_u32(st.size);
        self.push_u32(st.fields.len() as u32);
        self.push_u32(st.constants.len() as u32);

        for (field_name, type_name, offset) in &st.fields {
            let field_name = self.intern(field_name);
            let type_name = self.intern(type_name);
            self.push_u32(field_name);
            self.push_u32(type_name);
            self.push_u32(*offset);
        }

        for (const_name, value) in &st.constants {
            let const_name = self.intern(const_name);
            self.push_u32(const_name);
            let raw = match self.byte_order {
                ByteOrder::Native => value.to_ne_bytes(),
                ByteOrder::Swapped => swap64_mirror(value.to_ne_bytes()),
            };
            self.struct_data.extend_from_slice(&raw);
        }

        self.structure_count += 1;
        self
    }

    /// Header describing the blob built so far.
    pub fn header(&self) -> Header {
        Header {
            core_version: self.core_version,
            sizeof_bool: self.sizeof_bool,
            sizeof_udata: self.sizeof_udata,
            bitfield_format: self.bitfield_format,
            padding: 0,
            struct_data_size: self.struct_data.len() as u32,
            string_table_data_size: self.string_data.len() as u32,
            structure_count: self.structure_count,
        }
    }

    /// Emit the blob bytes.
    pub fn build(&self) -> Vec<u8> {
        let header = self.header();
        let mut out = Vec::with_capacity(header.blob_len() as usize);
        out.extend_from_slice(&header.encode(self.byte_order));
        out.extend_from_slice(&self.struct_data);
        out.extend_from_slice(&self.string_data);
        out
    }

    fn push_u32(&mut self, value: u32) {
        self.struct_data
            .extend_from_slice(&self.byte_order.normalize_u32(value).to_ne_bytes());
    }
}
