//! String table access.
//!
//! The table is a run of entries `{ length: u16, bytes[length], pad[length % 2] }`
//! addressed by byte offset from the table start. Entries are not
//! null-terminated; the length prefix is authoritative.

use std::cmp::Ordering;
use std::fmt;

use super::cursor::ByteCursor;
use super::endian::ByteOrder;
use super::error::BlobError;

/// A string borrowed from the blob's string table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobStr<'a> {
    offset: u32,
    bytes: &'a [u8],
}

impl<'a> BlobStr<'a> {
    pub(crate) fn new(offset: u32, bytes: &'a [u8]) -> Self {
        Self { offset, bytes }
    }

    /// Offset of the entry's length prefix within the string table.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Entry size in the table, length prefix and padding included.
    pub fn stored_size(&self) -> usize {
        2 + self.bytes.len() + self.bytes.len() % 2
    }

    /// The text, with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

impl fmt::Display for BlobStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for BlobStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:#x}", self.to_string_lossy(), self.offset)
    }
}

impl PartialOrd for BlobStr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Byte-wise lexicographic order of the contents; offsets break ties.
impl Ord for BlobStr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes
            .cmp(other.bytes)
            .then(self.offset.cmp(&other.offset))
    }
}

/// One entry from enumerating the string table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringEntry<'a> {
    /// 1-based position in table order.
    pub index: u32,
    pub string: BlobStr<'a>,
}

/// View of the string table region.
#[derive(Clone, Copy, Debug)]
pub struct StringTable<'a> {
    table: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> StringTable<'a> {
    /// View over the table bytes alone (offset 0 is the first entry).
    pub fn new(table: &'a [u8], byte_order: ByteOrder) -> Self {
        Self { table, byte_order }
    }

    /// Table size in bytes.
    pub fn len_bytes(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up the entry whose length prefix starts at `offset`.
    pub fn entry_at(&self, offset: u32) -> Result<BlobStr<'a>, BlobError> {
        let table_size = self.table_size();
        if offset as usize >= self.table.len() {
            return Err(BlobError::StringOffsetOutOfRange { offset, table_size });
        }

        let mut cursor = ByteCursor::with_bounds(self.table, offset as usize, self.table.len());
        let overrun = |len: usize| BlobError::StringOverrun {
            offset,
            len,
            table_size,
        };
        let len = cursor
            .read_u16()
            .map(|raw| self.byte_order.normalize_u16(raw) as usize)
            .map_err(|e| overrun(e.needed))?;
        let bytes = cursor.read_bytes(len).map_err(|_| overrun(len))?;
        Ok(BlobStr::new(offset, bytes))
    }

    /// Enumerate entries in table order.
    pub fn entries(&self) -> StringEntries<'a> {
        StringEntries {
            table: *self,
            next_offset: 0,
            index: 1,
            failed: false,
        }
    }

    fn table_size(&self) -> u32 {
        // The table length came from a u32 header field.
        self.table.len() as u32
    }
}

/// Iterator over string table entries.
///
/// Ends at the table end, or after yielding the first error.
#[derive(Clone, Debug)]
pub struct StringEntries<'a> {
    table: StringTable<'a>,
    next_offset: usize,
    index: u32,
    failed: bool,
}

impl<'a> Iterator for StringEntries<'a> {
    type Item = Result<StringEntry<'a>, BlobError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_offset >= self.table.len_bytes() {
            return None;
        }

        let offset = self.next_offset as u32;
        let string = match self.table.entry_at(offset) {
            Ok(s) => s,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        // Odd-length entries carry one pad byte to keep the next entry even.
        let next = self.next_offset + string.stored_size();
        if next > self.table.len_bytes() {
            self.failed = true;
            return Some(Err(BlobError::StringOverrun {
                offset,
                len: string.len(),
                table_size: self.table.table_size(),
            }));
        }

        let entry = StringEntry {
            index: self.index,
            string,
        };
        self.next_offset = next;
        self.index += 1;
        Some(Ok(entry))
    }
}

impl std::iter::FusedIterator for StringEntries<'_> {}
