//! Bounds-checked reader over an immutable byte buffer.
//!
//! Integers are read in host-native order. Blob data is in the producer's
//! native order, so callers normalize through [`ByteOrder`](super::ByteOrder)
//! after reading.

/// A read that would cross the cursor's end bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Absolute offset the read started at.
    pub offset: usize,
    /// Bytes the read needed.
    pub needed: usize,
    /// Exclusive end bound of the cursor.
    pub end: usize,
}

impl OutOfBounds {
    /// Bytes that were actually available at `offset`.
    pub fn available(&self) -> usize {
        self.end.saturating_sub(self.offset)
    }
}

/// Sequential and random-access reader restricted to `[start, end)`.
///
/// Positions are absolute offsets into the underlying buffer. A failed read
/// leaves the position unchanged.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    start: usize,
    pos: usize,
    end: usize,
}

impl<'a> ByteCursor<'a> {
    /// Cursor over the whole buffer.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            start: 0,
            pos: 0,
            end: bytes.len(),
        }
    }

    /// Cursor over `[start, end)`, with `end` clamped to the buffer length.
    pub fn with_bounds(bytes: &'a [u8], start: usize, end: usize) -> Self {
        let end = end.min(bytes.len());
        let start = start.min(end);
        Self {
            bytes,
            start,
            pos: start,
            end,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Move to an absolute position inside `[start, end]`.
    pub fn seek(&mut self, pos: usize) -> Result<(), OutOfBounds> {
        if pos < self.start || pos > self.end {
            return Err(OutOfBounds {
                offset: pos,
                needed: 0,
                end: self.end,
            });
        }
        self.pos = pos;
        Ok(())
    }

    /// Advance without reading.
    pub fn skip(&mut self, len: usize) -> Result<(), OutOfBounds> {
        self.check(len)?;
        self.pos += len;
        Ok(())
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], OutOfBounds> {
        self.check(len)?;
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], OutOfBounds> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.read_bytes(N)?);
        Ok(arr)
    }

    pub fn read_u8(&mut self) -> Result<u8, OutOfBounds> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    pub fn read_u16(&mut self) -> Result<u16, OutOfBounds> {
        self.read_array().map(u16::from_ne_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, OutOfBounds> {
        self.read_array().map(u32::from_ne_bytes)
    }

    fn check(&self, len: usize) -> Result<(), OutOfBounds> {
        if len > self.remaining() {
            return Err(OutOfBounds {
                offset: self.pos,
                needed: len,
                end: self.end,
            });
        }
        Ok(())
    }
}
