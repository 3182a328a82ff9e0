//! Append-only output buffer with TL write primitives.
//!
//! All multi-byte values are written little-endian. The buffer never exposes
//! reads or seeks; bytes are only ever appended.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{errors::Result, tags::TypeTag};

/// Growable, append-only byte buffer
///
/// # Invariants
///
/// - **Append Only**: Previously written bytes are never modified. A
///   compound write that fails rolls back only the bytes it appended.
/// - **Exact Growth**: Each primitive grows [`TlBuffer::len`] by exactly the
///   number of bytes it contributes.
///
/// The capacity passed to [`TlBuffer::new`] is a hint. The buffer grows past
/// it as needed.
#[derive(Debug, Default)]
pub struct TlBuffer {
    buf: BytesMut,
}

impl TlBuffer {
    /// Create an empty buffer reserving `capacity` bytes
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { buf: BytesMut::with_capacity(capacity) }
    }

    /// Write a signed 32-bit integer (`int`)
    #[inline]
    pub fn write_int(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Write an unsigned 32-bit integer
    #[inline]
    pub fn write_uint(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Write a signed 64-bit integer (`long`)
    #[inline]
    pub fn write_long(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Write an IEEE-754 double as its raw bit pattern
    #[inline]
    pub fn write_double(&mut self, value: f64) {
        self.buf.put_f64_le(value);
    }

    /// Write bytes verbatim, with no length prefix
    ///
    /// Used for fixed-size fields such as `int128`/`int256` nonces whose
    /// length is implied by the schema.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Write a constructor tag
    #[inline]
    pub fn write_tag(&mut self, tag: TypeTag) {
        self.write_uint(tag.to_u32());
    }

    #[inline]
    pub(crate) fn write_zeros(&mut self, count: usize) {
        self.buf.put_bytes(0, count);
    }

    /// Drop everything written after `len`
    #[inline]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Run `write` and remove its output if it fails
    pub(crate) fn atomic<T>(
        &mut self,
        write: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let start = self.len();
        let result = write(self);
        if result.is_err() {
            self.truncate(start);
        }
        result
    }

    /// Number of bytes written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the written bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the buffer and return its contents without copying
    #[must_use]
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}
