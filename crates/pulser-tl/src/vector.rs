//! Boxed vector encoding.
//!
//! ```text
//! [vector tag: 4B][count: 4B][element 0][element 1]...
//! ```
//!
//! Fixed-width elements carry no per-element framing. Strings are written
//! with the length-prefixed rule and objects with their full boxed encoding.

use crate::{buffer::TlBuffer, errors::Result, object::Object, tags::TypeTag};

impl TlBuffer {
    /// Write a boxed vector, encoding each element with `write_item`
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `write_item`. The buffer is
    /// left as it was before the call.
    pub fn write_vector<T>(
        &mut self,
        items: &[T],
        mut write_item: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        self.atomic(|buf| {
            buf.write_tag(TypeTag::Vector);
            #[allow(clippy::cast_possible_truncation)]
            buf.write_uint(items.len() as u32);
            for item in items {
                write_item(buf, item)?;
            }
            Ok(())
        })
    }

    /// Write `Vector<int>`
    pub fn write_vector_int(&mut self, items: &[i32]) {
        self.write_tag(TypeTag::Vector);
        #[allow(clippy::cast_possible_truncation)]
        self.write_uint(items.len() as u32);
        for &item in items {
            self.write_int(item);
        }
    }

    /// Write `Vector<long>`
    pub fn write_vector_long(&mut self, items: &[i64]) {
        self.write_tag(TypeTag::Vector);
        #[allow(clippy::cast_possible_truncation)]
        self.write_uint(items.len() as u32);
        for &item in items {
            self.write_long(item);
        }
    }

    /// Write `Vector<string>`
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BytesTooLong`](crate::EncodeError::BytesTooLong)
    /// if any element exceeds the length-prefix limit.
    pub fn write_vector_string<S: AsRef<str>>(&mut self, items: &[S]) -> Result<()> {
        self.write_vector(items, |buf, item| buf.write_string(item.as_ref()))
    }

    /// Write `Vector<Object>`, each element fully boxed
    ///
    /// # Errors
    ///
    /// Propagates any element's encoding error.
    pub fn write_vector_objects(&mut self, items: &[Object]) -> Result<()> {
        self.write_vector(items, |buf, item| item.encode_into(buf))
    }
}
