//! Length-prefixed `bytes`/`string` encoding.
//!
//! TL serializes variable-length data with one of two headers, chosen by the
//! data length `n`:
//!
//! ```text
//! n <  254:  [n: 1B][data: n B][zero pad]        (1 + n + pad) % 4 == 0
//! n >= 254:  [254 | n << 8: 4B LE][data][pad]    (n + pad) % 4 == 0
//! ```
//!
//! Both regimes leave the total encoded length a multiple of four. The long
//! header only has 24 bits for the length, so values of 16 MiB or more cannot
//! be represented and are rejected.
//!
//! Big integers reuse the same rule on their minimal big-endian magnitude.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    buffer::TlBuffer,
    errors::{EncodeError, Result},
};

/// Lengths below this use the single-byte header
pub const SHORT_LEN_LIMIT: usize = 254;

/// Marker byte that opens the four-byte header
pub const LONG_LEN_MARKER: u8 = 254;

/// Largest length the four-byte header can carry
pub const MAX_BYTES_LEN: usize = (1 << 24) - 1;

#[inline]
const fn padding(written: usize) -> usize {
    (4 - written % 4) % 4
}

/// Total encoded size of a length-prefixed value carrying `len` data bytes
#[must_use]
pub const fn tl_bytes_len(len: usize) -> usize {
    if len < SHORT_LEN_LIMIT {
        1 + len + padding(1 + len)
    } else {
        4 + len + padding(len)
    }
}

impl TlBuffer {
    /// Write a length-prefixed byte string (`bytes`)
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::BytesTooLong`] if `bytes` is longer than
    /// [`MAX_BYTES_LEN`]. Nothing is written in that case.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let len = bytes.len();

        if len < SHORT_LEN_LIMIT {
            #[allow(clippy::cast_possible_truncation)]
            self.write_raw(&[len as u8]);
            self.write_raw(bytes);
            self.write_zeros(padding(1 + len));
            return Ok(());
        }

        if len > MAX_BYTES_LEN {
            return Err(EncodeError::BytesTooLong { len, max: MAX_BYTES_LEN });
        }

        #[allow(clippy::cast_possible_truncation)]
        self.write_uint(((len as u32) << 8) | u32::from(LONG_LEN_MARKER));
        self.write_raw(bytes);
        self.write_zeros(padding(len));
        Ok(())
    }

    /// Write a UTF-8 string (`string`)
    ///
    /// # Errors
    ///
    /// Same as [`TlBuffer::write_bytes`].
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Write a non-negative big integer as its minimal big-endian bytes
    ///
    /// Zero has no significant bytes and is written as an empty byte string.
    ///
    /// # Errors
    ///
    /// Same as [`TlBuffer::write_bytes`].
    pub fn write_bigint(&mut self, value: &BigUint) -> Result<()> {
        if value.is_zero() {
            return self.write_bytes(&[]);
        }
        self.write_bytes(&value.to_bytes_be())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(data: &[u8]) -> Vec<u8> {
        let mut buf = TlBuffer::new(tl_bytes_len(data.len()));
        buf.write_bytes(data).expect("length within limit");
        buf.as_bytes().to_vec()
    }

    #[test]
    fn empty_is_header_plus_three_pad() {
        assert_eq!(encode(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn three_bytes_need_no_padding() {
        assert_eq!(encode(&[1, 2, 3]), vec![3, 1, 2, 3]);
    }

    #[test]
    fn four_bytes_pad_to_eight() {
        assert_eq!(encode(&[1, 2, 3, 4]), vec![4, 1, 2, 3, 4, 0, 0, 0]);
    }

    #[test]
    fn short_regime_upper_boundary() {
        let out = encode(&[0x11; 253]);
        assert_eq!(out[0], 253);
        // 1 + 253 = 254, two pad bytes
        assert_eq!(out.len(), 256);
        assert_eq!(&out[254..], &[0, 0]);
    }

    #[test]
    fn long_regime_starts_at_254() {
        let out = encode(&[0x22; 254]);
        assert_eq!(&out[..4], &[254, 254, 0, 0]);
        // 254 data bytes, two pad bytes
        assert_eq!(out.len(), 4 + 256);
        assert!(out[4..258].iter().all(|&b| b == 0x22));
        assert_eq!(&out[258..], &[0, 0]);
    }

    #[test]
    fn long_regime_255() {
        let out = encode(&[0x33; 255]);
        assert_eq!(&out[..4], &[254, 255, 0, 0]);
        assert_eq!(out.len(), 4 + 256);
        assert_eq!(out[259], 0);
    }

    #[test]
    fn long_regime_aligned_length_has_no_padding() {
        let out = encode(&[0x44; 256]);
        assert_eq!(&out[..4], &[254, 0, 1, 0]);
        assert_eq!(out.len(), 4 + 256);
    }

    #[test]
    fn too_long_is_rejected_without_writing() {
        let data = vec![0u8; MAX_BYTES_LEN + 1];
        let mut buf = TlBuffer::new(0);
        let err = buf.write_bytes(&data).unwrap_err();
        assert_eq!(err, EncodeError::BytesTooLong { len: MAX_BYTES_LEN + 1, max: MAX_BYTES_LEN });
        assert!(buf.is_empty());
    }

    #[test]
    fn string_uses_utf8_bytes() {
        let mut buf = TlBuffer::new(8);
        buf.write_string("hé").expect("short string");
        assert_eq!(buf.as_bytes(), &[3, b'h', 0xc3, 0xa9]);
    }

    #[test]
    fn bigint_is_minimal_big_endian() {
        let mut buf = TlBuffer::new(8);
        buf.write_bigint(&BigUint::from(0x17ED_48_94_1A_08_F9_81_u64)).expect("small bigint");
        assert_eq!(buf.as_bytes(), &[8, 0x17, 0xED, 0x48, 0x94, 0x1A, 0x08, 0xF9, 0x81, 0, 0, 0]);

        let mut buf = TlBuffer::new(4);
        buf.write_bigint(&BigUint::from(0x0102_u32)).expect("small bigint");
        assert_eq!(buf.as_bytes(), &[2, 0x01, 0x02, 0]);
    }

    #[test]
    fn zero_bigint_is_empty_string() {
        let mut buf = TlBuffer::new(4);
        buf.write_bigint(&BigUint::zero()).expect("zero");
        assert_eq!(buf.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn encoded_len_matches_formula() {
        assert_eq!(tl_bytes_len(0), 4);
        assert_eq!(tl_bytes_len(3), 4);
        assert_eq!(tl_bytes_len(4), 8);
        assert_eq!(tl_bytes_len(253), 256);
        assert_eq!(tl_bytes_len(254), 260);
        assert_eq!(tl_bytes_len(255), 260);
        assert_eq!(tl_bytes_len(256), 260);
        assert_eq!(tl_bytes_len(257), 264);
    }
}
