//! # Pulser TL: Wire Encoding
//!
//! This crate serializes MTProto service and handshake constructors into the
//! TL (Type Language) binary format.
//!
//! ## Wire Format
//!
//! - **Integers**: `int` is 4 bytes, `long` is 8 bytes and `double` is an
//!   IEEE-754 64-bit value. All are little-endian.
//! - **Boxed Constructors**: A 32-bit tag (see [`TypeTag`]) followed by the
//!   fields in schema order. Bare constructors omit the tag.
//! - **Strings and Bytes**: A length prefix (1 byte below 254, otherwise the
//!   marker `0xfe` and a 3-byte length), the data, then zero padding up to a
//!   4-byte boundary.
//! - **Big Integers**: Minimal big-endian magnitude written as bytes.
//! - **Vectors**: The `vector` tag, a 32-bit count, then the elements.
//!
//! Every boxed encoding produced here is a multiple of 4 bytes long.
//!
//! ## Implementation Notes
//!
//! - **Closed Dispatch**: [`Object`] is a sum type and encoding matches on it
//!   exhaustively. There is no runtime fallback for unrecognised values.
//! - **Explicit Unsupported**: Constructors without a defined encoding return
//!   [`EncodeError::Unsupported`] instead of an empty byte sequence.
//! - **Write-Only**: This crate only encodes. Decoding is handled elsewhere.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod constructors;
pub mod errors;
pub mod object;
pub mod string;
pub mod tags;
pub mod vector;

pub use buffer::TlBuffer;
pub use constructors::Constructor;
pub use errors::{EncodeError, Result};
pub use object::Object;
pub use string::{tl_bytes_len, MAX_BYTES_LEN};
pub use tags::TypeTag;
