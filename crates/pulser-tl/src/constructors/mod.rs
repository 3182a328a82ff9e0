//! Per-constructor field encoders.
//!
//! Each supported constructor implements [`Constructor`], which writes its
//! fields in schema order. The boxed tag is written by the caller
//! ([`Object::encode_into`](crate::Object::encode_into)), so a constructor can
//! also be embedded bare where the schema asks for it (`%Message` inside a
//! container).
//!
//! Constructors without a defined encoding (`server_DH_params_fail`,
//! `rpc_error`, `bad_server_salt`, `bad_msg_notification`) are plain data
//! types here. They do not implement [`Constructor`] and the dispatch reports
//! [`EncodeError::Unsupported`](crate::EncodeError::Unsupported) for them.
//!
//! # Field Order
//!
//! Field order is part of the wire format. Reordering two `write_*` calls in
//! any `encode_fields` produces bytes the peer cannot parse, even though every
//! individual field is still well-formed.

pub mod handshake;
pub mod rpc;
pub mod service;

pub use handshake::{
    ClientDhInnerData, DhGenOk, PqInnerData, ReqDhParams, ReqPq, ResPq, ServerDhInnerData,
    ServerDhParamsFail, ServerDhParamsOk, SetClientDhParams,
};
pub use rpc::{RpcError, RpcResult};
pub use service::{
    BadMsgNotification, BadServerSalt, HttpWait, Message, MsgContainer, MsgsAck,
    NewSessionCreated, Ping, Pong,
};

use crate::{buffer::TlBuffer, errors::Result, tags::TypeTag};

/// 128-bit nonce, written raw
pub type Int128 = [u8; 16];

/// 256-bit nonce, written raw
pub type Int256 = [u8; 32];

/// A TL constructor with a defined encoding
pub trait Constructor {
    /// Schema tag written before the fields when the value is boxed
    const TAG: TypeTag;

    /// Initial buffer capacity when this constructor is encoded on its own
    const SIZE_HINT: usize;

    /// Bare constructors are never preceded by their tag
    const BARE: bool = false;

    /// Write the fields, in schema order, without the tag
    ///
    /// # Errors
    ///
    /// Returns an error if a length-prefixed field is too long or a nested
    /// object cannot be encoded.
    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()>;
}

/// Write `value` with its tag (unless bare) followed by its fields
pub(crate) fn write_boxed<C: Constructor>(value: &C, buf: &mut TlBuffer) -> Result<()> {
    if !C::BARE {
        buf.write_tag(C::TAG);
    }
    value.encode_fields(buf)
}
