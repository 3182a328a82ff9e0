//! Polymorphic constructor values and the encoding dispatch.
//!
//! [`Object`] is the closed set of constructors this crate knows. Encoding
//! selects the routine by variant with an exhaustive `match`, so adding a
//! constructor without wiring up its encoder is a compile error rather than
//! a truncated byte stream at runtime.

use bytes::Bytes;

use crate::{
    buffer::TlBuffer,
    constructors::{
        write_boxed, BadMsgNotification, BadServerSalt, ClientDhInnerData, Constructor, DhGenOk,
        HttpWait, Message, MsgContainer, MsgsAck, NewSessionCreated, Ping, Pong, PqInnerData,
        ReqDhParams, ReqPq, ResPq, RpcError, RpcResult, ServerDhInnerData, ServerDhParamsFail,
        ServerDhParamsOk, SetClientDhParams,
    },
    errors::{EncodeError, Result},
    tags::TypeTag,
};

/// Any TL constructor value
///
/// # Invariants
///
/// - **Tag Uniqueness**: Each variant maps to exactly one [`TypeTag`] via
///   [`Object::tag`].
/// - **No Silent Output**: Variants without a defined encoding fail with
///   [`EncodeError::Unsupported`]. They never encode to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    // Service messages
    /// Bare message envelope
    Message(Message),
    /// Container of envelopes
    MsgContainer(MsgContainer),
    /// Acknowledgement
    MsgsAck(MsgsAck),
    /// Keepalive request
    Ping(Ping),
    /// Keepalive answer
    Pong(Pong),
    /// HTTP long-poll parameters
    HttpWait(HttpWait),
    /// Session created notification
    NewSessionCreated(NewSessionCreated),
    /// Salt rejection (no encoding)
    BadServerSalt(BadServerSalt),
    /// Message rejection (no encoding)
    BadMsgNotification(BadMsgNotification),

    // Authorization key exchange
    /// Start of the key exchange
    ReqPq(ReqPq),
    /// Answer to `req_pq`
    ResPq(ResPq),
    /// Proof-of-work inner data
    PqInnerData(PqInnerData),
    /// DH parameter request
    ReqDhParams(ReqDhParams),
    /// DH parameters
    ServerDhParamsOk(ServerDhParamsOk),
    /// DH parameter failure (no encoding)
    ServerDhParamsFail(ServerDhParamsFail),
    /// Server DH inner data
    ServerDhInnerData(ServerDhInnerData),
    /// Client DH inner data
    ClientDhInnerData(ClientDhInnerData),
    /// Client DH parameters
    SetClientDhParams(SetClientDhParams),
    /// Key exchange success
    DhGenOk(DhGenOk),

    // RPC
    /// Answer to a request
    RpcResult(RpcResult),
    /// Error answer (no encoding)
    RpcError(RpcError),

    // Core types
    /// `boolTrue`
    BoolTrue,
    /// `boolFalse`
    BoolFalse,
    /// `null`
    Null,
}

impl Object {
    /// Get the schema tag for this variant
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Message(_) => TypeTag::Message,
            Self::MsgContainer(_) => TypeTag::MsgContainer,
            Self::MsgsAck(_) => TypeTag::MsgsAck,
            Self::Ping(_) => TypeTag::Ping,
            Self::Pong(_) => TypeTag::Pong,
            Self::HttpWait(_) => TypeTag::HttpWait,
            Self::NewSessionCreated(_) => TypeTag::NewSessionCreated,
            Self::BadServerSalt(_) => TypeTag::BadServerSalt,
            Self::BadMsgNotification(_) => TypeTag::BadMsgNotification,
            Self::ReqPq(_) => TypeTag::ReqPq,
            Self::ResPq(_) => TypeTag::ResPq,
            Self::PqInnerData(_) => TypeTag::PqInnerData,
            Self::ReqDhParams(_) => TypeTag::ReqDhParams,
            Self::ServerDhParamsOk(_) => TypeTag::ServerDhParamsOk,
            Self::ServerDhParamsFail(_) => TypeTag::ServerDhParamsFail,
            Self::ServerDhInnerData(_) => TypeTag::ServerDhInnerData,
            Self::ClientDhInnerData(_) => TypeTag::ClientDhInnerData,
            Self::SetClientDhParams(_) => TypeTag::SetClientDhParams,
            Self::DhGenOk(_) => TypeTag::DhGenOk,
            Self::RpcResult(_) => TypeTag::RpcResult,
            Self::RpcError(_) => TypeTag::RpcError,
            Self::BoolTrue => TypeTag::BoolTrue,
            Self::BoolFalse => TypeTag::BoolFalse,
            Self::Null => TypeTag::Null,
        }
    }

    /// Schema name of this variant
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.tag().name()
    }

    /// Returns true if this value and every object nested in it have a
    /// defined encoding
    ///
    /// When this is true, [`Object::encode`] can only fail with
    /// [`EncodeError::BytesTooLong`].
    #[must_use]
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Message(message) => message.body.is_supported(),
            Self::MsgContainer(container) => {
                container.messages.iter().all(|message| message.body.is_supported())
            },
            Self::RpcResult(result) => result.result.is_supported(),
            Self::BadServerSalt(_)
            | Self::BadMsgNotification(_)
            | Self::ServerDhParamsFail(_)
            | Self::RpcError(_) => false,
            Self::MsgsAck(_)
            | Self::Ping(_)
            | Self::Pong(_)
            | Self::HttpWait(_)
            | Self::NewSessionCreated(_)
            | Self::ReqPq(_)
            | Self::ResPq(_)
            | Self::PqInnerData(_)
            | Self::ReqDhParams(_)
            | Self::ServerDhParamsOk(_)
            | Self::ServerDhInnerData(_)
            | Self::ClientDhInnerData(_)
            | Self::SetClientDhParams(_)
            | Self::DhGenOk(_)
            | Self::BoolTrue
            | Self::BoolFalse
            | Self::Null => true,
        }
    }

    /// Initial buffer capacity for encoding this value on its own
    #[must_use]
    pub const fn size_hint(&self) -> usize {
        match self {
            Self::Message(_) => Message::SIZE_HINT,
            Self::MsgContainer(_) => MsgContainer::SIZE_HINT,
            Self::MsgsAck(_) => MsgsAck::SIZE_HINT,
            Self::Ping(_) => Ping::SIZE_HINT,
            Self::Pong(_) => Pong::SIZE_HINT,
            Self::HttpWait(_) => HttpWait::SIZE_HINT,
            Self::NewSessionCreated(_) => NewSessionCreated::SIZE_HINT,
            Self::ReqPq(_) => ReqPq::SIZE_HINT,
            Self::ResPq(_) => ResPq::SIZE_HINT,
            Self::PqInnerData(_) => PqInnerData::SIZE_HINT,
            Self::ReqDhParams(_) => ReqDhParams::SIZE_HINT,
            Self::ServerDhParamsOk(_) => ServerDhParamsOk::SIZE_HINT,
            Self::ServerDhInnerData(_) => ServerDhInnerData::SIZE_HINT,
            Self::ClientDhInnerData(_) => ClientDhInnerData::SIZE_HINT,
            Self::SetClientDhParams(_) => SetClientDhParams::SIZE_HINT,
            Self::DhGenOk(_) => DhGenOk::SIZE_HINT,
            Self::RpcResult(_) => RpcResult::SIZE_HINT,
            Self::BoolTrue | Self::BoolFalse | Self::Null => 4,
            Self::BadServerSalt(_)
            | Self::BadMsgNotification(_)
            | Self::ServerDhParamsFail(_)
            | Self::RpcError(_) => 0,
        }
    }

    /// Encode into a fresh byte sequence
    ///
    /// # Errors
    ///
    /// - [`EncodeError::Unsupported`] if this value, or any object nested
    ///   inside it, has no defined encoding
    /// - [`EncodeError::BytesTooLong`] if a length-prefixed field exceeds the
    ///   24-bit length limit
    pub fn encode(&self) -> Result<Bytes> {
        let mut buf = TlBuffer::new(self.size_hint());
        self.encode_into(&mut buf)?;

        tracing::trace!(constructor = self.name(), len = buf.len(), "encoded constructor");

        Ok(buf.finish())
    }

    /// Append the boxed encoding to `buf`
    ///
    /// Used for nested polymorphic fields. On error nothing is appended: the
    /// buffer holds exactly what it held before the call.
    ///
    /// # Errors
    ///
    /// Same as [`Object::encode`].
    pub fn encode_into(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.atomic(|buf| self.write_variant(buf))
    }

    fn write_variant(&self, buf: &mut TlBuffer) -> Result<()> {
        match self {
            Self::Message(inner) => write_boxed(inner, buf),
            Self::MsgContainer(inner) => write_boxed(inner, buf),
            Self::MsgsAck(inner) => write_boxed(inner, buf),
            Self::Ping(inner) => write_boxed(inner, buf),
            Self::Pong(inner) => write_boxed(inner, buf),
            Self::HttpWait(inner) => write_boxed(inner, buf),
            Self::NewSessionCreated(inner) => write_boxed(inner, buf),
            Self::ReqPq(inner) => write_boxed(inner, buf),
            Self::ResPq(inner) => write_boxed(inner, buf),
            Self::PqInnerData(inner) => write_boxed(inner, buf),
            Self::ReqDhParams(inner) => write_boxed(inner, buf),
            Self::ServerDhParamsOk(inner) => write_boxed(inner, buf),
            Self::ServerDhInnerData(inner) => write_boxed(inner, buf),
            Self::ClientDhInnerData(inner) => write_boxed(inner, buf),
            Self::SetClientDhParams(inner) => write_boxed(inner, buf),
            Self::DhGenOk(inner) => write_boxed(inner, buf),
            Self::RpcResult(inner) => write_boxed(inner, buf),
            Self::BoolTrue | Self::BoolFalse | Self::Null => {
                buf.write_tag(self.tag());
                Ok(())
            },
            Self::BadServerSalt(_)
            | Self::BadMsgNotification(_)
            | Self::ServerDhParamsFail(_)
            | Self::RpcError(_) => {
                let tag = self.tag();
                tracing::warn!(constructor = tag.name(), "constructor has no defined encoding");
                Err(EncodeError::Unsupported { name: tag.name(), tag: tag.to_u32() })
            },
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { Self::BoolTrue } else { Self::BoolFalse }
    }
}

macro_rules! impl_from_constructor {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_constructor!(
    Message,
    MsgContainer,
    MsgsAck,
    Ping,
    Pong,
    HttpWait,
    NewSessionCreated,
    BadServerSalt,
    BadMsgNotification,
    ReqPq,
    ResPq,
    PqInnerData,
    ReqDhParams,
    ServerDhParamsOk,
    ServerDhParamsFail,
    ServerDhInnerData,
    ClientDhInnerData,
    SetClientDhParams,
    DhGenOk,
    RpcResult,
    RpcError,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constructors_are_tag_only() {
        assert_eq!(&Object::BoolTrue.encode().unwrap()[..], &[0xb5, 0x75, 0x72, 0x99]);
        assert_eq!(&Object::BoolFalse.encode().unwrap()[..], &[0x37, 0x97, 0x79, 0xbc]);
        assert_eq!(&Object::Null.encode().unwrap()[..], &[0xcc, 0x0b, 0x73, 0x56]);
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(Object::from(true), Object::BoolTrue);
        assert_eq!(Object::from(false), Object::BoolFalse);
    }

    #[test]
    fn unsupported_constructors_fail() {
        let unsupported = [
            Object::from(ServerDhParamsFail {
                nonce: [0; 16],
                server_nonce: [0; 16],
                new_nonce_hash: [0; 16],
            }),
            Object::from(RpcError { error_code: 500, error_message: "INTERNAL".into() }),
            Object::from(BadServerSalt {
                bad_msg_id: 1,
                bad_msg_seqno: 2,
                error_code: 48,
                new_server_salt: 3,
            }),
            Object::from(BadMsgNotification { bad_msg_id: 1, bad_msg_seqno: 2, error_code: 16 }),
        ];

        for object in unsupported {
            assert!(!object.is_supported());
            let tag = object.tag();
            assert_eq!(
                object.encode(),
                Err(EncodeError::Unsupported { name: tag.name(), tag: tag.to_u32() })
            );
        }
    }

    #[test]
    fn unsupported_nested_in_container_fails() {
        let container = Object::from(MsgContainer {
            messages: vec![
                Message::new(1, 1, Ping { ping_id: 1 }),
                Message::new(5, 3, BadMsgNotification {
                    bad_msg_id: 1,
                    bad_msg_seqno: 1,
                    error_code: 35,
                }),
            ],
        });
        assert!(matches!(container.encode(), Err(EncodeError::Unsupported { .. })));
    }

    #[test]
    fn failed_nested_encoding_appends_nothing() {
        let container = Object::from(MsgContainer {
            messages: vec![
                Message::new(1, 1, Ping { ping_id: 1 }),
                Message::new(5, 3, BadMsgNotification {
                    bad_msg_id: 1,
                    bad_msg_seqno: 1,
                    error_code: 35,
                }),
            ],
        });

        let mut buf = TlBuffer::new(64);
        assert!(container.encode_into(&mut buf).is_err());
        assert!(buf.is_empty());

        buf.write_long(9);
        assert!(container.encode_into(&mut buf).is_err());
        assert_eq!(buf.as_bytes(), &9i64.to_le_bytes());
    }

    #[test]
    fn is_supported_looks_inside_nested_objects() {
        let rpc_error = RpcError { error_code: 420, error_message: "FLOOD_WAIT_5".into() };

        assert!(!Object::from(RpcResult::new(1, rpc_error.clone())).is_supported());
        assert!(!Object::from(Message::new(1, 1, rpc_error.clone())).is_supported());
        assert!(!Object::from(MsgContainer {
            messages: vec![
                Message::new(1, 1, Ping { ping_id: 1 }),
                Message::new(5, 3, RpcResult::new(1, rpc_error)),
            ],
        })
        .is_supported());

        let nested_ok = Object::from(MsgContainer {
            messages: vec![Message::new(1, 1, RpcResult::new(1, Object::Null))],
        });
        assert!(nested_ok.is_supported());
        assert!(nested_ok.encode().is_ok());
    }

    #[test]
    fn top_level_message_is_bare() {
        let bytes = Object::from(Message::new(9, 1, Object::Null)).encode().unwrap();
        assert_eq!(&bytes[..8], &9i64.to_le_bytes());
        assert_eq!(bytes.len(), 16 + 4);
    }

    #[test]
    fn supported_encodings_are_aligned() {
        let objects = [
            Object::from(Ping { ping_id: 1 }),
            Object::from(Pong { msg_id: 1, ping_id: 2 }),
            Object::from(MsgsAck { msg_ids: vec![1, 2, 3] }),
            Object::from(HttpWait { max_delay: 0, wait_after: 0, max_wait: 25_000 }),
            Object::from(ReqPq { nonce: [7; 16] }),
            Object::BoolTrue,
        ];
        for object in objects {
            let bytes = object.encode().expect("supported");
            assert_eq!(bytes.len() % 4, 0, "{}", object.name());
            assert_eq!(&bytes[..4], &object.tag().to_u32().to_le_bytes());
        }
    }
}
