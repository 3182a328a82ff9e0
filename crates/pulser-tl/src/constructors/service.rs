//! Service message constructors.
//!
//! Envelopes and containers, acknowledgements, keepalive, HTTP long-poll and
//! session notifications.

use super::{write_boxed, Constructor};
use crate::{buffer::TlBuffer, errors::Result, object::Object, tags::TypeTag};

/// `message msg_id:long seqno:int bytes:int body:Object = Message`
///
/// Envelopes are bare: inside a container the `message` tag is never
/// written. The `bytes` field is computed from the encoded body, so it always
/// matches what follows it on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message identifier
    pub msg_id: i64,
    /// Session sequence number
    pub seq_no: i32,
    /// Boxed payload
    pub body: Box<Object>,
}

impl Message {
    /// Wrap `body` in an envelope
    #[must_use]
    pub fn new(msg_id: i64, seq_no: i32, body: impl Into<Object>) -> Self {
        Self { msg_id, seq_no, body: Box::new(body.into()) }
    }
}

impl Constructor for Message {
    const TAG: TypeTag = TypeTag::Message;
    const SIZE_HINT: usize = 512;
    const BARE: bool = true;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        let body = self.body.encode()?;

        buf.write_long(self.msg_id);
        buf.write_int(self.seq_no);
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        buf.write_int(body.len() as i32);
        buf.write_raw(&body);
        Ok(())
    }
}

/// `msg_container messages:vector<%Message> = MessageContainer`
///
/// The inner vector is bare: a count followed by bare envelopes, with no
/// `vector` tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgContainer {
    /// Envelopes in send order
    pub messages: Vec<Message>,
}

impl Constructor for MsgContainer {
    const TAG: TypeTag = TypeTag::MsgContainer;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        buf.write_int(self.messages.len() as i32);
        for message in &self.messages {
            write_boxed(message, buf)?;
        }
        Ok(())
    }
}

/// `msgs_ack msg_ids:Vector<long> = MsgsAck`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MsgsAck {
    /// Identifiers of the acknowledged messages
    pub msg_ids: Vec<i64>,
}

impl Constructor for MsgsAck {
    const TAG: TypeTag = TypeTag::MsgsAck;
    const SIZE_HINT: usize = 64;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_vector_long(&self.msg_ids);
        Ok(())
    }
}

/// `ping ping_id:long = Pong`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ping {
    /// Opaque identifier echoed in the `pong`
    pub ping_id: i64,
}

impl Constructor for Ping {
    const TAG: TypeTag = TypeTag::Ping;
    const SIZE_HINT: usize = 32;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_long(self.ping_id);
        Ok(())
    }
}

/// `pong msg_id:long ping_id:long = Pong`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pong {
    /// Identifier of the message that carried the `ping`
    pub msg_id: i64,
    /// Echo of `ping.ping_id`
    pub ping_id: i64,
}

impl Constructor for Pong {
    const TAG: TypeTag = TypeTag::Pong;
    const SIZE_HINT: usize = 32;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_long(self.msg_id);
        buf.write_long(self.ping_id);
        Ok(())
    }
}

/// `http_wait max_delay:int wait_after:int max_wait:int = HttpWait`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpWait {
    /// Milliseconds to wait before answering a pending request
    pub max_delay: i32,
    /// Milliseconds to keep waiting after the last incoming message
    pub wait_after: i32,
    /// Upper bound on the whole long-poll in milliseconds
    pub max_wait: i32,
}

impl Constructor for HttpWait {
    const TAG: TypeTag = TypeTag::HttpWait;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_int(self.max_delay);
        buf.write_int(self.wait_after);
        buf.write_int(self.max_wait);
        Ok(())
    }
}

/// `new_session_created first_msg_id:long unique_id:long server_salt:long =
/// NewSession`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSessionCreated {
    /// First message identifier seen in the new session
    pub first_msg_id: i64,
    /// Random identifier for the session
    pub unique_id: i64,
    /// Salt the client must use from now on
    pub server_salt: i64,
}

impl Constructor for NewSessionCreated {
    const TAG: TypeTag = TypeTag::NewSessionCreated;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_long(self.first_msg_id);
        buf.write_long(self.unique_id);
        buf.write_long(self.server_salt);
        Ok(())
    }
}

/// `bad_server_salt bad_msg_id:long bad_msg_seqno:int error_code:int
/// new_server_salt:long = BadMsgNotification`
///
/// No encoding is defined; the dispatch reports it as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadServerSalt {
    /// Identifier of the rejected message
    pub bad_msg_id: i64,
    /// Sequence number of the rejected message
    pub bad_msg_seqno: i32,
    /// Reason code
    pub error_code: i32,
    /// Salt to resend with
    pub new_server_salt: i64,
}

/// `bad_msg_notification bad_msg_id:long bad_msg_seqno:int error_code:int =
/// BadMsgNotification`
///
/// No encoding is defined; the dispatch reports it as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadMsgNotification {
    /// Identifier of the rejected message
    pub bad_msg_id: i64,
    /// Sequence number of the rejected message
    pub bad_msg_seqno: i32,
    /// Reason code
    pub error_code: i32,
}
