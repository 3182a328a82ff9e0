//! RPC response constructors.

use super::Constructor;
use crate::{buffer::TlBuffer, errors::Result, object::Object, tags::TypeTag};

/// `rpc_result req_msg_id:long result:Object = RpcResult`
///
/// `result` is polymorphic and is encoded through the same dispatch as any
/// top-level object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcResult {
    /// Identifier of the request being answered
    pub req_msg_id: i64,
    /// Boxed answer
    pub result: Box<Object>,
}

impl RpcResult {
    /// Answer request `req_msg_id` with `result`
    #[must_use]
    pub fn new(req_msg_id: i64, result: impl Into<Object>) -> Self {
        Self { req_msg_id, result: Box::new(result.into()) }
    }
}

impl Constructor for RpcResult {
    const TAG: TypeTag = TypeTag::RpcResult;
    const SIZE_HINT: usize = 1024;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_long(self.req_msg_id);
        self.result.encode_into(buf)
    }
}

/// `rpc_error error_code:int error_message:string = RpcError`
///
/// No encoding is defined; the dispatch reports it as unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    /// Numeric error class
    pub error_code: i32,
    /// Error identifier such as `FLOOD_WAIT_5`
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructors::{write_boxed, Pong};

    #[test]
    fn rpc_result_embeds_boxed_answer() {
        let result = RpcResult::new(77, Pong { msg_id: 1, ping_id: 2 });
        let mut buf = TlBuffer::new(RpcResult::SIZE_HINT);
        write_boxed(&result, &mut buf).expect("should encode");

        let out = buf.as_bytes();
        assert_eq!(&out[..4], &[0x01, 0x6d, 0x5c, 0xf3]);
        assert_eq!(&out[4..12], &77i64.to_le_bytes());
        assert_eq!(&out[12..16], &TypeTag::Pong.to_u32().to_le_bytes());
        assert_eq!(out.len(), 12 + 20);
    }

    #[test]
    fn rpc_result_with_unsupported_answer_fails() {
        let result = RpcResult::new(
            77,
            Object::RpcError(RpcError { error_code: 420, error_message: "FLOOD_WAIT_5".into() }),
        );
        let mut buf = TlBuffer::new(RpcResult::SIZE_HINT);
        assert!(write_boxed(&result, &mut buf).is_err());
    }
}
