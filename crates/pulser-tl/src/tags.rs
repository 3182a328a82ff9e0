//! Constructor type tags.
//!
//! Every TL constructor is identified by a 32-bit tag taken from the schema.
//! Tags are written little-endian as the first four bytes of a boxed value.
//!
//! # Tag Groups
//!
//! - Authorization key exchange: `req_pq` through `dh_gen_ok`
//! - Service messages: containers, acknowledgements, ping/pong, salts
//! - RPC: `rpc_result`, `rpc_error`
//! - Core types: `vector`, `boolTrue`, `boolFalse`, `null`

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::EncodeError;

/// Schema constructor tags
///
/// The numeric values are fixed by the schema. They are not derived from the
/// constructor text at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u32)]
pub enum TypeTag {
    // Core types
    /// Boxed homogeneous vector
    Vector = 0x1cb5_c415,
    /// `boolTrue = Bool`
    BoolTrue = 0x9972_75b5,
    /// `boolFalse = Bool`
    BoolFalse = 0xbc79_9737,
    /// `null = Null`
    Null = 0x5673_0bcc,

    // Authorization key exchange
    /// `req_pq nonce:int128 = ResPQ`
    ReqPq = 0x6046_9778,
    /// `resPQ nonce:int128 server_nonce:int128 pq:string ... = ResPQ`
    ResPq = 0x0516_2463,
    /// `p_q_inner_data pq:string p:string q:string ... = P_Q_inner_data`
    PqInnerData = 0x83c9_5aec,
    /// `req_DH_params nonce:int128 server_nonce:int128 ... = Server_DH_Params`
    ReqDhParams = 0xd712_e4be,
    /// `server_DH_params_ok ... encrypted_answer:string = Server_DH_Params`
    ServerDhParamsOk = 0xd0e8_075c,
    /// `server_DH_params_fail ... new_nonce_hash:int128 = Server_DH_Params`
    ServerDhParamsFail = 0x79cb_045d,
    /// `server_DH_inner_data ... server_time:int = Server_DH_inner_data`
    ServerDhInnerData = 0xb589_0dba,
    /// `client_DH_inner_data ... g_b:string = Client_DH_Inner_Data`
    ClientDhInnerData = 0x6643_b654,
    /// `set_client_DH_params ... encrypted_data:string = Set_client_DH_params_answer`
    SetClientDhParams = 0xf504_5f1f,
    /// `dh_gen_ok ... new_nonce_hash1:int128 = Set_client_DH_params_answer`
    DhGenOk = 0x3bcb_f734,

    // Service messages
    /// `message msg_id:long seqno:int bytes:int body:Object = Message`
    Message = 0x5bb8_e511,
    /// `msg_container messages:vector<%Message> = MessageContainer`
    MsgContainer = 0x73f1_f8dc,
    /// `msgs_ack msg_ids:Vector<long> = MsgsAck`
    MsgsAck = 0x62d6_b459,
    /// `ping ping_id:long = Pong`
    Ping = 0x7abe_77ec,
    /// `pong msg_id:long ping_id:long = Pong`
    Pong = 0x3477_73c5,
    /// `http_wait max_delay:int wait_after:int max_wait:int = HttpWait`
    HttpWait = 0x9299_359f,
    /// `new_session_created first_msg_id:long unique_id:long server_salt:long = NewSession`
    NewSessionCreated = 0x9ec2_0908,
    /// `bad_server_salt ... new_server_salt:long = BadMsgNotification`
    BadServerSalt = 0xedab_447b,
    /// `bad_msg_notification bad_msg_id:long bad_msg_seqno:int error_code:int = BadMsgNotification`
    BadMsgNotification = 0xa7ef_f811,

    // RPC
    /// `rpc_result req_msg_id:long result:Object = RpcResult`
    RpcResult = 0xf35c_6d01,
    /// `rpc_error error_code:int error_message:string = RpcError`
    RpcError = 0x2144_ca19,
}

impl TypeTag {
    /// Convert to raw u32 value
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self as u32
    }

    /// Convert from raw u32 value
    ///
    /// Returns `None` if the value doesn't correspond to a known constructor.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x1cb5_c415 => Some(Self::Vector),
            0x9972_75b5 => Some(Self::BoolTrue),
            0xbc79_9737 => Some(Self::BoolFalse),
            0x5673_0bcc => Some(Self::Null),

            0x6046_9778 => Some(Self::ReqPq),
            0x0516_2463 => Some(Self::ResPq),
            0x83c9_5aec => Some(Self::PqInnerData),
            0xd712_e4be => Some(Self::ReqDhParams),
            0xd0e8_075c => Some(Self::ServerDhParamsOk),
            0x79cb_045d => Some(Self::ServerDhParamsFail),
            0xb589_0dba => Some(Self::ServerDhInnerData),
            0x6643_b654 => Some(Self::ClientDhInnerData),
            0xf504_5f1f => Some(Self::SetClientDhParams),
            0x3bcb_f734 => Some(Self::DhGenOk),

            0x5bb8_e511 => Some(Self::Message),
            0x73f1_f8dc => Some(Self::MsgContainer),
            0x62d6_b459 => Some(Self::MsgsAck),
            0x7abe_77ec => Some(Self::Ping),
            0x3477_73c5 => Some(Self::Pong),
            0x9299_359f => Some(Self::HttpWait),
            0x9ec2_0908 => Some(Self::NewSessionCreated),
            0xedab_447b => Some(Self::BadServerSalt),
            0xa7ef_f811 => Some(Self::BadMsgNotification),

            0xf35c_6d01 => Some(Self::RpcResult),
            0x2144_ca19 => Some(Self::RpcError),

            _ => None,
        }
    }

    /// Schema name of the constructor
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::BoolTrue => "boolTrue",
            Self::BoolFalse => "boolFalse",
            Self::Null => "null",
            Self::ReqPq => "req_pq",
            Self::ResPq => "resPQ",
            Self::PqInnerData => "p_q_inner_data",
            Self::ReqDhParams => "req_DH_params",
            Self::ServerDhParamsOk => "server_DH_params_ok",
            Self::ServerDhParamsFail => "server_DH_params_fail",
            Self::ServerDhInnerData => "server_DH_inner_data",
            Self::ClientDhInnerData => "client_DH_inner_data",
            Self::SetClientDhParams => "set_client_DH_params",
            Self::DhGenOk => "dh_gen_ok",
            Self::Message => "message",
            Self::MsgContainer => "msg_container",
            Self::MsgsAck => "msgs_ack",
            Self::Ping => "ping",
            Self::Pong => "pong",
            Self::HttpWait => "http_wait",
            Self::NewSessionCreated => "new_session_created",
            Self::BadServerSalt => "bad_server_salt",
            Self::BadMsgNotification => "bad_msg_notification",
            Self::RpcResult => "rpc_result",
            Self::RpcError => "rpc_error",
        }
    }
}

impl TryFrom<u32> for TypeTag {
    type Error = EncodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(EncodeError::UnknownTag(value))
    }
}
