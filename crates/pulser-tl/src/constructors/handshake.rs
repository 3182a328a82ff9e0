//! Authorization key exchange constructors.
//!
//! These carry the Diffie-Hellman handshake: `req_pq` / `resPQ`, the
//! proof-of-work inner data, the DH parameter exchange and the final
//! `dh_gen_ok`. Nonces are fixed-size and written raw; `pq`, `p`, `q`,
//! `dh_prime`, `g_a` and `g_b` are big integers written as TL strings.

use bytes::Bytes;
use num_bigint::BigUint;

use super::{Constructor, Int128, Int256};
use crate::{buffer::TlBuffer, errors::Result, tags::TypeTag};

/// `req_pq nonce:int128 = ResPQ`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReqPq {
    /// Client-chosen random nonce
    pub nonce: Int128,
}

impl Constructor for ReqPq {
    const TAG: TypeTag = TypeTag::ReqPq;
    const SIZE_HINT: usize = 20;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        Ok(())
    }
}

/// `resPQ nonce:int128 server_nonce:int128 pq:string
/// server_public_key_fingerprints:Vector<long> = ResPQ`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResPq {
    /// Echo of the client nonce
    pub nonce: Int128,
    /// Server-chosen random nonce
    pub server_nonce: Int128,
    /// Product of two primes the client must factor
    pub pq: BigUint,
    /// Fingerprints of the RSA keys the server accepts
    pub fingerprints: Vec<i64>,
}

impl Constructor for ResPq {
    const TAG: TypeTag = TypeTag::ResPq;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_bigint(&self.pq)?;
        buf.write_vector_long(&self.fingerprints);
        Ok(())
    }
}

/// `p_q_inner_data pq:string p:string q:string nonce:int128
/// server_nonce:int128 new_nonce:int256 = P_Q_inner_data`
///
/// The `Debug` impl redacts `new_nonce`; it seeds the future key.
#[derive(Clone, PartialEq, Eq)]
pub struct PqInnerData {
    /// Product from `resPQ`
    pub pq: BigUint,
    /// Smaller prime factor
    pub p: BigUint,
    /// Larger prime factor
    pub q: BigUint,
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Fresh client secret nonce
    pub new_nonce: Int256,
}

impl std::fmt::Debug for PqInnerData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PqInnerData")
            .field("pq", &self.pq)
            .field("p", &self.p)
            .field("q", &self.q)
            .field("nonce", &self.nonce)
            .field("server_nonce", &self.server_nonce)
            .field("new_nonce", &"<redacted 32 bytes>")
            .finish()
    }
}

impl Constructor for PqInnerData {
    const TAG: TypeTag = TypeTag::PqInnerData;
    const SIZE_HINT: usize = 256;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_bigint(&self.pq)?;
        buf.write_bigint(&self.p)?;
        buf.write_bigint(&self.q)?;
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_raw(&self.new_nonce);
        Ok(())
    }
}

/// `req_DH_params nonce:int128 server_nonce:int128 p:string q:string
/// public_key_fingerprint:long encrypted_data:string = Server_DH_Params`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReqDhParams {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Smaller prime factor of `pq`
    pub p: BigUint,
    /// Larger prime factor of `pq`
    pub q: BigUint,
    /// Fingerprint of the RSA key used for `encrypted_data`
    pub public_key_fingerprint: i64,
    /// RSA-encrypted `p_q_inner_data`
    pub encrypted_data: Bytes,
}

impl Constructor for ReqDhParams {
    const TAG: TypeTag = TypeTag::ReqDhParams;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_bigint(&self.p)?;
        buf.write_bigint(&self.q)?;
        buf.write_long(self.public_key_fingerprint);
        buf.write_bytes(&self.encrypted_data)
    }
}

/// `server_DH_params_ok nonce:int128 server_nonce:int128
/// encrypted_answer:string = Server_DH_Params`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDhParamsOk {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// AES-IGE encrypted `server_DH_inner_data`
    pub encrypted_answer: Bytes,
}

impl Constructor for ServerDhParamsOk {
    const TAG: TypeTag = TypeTag::ServerDhParamsOk;
    const SIZE_HINT: usize = 1024;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_bytes(&self.encrypted_answer)
    }
}

/// `server_DH_params_fail nonce:int128 server_nonce:int128
/// new_nonce_hash:int128 = Server_DH_Params`
///
/// No encoding is defined; the dispatch reports it as unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDhParamsFail {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Low 128 bits of SHA1(new_nonce)
    pub new_nonce_hash: Int128,
}

/// `server_DH_inner_data nonce:int128 server_nonce:int128 g:int
/// dh_prime:string g_a:string server_time:int = Server_DH_inner_data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDhInnerData {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Generator
    pub g: i32,
    /// Safe prime modulus
    pub dh_prime: BigUint,
    /// Server public value `g^a mod dh_prime`
    pub g_a: BigUint,
    /// Server unix time in seconds
    pub server_time: i32,
}

impl Constructor for ServerDhInnerData {
    const TAG: TypeTag = TypeTag::ServerDhInnerData;
    const SIZE_HINT: usize = 1024;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_int(self.g);
        buf.write_bigint(&self.dh_prime)?;
        buf.write_bigint(&self.g_a)?;
        buf.write_int(self.server_time);
        Ok(())
    }
}

/// `client_DH_inner_data nonce:int128 server_nonce:int128 retry_id:long
/// g_b:string = Client_DH_Inner_Data`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDhInnerData {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Zero on the first attempt, then the auth key aux hash of the last try
    pub retry_id: i64,
    /// Client public value `g^b mod dh_prime`
    pub g_b: BigUint,
}

impl Constructor for ClientDhInnerData {
    const TAG: TypeTag = TypeTag::ClientDhInnerData;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_long(self.retry_id);
        buf.write_bigint(&self.g_b)
    }
}

/// `set_client_DH_params nonce:int128 server_nonce:int128
/// encrypted_data:string = Set_client_DH_params_answer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetClientDhParams {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// AES-IGE encrypted `client_DH_inner_data`
    pub encrypted_data: Bytes,
}

impl Constructor for SetClientDhParams {
    const TAG: TypeTag = TypeTag::SetClientDhParams;
    const SIZE_HINT: usize = 256;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_bytes(&self.encrypted_data)
    }
}

/// `dh_gen_ok nonce:int128 server_nonce:int128 new_nonce_hash1:int128 =
/// Set_client_DH_params_answer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhGenOk {
    /// Client nonce
    pub nonce: Int128,
    /// Server nonce
    pub server_nonce: Int128,
    /// Low 128 bits of SHA1(new_nonce + 1 + auth_key_aux_hash)
    pub new_nonce_hash1: Int128,
}

impl Constructor for DhGenOk {
    const TAG: TypeTag = TypeTag::DhGenOk;
    const SIZE_HINT: usize = 512;

    fn encode_fields(&self, buf: &mut TlBuffer) -> Result<()> {
        buf.write_raw(&self.nonce);
        buf.write_raw(&self.server_nonce);
        buf.write_raw(&self.new_nonce_hash1);
        Ok(())
    }
}
