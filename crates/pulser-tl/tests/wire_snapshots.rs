//! Snapshot tests for wire format stability.
//!
//! Every supported constructor is encoded with fixed field values and compared
//! against its hex encoding. A failure here means bytes on the wire changed.

use bytes::Bytes;
use insta::assert_snapshot;
use num_bigint::BigUint;
use pulser_tl::{
    constructors::{
        ClientDhInnerData, DhGenOk, HttpWait, Message, MsgContainer, MsgsAck, NewSessionCreated,
        Ping, Pong, PqInnerData, ReqDhParams, ReqPq, ResPq, RpcResult, ServerDhInnerData,
        ServerDhParamsOk, SetClientDhParams,
    },
    Object,
};

/// Helper to encode an object to a hex string for snapshot
fn to_hex(object: impl Into<Object>) -> String {
    let bytes = object.into().encode().expect("encoding should succeed");
    hex::encode(&bytes)
}

/// Consecutive byte values starting at `start`
fn counting<const N: usize>(start: u8) -> [u8; N] {
    std::array::from_fn(|i| start + u8::try_from(i).expect("small index"))
}

const PQ: u64 = 0x17ED_4894_1A08_F981;
const P: u64 = 0x494C_553B;
const Q: u64 = 0x5391_1073;
#[allow(clippy::cast_possible_wrap)]
const FINGERPRINT: i64 = 0xc3b4_2b02_6ce8_6b21_u64 as i64;
const MSG_ID: i64 = 0x51e5_7ac9_1e83_c801;

// =============================================================================
// Core Types
// =============================================================================

#[test]
fn snapshot_bool_true() {
    assert_snapshot!(to_hex(true), @"b5757299");
}

#[test]
fn snapshot_bool_false() {
    assert_snapshot!(to_hex(false), @"379779bc");
}

#[test]
fn snapshot_null() {
    assert_snapshot!(to_hex(Object::Null), @"cc0b7356");
}

// =============================================================================
// Service Messages
// =============================================================================

#[test]
fn snapshot_ping() {
    assert_snapshot!(to_hex(Ping { ping_id: 42 }), @"ec77be7a2a00000000000000");
}

#[test]
fn snapshot_pong() {
    assert_snapshot!(
        to_hex(Pong { msg_id: 1, ping_id: 2 }),
        @"c573773401000000000000000200000000000000"
    );
}

#[test]
fn snapshot_msgs_ack() {
    assert_snapshot!(
        to_hex(MsgsAck { msg_ids: vec![1, 2] }),
        @"59b4d66215c4b51c0200000001000000000000000200000000000000"
    );
}

#[test]
fn snapshot_http_wait() {
    assert_snapshot!(
        to_hex(HttpWait { max_delay: 0, wait_after: 0, max_wait: 25_000 }),
        @"9f3599920000000000000000a8610000"
    );
}

#[test]
fn snapshot_new_session_created() {
    assert_snapshot!(
        to_hex(NewSessionCreated { first_msg_id: 1, unique_id: 2, server_salt: 3 }),
        @"0809c29e010000000000000002000000000000000300000000000000"
    );
}

#[test]
fn snapshot_message_envelope() {
    assert_snapshot!(
        to_hex(Message::new(MSG_ID, 1, Ping { ping_id: 42 })),
        @"01c8831ec97ae551010000000c000000ec77be7a2a00000000000000"
    );
}

#[test]
fn snapshot_msg_container() {
    let container = MsgContainer {
        messages: vec![
            Message::new(MSG_ID, 1, Ping { ping_id: 42 }),
            Message::new(MSG_ID + 4, 2, MsgsAck { msg_ids: vec![MSG_ID] }),
        ],
    };

    assert_snapshot!(
        to_hex(container),
        @"dcf8f1730200000001c8831ec97ae551010000000c000000ec77be7a2a0000000000000005c8831ec97ae551020000001400000059b4d66215c4b51c0100000001c8831ec97ae551"
    );
}

#[test]
fn snapshot_rpc_result() {
    assert_snapshot!(
        to_hex(RpcResult::new(MSG_ID, true)),
        @"016d5cf301c8831ec97ae551b5757299"
    );
}

// =============================================================================
// Authorization Key Exchange
// =============================================================================

#[test]
fn snapshot_req_pq() {
    assert_snapshot!(
        to_hex(ReqPq { nonce: counting(0) }),
        @"78974660000102030405060708090a0b0c0d0e0f"
    );
}

#[test]
fn snapshot_res_pq() {
    let res_pq = ResPq {
        nonce: counting(0),
        server_nonce: counting(16),
        pq: BigUint::from(PQ),
        fingerprints: vec![FINGERPRINT],
    };

    assert_snapshot!(
        to_hex(res_pq),
        @"63241605000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f0817ed48941a08f98100000015c4b51c01000000216be86c022bb4c3"
    );
}

#[test]
fn snapshot_pq_inner_data() {
    let inner = PqInnerData {
        pq: BigUint::from(PQ),
        p: BigUint::from(P),
        q: BigUint::from(Q),
        nonce: counting(0),
        server_nonce: counting(16),
        new_nonce: counting(32),
    };

    assert_snapshot!(
        to_hex(inner),
        @"ec5ac9830817ed48941a08f98100000004494c553b0000000453911073000000000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f"
    );
}

#[test]
fn snapshot_req_dh_params() {
    let request = ReqDhParams {
        nonce: counting(0),
        server_nonce: counting(16),
        p: BigUint::from(P),
        q: BigUint::from(Q),
        public_key_fingerprint: FINGERPRINT,
        encrypted_data: Bytes::from_static(&[0xaa; 4]),
    };

    assert_snapshot!(
        to_hex(request),
        @"bee412d7000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f04494c553b0000000453911073000000216be86c022bb4c304aaaaaaaa000000"
    );
}

#[test]
fn snapshot_server_dh_params_ok() {
    let params = ServerDhParamsOk {
        nonce: counting(0),
        server_nonce: counting(16),
        encrypted_answer: Bytes::from_static(&[0xbb; 2]),
    };

    assert_snapshot!(
        to_hex(params),
        @"5c07e8d0000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f02bbbb00"
    );
}

#[test]
fn snapshot_server_dh_inner_data() {
    let inner = ServerDhInnerData {
        nonce: counting(0),
        server_nonce: counting(16),
        g: 3,
        dh_prime: BigUint::from(0xffu32),
        g_a: BigUint::from(0x1_0001u32),
        server_time: 1_700_000_000,
    };

    assert_snapshot!(
        to_hex(inner),
        @"ba0d89b5000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f0300000001ff00000301000100f15365"
    );
}

#[test]
fn snapshot_client_dh_inner_data() {
    let inner = ClientDhInnerData {
        nonce: counting(0),
        server_nonce: counting(16),
        retry_id: 0,
        g_b: BigUint::from(2u32),
    };

    assert_snapshot!(
        to_hex(inner),
        @"54b64366000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f000000000000000001020000"
    );
}

#[test]
fn snapshot_set_client_dh_params() {
    let params = SetClientDhParams {
        nonce: counting(0),
        server_nonce: counting(16),
        encrypted_data: Bytes::from_static(&[0xcc; 5]),
    };

    assert_snapshot!(
        to_hex(params),
        @"1f5f04f5000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f05cccccccccc0000"
    );
}

#[test]
fn snapshot_dh_gen_ok() {
    let ok = DhGenOk {
        nonce: counting(0),
        server_nonce: counting(16),
        new_nonce_hash1: counting(64),
    };

    assert_snapshot!(
        to_hex(ok),
        @"34f7cb3b000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f404142434445464748494a4b4c4d4e4f"
    );
}
