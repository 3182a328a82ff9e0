//! Random nonces for the key exchange.
//!
//! `req_pq` carries a 128-bit client nonce and `p_q_inner_data` a 256-bit
//! `new_nonce`. Both come straight from the environment's secure RNG.

use crate::env::Environment;

/// Size of `nonce` and `server_nonce` in bytes
pub const NONCE_LEN: usize = 16;

/// Size of `new_nonce` in bytes
pub const NEW_NONCE_LEN: usize = 32;

/// Generate `size` random bytes
///
/// A `size` of zero returns an empty vector.
#[must_use]
pub fn generate_nonce<E: Environment>(env: &E, size: usize) -> Vec<u8> {
    let mut nonce = vec![0u8; size];
    env.random_bytes(&mut nonce);
    nonce
}

/// Generate a fixed-size nonce
///
/// ```
/// use pulser_core::{nonce::generate_nonce_array, SystemEnv};
///
/// let nonce: [u8; 16] = generate_nonce_array(&SystemEnv);
/// assert_eq!(nonce.len(), 16);
/// ```
#[must_use]
pub fn generate_nonce_array<const N: usize, E: Environment>(env: &E) -> [u8; N] {
    let mut nonce = [0u8; N];
    env.random_bytes(&mut nonce);
    nonce
}
