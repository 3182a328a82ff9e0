//! Pulser identifier generation
//!
//! This crate produces the values that feed the TL encoder but are not part of
//! any schema: random nonces for the key exchange and time-derived message
//! identifiers.
//!
//! # Key Principles
//!
//! - No Direct System Access: Never call `SystemTime::now()` or an RNG
//!   directly. All side effects go through the [`Environment`] trait.
//! - Deterministic: Given the same environment state, generators produce the
//!   same outputs.
//!
//! # Modules
//!
//! - [`env`]: Environment abstraction (wall clock, RNG)
//! - [`nonce`]: Random nonces
//! - [`message_id`]: Message identifier generator
//! - [`error`]: Error types
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod message_id;
pub mod nonce;

pub use env::{Environment, SystemEnv};
pub use error::IdError;
pub use message_id::{generate_message_id, MessageId, MessageIdConfig, MessageIdGenerator};
pub use nonce::{generate_nonce, generate_nonce_array};
