//! Deterministic simulation harness for Pulser testing.
//!
//! This crate provides a seeded implementation of the `Environment` trait,
//! enabling reproducible tests of nonce and message identifier generation and
//! of the encoded sessions built from them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod sim_env;

pub use sim_env::SimEnv;
