//! Time-derived message identifiers.
//!
//! A message identifier is the Unix time as a 32.32 fixed-point number:
//!
//! ```text
//! [seconds since epoch: 32 bits][sub-second fraction: 32 bits]
//! ```
//!
//! The two low bits encode who issued the message. Identifiers produced here
//! always have residue 1 or 3 modulo 4. Candidates are built from the
//! nanosecond fraction with bit 1 cleared and rejected until the residue is in
//! range.
//!
//! # Invariants
//!
//! - **Residue**: `id % 4` is 1 or 3 for every issued identifier.
//! - **Strictly Increasing**: Each identifier issued by one generator is
//!   greater than the previous one, even if the wall clock stalls or steps
//!   backwards.
//! - **Bounded**: Generation makes at most `max_attempts` clock reads, then
//!   fails with [`IdError::AttemptsExhausted`].

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        OnceLock,
    },
};

use serde::{Deserialize, Serialize};

use crate::{
    env::Environment,
    error::{IdError, Result},
};

/// Bit cleared in every candidate's fraction
const FRACTION_MASK: u64 = !0b10;

/// Distance between consecutive identifiers in the same residue class
const RESIDUE_STEP: u64 = 4;

/// A message identifier
///
/// Serialized on the wire as a TL `long`. The bit pattern is unsigned
/// fixed-point time, so ordering is defined on the unsigned value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(u64);

impl MessageId {
    /// Wrap a raw identifier
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let bits = raw as u64;
        Self(bits)
    }

    /// The identifier as written on the wire
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        #[allow(clippy::cast_possible_wrap)]
        let raw = self.0 as i64;
        raw
    }

    /// Whole seconds since the Unix epoch
    #[must_use]
    pub const fn unix_secs(self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (self.0 >> 32) as u32;
        secs
    }

    /// Residue modulo 4
    #[must_use]
    pub const fn residue(self) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let residue = (self.0 & 3) as u8;
        residue
    }
}

impl PartialOrd for MessageId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MessageId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageId({:#018x})", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl From<MessageId> for i64 {
    fn from(id: MessageId) -> Self {
        id.as_i64()
    }
}

/// Message identifier generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageIdConfig {
    /// Clock reads before giving up on a candidate in the residue class
    ///
    /// Two attempts always suffice, even on a frozen clock.
    pub max_attempts: u32,
}

impl Default for MessageIdConfig {
    fn default() -> Self {
        Self { max_attempts: 16 }
    }
}

/// Issues strictly increasing message identifiers
///
/// Safe to share between threads. The only shared state is the last issued
/// identifier, updated with a compare-and-swap loop.
#[derive(Debug)]
pub struct MessageIdGenerator {
    config: MessageIdConfig,
    last: AtomicU64,
}

impl MessageIdGenerator {
    /// Create a generator that has not issued anything yet
    #[must_use]
    pub const fn new(config: MessageIdConfig) -> Self {
        Self { config, last: AtomicU64::new(0) }
    }

    /// Process-wide generator with the default configuration
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<MessageIdGenerator> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new(MessageIdConfig::default()))
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MessageIdConfig {
        &self.config
    }

    /// Last identifier handed out, if any
    #[must_use]
    pub fn last_issued(&self) -> Option<MessageId> {
        match self.last.load(Ordering::Acquire) {
            0 => None,
            raw => Some(MessageId(raw)),
        }
    }

    /// Issue the next identifier
    ///
    /// # Errors
    ///
    /// Returns [`IdError::AttemptsExhausted`] if no candidate in the residue
    /// class was found within `max_attempts` clock reads.
    pub fn next<E: Environment>(&self, env: &E) -> Result<MessageId> {
        let candidate = self.candidate(env)?;

        let issue = |last: u64| {
            if candidate > last {
                candidate
            } else {
                last.wrapping_add(RESIDUE_STEP)
            }
        };

        // The closure always returns Some, so both arms hold the previous value
        let previous = match self.last.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
            Some(issue(last))
        }) {
            Ok(previous) | Err(previous) => previous,
        };
        let issued = issue(previous);

        if issued != candidate {
            tracing::debug!(
                candidate = candidate,
                issued = issued,
                "clock did not advance past last message id, bumping"
            );
        }

        Ok(MessageId(issued))
    }

    fn candidate<E: Environment>(&self, env: &E) -> Result<u64> {
        for attempt in 0..self.config.max_attempts {
            let now = env.unix_time();
            let fraction = (u64::from(now.subsec_nanos()) + u64::from(attempt)) & FRACTION_MASK;
            let candidate = (now.as_secs() << 32) | fraction;

            if matches!(candidate & 3, 1 | 3) {
                return Ok(candidate);
            }

            tracing::debug!(attempt, candidate, "message id candidate outside residue class");
        }

        tracing::error!(attempts = self.config.max_attempts, "message id generation exhausted");
        Err(IdError::AttemptsExhausted { attempts: self.config.max_attempts })
    }
}

impl Default for MessageIdGenerator {
    fn default() -> Self {
        Self::new(MessageIdConfig::default())
    }
}

/// Issue an identifier from the process-wide generator
///
/// # Errors
///
/// See [`MessageIdGenerator::next`].
pub fn generate_message_id<E: Environment>(env: &E) -> Result<MessageId> {
    MessageIdGenerator::global().next(env)
}
