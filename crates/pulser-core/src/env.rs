//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples identifier generation from system
//! resources (wall clock, randomness). This enables:
//!
//! - Deterministic Simulation: the harness provides a manually advanced clock
//!   and a seeded RNG, so generated nonces and message identifiers reproduce
//!   exactly.
//!
//! - Production Runtime: [`SystemEnv`] reads the system clock and the OS
//!   entropy pool without any change to the generators.
//!
//! # Invariants
//!
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: Implementations must not share global state

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Abstract environment providing wall-clock time and randomness.
///
/// # Implementations
///
/// - Simulation (`pulser-harness::SimEnv`): Clock that only moves when the
///   test advances it, seeded RNG for reproducibility.
///
/// - Production ([`SystemEnv`]): Real system clock, crypto-secure RNG from the
///   OS entropy pool.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Returns the time elapsed since the Unix epoch.
    ///
    /// Message identifiers embed this value, so it must be wall-clock time
    /// rather than a monotonic instant. It may go backwards (clock
    /// adjustments); callers that need ordering enforce it themselves.
    fn unix_time(&self) -> Duration;

    /// Fills the provided buffer with random bytes.
    ///
    /// # Security
    ///
    /// Production implementations MUST use the OS entropy pool
    /// (`getrandom::getrandom()`), never a userspace PRNG.
    ///
    /// # Panics
    ///
    /// May panic if the OS entropy source is unavailable (extremely rare).
    fn random_bytes(&self, buffer: &mut [u8]);
}

/// Production environment backed by the system clock and OS entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn unix_time(&self) -> Duration {
        // A clock set before 1970 reads as the epoch itself
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO)
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::getrandom(buffer)
            .unwrap_or_else(|e| panic!("OS entropy source unavailable: {e}"));
    }
}
