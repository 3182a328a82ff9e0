//! Seeded Environment implementation for deterministic testing.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use pulser_core::env::Environment;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Default wall-clock start: 2023-11-14T22:13:20Z
pub const DEFAULT_START: Duration = Duration::from_secs(1_700_000_000);

/// Simulation environment with a manual clock and seeded RNG.
///
/// This implementation provides:
///
/// - **Manual Time**: `unix_time()` returns a stored value that only changes
///   through [`SimEnv::advance`] or [`SimEnv::set_time`]. A test can freeze
///   the clock, step it forwards, or step it backwards.
///
/// - **Seeded RNG**: `random_bytes()` uses ChaCha20Rng seeded with a fixed
///   value, ensuring reproducible test runs.
///
/// # Determinism
///
/// The RNG is seeded with a fixed value (0) by default. For testing different
/// scenarios, create SimEnv with different seeds:
/// ```
/// let env = pulser_harness::SimEnv::with_seed(12345);
/// ```
///
/// Clones share both the clock and the RNG stream.
#[derive(Clone)]
pub struct SimEnv {
    /// Seeded RNG for deterministic random bytes
    ///
    /// Wrapped in Arc<Mutex<>> to allow Clone while maintaining shared state
    /// across clones (important for proper RNG sequence).
    rng: Arc<Mutex<ChaCha20Rng>>,

    /// Current wall-clock reading
    now: Arc<Mutex<Duration>>,
}

impl SimEnv {
    /// Create a new SimEnv with default seed (0) and start time
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a new SimEnv with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_at(seed, DEFAULT_START)
    }

    /// Create a new SimEnv with a specific seed and start time
    pub fn with_seed_at(seed: u64, start: Duration) -> Self {
        Self {
            rng: Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed))),
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forwards by `delta`
    pub fn advance(&self, delta: Duration) {
        let mut now = self.lock_clock();
        *now += delta;
    }

    /// Set the clock to an absolute reading, which may be in the past
    pub fn set_time(&self, time: Duration) {
        *self.lock_clock() = time;
    }

    fn lock_clock(&self) -> MutexGuard<'_, Duration> {
        // A plain Duration is valid even if a holder panicked
        self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SimEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SimEnv {
    fn unix_time(&self) -> Duration {
        *self.lock_clock()
    }

    fn random_bytes(&self, dest: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(dest);
    }
}
