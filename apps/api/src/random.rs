//! Injectable randomness for the advisor's career sampling, the resume
//! score jitter and simulated latency.

use std::sync::Mutex;

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};

/// Source of randomized choices. Carried in `AppState` as `Arc<dyn RandomSource>`.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn int_inclusive(&self, low: u64, high: u64) -> u64;

    /// `amount` distinct indices drawn from `0..len`, in draw order.
    /// `amount` is capped at `len`.
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize>;
}

/// `StdRng` behind a mutex; seeded for reproducible runs, entropy otherwise.
pub struct StdRandom {
    rng: Mutex<StdRng>,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        StdRandom {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        StdRandom {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock only means another draw panicked; the generator is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *rng)
    }
}

impl RandomSource for StdRandom {
    fn int_inclusive(&self, low: u64, high: u64) -> u64 {
        self.with_rng(|rng| rng.gen_range(low..=high))
    }

    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        self.with_rng(|rng| index::sample(rng, len, amount.min(len)).into_vec())
    }
}
