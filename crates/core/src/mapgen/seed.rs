//! Deterministic seed mixing and the pseudo-random stream threaded through maze generation.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub(crate) const CARVE_STREAM: u64 = 1;
pub(crate) const HAZARD_STREAM: u64 = 1_000_003;
const RUNTIME_STREAM: u64 = 0x5EED;

/// Seeded random stream owned by a single generation call.
pub struct MazeRng {
    rng: ChaCha8Rng,
}

impl MazeRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Stream for one generation stage, derived from the request seed.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::from_seed(derive_stream_seed(seed, stream))
    }

    /// Value in `[0, upper)`. `upper` must be non-zero.
    pub fn below(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0);
        (self.rng.next_u64() % upper as u64) as usize
    }

    pub fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        match (max_value - min_value).checked_add(1) {
            Some(span) => min_value + self.below(span),
            // The span covers every usize, so any draw is in range.
            None => min_value.wrapping_add(self.rng.next_u64() as usize),
        }
    }

    pub fn coin(&mut self) -> bool {
        self.rng.next_u64() & 1 == 1
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len()))
    }

    /// Fisher-Yates, back to front.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_with = self.below(index + 1);
            items.swap(index, swap_with);
        }
    }
}

pub(crate) fn derive_stream_seed(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh seed for requests that did not supply one: wall clock, process id and
/// a per-process counter, run through the stream mixer.
pub fn generate_runtime_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |elapsed| elapsed.as_nanos());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let clock = (nanos as u64) ^ ((nanos >> 64) as u64);
    let identity = u64::from(process::id()) << 32 | counter;

    derive_stream_seed(clock ^ identity.rotate_left(23), RUNTIME_STREAM)
}
