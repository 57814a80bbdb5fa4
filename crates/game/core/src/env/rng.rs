//! RNG oracle for deterministic random number generation.
//!
//! Every random draw in a session (die rolls, confusion coin flips, candidate
//! choices, chaos shuffles) is derived from the session seed, the roll nonce,
//! the acting player and a per-draw context counter. Given the same seed a
//! session replays identically.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state, a single
/// multiply, xorshift and rotate per draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Scripted oracle that yields queued raw values, ignoring the seed.
///
/// Once the queue is exhausted it falls back to [`PcgRng`]. Intended for
/// tests and for replaying recorded draws.
///
/// Raw values map onto draws as follows: a die roll yields `raw % sides + 1`,
/// a coin flip is heads when `raw` is odd, and a choice among `n` candidates
/// picks index `raw % n`.
#[derive(Debug, Default)]
pub struct SequenceRng {
    queue: Mutex<VecDeque<u32>>,
}

impl SequenceRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a die face (1-based).
    #[must_use]
    pub fn roll(self, face: u32) -> Self {
        self.push(face.saturating_sub(1))
    }

    /// Queues a coin flip outcome.
    #[must_use]
    pub fn flip(self, heads: bool) -> Self {
        self.push(u32::from(heads))
    }

    /// Queues a candidate index.
    #[must_use]
    pub fn choose(self, index: u32) -> Self {
        self.push(index)
    }

    #[must_use]
    pub fn push(self, raw: u32) -> Self {
        self.lock().push_back(raw);
        self
    }

    /// Number of queued values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<u32>> {
        // A poisoned queue still holds valid integers.
        self.queue
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&self, seed: u64) -> u32 {
        self.lock()
            .pop_front()
            .unwrap_or_else(|| PcgRng.next_u32(seed))
    }
}

/// Compute deterministic seed from session components.
///
/// * `game_seed` - Base seed set at session start
/// * `nonce` - Roll sequence number
/// * `actor_id` - Player performing the roll
/// * `context` - Index of the draw within the roll
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequence of draws for one roll.
///
/// Each call consumes a fresh context index so independent draws within the
/// same roll never share a seed.
pub struct DrawStream<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
    actor: u32,
    context: u32,
}

impl<'a> DrawStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64, nonce: u64, actor: u32) -> Self {
        Self {
            rng,
            seed,
            nonce,
            actor,
            context: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, self.actor, self.context);
        self.context += 1;
        seed
    }

    /// Uniform die face in `[1, sides]`.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.roll_die(seed, sides)
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        let seed = self.next_seed();
        self.rng.next_u32(seed) % 2 == 1
    }

    /// Uniform index in `[0, len)`. Returns 0 for empty ranges.
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let seed = self.next_seed();
        (self.rng.next_u32(seed) % len as u32) as usize
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u32 {
        self.context
    }
}
