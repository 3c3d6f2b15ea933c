//! Dice oracle for deterministic rolls.
//!
//! The only external dependency the rules have is a uniform-integer source,
//! and it is injected so tests, replays, and audit logs all see the same
//! rolls. Implementations must be deterministic: the same seed always
//! yields the same die.

use crate::config::EngineConfig;

/// Injectable source of die rolls.
pub trait DiceOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Roll the d20 used for checks and saving throws.
    fn roll_d20(&self, seed: u64) -> u32 {
        self.roll_die(seed, EngineConfig::D20_SIDES)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state, a single multiply plus a
/// xorshift and a rotate. Same seed, same die, every time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgDice;

impl PcgDice {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then rotate by the
    /// top bits of the state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl DiceOracle for PcgDice {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Compute a deterministic seed for one roll.
///
/// Combines the campaign seed with a per-roll nonce, the creature involved,
/// and a context discriminant so that every roll in a session is
/// independent yet replayable.
///
/// # Context Values
///
/// Use different context values when one command needs several
/// independent rolls:
///
/// - `0`: primary roll (saving throw, stabilise check)
/// - `1`, `2`, ...: extra dice (hit-dice rolls use one context per die)
pub fn compute_seed(campaign_seed: u64, nonce: u64, creature: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners, finished with an avalanche step.
    let mut hash = campaign_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (creature as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
