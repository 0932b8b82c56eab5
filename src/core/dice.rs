//! Randomness seam for every game roll.
//!
//! All generation and combat code takes `&mut impl Dice`. Any `rand::Rng`
//! is a `Dice`, so callers pass `thread_rng()` in play and a seeded
//! `ChaCha8Rng` in simulations. `ScriptedDice` replays exact values for
//! scenario tests.

use rand::Rng;
use std::collections::VecDeque;

/// Source of inclusive integer rolls and coin flips.
pub trait Dice {
    /// Uniform integer in `lo..=hi`.
    fn roll(&mut self, lo: i64, hi: i64) -> i64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;

    /// Roll within an inclusive `(min, max)` pair.
    fn roll_range(&mut self, range: (i64, i64)) -> i64 {
        self.roll(range.0, range.1)
    }

    /// Uniform index into a collection of `len` items.
    fn pick(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty collection");
        self.roll(0, len as i64 - 1) as usize
    }
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// A queued draw for [`ScriptedDice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scripted {
    Roll(i64),
    Coin(bool),
}

/// Replays a fixed sequence of draws.
///
/// Panics when the script runs dry, when the next draw is of the wrong
/// kind, or when a scripted roll lies outside the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    queue: VecDeque<Scripted>,
}

impl ScriptedDice {
    pub fn new(draws: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
        }
    }

    /// Script made only of integer rolls.
    pub fn rolls(values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(values.into_iter().map(Scripted::Roll))
    }

    pub fn push_roll(&mut self, value: i64) -> &mut Self {
        self.queue.push_back(Scripted::Roll(value));
        self
    }

    pub fn push_coin(&mut self, value: bool) -> &mut Self {
        self.queue.push_back(Scripted::Coin(value));
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, lo: i64, hi: i64) -> i64 {
        match self.queue.pop_front() {
            Some(Scripted::Roll(value)) => {
                assert!(
                    (lo..=hi).contains(&value),
                    "scripted roll {value} outside {lo}..={hi}"
                );
                value
            }
            Some(other) => panic!("expected a roll in {lo}..={hi}, script had {other:?}"),
            None => panic!("script exhausted while rolling {lo}..={hi}"),
        }
    }

    fn coin(&mut self) -> bool {
        match self.queue.pop_front() {
            Some(Scripted::Coin(value)) => value,
            Some(other) => panic!("expected a coin flip, script had {other:?}"),
            None => panic!("script exhausted while flipping a coin"),
        }
    }
}
