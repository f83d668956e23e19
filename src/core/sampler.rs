//! Random draws for the quality-check and packing stages
//!
//! Operations never touch a RNG directly; they go through [`Sampler`] so
//! tests can script exact scores and defect picks.

use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Source of the random draws made on the factory floor.
pub trait Sampler {
    /// Uniform integer draw over the inclusive range `lo..=hi`.
    fn draw_in(&mut self, lo: i32, hi: i32) -> i32;

    /// Up to `n` distinct picks from `catalog`.
    fn pick_distinct(&mut self, catalog: &[&str], n: usize) -> Vec<String>;
}

/// The production sampler, backed by any [`Rng`].
#[derive(Debug)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl RngSampler<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RngSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RngSampler<R> {
    /// Wrap an explicit RNG, e.g. a seeded one.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn draw_in(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    fn pick_distinct(&mut self, catalog: &[&str], n: usize) -> Vec<String> {
        catalog
            .choose_multiple(&mut self.rng, n)
            .map(|s| s.to_string())
            .collect()
    }
}

/// A sampler that replays queued integer draws, for deterministic tests.
///
/// `draw_in` pops the next scripted value (clamped into the requested
/// range); once the script runs out it returns `lo`. `pick_distinct`
/// takes the first `n` catalog entries in order.
#[derive(Debug, Default)]
pub struct ScriptedSampler {
    draws: VecDeque<i32>,
}

impl ScriptedSampler {
    pub fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl Sampler for ScriptedSampler {
    fn draw_in(&mut self, lo: i32, hi: i32) -> i32 {
        match self.draws.pop_front() {
            Some(v) => v.clamp(lo, hi),
            None => lo,
        }
    }

    fn pick_distinct(&mut self, catalog: &[&str], n: usize) -> Vec<String> {
        catalog.iter().take(n).map(|s| s.to_string()).collect()
    }
}
