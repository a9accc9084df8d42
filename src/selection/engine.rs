// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Random paragraph picks and random numbers.
//!
//! The engine owns only its random source. Every pick is an independent
//! uniform draw over the items it is given.

use crate::error::SelectionError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum number of sweep steps before settling.
pub const MIN_SWEEP_STEPS: usize = 12;

/// Sweep steps per item when that exceeds the minimum.
pub const SWEEP_ROUNDS: usize = 3;

/// Highlight pulses on the drawn index before the reveal.
pub const SETTLE_PULSES: usize = 10;

/// Which part of a pick a highlight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Sweep,
    Settle,
}

/// One highlight in a pick sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub index: usize,
    pub phase: Phase,
}

/// The full highlight plan for one pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSequence {
    item_count: usize,
    chosen: usize,
}

impl PickSequence {
    /// Index of the drawn item.
    pub fn chosen(&self) -> usize {
        self.chosen
    }

    pub fn sweep_len(&self) -> usize {
        MIN_SWEEP_STEPS.max(SWEEP_ROUNDS * self.item_count)
    }

    /// Total number of highlights, sweep and settle.
    pub fn len(&self) -> usize {
        self.sweep_len() + SETTLE_PULSES
    }

    /// Highlight at position `step`, if the sequence is that long.
    pub fn step(&self, step: usize) -> Option<Highlight> {
        if step < self.sweep_len() {
            Some(Highlight {
                index: step % self.item_count,
                phase: Phase::Sweep,
            })
        } else if step < self.len() {
            Some(Highlight {
                index: self.chosen,
                phase: Phase::Settle,
            })
        } else {
            None
        }
    }
}

/// Random source for picks and number draws.
pub struct SelectionEngine<R = StdRng> {
    rng: R,
}

impl SelectionEngine<StdRng> {
    /// Engine seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Engine with a fixed seed, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SelectionEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Plan an animated pick over `items` and draw the final index.
    pub fn pick_paragraph<T>(&mut self, items: &[T]) -> Result<PickSequence, SelectionError> {
        if items.is_empty() {
            return Err(SelectionError::EmptyInput);
        }
        let chosen = self.rng.random_range(0..items.len());
        log::debug!("Picked paragraph {} of {}", chosen + 1, items.len());
        Ok(PickSequence {
            item_count: items.len(),
            chosen,
        })
    }

    /// Uniform integer in `[low, high]`; inverted bounds are swapped.
    pub fn random_in_range(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        self.rng.random_range(low..=high)
    }

    /// Parse both bounds from user input, then draw.
    pub fn random_in_range_input(&mut self, low: &str, high: &str) -> Result<i64, SelectionError> {
        let low = parse_bound(low)?;
        let high = parse_bound(high)?;
        Ok(self.random_in_range(low, high))
    }
}

/// Parse one range bound, ignoring surrounding whitespace.
pub fn parse_bound(input: &str) -> Result<i64, SelectionError> {
    input
        .trim()
        .parse()
        .map_err(|source| SelectionError::InvalidRangeInput {
            input: input.to_string(),
            source,
        })
}
