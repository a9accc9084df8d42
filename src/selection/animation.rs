// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time-driven playback of a pick sequence.
//!
//! The animation does not sleep or spawn anything. The UI asks for the state
//! at the current instant each frame and schedules a repaint for the next
//! step. State is a pure function of the elapsed time, so the sweep always
//! runs in order and the settle phase always shows the pre-drawn index.

use super::engine::{Highlight, Phase, PickSequence, SETTLE_PULSES};
use std::time::{Duration, Instant};

/// Delay after each sweep step.
pub const DEFAULT_SWEEP_DELAY: Duration = Duration::from_millis(60);

/// Delay after each settle pulse.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(120);

/// Step delays for the two phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub sweep_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            sweep_delay: DEFAULT_SWEEP_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Where an animated pick currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickState {
    Idle,
    Sweeping { step: usize, index: usize },
    Settling { pulse: usize, index: usize },
    Revealed { index: usize },
}

impl PickState {
    /// Item to highlight in this state.
    pub fn highlighted(&self) -> Option<usize> {
        match *self {
            PickState::Idle => None,
            PickState::Sweeping { index, .. }
            | PickState::Settling { index, .. }
            | PickState::Revealed { index } => Some(index),
        }
    }
}

/// One animated pick, from start to reveal.
#[derive(Debug, Clone)]
pub struct PickAnimation {
    sequence: PickSequence,
    timing: Timing,
    started: Option<Instant>,
}

fn times(delay: Duration, n: usize) -> Duration {
    delay.saturating_mul(u32::try_from(n).unwrap_or(u32::MAX))
}

impl PickAnimation {
    pub fn new(sequence: PickSequence, timing: Timing) -> Self {
        Self {
            sequence,
            timing,
            started: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    fn sweep_duration(&self) -> Duration {
        times(self.timing.sweep_delay, self.sequence.sweep_len())
    }

    fn settle_duration(&self) -> Duration {
        times(self.timing.settle_delay, SETTLE_PULSES)
    }

    /// Time from start to reveal.
    pub fn total_duration(&self) -> Duration {
        self.sweep_duration() + self.settle_duration()
    }

    /// State at `now`. `Idle` until started.
    pub fn state(&self, now: Instant) -> PickState {
        match self.started {
            Some(started) => self.state_after(now.saturating_duration_since(started)),
            None => PickState::Idle,
        }
    }

    /// State once `elapsed` has passed since the start.
    pub fn state_after(&self, elapsed: Duration) -> PickState {
        let sweep = self.sweep_duration();
        let step = if elapsed < sweep {
            (elapsed.as_nanos() / self.timing.sweep_delay.as_nanos()) as usize
        } else {
            let settled = elapsed - sweep;
            if settled >= self.settle_duration() {
                return PickState::Revealed {
                    index: self.sequence.chosen(),
                };
            }
            self.sequence.sweep_len()
                + (settled.as_nanos() / self.timing.settle_delay.as_nanos()) as usize
        };

        match self.sequence.step(step) {
            Some(Highlight {
                index,
                phase: Phase::Sweep,
            }) => PickState::Sweeping { step, index },
            Some(Highlight {
                index,
                phase: Phase::Settle,
            }) => PickState::Settling {
                pulse: step - self.sequence.sweep_len(),
                index,
            },
            None => PickState::Revealed {
                index: self.sequence.chosen(),
            },
        }
    }

    /// Time until the state next changes, or `None` when idle or revealed.
    pub fn until_next_step(&self, now: Instant) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.started?);
        let boundary = match self.state_after(elapsed) {
            PickState::Sweeping { step, .. } => times(self.timing.sweep_delay, step + 1),
            PickState::Settling { pulse, .. } => {
                self.sweep_duration() + times(self.timing.settle_delay, pulse + 1)
            }
            PickState::Idle | PickState::Revealed { .. } => return None,
        };
        Some(boundary.saturating_sub(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::engine::SelectionEngine;

    fn animation(items: &[&str], seed: u64) -> (PickAnimation, usize) {
        let sequence = SelectionEngine::seeded(seed).pick_paragraph(items).unwrap();
        let chosen = sequence.chosen();
        (PickAnimation::new(sequence, Timing::default()), chosen)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_idle_until_started() {
        let (mut anim, _) = animation(&["A", "B"], 1);
        let now = Instant::now();
        assert_eq!(anim.state(now), PickState::Idle);
        assert_eq!(anim.until_next_step(now), None);

        anim.start(now);
        assert_eq!(anim.state(now), PickState::Sweeping { step: 0, index: 0 });
    }

    #[test]
    fn test_three_item_timeline() {
        let (anim, chosen) = animation(&["A", "B", "C"], 42);

        assert_eq!(anim.state_after(ms(59)), PickState::Sweeping { step: 0, index: 0 });
        assert_eq!(anim.state_after(ms(60)), PickState::Sweeping { step: 1, index: 1 });
        assert_eq!(anim.state_after(ms(719)), PickState::Sweeping { step: 11, index: 2 });
        assert_eq!(
            anim.state_after(ms(720)),
            PickState::Settling { pulse: 0, index: chosen }
        );
        assert_eq!(
            anim.state_after(ms(720 + 1199)),
            PickState::Settling { pulse: 9, index: chosen }
        );
        assert_eq!(anim.state_after(ms(1920)), PickState::Revealed { index: chosen });
        assert_eq!(anim.total_duration(), ms(1920));
    }

    #[test]
    fn test_states_never_skip_settle() {
        let (anim, chosen) = animation(&["A", "B", "C", "D", "E"], 8);
        let mut seen_settle = false;
        let mut last_sweep_step = None;

        for t in (0..=anim.total_duration().as_millis() as u64).step_by(5) {
            match anim.state_after(ms(t)) {
                PickState::Sweeping { step, .. } => {
                    assert!(!seen_settle);
                    if let Some(last) = last_sweep_step {
                        assert!(step >= last);
                    }
                    last_sweep_step = Some(step);
                }
                PickState::Settling { index, .. } => {
                    seen_settle = true;
                    assert_eq!(index, chosen);
                }
                PickState::Revealed { index } => {
                    assert!(seen_settle);
                    assert_eq!(index, chosen);
                }
                PickState::Idle => panic!("idle after start"),
            }
        }
        assert_eq!(last_sweep_step, Some(14));
    }

    #[test]
    fn test_until_next_step() {
        let (mut anim, _) = animation(&["A", "B", "C"], 4);
        let start = Instant::now();
        anim.start(start);

        assert_eq!(anim.until_next_step(start + ms(10)), Some(ms(50)));
        assert_eq!(anim.until_next_step(start + ms(730)), Some(ms(110)));
        assert_eq!(anim.until_next_step(start + ms(5000)), None);
    }

    #[test]
    fn test_zero_delays_reveal_immediately() {
        let sequence = SelectionEngine::seeded(6).pick_paragraph(&["A", "B"]).unwrap();
        let chosen = sequence.chosen();
        let anim = PickAnimation::new(
            sequence,
            Timing {
                sweep_delay: Duration::ZERO,
                settle_delay: Duration::ZERO,
            },
        );
        assert_eq!(anim.state_after(Duration::ZERO), PickState::Revealed { index: chosen });
    }

    #[test]
    fn test_highlighted() {
        assert_eq!(PickState::Idle.highlighted(), None);
        assert_eq!(PickState::Settling { pulse: 3, index: 2 }.highlighted(), Some(2));
    }
}
