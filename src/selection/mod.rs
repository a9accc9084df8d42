// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Random paragraph selection and number generation.

pub mod animation;
pub mod engine;

pub use animation::{PickAnimation, PickState, Timing};
pub use engine::{PickSequence, SelectionEngine};
