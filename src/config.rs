// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Runtime configuration from environment variables.

use crate::selection::Timing;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_DATA_FILE: &str = "pages.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the page collection is stored.
    pub data_file: PathBuf,
    /// Pick animation step delays.
    pub timing: Timing,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            timing: Timing::default(),
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Invalid values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup("ROULETTE_DATA_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let sweep_delay = parse_var(&lookup, "ROULETTE_SWEEP_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.timing.sweep_delay);

        let settle_delay = parse_var(&lookup, "ROULETTE_SETTLE_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.timing.settle_delay);

        let seed = parse_var(&lookup, "ROULETTE_SEED");

        Self {
            data_file,
            timing: Timing {
                sweep_delay,
                settle_delay,
            },
            seed,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
