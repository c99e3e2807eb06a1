/*
    spotify-sweep-rs | Rust CLI tool to follow artists and save tracks from your Spotify library.
    Copyright (C) 2025  Israel Alberto Roldan Vega

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::models::{MAX_BATCH_SIZE, MAX_PAGE_SIZE};
use log::warn;
use std::env;

pub const PAGE_SIZE_VAR: &str = "SWEEP_PAGE_SIZE";
pub const BATCH_SIZE_VAR: &str = "SWEEP_BATCH_SIZE";

/// Tuning knobs for a sweep. Sizes are always within `1..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    page_size: u32,
    batch_size: usize,
    pub dry_run: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            batch_size: MAX_BATCH_SIZE,
            dry_run: false,
        }
    }
}

impl SweepConfig {
    pub fn new(page_size: u32, batch_size: usize) -> Self {
        Self {
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
            dry_run: false,
        }
    }

    /// Reads `SWEEP_PAGE_SIZE` / `SWEEP_BATCH_SIZE`, falling back to the API maximums.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let page_size = read_var(PAGE_SIZE_VAR).unwrap_or(defaults.page_size);
        let batch_size = read_var(BATCH_SIZE_VAR).unwrap_or(defaults.batch_size);
        Self::new(page_size, batch_size)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

fn read_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a number", name, raw);
            None
        }
    }
}
