// SPDX-License-Identifier: MPL-2.0
//! Load request bookkeeping with animated spinner.
//!
//! Every request gets the next generation number. Only the response of the
//! newest outstanding request is accepted; anything else arrived too late.

use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Generation of the most recent request.
    generation: u64,
    /// Generation still waiting for its response, if any.
    pending: Option<u64>,
    /// When the pending request started.
    started_at: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Requests issued since creation.
    requests: u64,
}

impl State {
    /// Starts a new request and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.requests += 1;
        self.pending = Some(self.generation);
        self.started_at = Some(Instant::now());
        self.generation
    }

    /// Accepts the response of `generation` if it is the one pending and
    /// returns how long the request took. Returns `None` for superseded or
    /// unexpected responses, which must be dropped.
    pub fn finish(&mut self, generation: u64) -> Option<Duration> {
        if self.pending != Some(generation) {
            return None;
        }
        self.pending = None;
        self.spinner_rotation = 0.0;
        let elapsed = self
            .started_at
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default();
        Some(elapsed)
    }

    /// Advances the spinner while a request is pending.
    pub fn tick(&mut self) {
        if self.pending.is_some() {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
