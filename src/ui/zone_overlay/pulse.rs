// SPDX-License-Identifier: MPL-2.0
//! Transient highlight played on a picked zone.
//!
//! Purely cosmetic: nothing in click handling reads it. The owning component
//! advances it from the animation tick and drops it once it has run out.

use crate::domain::body::ZoneId;
use crate::domain::interaction::PulseDuration;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    zone: ZoneId,
    generation: u64,
    started_at: Instant,
    duration: PulseDuration,
}

impl Pulse {
    #[must_use]
    pub fn start(zone: ZoneId, generation: u64, now: Instant, duration: PulseDuration) -> Self {
        Self {
            zone,
            generation,
            started_at: now,
            duration,
        }
    }

    #[must_use]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Generation of the scene the pulsed zone belongs to.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Animation progress in `0.0..=1.0`, or `None` once the pulse is over.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        let total = self.duration.as_duration();
        if elapsed >= total {
            return None;
        }
        Some(elapsed.as_secs_f32() / total.as_secs_f32())
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.progress(now).is_none()
    }
}

/// Pulse frame handed to the overlay for drawing.
#[derive(Debug, Clone, Copy)]
pub struct PulseFrame<'a> {
    pub zone: &'a ZoneId,
    pub progress: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pulse(now: Instant) -> Pulse {
        Pulse::start(
            ZoneId::new("1_01").expect("id"),
            3,
            now,
            PulseDuration::from_millis(400),
        )
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let start = Instant::now();
        let pulse = pulse(start);
        assert_eq!(pulse.progress(start), Some(0.0));

        let halfway = pulse
            .progress(start + Duration::from_millis(200))
            .expect("running");
        assert!((halfway - 0.5).abs() < 1e-3);
    }

    #[test]
    fn pulse_expires_after_its_duration() {
        let start = Instant::now();
        let pulse = pulse(start);
        assert!(!pulse.is_expired(start + Duration::from_millis(399)));
        assert!(pulse.is_expired(start + Duration::from_millis(400)));
    }

    #[test]
    fn clocks_before_the_start_count_as_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let pulse = pulse(start);
        assert_eq!(pulse.progress(Instant::now()), Some(0.0));
    }
}
