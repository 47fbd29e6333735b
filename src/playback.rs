// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback clock.
//!
//! The single source of "now" for the annotation engine. The play head
//! advances by wall-clock deltas scaled by the playback rate. `tick()`
//! runs once per UI frame; while playing, the app additionally schedules
//! a repaint every `POLL_INTERVAL` so time keeps advancing when no input
//! events arrive. Consumers must treat the position as eventually
//! consistent between ticks, not strictly monotonic.

use std::time::{Duration, Instant};

/// Fallback repaint interval while playing (~100ms), mirroring a media
/// element's coarse time-update cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wall-clock-driven play head over the active media version.
pub struct PlaybackClock {
    position: f64,
    duration: f64,
    playing: bool,
    rate: f64,
    volume: f32,
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            playing: false,
            rate: 1.0,
            volume: 1.0,
            last_tick: None,
        }
    }

    /// Current play time in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Advance the play head. Call once per frame; a no-op while paused.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.playing {
            if let Some(last) = self.last_tick {
                let dt = now.duration_since(last).as_secs_f64();
                self.advance(dt);
            }
        }
        self.last_tick = Some(now);
    }

    fn advance(&mut self, dt: f64) {
        self.position = (self.position + dt * self.rate).clamp(0.0, self.duration);
        if self.position >= self.duration {
            self.playing = false;
            log::info!("Playback reached end at {:.2}s", self.duration);
        }
    }

    pub fn play(&mut self) {
        if self.duration <= 0.0 {
            return;
        }
        // Restart from the top when play is hit at the end.
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
        self.last_tick = Some(Instant::now());
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `position` (seconds), clamped to the media bounds.
    pub fn seek(&mut self, position: f64) {
        self.position = position.clamp(0.0, self.duration);
    }

    /// Swap in a new version's duration, keeping the play head inside
    /// the new bounds.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration.max(0.0);
        self.position = self.position.clamp(0.0, self.duration);
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(0.25, 4.0);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Test hook: advance by an explicit delta instead of wall time.
    #[cfg(test)]
    fn advance_by(&mut self, dt: f64) {
        if self.playing {
            self.advance(dt);
        }
    }
}
