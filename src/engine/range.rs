// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! In/out range selection for ranged comments.
//!
//! A small state machine: entering selection mode captures the current
//! play time as the in-point and proposes an out-point a few seconds
//! later. The out-point is adjusted by dragging on the timeline; taking
//! the selection normalizes the pair so start <= end.

use crate::models::comment::normalize_range;

/// Default length of a fresh selection, in seconds.
pub const DEFAULT_RANGE_LEN: f64 = 5.0;

/// Horizontal drag sensitivity: seconds of range per pixel of drag.
pub const DRAG_SECONDS_PER_PIXEL: f64 = 0.2;

/// Range selection state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RangeSelector {
    #[default]
    Idle,
    Selecting {
        start: f64,
        end: f64,
    },
}

impl RangeSelector {
    /// Enter selection mode at the current play time. The provisional
    /// out-point sits `DEFAULT_RANGE_LEN` later, clamped to duration.
    pub fn begin(&mut self, current_time: f64, duration: f64) {
        let start = current_time.clamp(0.0, duration);
        let end = (start + DEFAULT_RANGE_LEN).min(duration);
        *self = RangeSelector::Selecting { start, end };
        log::info!("Range selection started at {:.2}s - {:.2}s", start, end);
    }

    /// Adjust the out-point by a horizontal pointer delta in pixels.
    /// No effect while idle.
    pub fn drag_end(&mut self, delta_px: f32, duration: f64) {
        if let RangeSelector::Selecting { end, .. } = self {
            *end = (*end + delta_px as f64 * DRAG_SECONDS_PER_PIXEL).clamp(0.0, duration);
        }
    }

    /// Current (start, end) pair, un-normalized, while selecting.
    pub fn selection(&self) -> Option<(f64, f64)> {
        match self {
            RangeSelector::Idle => None,
            RangeSelector::Selecting { start, end } => Some((*start, *end)),
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, RangeSelector::Selecting { .. })
    }

    /// Take the normalized selection for submission and return to idle.
    pub fn take(&mut self) -> Option<(f64, f64)> {
        let taken = self.selection().map(|(s, e)| normalize_range(s, e));
        *self = RangeSelector::Idle;
        taken
    }

    /// Leave selection mode without submitting. No side effects.
    pub fn cancel(&mut self) {
        *self = RangeSelector::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_captures_start_and_default_end() {
        let mut selector = RangeSelector::default();
        selector.begin(10.0, 60.0);
        assert_eq!(selector.selection(), Some((10.0, 15.0)));
    }

    #[test]
    fn test_begin_clamps_end_to_duration() {
        let mut selector = RangeSelector::default();
        selector.begin(58.0, 60.0);
        assert_eq!(selector.selection(), Some((58.0, 60.0)));
    }

    #[test]
    fn test_drag_end_maps_pixels_to_seconds() {
        let mut selector = RangeSelector::default();
        selector.begin(10.0, 60.0);
        selector.drag_end(10.0, 60.0); // +2s
        assert_eq!(selector.selection(), Some((10.0, 17.0)));
    }

    #[test]
    fn test_drag_end_clamps_to_media_bounds() {
        let mut selector = RangeSelector::default();
        selector.begin(10.0, 20.0);
        selector.drag_end(1000.0, 20.0);
        assert_eq!(selector.selection(), Some((10.0, 20.0)));
        selector.drag_end(-1000.0, 20.0);
        assert_eq!(selector.selection(), Some((10.0, 0.0)));
    }

    #[test]
    fn test_take_normalizes_reversed_pair() {
        let mut selector = RangeSelector::default();
        selector.begin(10.0, 60.0);
        selector.drag_end(-55.0, 60.0); // end dragged back to 4.0
        assert_eq!(selector.take(), Some((4.0, 10.0)));
        assert_eq!(selector.selection(), None);
    }

    #[test]
    fn test_cancel_discards_selection() {
        let mut selector = RangeSelector::default();
        selector.begin(10.0, 60.0);
        selector.cancel();
        assert!(!selector.is_selecting());
        assert_eq!(selector.take(), None);
    }
}
