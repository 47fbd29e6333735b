// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timestamp matching.
//!
//! Playback time is polled at sub-100ms granularity, so annotations are
//! matched against the play head with a tolerance window instead of exact
//! floating-point equality.

/// Default tolerance window in seconds.
pub const TOLERANCE: f64 = 0.1;

/// True when `annotation_ts` belongs to the frame at `current_time`,
/// within the default tolerance window.
pub fn is_active(annotation_ts: f64, current_time: f64) -> bool {
    is_active_within(annotation_ts, current_time, TOLERANCE)
}

/// Tolerance-window match with an explicit window size.
pub fn is_active_within(annotation_ts: f64, current_time: f64, tolerance: f64) -> bool {
    (annotation_ts - current_time).abs() < tolerance
}

/// Inclusive-bounds check used for marking ranged comments on the
/// timeline. Independent of the point matcher's tolerance.
pub fn is_within_range(start: f64, end: f64, current_time: f64) -> bool {
    current_time >= start && current_time <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_reflexive() {
        assert!(is_active(12.3, 12.3));
        assert!(is_active(0.0, 0.0));
    }

    #[test]
    fn test_is_active_symmetric() {
        assert_eq!(is_active(7.05, 7.12), is_active(7.12, 7.05));
        assert_eq!(is_active(1.0, 2.0), is_active(2.0, 1.0));
    }

    #[test]
    fn test_is_active_window_is_open() {
        // Exactly at the tolerance boundary is not a match.
        assert!(!is_active(7.05, 7.15));
        assert!(is_active(7.05, 7.149));
        assert!(!is_active(7.05, 6.95));
        assert!(is_active(7.05, 6.951));
    }

    #[test]
    fn test_is_within_range_inclusive_bounds() {
        assert!(is_within_range(4.0, 10.0, 4.0));
        assert!(is_within_range(4.0, 10.0, 10.0));
        assert!(is_within_range(4.0, 10.0, 7.0));
        assert!(!is_within_range(4.0, 10.0, 3.999));
        assert!(!is_within_range(4.0, 10.0, 10.001));
    }
}
