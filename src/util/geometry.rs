// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Conversions between screen pixels and normalized [0,1] coordinates
//! relative to the video's rendered box, plus aspect-fit sizing.

use crate::models::drawing::Point;

/// Convert a screen position to normalized coordinates within a box,
/// clamped to [0,1] so strokes can run slightly past the edge.
pub fn normalize_in_box(x: f64, y: f64, left: f64, top: f64, width: f64, height: f64) -> Point {
    Point {
        x: ((x - left) / width).clamp(0.0, 1.0),
        y: ((y - top) / height).clamp(0.0, 1.0),
    }
}

/// Convert normalized coordinates back to a screen position.
pub fn denormalize_in_box(
    point: &Point,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    (left + point.x * width, top + point.y * height)
}

/// Fit a source aspect ratio into available space, preserving aspect.
/// Returns the display (width, height).
pub fn fit_box(src_width: f64, src_height: f64, avail_width: f64, avail_height: f64) -> (f64, f64) {
    let src_aspect = src_width / src_height;
    let avail_aspect = avail_width / avail_height;
    if src_aspect > avail_aspect {
        // Source is wider - fit to width
        (avail_width, avail_width / src_aspect)
    } else {
        // Source is taller - fit to height
        (avail_height * src_aspect, avail_height)
    }
}
