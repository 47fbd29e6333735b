// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing data structures.
//!
//! A drawing is one freehand stroke: an ordered list of normalized
//! points plus a color and the play time it is anchored to.

use serde::{Deserialize, Serialize};

/// A 2D point with normalized coordinates (0.0 to 1.0), relative to the
/// video's rendered box so strokes are resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A completed freehand stroke anchored to a moment of media time.
///
/// `committed` distinguishes strokes already persisted on the server from
/// strokes staged locally (e.g. a guest stroke waiting for its comment to
/// be submitted). Staged and committed drawings render identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub id: i64,
    pub video_id: i64,
    /// Anchor time in seconds. Required: every stroke belongs to a frame.
    pub timestamp: f64,
    pub points: Vec<Point>,
    /// Hex color string, e.g. "#f97316".
    pub color: String,
    #[serde(default)]
    pub committed: bool,
}

impl Drawing {
    /// Create a new staged (not yet persisted) drawing.
    pub fn new(video_id: i64, timestamp: f64, points: Vec<Point>, color: String) -> Self {
        Self {
            id: 0,
            video_id,
            timestamp,
            points,
            color,
            committed: false,
        }
    }

    /// A stroke with a single point renders as a dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}
