// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand stroke capture.
//!
//! Pointer input arrives faster than the canvas repaints, so moves are
//! buffered into a pending list and drained once per frame instead of
//! being committed synchronously. The canvas bounding box is captured at
//! pointer-down and only re-read when the canvas resizes, so each move
//! normalizes against a cached rectangle.

use crate::models::drawing::{Drawing, Point};
use crate::util::geometry;

/// Default stroke color (hex).
pub const DEFAULT_STROKE_COLOR: &str = "#f97316";

/// Rendered video box in screen pixels: (left, top, width, height).
pub type CanvasBox = (f64, f64, f64, f64);

/// Captures one in-progress freehand stroke.
pub struct DrawingEngine {
    /// Box cached at pointer-down; refreshed only on resize.
    canvas_box: Option<CanvasBox>,
    /// Points committed to the stroke, drawn every frame.
    committed: Vec<Point>,
    /// Points buffered since the last per-frame drain.
    pending: Vec<Point>,
    active: bool,
    color: String,
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingEngine {
    pub fn new() -> Self {
        Self {
            canvas_box: None,
            committed: Vec::new(),
            pending: Vec::new(),
            active: false,
            color: DEFAULT_STROKE_COLOR.to_string(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: String) {
        self.color = color;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Points committed so far, for painting the live stroke.
    pub fn stroke_points(&self) -> &[Point] {
        &self.committed
    }

    /// Begin a stroke at a screen position. A pointer-down with no
    /// subsequent moves stays a single-point dot.
    pub fn begin_stroke(&mut self, x: f64, y: f64, canvas_box: CanvasBox) {
        let (left, top, width, height) = canvas_box;
        self.canvas_box = Some(canvas_box);
        self.committed = vec![geometry::normalize_in_box(x, y, left, top, width, height)];
        self.pending.clear();
        self.active = true;
    }

    /// Buffer a pointer move. Normalizes against the cached box; no
    /// drawing happens until the next drain.
    pub fn record_point(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        if let Some((left, top, width, height)) = self.canvas_box {
            self.pending
                .push(geometry::normalize_in_box(x, y, left, top, width, height));
        }
    }

    /// Refresh the cached box after a canvas resize. Points already
    /// normalized stay valid; only future moves use the new box.
    pub fn sync_canvas_box(&mut self, canvas_box: CanvasBox) {
        if !self.active {
            return;
        }
        if self.canvas_box != Some(canvas_box) {
            log::debug!("Canvas resized mid-stroke, recapturing bounds");
            self.canvas_box = Some(canvas_box);
        }
    }

    /// Move buffered points into the committed list. Run once per frame;
    /// returns how many points were appended.
    pub fn drain(&mut self) -> usize {
        let appended = self.pending.len();
        self.committed.append(&mut self.pending);
        appended
    }

    /// Finish the stroke, flushing any remaining buffered points, and
    /// produce a drawing anchored to the current play time.
    pub fn finish(&mut self, video_id: i64, timestamp: f64) -> Option<Drawing> {
        if !self.active {
            return None;
        }
        self.drain();
        self.active = false;
        self.canvas_box = None;
        let points = std::mem::take(&mut self.committed);
        if points.is_empty() {
            return None;
        }
        log::info!(
            "Finished stroke with {} points at {:.2}s",
            points.len(),
            timestamp
        );
        Some(Drawing::new(video_id, timestamp, points, self.color.clone()))
    }

    /// Discard the in-progress stroke.
    pub fn cancel(&mut self) {
        self.active = false;
        self.canvas_box = None;
        self.committed.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: CanvasBox = (0.0, 0.0, 100.0, 100.0);

    #[test]
    fn test_pointer_down_records_a_dot() {
        let mut engine = DrawingEngine::new();
        engine.begin_stroke(50.0, 50.0, BOX);
        let drawing = engine.finish(1, 7.05).unwrap();
        assert!(drawing.is_dot());
        assert_eq!(drawing.points[0], Point::new(0.5, 0.5));
        assert_eq!(drawing.timestamp, 7.05);
    }

    #[test]
    fn test_moves_buffer_until_drain() {
        let mut engine = DrawingEngine::new();
        engine.begin_stroke(0.0, 0.0, BOX);
        engine.record_point(10.0, 0.0);
        engine.record_point(20.0, 0.0);
        engine.record_point(30.0, 0.0);
        // Nothing committed yet beyond the initial point.
        assert_eq!(engine.stroke_points().len(), 1);

        assert_eq!(engine.drain(), 3);
        assert_eq!(engine.stroke_points().len(), 4);
        assert_eq!(engine.drain(), 0);
    }

    #[test]
    fn test_finish_flushes_remaining_buffer() {
        let mut engine = DrawingEngine::new();
        engine.begin_stroke(0.0, 0.0, BOX);
        engine.record_point(10.0, 10.0);
        let drawing = engine.finish(1, 3.0).unwrap();
        assert_eq!(drawing.points.len(), 2);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_resize_renormalizes_future_points_only() {
        let mut engine = DrawingEngine::new();
        engine.begin_stroke(50.0, 50.0, BOX);
        engine.sync_canvas_box((0.0, 0.0, 200.0, 200.0));
        engine.record_point(100.0, 100.0);
        let drawing = engine.finish(1, 0.0).unwrap();
        assert_eq!(drawing.points[0], Point::new(0.5, 0.5));
        assert_eq!(drawing.points[1], Point::new(0.5, 0.5));
    }

    #[test]
    fn test_cancel_discards_everything() {
        let mut engine = DrawingEngine::new();
        engine.begin_stroke(0.0, 0.0, BOX);
        engine.record_point(10.0, 10.0);
        engine.cancel();
        assert!(engine.finish(1, 0.0).is_none());
    }

    #[test]
    fn test_moves_before_begin_are_ignored() {
        let mut engine = DrawingEngine::new();
        engine.record_point(10.0, 10.0);
        assert_eq!(engine.drain(), 0);
        assert!(engine.finish(1, 0.0).is_none());
    }
}
