// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Wire formats for the review backend.
//!
//! The server stores stroke points under `drawing_data`; locally they are
//! `points`. The records here perform that mapping and convert to the
//! in-memory model types.

use crate::models::drawing::{Drawing, Point};
use serde::{Deserialize, Serialize};

/// Body for `POST /comments`.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub video_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<i64>,
}

/// Body for `PATCH /comments/{id}`. Only the content is editable.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPatch {
    pub content: String,
}

/// Body for `POST /drawings`.
#[derive(Debug, Clone, Serialize)]
pub struct DrawingPayload {
    pub video_id: i64,
    pub timestamp: f64,
    pub drawing_data: Vec<Point>,
    pub color: String,
}

impl DrawingPayload {
    pub fn from_drawing(drawing: &Drawing) -> Self {
        Self {
            video_id: drawing.video_id,
            timestamp: drawing.timestamp,
            drawing_data: drawing.points.clone(),
            color: drawing.color.clone(),
        }
    }
}

/// A drawing as the server returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawingRecord {
    pub id: i64,
    pub video_id: i64,
    pub timestamp: f64,
    #[serde(rename = "drawing_data")]
    pub points: Vec<Point>,
    pub color: String,
}

impl DrawingRecord {
    /// Server records are committed by definition.
    pub fn into_drawing(self) -> Drawing {
        Drawing {
            id: self.id,
            video_id: self.video_id,
            timestamp: self.timestamp,
            points: self.points,
            color: self.color,
            committed: true,
        }
    }
}

/// Response of `GET /videos/{id}/stream`: a time-limited playable URL.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamUrl {
    pub url: String,
}

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPayload {
    pub video_id: i64,
    pub status: String,
    pub notes: String,
}

/// A review record as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub video_id: i64,
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

/// Error body the backend sends on non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_record_maps_drawing_data_to_points() {
        let json = r##"{
            "id": 9,
            "video_id": 3,
            "timestamp": 7.05,
            "drawing_data": [{"x": 0.1, "y": 0.2}, {"x": 0.3, "y": 0.4}],
            "color": "#f97316"
        }"##;
        let record: DrawingRecord = serde_json::from_str(json).unwrap();
        let drawing = record.into_drawing();
        assert_eq!(drawing.points.len(), 2);
        assert!(drawing.committed);
        assert_eq!(drawing.points[1], Point::new(0.3, 0.4));
    }

    #[test]
    fn test_comment_payload_omits_absent_fields() {
        let payload = CommentPayload {
            video_id: 3,
            content: "fix color".to_string(),
            timestamp: Some(12.3),
            timestamp_end: None,
            parent_comment_id: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"timestamp\":12.3"));
        assert!(!json.contains("timestamp_end"));
        assert!(!json.contains("parent_comment_id"));
    }

    #[test]
    fn test_drawing_payload_serializes_points_as_drawing_data() {
        let drawing = Drawing::new(3, 7.05, vec![Point::new(0.5, 0.5)], "#ffffff".to_string());
        let json = serde_json::to_string(&DrawingPayload::from_drawing(&drawing)).unwrap();
        assert!(json.contains("drawing_data"));
        assert!(!json.contains("\"points\""));
    }
}
