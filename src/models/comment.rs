// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Comment data structures.
//!
//! Comments anchor to a single timestamp (point comment), a time range
//! (ranged comment), or nothing at all (general comment). Replies always
//! anchor to a single point and reference their parent by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A review comment on one video version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub video_id: i64,
    pub content: String,
    /// Anchor time in seconds. None means a general, unanchored comment.
    pub timestamp: Option<f64>,
    /// End of a ranged comment. Invariant: when present,
    /// `timestamp_end >= timestamp` (see [`normalize_range`]).
    pub timestamp_end: Option<f64>,
    /// Parent comment id. Some(_) marks this comment as a reply.
    pub parent_comment_id: Option<i64>,
    /// Authenticated username or guest-supplied display name.
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }

    pub fn is_ranged(&self) -> bool {
        self.timestamp_end.is_some()
    }
}

/// Normalize a raw (start, end) pair so start <= end, regardless of the
/// direction the user dragged the selection.
pub fn normalize_range(start: f64, end: f64) -> (f64, f64) {
    if end < start {
        (end, start)
    } else {
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_range_swaps_reversed_pair() {
        assert_eq!(normalize_range(10.0, 4.0), (4.0, 10.0));
    }

    #[test]
    fn test_normalize_range_keeps_ordered_pair() {
        assert_eq!(normalize_range(4.0, 10.0), (4.0, 10.0));
        assert_eq!(normalize_range(7.0, 7.0), (7.0, 7.0));
    }
}
