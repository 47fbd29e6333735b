// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media version data structures.
//!
//! Each upload revision of a logical video is a `MediaVersion`. Versions
//! form a flat list ordered by version number descending; exactly one is
//! active in the UI at a time.

use serde::{Deserialize, Serialize};

/// Review state of one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    ChangesRequested,
}

impl ApprovalStatus {
    /// Status value as the review endpoint spells it.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::ChangesRequested => "changes_requested",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "changes_requested" => Some(ApprovalStatus::ChangesRequested),
            _ => None,
        }
    }
}

/// One playable revision of a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaVersion {
    pub id: i64,
    pub version_number: u32,
    /// Duration in seconds.
    pub duration: f64,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
    /// None means this is the root version.
    pub parent_version_id: Option<i64>,
    pub approval_status: ApprovalStatus,
}

/// Sort versions newest-first, the order the version selector shows.
pub fn sort_versions(versions: &mut [MediaVersion]) {
    versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));
}
