// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Identity and share access data structures.
//!
//! A session is either an authenticated user with a bearer token or a
//! guest reaching the video through a share link. Guests carry a locally
//! persisted profile holding their display name and the ids of comments
//! they authored, which stands in for ownership without a server session.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a share link lets guests do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareAccess {
    /// Guests can watch but not comment.
    View,
    /// Guests can watch and comment.
    Comment,
}

/// Who is using the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// A signed-in user.
    User { username: String, token: String },
    /// An unauthenticated visitor on a share link.
    Guest {
        share_token: String,
        share_password: Option<String>,
        access: ShareAccess,
    },
}

impl Identity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::User { .. })
    }
}

/// Locally persisted guest state: display name plus the ids of comments
/// this visitor created. Never transmitted to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestProfile {
    pub display_name: String,
    pub owned_comment_ids: HashSet<i64>,
}

impl GuestProfile {
    /// Record ownership of a freshly created comment or reply.
    pub fn claim(&mut self, comment_id: i64) {
        self.owned_comment_ids.insert(comment_id);
    }

    /// Drop ownership after a successful delete.
    pub fn release(&mut self, comment_id: i64) {
        self.owned_comment_ids.remove(&comment_id);
    }

    pub fn owns(&self, comment_id: i64) -> bool {
        self.owned_comment_ids.contains(&comment_id)
    }
}
