// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Capability resolution.
//!
//! Computes what the current session may do from the identity, the
//! share's configured access level, and (for edit/delete) the locally
//! persisted guest ownership record.

use crate::models::identity::{GuestProfile, Identity, ShareAccess};

/// The capability set for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_comment: bool,
    pub can_approve: bool,
    pub can_share: bool,
    pub can_download: bool,
}

/// Resolve session-wide capabilities.
pub fn resolve(identity: &Identity) -> Capabilities {
    match identity {
        Identity::User { .. } => Capabilities {
            can_comment: true,
            can_approve: true,
            can_share: true,
            can_download: true,
        },
        Identity::Guest { access, .. } => Capabilities {
            can_comment: *access == ShareAccess::Comment,
            can_approve: false,
            can_share: false,
            can_download: false,
        },
    }
}

/// Whether the session may edit or delete the given comment.
///
/// Authenticated users may modify any comment; guests only the comments
/// recorded in their ownership profile.
pub fn can_modify(identity: &Identity, guest: &GuestProfile, comment_id: i64) -> bool {
    match identity {
        Identity::User { .. } => true,
        Identity::Guest { .. } => guest.owns(comment_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Identity {
        Identity::User {
            username: "alice".to_string(),
            token: "tok".to_string(),
        }
    }

    fn guest(access: ShareAccess) -> Identity {
        Identity::Guest {
            share_token: "share-abc".to_string(),
            share_password: None,
            access,
        }
    }

    #[test]
    fn test_authenticated_has_full_capabilities() {
        let caps = resolve(&user());
        assert!(caps.can_comment && caps.can_approve && caps.can_share && caps.can_download);
    }

    #[test]
    fn test_view_guest_cannot_comment() {
        let caps = resolve(&guest(ShareAccess::View));
        assert!(!caps.can_comment);
        assert!(!caps.can_approve);
    }

    #[test]
    fn test_comment_guest_can_comment_only() {
        let caps = resolve(&guest(ShareAccess::Comment));
        assert!(caps.can_comment);
        assert!(!caps.can_approve && !caps.can_share && !caps.can_download);
    }

    #[test]
    fn test_guest_modifies_only_owned_comments() {
        let mut profile = GuestProfile::default();
        profile.claim(7);
        let identity = guest(ShareAccess::Comment);
        assert!(can_modify(&identity, &profile, 7));
        assert!(!can_modify(&identity, &profile, 8));
    }

    #[test]
    fn test_authenticated_modifies_any_comment() {
        let profile = GuestProfile::default();
        assert!(can_modify(&user(), &profile, 1234));
    }
}
