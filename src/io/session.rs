// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Review session files.
//!
//! A session file tells the app which backend to talk to, who the user
//! is (bearer token or share link), and which versions of the video
//! exist. Version records are created server-side; the engine only reads
//! and switches between them.

use crate::models::identity::{Identity, ShareAccess};
use crate::models::version::MediaVersion;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk session description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub api_base_url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub share_token: Option<String>,
    #[serde(default)]
    pub share_password: Option<String>,
    #[serde(default)]
    pub share_access: Option<ShareAccess>,
    pub versions: Vec<MediaVersion>,
}

impl Session {
    /// Build the identity this session runs as. A bearer token wins over
    /// share credentials when both are present.
    pub fn identity(&self) -> Result<Identity> {
        if let (Some(username), Some(token)) = (&self.username, &self.token) {
            return Ok(Identity::User {
                username: username.clone(),
                token: token.clone(),
            });
        }
        if let Some(share_token) = &self.share_token {
            return Ok(Identity::Guest {
                share_token: share_token.clone(),
                share_password: self.share_password.clone(),
                access: self.share_access.unwrap_or(ShareAccess::View),
            });
        }
        bail!("Session file carries neither a token nor a share link");
    }
}

/// Load a session description from a JSON file.
pub fn load_session(path: &Path) -> Result<Session> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;
    let session: Session = serde_json::from_str(&json)
        .with_context(|| format!("Malformed session file {}", path.display()))?;
    if session.versions.is_empty() {
        bail!("Session file lists no video versions");
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_session() -> Session {
        Session {
            api_base_url: "http://localhost:8080".to_string(),
            username: None,
            token: None,
            share_token: None,
            share_password: None,
            share_access: None,
            versions: Vec::new(),
        }
    }

    #[test]
    fn test_identity_prefers_bearer_token() {
        let mut session = base_session();
        session.username = Some("alice".to_string());
        session.token = Some("tok".to_string());
        session.share_token = Some("share".to_string());
        assert!(session.identity().unwrap().is_authenticated());
    }

    #[test]
    fn test_share_session_defaults_to_view_access() {
        let mut session = base_session();
        session.share_token = Some("share".to_string());
        match session.identity().unwrap() {
            Identity::Guest { access, .. } => assert_eq!(access, ShareAccess::View),
            other => panic!("expected guest identity, got {:?}", other),
        }
    }

    #[test]
    fn test_session_without_credentials_is_rejected() {
        assert!(base_session().identity().is_err());
    }
}
