// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Guest profile persistence.
//!
//! The visitor display name and the set of comment ids this browser
//! (well, this machine) authored are kept in a JSON file under the user
//! config directory, scoped per machine rather than per share. Nothing
//! here is ever sent to the server.

use crate::models::identity::GuestProfile;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Location of the persisted guest profile.
pub fn profile_path() -> Result<PathBuf> {
    let base = dirs_next::config_dir().context("No user config directory available")?;
    Ok(base.join("revu").join("guest_profile.json"))
}

/// Load the guest profile, falling back to an empty one when the file
/// does not exist yet.
pub fn load_profile() -> Result<GuestProfile> {
    let path = profile_path()?;
    if !path.exists() {
        return Ok(GuestProfile::default());
    }
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let profile = serde_json::from_str(&json)
        .with_context(|| format!("Malformed guest profile at {}", path.display()))?;
    Ok(profile)
}

/// Persist the guest profile, creating the config directory on first use.
pub fn save_profile(profile: &GuestProfile) -> Result<()> {
    let path = profile_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_roundtrips_through_json() {
        let mut profile = GuestProfile {
            display_name: "Sam".to_string(),
            ..Default::default()
        };
        profile.claim(3);
        profile.claim(17);

        let json = serde_json::to_string(&profile).unwrap();
        let restored: GuestProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, restored);
        assert!(restored.owns(17));
    }
}
