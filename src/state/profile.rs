#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use uuid::Uuid;

use crate::net::types::{Profile, ProfileUpdate};
use crate::state::register::FormError;

/// Result of the profile fetch, distinguishing "still loading" from
/// "loaded, no row yet" from "loaded".
///
/// The profile row is created by a backend trigger when the identity is
/// created, so a freshly confirmed account can legitimately have no row
/// for a while. That state gets the reduced initial-setup form, not an
/// error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileSlot {
    resolved: bool,
    profile: Option<Profile>,
}

impl ProfileSlot {
    pub fn resolve(&mut self, profile: Option<Profile>) {
        self.profile = profile;
        self.resolved = true;
    }

    pub fn phase(&self) -> ProfilePhase {
        if !self.resolved {
            ProfilePhase::Loading
        } else if self.profile.is_some() {
            ProfilePhase::Present
        } else {
            ProfilePhase::Missing
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Fold a successful upsert back into the slot without a refetch.
    /// The role is whatever the backend already assigned; the app never
    /// writes it.
    pub fn merge_update(&mut self, update: &ProfileUpdate) {
        let role = self.profile.as_ref().map(|p| p.role).unwrap_or_default();
        self.profile = Some(Profile {
            id: update.id,
            username: update.username.clone(),
            full_name: update.full_name.clone(),
            website: update.website.clone(),
            role,
            updated_at: update.updated_at.clone(),
        });
        self.resolved = true;
    }
}

/// Which form the profile screen renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfilePhase {
    Loading,
    Missing,
    Present,
}

/// Minimum username length, mirroring the backend's check constraint.
const USERNAME_MIN: usize = 3;

/// Editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub full_name: String,
    pub website: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone().unwrap_or_default(),
            full_name: profile.full_name.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
        }
    }

    /// Local validation mirroring the backend's `username_length`
    /// constraint, so the common failure is caught before the call.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.trim().chars().count() < USERNAME_MIN {
            return Err(FormError::UsernameTooShort);
        }
        Ok(())
    }

    /// Build the upsert row for the owning identity. The id must be the
    /// caller's own: the backend's row-level policy rejects anything
    /// else. An empty website is sent as null, not an empty string.
    pub fn into_update(self, identity_id: Uuid, updated_at: Option<String>) -> ProfileUpdate {
        let website = self.website.trim();
        ProfileUpdate {
            id: identity_id,
            username: Some(self.username.trim().to_owned()),
            full_name: Some(self.full_name.trim().to_owned()),
            website: if website.is_empty() { None } else { Some(website.to_owned()) },
            updated_at,
        }
    }
}
