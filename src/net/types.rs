#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform role carried on every profile row.
///
/// The backend stores these in a `user_role` enum with PascalCase labels;
/// serde names must match exactly or profile decoding fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Client,
    Doctor,
    Pharmacy,
    Hospital,
    Admin,
}

impl Role {
    /// The backend's enum label for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Doctor => "Doctor",
            Role::Pharmacy => "Pharmacy",
            Role::Hospital => "Hospital",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Client" => Ok(Role::Client),
            "Doctor" => Ok(Role::Doctor),
            "Pharmacy" => Ok(Role::Pharmacy),
            "Hospital" => Ok(Role::Hospital),
            "Admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// A role label the client does not know about.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// The identity service's canonical user record. Read-only from the app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Opaque token bundle proving an authenticated identity.
///
/// Issued and replaced wholesale by the identity service; the app never
/// mutates individual fields, only swaps the whole bundle or drops it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: Identity,
}

/// Response body of the sign-in and sign-up endpoints.
///
/// Sign-up may return a user with no session: the account exists but
/// email confirmation is still pending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub session: Option<Session>,
}

impl AuthPayload {
    /// True when the account was created but cannot sign in yet.
    pub fn confirmation_pending(&self) -> bool {
        self.user.is_some() && self.session.is_none()
    }

    /// Normalize an auth endpoint response.
    ///
    /// The token endpoint answers with the session fields at the top
    /// level; sign-up answers with either that shape or a bare user
    /// record when email confirmation is pending.
    pub fn from_response(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.get("access_token").is_some() {
            let session: Session = serde_json::from_value(value)?;
            Ok(Self { user: Some(session.user.clone()), session: Some(session) })
        } else if value.get("user").is_some() {
            serde_json::from_value(value)
        } else if value.get("id").is_some() {
            let user: Identity = serde_json::from_value(value)?;
            Ok(Self { user: Some(user), session: None })
        } else {
            Ok(Self::default())
        }
    }
}

/// Application-owned profile row, keyed 1:1 by identity id.
///
/// Created by a backend trigger when the identity is created, so it may
/// not exist yet the first time the app reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Upsert row the app writes to the profiles table.
///
/// Role is deliberately absent: assignment and changes are owned by the
/// backend (sign-up trigger, admin verification), never by this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub website: Option<String>,
    pub updated_at: Option<String>,
}

/// Error envelope returned by the backend services.
///
/// The auth service and the data service disagree on the field name, so
/// message extraction tries each known spelling in order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message in the envelope, if any.
    pub fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }

    /// Extract a message from a raw response body, falling back to the
    /// HTTP status when the body is not a recognizable envelope.
    pub fn extract(body: &str, status: u16) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("request failed with status {status}"))
    }
}
