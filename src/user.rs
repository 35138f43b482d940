use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Okta user identifier (opaque string assigned by the provider).
///
/// Immutable, unique per account. Consumers store this as the sole link to
/// provider identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Current-user record returned by the provider's `/api/v1/users/me` endpoint.
///
/// Immutable once fetched. Owned by the caller that requested it and, when a
/// user store is configured, mirrored there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub activated: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub status_changed: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_login: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub password_changed: OffsetDateTime,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub profile: Profile,
    pub credentials: Credentials,
}

/// Reference to the provider-side user type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserType {
    pub id: String,
}

/// Profile attributes of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_email: Option<String>,
    pub login: String,
    pub email: String,
}

/// Credential block of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Placeholder value; the provider never returns the actual password.
    pub password: serde_json::Value,
    pub provider: IdentityProvider,
}

/// Identity-provider reference inside the credential block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProvider {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}
