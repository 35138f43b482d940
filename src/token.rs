use serde::{Deserialize, Serialize};

/// Key under which the provider's token manager stores the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Identity token from a token exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdToken {
    pub value: String,
    pub scopes: Vec<String>,
    /// Expiry as epoch seconds.
    pub expires_at: i64,
    pub authorize_url: String,
    pub issuer: String,
    pub client_id: String,
    pub claims: IdTokenClaims,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub sub: String,
}

/// Access token from a token exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub value: String,
    pub scopes: Vec<String>,
    /// Expiry as epoch seconds.
    pub expires_at: i64,
    pub authorize_url: String,
    pub token_type: String,
    pub userinfo_url: String,
}

/// Result of a token exchange.
///
/// Either half may be missing when the provider grants a partial response;
/// such bundles are never handed to the token manager.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenBundle {
    pub id_token: Option<IdToken>,
    pub access_token: Option<AccessToken>,
}

impl TokenBundle {
    /// Both halves with non-empty values, or nothing.
    ///
    /// Persistence gate: profile and token state must not diverge, so a
    /// bundle missing either token value is treated as incomplete.
    #[must_use]
    pub fn complete(&self) -> Option<(&IdToken, &AccessToken)> {
        let id_token = self.id_token.as_ref().filter(|t| !t.value.is_empty())?;
        let access_token = self.access_token.as_ref().filter(|t| !t.value.is_empty())?;
        Some((id_token, access_token))
    }
}

/// Access-token lookup result from the provider's token manager.
///
/// Queried fresh on every authorization decision, never cached by the
/// session manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenInfo {
    pub value: String,
    pub scopes: Vec<String>,
    /// Expiry as epoch seconds.
    pub expires_at: i64,
}
