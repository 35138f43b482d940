//! Capability surface of the identity-provider SDK.
//!
//! The adapter only sequences calls against these traits and interprets the
//! results. Session protocol, token storage and token refresh all live behind
//! the implementation.

use std::future::Future;

use crate::error::BoxError;
use crate::token::{AccessToken, AccessTokenInfo, IdToken, TokenBundle};
use crate::user::UserProfile;

/// The one sign-in transaction status this adapter can complete.
pub const TRANSACTION_SUCCESS: &str = "SUCCESS";

/// Options for silent token acquisition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquireTokenOptions {
    pub pkce: bool,
    /// One-time session token from a credential sign-in transaction.
    pub session_token: Option<String>,
}

/// Options for provider sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOutOptions {
    pub post_logout_redirect_uri: String,
}

/// Result of a credential sign-in.
///
/// Some provider responses embed the signed-in user; when present, the
/// session manager forwards it to the user store without a profile fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInTransaction {
    pub status: String,
    pub session_token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Token persistence owned by the provider SDK.
pub trait TokenManager: Send + Sync {
    /// Look up a stored token by key (see [`crate::token::ACCESS_TOKEN_KEY`]).
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<AccessTokenInfo>, BoxError>> + Send;

    /// Persist an identity/access token pair.
    fn set_tokens(&self, id_token: IdToken, access_token: AccessToken);
}

/// Client facade of the identity-provider SDK.
///
/// # Example
///
/// ```rust,ignore
/// impl ProviderClient for OktaSdkBinding {
///     type Tokens = OktaTokenManager;
///
///     async fn session_exists(&self) -> Result<bool, BoxError> {
///         Ok(self.sdk.session().exists().await?)
///     }
///     // ...
/// }
/// ```
pub trait ProviderClient: Send + Sync + 'static {
    type Tokens: TokenManager;

    /// Whether a valid provider session currently exists.
    fn session_exists(&self) -> impl Future<Output = Result<bool, BoxError>> + Send;

    /// Exchange the current session (or a transaction session token) for
    /// local tokens without user interaction. Absence of tokens is a valid
    /// outcome, not an error.
    fn acquire_token_silently(
        &self,
        options: AcquireTokenOptions,
    ) -> impl Future<Output = Result<Option<TokenBundle>, BoxError>> + Send;

    /// Interactive username/password sign-in.
    fn sign_in_with_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<SignInTransaction, BoxError>> + Send;

    /// End the provider session, redirecting to the given URI afterwards.
    fn sign_out(
        &self,
        options: SignOutOptions,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;

    /// The SDK's token manager.
    fn token_manager(&self) -> &Self::Tokens;
}
