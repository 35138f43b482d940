use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// Token persistence mode requested from the provider's token manager.
///
/// The adapter never touches storage itself; the mode is handed to the
/// provider client at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenStorage {
    #[default]
    LocalStorage,
    SessionStorage,
    Cookie,
    Memory,
}

impl TokenStorage {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalStorage => "localStorage",
            Self::SessionStorage => "sessionStorage",
            Self::Cookie => "cookie",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for TokenStorage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "localStorage" => Ok(Self::LocalStorage),
            "sessionStorage" => Ok(Self::SessionStorage),
            "cookie" => Ok(Self::Cookie),
            "memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!("unknown token storage mode: {other}"))),
        }
    }
}

/// Okta session configuration.
///
/// Required fields are constructor parameters, so there are no runtime
/// "missing field" errors. Supplied once and immutable for the lifetime of
/// the session manager.
///
/// ```rust,ignore
/// use okta_session::SessionConfig;
///
/// let config = SessionConfig::new("my-client-id", "/auth/callback")
///     .with_issuer("https://example.oktapreview.com/oauth2/default".parse()?)
///     .with_unauthorized_path("/login");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SessionConfig {
    pub(crate) issuer: Option<Url>,
    pub(crate) client_id: String,
    pub(crate) redirect_uri: String,
    pub(crate) token_storage: TokenStorage,
    pub(crate) unauthorized_path: String,
}

impl SessionConfig {
    /// Create a new session configuration.
    #[must_use]
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            issuer: None,
            token_storage: TokenStorage::default(),
            unauthorized_path: "/login".into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Required env vars
    /// - `OKTA_CLIENT_ID`: OAuth2 client ID
    /// - `OKTA_REDIRECT_URI`: OAuth2 callback URI
    ///
    /// # Optional env vars
    /// - `OKTA_ISSUER`: issuer URL (must parse as a valid URL)
    /// - `OKTA_TOKEN_STORAGE`: `localStorage`, `sessionStorage`, `cookie` or `memory`
    /// - `OKTA_UNAUTHORIZED_PATH`: application path for unauthenticated redirects
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if required env vars are missing or values
    /// do not parse.
    pub fn from_env() -> Result<Self, Error> {
        let client_id = std::env::var("OKTA_CLIENT_ID")
            .map_err(|_| Error::Config("OKTA_CLIENT_ID is required".into()))?;
        let redirect_uri = std::env::var("OKTA_REDIRECT_URI")
            .map_err(|_| Error::Config("OKTA_REDIRECT_URI is required".into()))?;

        let mut config = Self::new(client_id, redirect_uri);

        if let Ok(issuer) = std::env::var("OKTA_ISSUER") {
            let url: Url = issuer
                .parse()
                .map_err(|e| Error::Config(format!("OKTA_ISSUER: {e}")))?;
            config = config.with_issuer(url);
        }
        if let Ok(mode) = std::env::var("OKTA_TOKEN_STORAGE") {
            config = config.with_token_storage(mode.parse()?);
        }
        if let Ok(path) = std::env::var("OKTA_UNAUTHORIZED_PATH") {
            config = config.with_unauthorized_path(path);
        }

        Ok(config)
    }

    /// Set the issuer URL. Without one, profile fetches degrade to relative URLs.
    #[must_use]
    pub fn with_issuer(mut self, issuer: Url) -> Self {
        self.issuer = Some(issuer);
        self
    }

    /// Override the token storage mode (default: `localStorage`).
    #[must_use]
    pub fn with_token_storage(mut self, storage: TokenStorage) -> Self {
        self.token_storage = storage;
        self
    }

    /// Override the application path unauthenticated callers are redirected
    /// to (default: `/login`). Also the post-logout redirect path.
    #[must_use]
    pub fn with_unauthorized_path(mut self, path: impl Into<String>) -> Self {
        self.unauthorized_path = path.into();
        self
    }

    /// Issuer URL, when configured.
    #[must_use]
    pub fn issuer(&self) -> Option<&Url> {
        self.issuer.as_ref()
    }

    /// OAuth2 client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth2 redirect URI.
    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Token storage mode.
    #[must_use]
    pub fn token_storage(&self) -> TokenStorage {
        self.token_storage
    }

    /// Application path for unauthenticated redirects.
    #[must_use]
    pub fn unauthorized_path(&self) -> &str {
        &self.unauthorized_path
    }
}
