//! Session orchestration: silent bootstrap, credential login, logout and
//! authentication state.

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::error::Error;
use crate::profile;
use crate::provider::{
    AcquireTokenOptions, ProviderClient, SignOutOptions, TokenManager, TRANSACTION_SUCCESS,
};
use crate::store::{Navigator, NoUserStore, UserStore};
use crate::token::{AccessTokenInfo, TokenBundle, ACCESS_TOKEN_KEY};
use crate::user::UserProfile;

/// Session orchestrator.
///
/// Owns no mutable state: sessions and tokens live in the provider client,
/// the current user lives in the optional [`UserStore`]. Every operation is
/// an independent single-result future; any number may be in flight
/// concurrently over the same manager. Cloning is cheap and shares the
/// underlying capabilities.
pub struct SessionManager<P, U, N> {
    pub(crate) client: Arc<P>,
    pub(crate) user_store: Option<Arc<U>>,
    pub(crate) navigator: Arc<N>,
    pub(crate) config: Arc<SessionConfig>,
    pub(crate) http: reqwest::Client,
}

// Manual Clone: avoid derive adding `P: Clone, U: Clone, N: Clone` bounds.
impl<P, U, N> Clone for SessionManager<P, U, N> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            user_store: self.user_store.clone(),
            navigator: self.navigator.clone(),
            config: self.config.clone(),
            http: self.http.clone(),
        }
    }
}

impl<P, N> SessionManager<P, NoUserStore, N>
where
    P: ProviderClient,
    N: Navigator,
{
    /// Create a session manager without a user store; user updates are no-ops
    /// until one is attached via [`with_user_store`](Self::with_user_store).
    #[must_use]
    pub fn new(config: SessionConfig, client: P, navigator: N) -> Self {
        Self {
            client: Arc::new(client),
            user_store: None,
            navigator: Arc::new(navigator),
            config: Arc::new(config),
            http: default_http_client(),
        }
    }
}

impl<P, U, N> SessionManager<P, U, N>
where
    P: ProviderClient,
    U: UserStore,
    N: Navigator,
{
    /// Attach a consumer user store.
    #[must_use]
    pub fn with_user_store<S: UserStore>(self, store: S) -> SessionManager<P, S, N> {
        SessionManager {
            client: self.client,
            user_store: Some(Arc::new(store)),
            navigator: self.navigator,
            config: self.config,
            http: self.http,
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    /// It must carry a cookie store for the credentialed profile fetch.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Bootstrap the session on application start.
    ///
    /// Resolves the existing provider session, exchanges it for local tokens,
    /// fetches the current user and pushes it to the user store. Resolves to
    /// `None` when there is no session or the exchange yields no tokens;
    /// absence is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Provider failures surface as [`Error::Provider`], profile-fetch
    /// failures as [`Error::Transport`] or [`Error::Api`]. No retries.
    pub async fn init_authorization(&self) -> Result<Option<UserProfile>, Error> {
        if !self.client.session_exists().await.map_err(Error::Provider)? {
            tracing::debug!("no provider session, skipping authorization");
            return Ok(None);
        }

        let options = AcquireTokenOptions {
            pkce: true,
            session_token: None,
        };
        let Some(bundle) = self
            .client
            .acquire_token_silently(options)
            .await
            .map_err(Error::Provider)?
        else {
            tracing::debug!("provider session exists but no tokens were granted");
            return Ok(None);
        };

        self.persist_tokens(&bundle);

        let user = self.get_user_info().await?;
        if let Some(store) = &self.user_store {
            store.set_current_user(Some(&user));
        }
        tracing::info!(user_id = %user.id, "session initialized");
        Ok(Some(user))
    }

    /// Interactive username/password sign-in followed by token exchange.
    ///
    /// # Errors
    ///
    /// [`Error::Authentication`] when the sign-in transaction resolves with a
    /// status other than `SUCCESS`; the literal status is embedded in the
    /// message and no token acquisition is attempted. Provider failures
    /// surface as [`Error::Provider`].
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenBundle, Error> {
        let transaction = self
            .client
            .sign_in_with_credentials(username, password)
            .await
            .map_err(Error::Provider)?;

        if transaction.status != TRANSACTION_SUCCESS {
            return Err(Error::Authentication(transaction.status));
        }

        // The transaction may already embed the user record; this is the one
        // path where the store is fed without a profile fetch.
        if let (Some(store), Some(user)) = (&self.user_store, transaction.user.as_ref()) {
            store.set_current_user(Some(user));
        }

        let options = AcquireTokenOptions {
            pkce: true,
            session_token: transaction.session_token,
        };
        let bundle = self
            .client
            .acquire_token_silently(options)
            .await
            .map_err(Error::Provider)?
            .ok_or_else(|| {
                Error::Provider("sign-in token acquisition returned no tokens".into())
            })?;

        self.persist_tokens(&bundle);
        tracing::info!("credential login succeeded");
        Ok(bundle)
    }

    /// Sign out from the provider and clear the current user.
    ///
    /// The post-logout redirect is the live application origin plus the
    /// configured unauthorized path, computed per call rather than from
    /// static configuration.
    pub async fn logout(&self) -> Result<(), Error> {
        let post_logout_redirect_uri = format!(
            "{}{}",
            self.navigator.current_origin(),
            self.config.unauthorized_path
        );
        self.client
            .sign_out(SignOutOptions {
                post_logout_redirect_uri,
            })
            .await
            .map_err(Error::Provider)?;

        if let Some(store) = &self.user_store {
            store.clear_current_user();
        }
        tracing::info!("signed out");
        Ok(())
    }

    /// True when a provider session exists and an access token is retrievable.
    ///
    /// A valid session without a retrievable access token reports false: the
    /// user may be signed in at the provider yet lack entitlement to this
    /// application.
    pub async fn check_authenticated(&self) -> Result<bool, Error> {
        if !self.client.session_exists().await.map_err(Error::Provider)? {
            return Ok(false);
        }
        let token = self.get_access_token_info().await?;
        Ok(token.is_some_and(|t| !t.value.is_empty()))
    }

    /// Current access token, queried fresh from the token manager on every
    /// call. Safe to invoke repeatedly and concurrently.
    pub async fn get_access_token_info(&self) -> Result<Option<AccessTokenInfo>, Error> {
        self.client
            .token_manager()
            .get(ACCESS_TOKEN_KEY)
            .await
            .map_err(Error::Provider)
    }

    /// Fetch the current user's profile from the provider's user API.
    pub async fn get_user_info(&self) -> Result<UserProfile, Error> {
        let origin = profile::provider_origin(self.config.issuer.as_ref());
        profile::fetch_user_profile(&self.http, &origin).await
    }

    /// Hand a complete token pair to the provider's token manager. A bundle
    /// missing either token value is not persisted.
    fn persist_tokens(&self, bundle: &TokenBundle) {
        if let Some((id_token, access_token)) = bundle.complete() {
            self.client
                .token_manager()
                .set_tokens(id_token.clone(), access_token.clone());
        }
    }
}

fn default_http_client() -> reqwest::Client {
    // Cookie store on: the userinfo request is credentialed, it rides on the
    // provider session cookie rather than a bearer token.
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("default client configuration is valid")
}
