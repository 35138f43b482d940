//! Outgoing-request authorization.

use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::error::Error;
use crate::provider::ProviderClient;
use crate::session::SessionManager;
use crate::store::{Navigator, UserStore};

/// Outcome of the authorization decision for one outgoing request.
#[derive(Debug)]
pub enum Intercepted {
    /// Request forwarded with a bearer credential attached.
    Forwarded(reqwest::Response),
    /// No access token: the caller was redirected and the request suppressed.
    Redirected,
}

/// Guards protected outgoing requests.
///
/// Each request triggers an independent access-token lookup. With a token
/// the request is forwarded carrying `Authorization: Bearer <value>`;
/// without one it never reaches the transport and the caller is redirected
/// to the configured unauthorized path.
///
/// # Example
///
/// ```rust,ignore
/// let interceptor = AuthInterceptor::new(session.clone());
/// match interceptor.intercept(request).await? {
///     Intercepted::Forwarded(response) => handle(response),
///     Intercepted::Redirected => {} // caller is on the login page now
/// }
/// ```
pub struct AuthInterceptor<P, U, N> {
    session: SessionManager<P, U, N>,
    http: reqwest::Client,
}

impl<P, U, N> AuthInterceptor<P, U, N>
where
    P: ProviderClient,
    U: UserStore,
    N: Navigator,
{
    #[must_use]
    pub fn new(session: SessionManager<P, U, N>) -> Self {
        let http = session.http.clone();
        Self { session, http }
    }

    /// Use a custom HTTP client for forwarded requests.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Authorize and forward one request.
    ///
    /// The decision completes fully before any effect of the request is
    /// observed: either the redirect fires and the request is dropped, or
    /// the bearer header is attached and the request goes out. Never both,
    /// never a partial forward.
    ///
    /// # Errors
    ///
    /// Token-lookup failures surface as [`Error::Provider`], forwarding
    /// failures as [`Error::Transport`].
    pub async fn intercept(&self, mut request: reqwest::Request) -> Result<Intercepted, Error> {
        match self.session.get_access_token_info().await? {
            None => {
                let path = self.session.config.unauthorized_path.as_str();
                tracing::debug!(path, "no access token, redirecting");
                self.session.navigator.navigate(path);
                Ok(Intercepted::Redirected)
            }
            Some(token) => {
                let bearer = HeaderValue::try_from(format!("Bearer {}", token.value))
                    .map_err(|e| Error::Provider(Box::new(e)))?;
                request.headers_mut().insert(AUTHORIZATION, bearer);
                let response = self.http.execute(request).await?;
                Ok(Intercepted::Forwarded(response))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::SessionConfig;
    use crate::stubs::{access_token_info_stub, StubNavigator, StubProvider, StubTokenManager};

    fn session_with(
        provider: StubProvider,
    ) -> SessionManager<StubProvider, crate::store::NoUserStore, StubNavigator> {
        let config = SessionConfig::new("client-id", "/auth/callback")
            .with_unauthorized_path("/login");
        SessionManager::new(config, provider, StubNavigator::at("https://app.example.com"))
    }

    #[tokio::test]
    async fn forwards_with_a_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protected"))
            .and(header("authorization", "Bearer 1231231adfasf2e"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let provider = StubProvider {
            tokens: StubTokenManager {
                stored: Mutex::new(Some(access_token_info_stub())),
                ..Default::default()
            },
            ..Default::default()
        };
        let session = session_with(provider);
        let interceptor = AuthInterceptor::new(session.clone());

        let request = reqwest::Client::new()
            .get(format!("{}/protected", server.uri()))
            .build()
            .unwrap();
        let outcome = interceptor.intercept(request).await.unwrap();

        match outcome {
            Intercepted::Forwarded(response) => assert_eq!(response.status(), 200),
            Intercepted::Redirected => panic!("expected the request to be forwarded"),
        }
        assert!(session.navigator.navigations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn redirects_and_suppresses_without_a_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/protected"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = session_with(StubProvider::default());
        let interceptor = AuthInterceptor::new(session.clone());

        let request = reqwest::Client::new()
            .get(format!("{}/protected", server.uri()))
            .build()
            .unwrap();
        let outcome = interceptor.intercept(request).await.unwrap();

        assert!(matches!(outcome, Intercepted::Redirected));
        assert_eq!(
            session.navigator.navigations.lock().unwrap().as_slice(),
            &["/login".to_string()]
        );
    }
}
