//! Shared stub collaborators and fixture values for the test suites.

use std::sync::Mutex;

use time::OffsetDateTime;

use crate::error::BoxError;
use crate::provider::{
    AcquireTokenOptions, ProviderClient, SignInTransaction, SignOutOptions, TokenManager,
};
use crate::store::{Navigator, UserStore};
use crate::token::{AccessToken, AccessTokenInfo, IdToken, IdTokenClaims, TokenBundle};
use crate::user::{Credentials, IdentityProvider, Profile, UserProfile, UserType};

pub(crate) fn id_token_stub() -> IdToken {
    IdToken {
        value: "11111111".into(),
        scopes: vec!["scope1".into()],
        expires_at: 321_312_312_321,
        authorize_url: "authorizeUrl".into(),
        issuer: "issuer".into(),
        client_id: "clientId".into(),
        claims: IdTokenClaims { sub: String::new() },
    }
}

pub(crate) fn access_token_stub() -> AccessToken {
    AccessToken {
        value: "1231231adfasf2e".into(),
        scopes: vec!["scope1".into()],
        expires_at: 321_312_312_321,
        authorize_url: "authorizeUrl".into(),
        token_type: "Bearer".into(),
        userinfo_url: "userinfourl".into(),
    }
}

pub(crate) fn token_bundle_stub() -> TokenBundle {
    TokenBundle {
        id_token: Some(id_token_stub()),
        access_token: Some(access_token_stub()),
    }
}

pub(crate) fn access_token_info_stub() -> AccessTokenInfo {
    AccessTokenInfo {
        value: "1231231adfasf2e".into(),
        scopes: vec!["scope1".into()],
        expires_at: 321_312_312_321,
    }
}

pub(crate) fn user_stub() -> UserProfile {
    let ts = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
    UserProfile {
        id: "okta-user-info-id".to_string().into(),
        status: "ACTIVE".into(),
        created: ts,
        activated: ts,
        status_changed: ts,
        last_login: ts,
        last_updated: ts,
        password_changed: ts,
        user_type: UserType { id: "typeId".into() },
        profile: Profile {
            first_name: "John".into(),
            last_name: "Doe".into(),
            mobile_phone: None,
            second_email: None,
            login: "JohnDoe".into(),
            email: "JohnDoe@example.com".into(),
        },
        credentials: Credentials {
            password: serde_json::json!({}),
            provider: IdentityProvider {
                kind: "OKTA".into(),
                name: "OKTA".into(),
            },
        },
    }
}

/// Token manager stub recording every call.
#[derive(Default)]
pub(crate) struct StubTokenManager {
    pub(crate) stored: Mutex<Option<AccessTokenInfo>>,
    pub(crate) get_calls: Mutex<u32>,
    pub(crate) set_calls: Mutex<Vec<(IdToken, AccessToken)>>,
}

impl TokenManager for StubTokenManager {
    async fn get(&self, _key: &str) -> Result<Option<AccessTokenInfo>, BoxError> {
        *self.get_calls.lock().unwrap() += 1;
        Ok(self.stored.lock().unwrap().clone())
    }

    fn set_tokens(&self, id_token: IdToken, access_token: AccessToken) {
        self.set_calls.lock().unwrap().push((id_token, access_token));
    }
}

/// Provider client stub with scripted responses and recorded calls.
#[derive(Default)]
pub(crate) struct StubProvider {
    pub(crate) session: bool,
    pub(crate) bundle: Option<TokenBundle>,
    pub(crate) transaction: Option<SignInTransaction>,
    pub(crate) tokens: StubTokenManager,
    pub(crate) acquire_calls: Mutex<Vec<AcquireTokenOptions>>,
    pub(crate) sign_out_calls: Mutex<Vec<SignOutOptions>>,
}

impl ProviderClient for StubProvider {
    type Tokens = StubTokenManager;

    async fn session_exists(&self) -> Result<bool, BoxError> {
        Ok(self.session)
    }

    async fn acquire_token_silently(
        &self,
        options: AcquireTokenOptions,
    ) -> Result<Option<TokenBundle>, BoxError> {
        self.acquire_calls.lock().unwrap().push(options);
        Ok(self.bundle.clone())
    }

    async fn sign_in_with_credentials(
        &self,
        _username: &str,
        _password: &str,
    ) -> Result<SignInTransaction, BoxError> {
        Ok(self
            .transaction
            .clone()
            .expect("stub transaction not configured"))
    }

    async fn sign_out(&self, options: SignOutOptions) -> Result<(), BoxError> {
        self.sign_out_calls.lock().unwrap().push(options);
        Ok(())
    }

    fn token_manager(&self) -> &StubTokenManager {
        &self.tokens
    }
}

/// User store stub recording updates.
#[derive(Default)]
pub(crate) struct StubUserStore {
    pub(crate) set_calls: Mutex<Vec<Option<UserProfile>>>,
    pub(crate) clear_calls: Mutex<u32>,
}

impl UserStore for StubUserStore {
    fn set_current_user(&self, user: Option<&UserProfile>) {
        self.set_calls.lock().unwrap().push(user.cloned());
    }

    fn clear_current_user(&self) {
        *self.clear_calls.lock().unwrap() += 1;
    }
}

/// Navigator stub with a mutable origin and recorded redirects.
pub(crate) struct StubNavigator {
    pub(crate) origin: Mutex<String>,
    pub(crate) navigations: Mutex<Vec<String>>,
}

impl StubNavigator {
    pub(crate) fn at(origin: &str) -> Self {
        Self {
            origin: Mutex::new(origin.into()),
            navigations: Mutex::new(Vec::new()),
        }
    }
}

impl Navigator for StubNavigator {
    fn current_origin(&self) -> String {
        self.origin.lock().unwrap().clone()
    }

    fn navigate(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.into());
    }
}
