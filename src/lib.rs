#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod interceptor;
mod profile;
pub mod provider;
pub mod session;
pub mod store;
pub mod token;
pub mod user;

#[cfg(test)]
pub(crate) mod stubs;

// Re-exports for convenient access
pub use config::{SessionConfig, TokenStorage};
pub use error::{BoxError, Error};
pub use interceptor::{AuthInterceptor, Intercepted};
pub use provider::{
    AcquireTokenOptions, ProviderClient, SignInTransaction, SignOutOptions, TokenManager,
    TRANSACTION_SUCCESS,
};
pub use session::SessionManager;
pub use store::{Navigator, NoUserStore, UserStore};
pub use token::{
    AccessToken, AccessTokenInfo, IdToken, IdTokenClaims, TokenBundle, ACCESS_TOKEN_KEY,
};
pub use user::{Credentials, IdentityProvider, Profile, UserId, UserProfile, UserType};
