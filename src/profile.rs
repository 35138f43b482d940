use url::Url;

use crate::error::Error;
use crate::user::UserProfile;

/// Path of the provider's current-user endpoint, relative to the issuer origin.
const USERS_ME_PATH: &str = "/api/v1/users/me";

/// Origin component (scheme + host + port) of the configured issuer.
///
/// Without an issuer this is the empty string and the fetch degrades to a
/// relative URL; that is caller misconfiguration and is not validated here.
pub(crate) fn provider_origin(issuer: Option<&Url>) -> String {
    match issuer {
        Some(url) => url.origin().ascii_serialization(),
        None => String::new(),
    }
}

/// Fetch the current user's profile with a credentialed GET.
///
/// The request rides on the provider session cookie, not on a bearer token,
/// so `http` must carry a cookie store.
pub(crate) async fn fetch_user_profile(
    http: &reqwest::Client,
    origin: &str,
) -> Result<UserProfile, Error> {
    let response = http.get(format!("{origin}{USERS_ME_PATH}")).send().await?;
    let response = ensure_success(response, "userinfo request").await?;
    response.json::<UserProfile>().await.map_err(Into::into)
}

/// Checks HTTP response status; returns the response on success or an error
/// with details.
async fn ensure_success(
    response: reqwest::Response,
    operation: &'static str,
) -> Result<reqwest::Response, Error> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let detail = response.text().await.unwrap_or_default();
    Err(Error::Api {
        operation,
        status,
        detail,
    })
}
