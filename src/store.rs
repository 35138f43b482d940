//! Consumer-implemented capabilities: user store and navigation.

use crate::user::UserProfile;

/// Consumer-side sink for current-user changes.
///
/// Optional collaborator. When the consumer does not supply one, every
/// update site degrades to a no-op; the session flows are unaffected.
pub trait UserStore: Send + Sync + 'static {
    /// Replace the current user.
    fn set_current_user(&self, user: Option<&UserProfile>);

    /// Drop the current user. Called after logout.
    fn clear_current_user(&self);
}

/// Placeholder store for consumers that do not track the current user.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUserStore;

impl UserStore for NoUserStore {
    fn set_current_user(&self, _user: Option<&UserProfile>) {}

    fn clear_current_user(&self) {}
}

/// Host-application navigation surface.
///
/// `current_origin` is consulted at call time, never cached: in multi-origin
/// deployments the post-logout redirect must be computed against the address
/// the application is actually served from.
pub trait Navigator: Send + Sync + 'static {
    /// Origin (scheme + host + port) the application is currently served from.
    fn current_origin(&self) -> String;

    /// Redirect the user to an application path.
    fn navigate(&self, path: &str);
}
