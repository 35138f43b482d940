/// Boxed error type used by the injected capability traits.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Sign-in transaction resolved with a status this adapter cannot handle.
    /// Carries the literal status string returned by the provider.
    #[error("We cannot handle the {0} status")]
    Authentication(String),

    /// Failure from the injected provider client, propagated unchanged.
    #[error("provider error: {0}")]
    Provider(#[source] BoxError),

    /// Transport failure while talking to the provider's HTTP surface.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the provider's user API.
    #[error("{operation} failed: HTTP {status}: {detail}")]
    Api {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
