//! AccessTokenProvider port - the signed-in coach's credentials.

use async_trait::async_trait;

/// Supplies bearer tokens for backend requests.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, or `None` when signed out.
    async fn access_token(&self) -> Option<String>;

    /// Discards the current session after the backend rejected its token.
    async fn invalidate(&self);
}
