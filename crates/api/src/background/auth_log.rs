//! Structured log of auth-state changes.
//!
//! Subscribes to the [`AuthStateObserver`](crate::auth::observer::AuthStateObserver)
//! and writes one log line per change. Runs until the observer is dropped.

use crate::auth::observer::AuthSubscription;

/// Run the auth log loop.
pub async fn run(mut subscription: AuthSubscription) {
    tracing::info!("Auth log started");

    while let Some(change) = subscription.recv().await {
        tracing::info!(
            event = change.name(),
            user_id = change.user_id(),
            "Auth state changed",
        );
    }

    tracing::info!("Auth observer closed, auth log stopping");
}
