//! Auth-state change notifications.
//!
//! Handlers publish an [`AuthStateChange`] after every sign-in, sign-up and
//! sign-out. Interested parties call [`AuthStateObserver::subscribe`] and
//! receive changes as they happen; a subscription ends when it is
//! unsubscribed or dropped.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use unipath_core::types::DbId;

/// Buffer capacity of the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// A change in who is signed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuthStateChange {
    SignedUp {
        user_id: DbId,
        email: String,
        at: DateTime<Utc>,
    },
    SignedIn {
        user_id: DbId,
        email: String,
        at: DateTime<Utc>,
    },
    SignedOut {
        user_id: DbId,
        at: DateTime<Utc>,
    },
}

impl AuthStateChange {
    pub fn user_id(&self) -> DbId {
        match self {
            AuthStateChange::SignedUp { user_id, .. }
            | AuthStateChange::SignedIn { user_id, .. }
            | AuthStateChange::SignedOut { user_id, .. } => *user_id,
        }
    }

    /// Short event name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            AuthStateChange::SignedUp { .. } => "signed_up",
            AuthStateChange::SignedIn { .. } => "signed_in",
            AuthStateChange::SignedOut { .. } => "signed_out",
        }
    }
}

/// Fan-out of [`AuthStateChange`]s to any number of subscribers.
///
/// Shared through `Arc<AuthStateObserver>` in the application state.
pub struct AuthStateObserver {
    sender: broadcast::Sender<AuthStateChange>,
}

impl AuthStateObserver {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Notify current subscribers. With no subscribers the change is dropped.
    pub fn publish(&self, change: AuthStateChange) {
        let _ = self.sender.send(change);
    }

    /// Start receiving changes published from now on.
    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AuthStateObserver {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// A live subscription to auth-state changes.
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthStateChange>,
}

impl AuthSubscription {
    /// Wait for the next change.
    ///
    /// Returns `None` once the observer is gone. Changes missed by a slow
    /// subscriber are skipped with a warning.
    pub async fn recv(&mut self) -> Option<AuthStateChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Auth subscription lagged, changes were skipped");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Stop receiving changes.
    pub fn unsubscribe(self) {}
}
