// Identity provider port.
//
// The sign-in flow itself lives outside this crate. The core only needs the
// current user and a way to follow sign-in/sign-out transitions.

use crate::shared::core::primitives::UserContext;
use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(UserContext),
    SignedOut,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_user(&self) -> Option<UserContext>;
    fn subscribe(&self) -> AuthSubscription;
}

/// Cancellation handle for an auth event subscription.
/// Dropping it unsubscribes as well.
pub struct AuthSubscription {
    receiver: broadcast::Receiver<AuthEvent>,
}

impl AuthSubscription {
    pub fn new(receiver: broadcast::Receiver<AuthEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next transition. `None` once the provider is gone.
    /// A subscriber that fell behind skips to the oldest retained event.
    pub async fn next(&mut self) -> Option<AuthEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "auth subscription lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {}
}

pub mod in_memory;
