use crate::shared::core::primitives::UserContext;
use crate::shared::infrastructure::identity::{AuthEvent, AuthSubscription, IdentityProvider};
use tokio::sync::{RwLock, broadcast};

const EVENT_CAPACITY: usize = 16;

/// Identity provider driven directly by the caller, standing in for the
/// external sign-in flow in tests and local runs.
pub struct InMemoryIdentity {
    current: RwLock<Option<UserContext>>,
    events: broadcast::Sender<AuthEvent>,
}

impl Default for InMemoryIdentity {
    fn default() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            current: RwLock::new(None),
            events,
        }
    }
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sign_in(&self, user_id: impl Into<String>) -> UserContext {
        let user = UserContext::new(user_id);
        *self.current.write().await = Some(user.clone());
        // No subscribers is fine; the state change still holds.
        let _ = self.events.send(AuthEvent::SignedIn(user.clone()));
        user
    }

    pub async fn sign_out(&self) {
        *self.current.write().await = None;
        let _ = self.events.send(AuthEvent::SignedOut);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentity {
    async fn current_user(&self) -> Option<UserContext> {
        self.current.read().await.clone()
    }

    fn subscribe(&self) -> AuthSubscription {
        AuthSubscription::new(self.events.subscribe())
    }
}
