//! Local identity provider adapter.
//!
//! Stand-in for the hosted identity SaaS: the "interactive" sign-in flow
//! immediately asserts a configured account, and arbitrary events can be
//! injected to script stream behaviour (expiry, errors) in tests.

use async_trait::async_trait;

use crate::domain::ports::{
    IdentityEvent, IdentityProvider, IdentityProviderError, SubscriberRegistry, Subscription,
};

/// Channel-backed [`IdentityProvider`] with a fixed local account.
pub struct LocalIdentityProvider {
    account: Option<String>,
    events: SubscriberRegistry<IdentityEvent>,
}

impl LocalIdentityProvider {
    /// Provider whose interactive flow signs in as `email`.
    pub fn with_account(email: impl Into<String>) -> Self {
        Self {
            account: Some(email.into()),
            events: SubscriberRegistry::new(),
        }
    }

    /// Provider with no account; interactive sign-in fails.
    pub fn without_account() -> Self {
        Self {
            account: None,
            events: SubscriberRegistry::new(),
        }
    }

    /// Inject an event into the assertion stream, as the hosted provider
    /// would on token refresh, expiry, or failure.
    pub fn emit(&self, event: &IdentityEvent) {
        self.events.publish(event);
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn subscribe(&self) -> Subscription<IdentityEvent> {
        self.events.subscribe()
    }

    async fn sign_in(&self) -> Result<(), IdentityProviderError> {
        let Some(email) = &self.account else {
            return Err(IdentityProviderError::sign_in("no local account configured"));
        };
        self.events.publish(&IdentityEvent::SignedIn {
            email: email.clone(),
        });
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), IdentityProviderError> {
        self.events.publish(&IdentityEvent::SignedOut);
        Ok(())
    }
}
