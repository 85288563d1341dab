//! Driven port for the external identity collaborator.
//!
//! The provider owns the interactive login flow and the session lifecycle;
//! this side only observes assertion events and fires triggers. The email in
//! a `SignedIn` assertion is trusted verbatim; normalisation and the
//! allow-list check happen in the authorization gate, not here.

use async_trait::async_trait;

use super::define_port_error;
use super::subscription::Subscription;

define_port_error! {
    /// Errors raised by identity provider adapters.
    pub enum IdentityProviderError {
        /// The interactive sign-in flow failed or was abandoned.
        SignIn { message: String } => "sign-in failed: {message}",
        /// The sign-out request failed.
        SignOut { message: String } => "sign-out failed: {message}",
    }
}

/// One observation from the identity assertion stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEvent {
    /// A session exists for the given account email.
    SignedIn { email: String },
    /// No session exists.
    SignedOut,
    /// The stream itself failed; consumers must fail closed.
    Error { message: String },
}

/// Port for the identity collaborator.
///
/// `sign_in` completing successfully does not mean a session exists yet: the
/// authoritative state transition is the next [`IdentityEvent`] on the
/// stream, which may arrive later or not at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Observe the assertion stream. Each subscriber receives every event
    /// published after it attaches, in order.
    fn subscribe(&self) -> Subscription<IdentityEvent>;

    /// Start the provider's interactive sign-in flow.
    async fn sign_in(&self) -> Result<(), IdentityProviderError>;

    /// End the provider-side session.
    async fn sign_out(&self) -> Result<(), IdentityProviderError>;
}
