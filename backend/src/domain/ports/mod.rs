//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod content_store;
mod delete_prompt;
mod identity_provider;
mod subscription;

#[cfg(test)]
pub use content_store::MockContentStore;
pub use content_store::{ContentSnapshot, ContentStore, ContentStoreError};
#[cfg(test)]
pub use delete_prompt::MockDeletePrompt;
pub use delete_prompt::{AlwaysConfirm, DeletePrompt, NeverConfirm};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityEvent, IdentityProvider, IdentityProviderError};
pub use subscription::{SubscriberRegistry, Subscription};
