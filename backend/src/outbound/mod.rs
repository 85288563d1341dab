//! In-process adapters for the external collaborators.

pub mod identity;
pub mod memory;

pub use identity::LocalIdentityProvider;
pub use memory::InMemoryContentStore;
