//! Driving-side port for interactive delete confirmation.
//!
//! Deletion is the one irreversible action in the content manager, so the
//! editor refuses to call the store until something interactive has
//! confirmed. The presentation layer supplies the prompt; tests supply the
//! fixtures below.

use async_trait::async_trait;

use crate::domain::ContentItemId;

/// Port asking the operator to confirm a deletion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeletePrompt: Send + Sync {
    /// Return `true` when the operator confirmed deleting `id`.
    async fn confirm_delete(&self, id: &ContentItemId) -> bool;
}

/// Fixture prompt that confirms every deletion.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

#[async_trait]
impl DeletePrompt for AlwaysConfirm {
    async fn confirm_delete(&self, _id: &ContentItemId) -> bool {
        true
    }
}

/// Fixture prompt that declines every deletion.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

#[async_trait]
impl DeletePrompt for NeverConfirm {
    async fn confirm_delete(&self, _id: &ContentItemId) -> bool {
        false
    }
}
