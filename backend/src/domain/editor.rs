//! Content item form controller.
//!
//! Stages exactly one editable record and an editing target. The state
//! machine has two states, `Create` and `Edit(id)`, with `Create` as the
//! initial state; a successful submit, a clear, or deleting the staged item
//! all return it to `Create`. There is no terminal state: the controller
//! lives as long as the admin page.

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::catalogue::ContentCatalogue;
use crate::domain::ports::{ContentStore, DeletePrompt};
use crate::domain::{ContentDraft, ContentFields, ContentItem, ContentItemId};

/// Which branch a submit will take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Staging a new item.
    Create,
    /// Re-staging the fields of an existing item.
    Edit(ContentItemId),
}

/// Result of a submit attempt.
///
/// Failures are logged inside the controller rather than surfaced as
/// recoverable errors; the staged fields survive a `Failed` outcome so the
/// operator can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The item was persisted and the form reset to create-mode defaults.
    Saved,
    /// The trimmed title was empty; the submission was dropped with zero
    /// store calls.
    EmptyTitle,
    /// A previous submission is still in flight; this one was ignored.
    Busy,
    /// The store write failed; staged fields are unchanged.
    Failed,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The item was removed.
    Deleted,
    /// The operator declined the confirmation prompt.
    Cancelled,
    /// The store delete failed.
    Failed,
}

/// Form controller for the admin screen.
pub struct ContentEditor<S, P> {
    catalogue: ContentCatalogue<S>,
    prompt: Arc<P>,
    draft: ContentDraft,
    editing: Option<ContentItemId>,
    saving: bool,
}

impl<S, P> ContentEditor<S, P> {
    /// Create a controller in create mode with default fields.
    pub fn new(catalogue: ContentCatalogue<S>, prompt: Arc<P>) -> Self {
        Self {
            catalogue,
            prompt,
            draft: ContentDraft::default(),
            editing: None,
            saving: false,
        }
    }

    /// Current state of the two-state machine.
    pub fn mode(&self) -> EditorMode {
        self.editing
            .clone()
            .map_or(EditorMode::Create, EditorMode::Edit)
    }

    /// Staged form fields.
    pub const fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    /// Mutable access for form binding.
    pub const fn draft_mut(&mut self) -> &mut ContentDraft {
        &mut self.draft
    }

    /// Whether a submission is in flight. Callers disable re-submission
    /// while this is set.
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Copy an existing item into the form and switch to edit mode. Calling
    /// this from `Edit(other)` simply retargets the form.
    pub fn start_edit(&mut self, item: &ContentItem) {
        self.draft = ContentDraft::from_item(item);
        self.editing = Some(item.id().clone());
    }

    /// Discard unsaved edits and return to create-mode defaults.
    pub fn clear(&mut self) {
        self.draft = ContentDraft::default();
        self.editing = None;
    }
}

impl<S: ContentStore, P: DeletePrompt> ContentEditor<S, P> {
    /// Validate and persist the staged fields.
    ///
    /// An empty trimmed title silently drops the submission: no error is
    /// surfaced and no store call is made. Otherwise the staged fields are
    /// written through `update` when an editing target is set, `create`
    /// when not; success resets the form to create-mode defaults on either
    /// branch.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.saving {
            return SubmitOutcome::Busy;
        }
        let Ok(fields) = ContentFields::try_from_draft(&self.draft) else {
            return SubmitOutcome::EmptyTitle;
        };

        self.saving = true;
        let result = match &self.editing {
            Some(id) => self.catalogue.update(id, &fields).await,
            None => self.catalogue.create(&fields).await.map(|_| ()),
        };
        self.saving = false;

        match result {
            Ok(()) => {
                self.clear();
                SubmitOutcome::Saved
            }
            Err(err) => {
                error!(error = %err, "saving content item failed; staged fields kept for retry");
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete an item after interactive confirmation.
    ///
    /// Deleting the item currently staged for edit resets the form to
    /// create mode. A nonexistent identifier fails with the store's own
    /// not-found behaviour, logged like any other write failure.
    pub async fn delete(&mut self, id: &ContentItemId) -> DeleteOutcome {
        if !self.prompt.confirm_delete(id).await {
            return DeleteOutcome::Cancelled;
        }

        match self.catalogue.remove(id).await {
            Ok(()) => {
                if self.editing.as_ref() == Some(id) {
                    self.clear();
                }
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!(error = %err, id = %id, "deleting content item failed");
                DeleteOutcome::Failed
            }
        }
    }
}
