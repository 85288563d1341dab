//! Domain entities, services, and ports.
//!
//! Purpose: strongly typed model of the portfolio content manager: the
//! content item entity and its validation, the authorization gate, the
//! catalogue service over the store port, the form controller, and the
//! public projection. Types stay transport agnostic; serde contracts are
//! documented on each type.

pub mod admin_gate;
pub mod catalogue;
pub mod content_item;
pub mod editor;
pub mod error;
pub mod ports;
pub mod projection;

pub use self::admin_gate::{AdminGate, AdminStatus, AllowList, normalize_email};
pub use self::catalogue::ContentCatalogue;
pub use self::content_item::{
    ContentDraft, ContentFields, ContentItem, ContentItemId, ContentType, ContentValidationError,
    Section,
};
pub use self::editor::{ContentEditor, DeleteOutcome, EditorMode, SubmitOutcome};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::projection::{AdminOverview, DisplayEntry, HomeView, SectionBuckets, fallback_entries};
