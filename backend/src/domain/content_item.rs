//! Content item data model.
//!
//! A [`ContentItem`] is one unit of published work (article, radio show,
//! podcast, or project) with display metadata. Items live in a hosted
//! document collection; documents serialise with camelCase field names
//! matching that collection.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the constructors in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValidationError {
    /// Identifier was empty.
    EmptyId,
    /// Identifier carried surrounding whitespace.
    PaddedId,
    /// Title was missing or blank once trimmed.
    EmptyTitle,
}

impl fmt::Display for ContentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "content item id must not be empty"),
            Self::PaddedId => write!(f, "content item id must not carry surrounding whitespace"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
        }
    }
}

impl std::error::Error for ContentValidationError {}

/// Store-assigned identifier, unique and stable for the item's lifetime.
///
/// The hosted store hands out opaque string keys, so the only structural
/// requirements are non-emptiness and the absence of padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentItemId(String);

impl ContentItemId {
    /// Validate and construct an id from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ContentValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(ContentValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(ContentValidationError::PaddedId);
        }
        Ok(Self(raw.to_owned()))
    }

    /// Generate a fresh random id, as the store does on insert.
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl AsRef<str> for ContentItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContentItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ContentItemId> for String {
    fn from(value: ContentItemId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContentItemId {
    type Error = ContentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Kind of published work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Article,
    #[serde(rename = "Radio Show")]
    RadioShow,
    Podcast,
    Project,
}

impl ContentType {
    /// Human-readable label, as rendered in the admin list view.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::RadioShow => "Radio Show",
            Self::Podcast => "Podcast",
            Self::Project => "Project",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Publication bucket controlling where an item appears publicly.
///
/// The form only ever writes one of the three named buckets. `Unlisted`
/// absorbs out-of-band values found in the store on deserialisation; such
/// items appear in no public section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Featured,
    #[serde(rename = "Selected Work")]
    SelectedWork,
    Archive,
    #[serde(other)]
    Unlisted,
}

impl Section {
    /// Human-readable label, as rendered in the admin list view.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::SelectedWork => "Selected Work",
            Self::Archive => "Archive",
            Self::Unlisted => "Unlisted",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unvalidated, freely mutable form state.
///
/// The default value matches the create-mode form: empty text fields, the
/// first option of each select, visible on site, not highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub outlet: String,
    pub content_type: ContentType,
    pub section: Section,
    pub date: Option<NaiveDate>,
    pub url: String,
    pub description: String,
    pub image_url: String,
    pub show_on_site: bool,
    pub highlight_featured: bool,
}

impl Default for ContentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            outlet: String::new(),
            content_type: ContentType::Article,
            section: Section::Featured,
            date: None,
            url: String::new(),
            description: String::new(),
            image_url: String::new(),
            show_on_site: true,
            highlight_featured: false,
        }
    }
}

impl ContentDraft {
    /// Copy a persisted item back into form state for editing.
    ///
    /// Absent optional fields become empty strings so the form always has
    /// something to bind to.
    pub fn from_item(item: &ContentItem) -> Self {
        let fields = item.fields();
        Self {
            title: fields.title().to_owned(),
            outlet: fields.outlet().to_owned(),
            content_type: fields.content_type(),
            section: fields.section(),
            date: fields.date(),
            url: fields.url().to_owned(),
            description: fields.description().unwrap_or_default().to_owned(),
            image_url: fields.image_url().unwrap_or_default().to_owned(),
            show_on_site: fields.show_on_site(),
            highlight_featured: fields.highlight_featured(),
        }
    }
}

/// Validated persistable fields of a content item, without its identifier.
///
/// ## Invariants
/// - `title` is non-empty once trimmed. This is the only write validation;
///   `url` is expected to be an absolute link but is stored verbatim.
/// - `description` and `image_url` are `None` rather than empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFields {
    title: String,
    outlet: String,
    #[serde(rename = "type")]
    content_type: ContentType,
    section: Section,
    #[serde(default)]
    date: Option<NaiveDate>,
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    show_on_site: bool,
    highlight_featured: bool,
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

impl ContentFields {
    /// Validate a draft for persistence.
    ///
    /// The title keeps caller-provided whitespace; only its trimmed form is
    /// checked for emptiness.
    pub fn try_from_draft(draft: &ContentDraft) -> Result<Self, ContentValidationError> {
        if draft.title.trim().is_empty() {
            return Err(ContentValidationError::EmptyTitle);
        }
        Ok(Self {
            title: draft.title.clone(),
            outlet: draft.outlet.clone(),
            content_type: draft.content_type,
            section: draft.section,
            date: draft.date,
            url: draft.url.clone(),
            description: none_if_empty(&draft.description),
            image_url: none_if_empty(&draft.image_url),
            show_on_site: draft.show_on_site,
            highlight_featured: draft.highlight_featured,
        })
    }

    /// Title as it should appear on the site.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Outlet or platform that published the piece.
    pub fn outlet(&self) -> &str {
        self.outlet.as_str()
    }

    /// Kind of published work.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Publication bucket.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Publication date, the sole sort key.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Link to the piece.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Short description for the portfolio, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Illustration link, if any.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Whether the item participates in any public projection.
    pub fn show_on_site(&self) -> bool {
        self.show_on_site
    }

    /// Whether the item is highlighted within the featured carousel.
    pub fn highlight_featured(&self) -> bool {
        self.highlight_featured
    }
}

/// A persisted content item: store-assigned identifier plus fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    id: ContentItemId,
    #[serde(flatten)]
    fields: ContentFields,
}

impl ContentItem {
    /// Pair an identifier with validated fields.
    pub const fn new(id: ContentItemId, fields: ContentFields) -> Self {
        Self { id, fields }
    }

    /// Store-assigned identifier.
    pub const fn id(&self) -> &ContentItemId {
        &self.id
    }

    /// Persisted fields.
    pub const fn fields(&self) -> &ContentFields {
        &self.fields
    }

    /// Snapshot ordering: date descending, items without a date after all
    /// dated items, ties broken by ascending identifier.
    ///
    /// The hosted store used to arbitrate ties; with it out of the picture
    /// the tie-break has to be deterministic on this side.
    pub fn feed_order(&self, other: &Self) -> Ordering {
        let by_date = match (self.fields.date(), other.fields.date()) {
            (Some(lhs), Some(rhs)) => rhs.cmp(&lhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_date.then_with(|| self.id.as_ref().cmp(other.id.as_ref()))
    }
}
