//! Public projection of the content collection.
//!
//! Pure derivations, recomputed from scratch on every snapshot: the visitor
//! page partitions visible items into its three sections, and the admin
//! header derives its quick stats. Nothing here holds state between
//! snapshots, which is what guarantees the rendered page depends only on
//! the most recent one.

use serde::Serialize;

use crate::domain::ContentItem;
use crate::domain::content_item::Section;

/// Visible items partitioned into the three public sections.
///
/// Items with `show_on_site == false` appear nowhere; items whose section
/// fell outside the three named buckets (possible only through out-of-band
/// writes) appear in none of them. Each bucket preserves the snapshot's
/// date-descending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuckets {
    pub featured: Vec<ContentItem>,
    pub selected_work: Vec<ContentItem>,
    pub archive: Vec<ContentItem>,
}

impl SectionBuckets {
    /// Partition a snapshot.
    pub fn project(snapshot: &[ContentItem]) -> Self {
        let mut buckets = Self::default();
        for item in snapshot.iter().filter(|item| item.fields().show_on_site()) {
            match item.fields().section() {
                Section::Featured => buckets.featured.push(item.clone()),
                Section::SelectedWork => buckets.selected_work.push(item.clone()),
                Section::Archive => buckets.archive.push(item.clone()),
                Section::Unlisted => {}
            }
        }
        buckets
    }
}

/// One renderable row of a public section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    pub title: String,
    pub outlet: String,
    /// Original entries carry full dates; the fallback list only a year.
    pub date: String,
    pub summary: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl DisplayEntry {
    fn from_item(item: &ContentItem) -> Self {
        let fields = item.fields();
        Self {
            title: fields.title().to_owned(),
            outlet: fields.outlet().to_owned(),
            date: fields
                .date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            summary: fields.description().unwrap_or_default().to_owned(),
            url: fields.url().to_owned(),
            image_url: fields.image_url().map(str::to_owned),
        }
    }

    fn fixed(title: &str, outlet: &str, summary: &str, url: &str) -> Self {
        Self {
            title: title.to_owned(),
            outlet: outlet.to_owned(),
            date: "2025".to_owned(),
            summary: summary.to_owned(),
            url: url.to_owned(),
            image_url: None,
        }
    }
}

/// The fixed list shown when a fallback-backed section has no live content.
///
/// A content-never-empty policy for presentation purposes only; the data
/// layer is untouched by it.
pub fn fallback_entries() -> Vec<DisplayEntry> {
    vec![
        DisplayEntry::fixed(
            "Sunday surprise: Churches in Ottawa seeing slight increase in Gen Z worshippers",
            "Capital Current",
            "A feature exploring faith, community, and why some Gen Z Ottawans are returning to church.",
            "https://capitalcurrent.ca",
        ),
        DisplayEntry::fixed(
            "Geoff Cass brings music to the neighbourhood with Red Bird Live",
            "Capital Current",
            "A profile of Red Bird Live and how local music spaces bring communities together.",
            "https://capitalcurrent.ca",
        ),
        DisplayEntry::fixed(
            "And They Were Roommates",
            "CKCU FM 93.1",
            "Co-hosted radio show covering music, campus life, and pop culture, airing on CKCU FM 93.1.",
            "https://cod.ckcufm.com",
        ),
        DisplayEntry::fixed(
            "Gibson\u{2019}s Groove, Morrison\u{2019}s Mood",
            "CKCU FM 93.1",
            "A radio project featuring underground folk and indie tunes, focused on mood and storytelling.",
            "https://cod.ckcufm.com",
        ),
    ]
}

/// Everything the visitor page renders, with the fallback policy applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub featured: Vec<DisplayEntry>,
    pub selected_work: Vec<DisplayEntry>,
    pub archive: Vec<DisplayEntry>,
}

impl HomeView {
    /// Derive the page model from a snapshot.
    ///
    /// Featured and Archive fall back to the fixed list independently when
    /// empty; Selected Work renders empty.
    pub fn from_snapshot(snapshot: &[ContentItem]) -> Self {
        let buckets = SectionBuckets::project(snapshot);
        Self {
            featured: Self::with_fallback(&buckets.featured),
            selected_work: buckets.selected_work.iter().map(DisplayEntry::from_item).collect(),
            archive: Self::with_fallback(&buckets.archive),
        }
    }

    fn with_fallback(bucket: &[ContentItem]) -> Vec<DisplayEntry> {
        if bucket.is_empty() {
            fallback_entries()
        } else {
            bucket.iter().map(DisplayEntry::from_item).collect()
        }
    }
}

/// Quick stats for the admin dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    /// Every entry, visible or not.
    pub total_entries: usize,
    /// Items shown in the homepage "Featured Work" section.
    pub featured_on_homepage: usize,
}

impl AdminOverview {
    /// Derive the stats from a snapshot.
    pub fn from_snapshot(snapshot: &[ContentItem]) -> Self {
        Self {
            total_entries: snapshot.len(),
            featured_on_homepage: snapshot
                .iter()
                .filter(|item| {
                    item.fields().section() == Section::Featured && item.fields().show_on_site()
                })
                .count(),
        }
    }
}
