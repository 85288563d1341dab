//! Composition root: wires the in-process adapters and walks one admin
//! session end to end, logging what the public page would render.

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::SiteSettings;
use backend::domain::ports::AlwaysConfirm;
use backend::domain::{
    AdminGate, AdminOverview, AdminStatus, ContentCatalogue, ContentEditor, HomeView,
    SubmitOutcome,
};
use backend::outbound::{InMemoryContentStore, LocalIdentityProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SiteSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let account = settings
        .admin_emails()
        .into_iter()
        .next()
        .unwrap_or_default();

    let store = Arc::new(InMemoryContentStore::new(settings.collection()));
    let provider = Arc::new(LocalIdentityProvider::with_account(account));
    let catalogue = ContentCatalogue::new(Arc::clone(&store));

    let mut gate = AdminGate::new(Arc::clone(&provider), settings.allow_list());
    let mut assertions = gate.subscribe();
    gate.sign_in().await;
    while let Some(event) = assertions.try_next() {
        gate.apply(event);
    }
    info!(status = ?gate.status(), email = gate.email(), "admin session resolved");
    if gate.status() != AdminStatus::Authorized {
        assertions.cancel();
        return Ok(());
    }

    let mut live = catalogue.subscribe();
    let mut editor = ContentEditor::new(catalogue, Arc::new(AlwaysConfirm));
    editor.draft_mut().title = "Hello from the dev harness".to_owned();
    editor.draft_mut().outlet = "Local".to_owned();
    if editor.submit().await != SubmitOutcome::Saved {
        warn!("seeding the collection failed");
    }

    let mut latest = Vec::new();
    while let Some(snapshot) = live.try_next() {
        latest = snapshot;
    }
    let overview = AdminOverview::from_snapshot(&latest);
    let view = HomeView::from_snapshot(&latest);
    info!(
        total = overview.total_entries,
        featured = overview.featured_on_homepage,
        featured_rows = view.featured.len(),
        archive_rows = view.archive.len(),
        "projection derived"
    );

    live.cancel();
    assertions.cancel();
    gate.sign_out().await;
    Ok(())
}
