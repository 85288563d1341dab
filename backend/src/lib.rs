//! Behavioural core of a portfolio site with a password-gated content manager.
//!
//! The crate is organised hexagonally: `domain` holds entities, services, and
//! the ports they speak through; `outbound` holds in-process adapters standing
//! in for the hosted identity provider and document store; `config` loads the
//! deployment-specific values (admin allow-list, collection name).

pub mod config;
pub mod domain;
pub mod outbound;
