//! Site configuration loaded via OrthoConfig.
//!
//! Deployment-specific values only: the admin allow-list and the logical
//! name of the hosted content collection. Defaults reproduce the live site.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::AllowList;

const DEFAULT_ADMIN_EMAILS: [&str; 2] = ["laurengibson0202@gmail.com", "client@email.com"];
const DEFAULT_COLLECTION: &str = "contentItems";

/// Configuration values for one deployment of the site.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO")]
pub struct SiteSettings {
    /// Account emails permitted to open the content manager.
    pub admin_emails: Option<Vec<String>>,
    /// Logical name of the hosted content collection.
    pub collection: Option<String>,
}

impl SiteSettings {
    /// Effective admin emails, falling back to the live site's two accounts.
    pub fn admin_emails(&self) -> Vec<String> {
        match &self.admin_emails {
            Some(emails) if !emails.is_empty() => emails.clone(),
            _ => DEFAULT_ADMIN_EMAILS.iter().map(|&e| e.to_owned()).collect(),
        }
    }

    /// Allow-list built from the effective admin emails.
    pub fn allow_list(&self) -> AllowList {
        AllowList::new(self.admin_emails())
    }

    /// Effective collection name.
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for site configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> SiteSettings {
        SiteSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_reproduce_the_live_site() {
        let _guard = lock_env([
            ("PORTFOLIO_ADMIN_EMAILS", None::<String>),
            ("PORTFOLIO_COLLECTION", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.collection(), "contentItems");
        assert!(settings.allow_list().authorizes("laurengibson0202@gmail.com"));
        assert!(settings.allow_list().authorizes("Client@Email.com"));
        assert!(!settings.allow_list().authorizes("stranger@example.com"));
    }

    #[rstest]
    fn collection_can_be_overridden_from_the_environment() {
        let _guard = lock_env([
            ("PORTFOLIO_ADMIN_EMAILS", None::<&str>),
            ("PORTFOLIO_COLLECTION", Some("stagingContent")),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.collection(), "stagingContent");
    }

    #[rstest]
    fn configured_emails_replace_the_defaults() {
        let settings = SiteSettings {
            admin_emails: Some(vec!["editor@site.example".to_owned()]),
            collection: None,
        };
        assert!(settings.allow_list().authorizes(" Editor@Site.example "));
        assert!(!settings.allow_list().authorizes("laurengibson0202@gmail.com"));
    }

    #[rstest]
    fn empty_email_list_falls_back_to_the_defaults() {
        let settings = SiteSettings {
            admin_emails: Some(Vec::new()),
            collection: None,
        };
        assert!(settings.allow_list().authorizes("laurengibson0202@gmail.com"));
    }
}
