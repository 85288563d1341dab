//! Authorization gate for the content management surface.
//!
//! Exactly one allow-listed account may reach the admin screen. The gate
//! observes the identity provider's assertion stream, normalises the
//! asserted email, and membership-tests it against a fixed allow-list. The
//! check itself is a pure function over a configuration value so it is
//! testable without any identity collaborator.

use std::sync::Arc;

use serde_json::json;
use tracing::error;

use crate::domain::DomainError;
use crate::domain::ports::{IdentityEvent, IdentityProvider, Subscription};

/// Normalise an asserted email for comparison: trim surrounding whitespace
/// and lower-case.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fixed set of account emails permitted to open the content manager.
///
/// Entries are normalised at construction, so membership tests are
/// insensitive to case and surrounding whitespace on either side.
///
/// # Examples
/// ```
/// use backend::domain::AllowList;
///
/// let list = AllowList::new(["Editor@Site.example "]);
/// assert!(list.authorizes(" editor@site.example"));
/// assert!(!list.authorizes("someone@else.example"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList(Vec<String>);

impl AllowList {
    /// Build an allow-list from raw entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|entry| normalize_email(entry.as_ref()))
                .collect(),
        )
    }

    /// Pure membership test. Empty input never authorizes.
    pub fn authorizes(&self, email: &str) -> bool {
        let normalized = normalize_email(email);
        !normalized.is_empty() && self.0.iter().any(|entry| *entry == normalized)
    }
}

/// Authorization state of the admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStatus {
    /// No assertion observed yet.
    Loading,
    /// No session, or the stream degraded.
    SignedOut,
    /// Signed in as an allow-listed account.
    Authorized,
    /// Signed in, but the account is not allow-listed.
    Forbidden,
}

/// Session-scoped authorization state machine.
///
/// Feed it every [`IdentityEvent`] from the provider's stream via
/// [`AdminGate::apply`]. Stream errors degrade to `SignedOut` (the gate
/// fails closed, never open into `Authorized`) and are logged rather than
/// propagated, so a provider outage is not fatal to the host page.
pub struct AdminGate<I> {
    provider: Arc<I>,
    allow_list: AllowList,
    status: AdminStatus,
    email: Option<String>,
}

impl<I> AdminGate<I> {
    /// Create a gate in the `Loading` state.
    pub fn new(provider: Arc<I>, allow_list: AllowList) -> Self {
        Self {
            provider,
            allow_list,
            status: AdminStatus::Loading,
            email: None,
        }
    }

    /// Current authorization state.
    pub const fn status(&self) -> AdminStatus {
        self.status
    }

    /// Normalised email of the observed session, if any. Exposed in the
    /// `Forbidden` state so the screen can say which account was refused.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Guard for management operations. `Ok` only in the `Authorized`
    /// state; any other state yields a [`DomainError`] the caller can
    /// surface.
    pub fn require_authorized(&self) -> Result<(), DomainError> {
        match self.status {
            AdminStatus::Authorized => Ok(()),
            AdminStatus::Forbidden => Err(DomainError::forbidden("account is not allow-listed")
                .with_details(json!({ "email": self.email }))),
            AdminStatus::Loading | AdminStatus::SignedOut => {
                Err(DomainError::unauthorized("no admin session"))
            }
        }
    }

    /// Apply one observation from the assertion stream.
    pub fn apply(&mut self, event: IdentityEvent) {
        match event {
            IdentityEvent::SignedIn { email } => {
                let normalized = normalize_email(&email);
                self.status = if self.allow_list.authorizes(&normalized) {
                    AdminStatus::Authorized
                } else {
                    AdminStatus::Forbidden
                };
                self.email = (!normalized.is_empty()).then_some(normalized);
            }
            IdentityEvent::SignedOut => self.reset(),
            IdentityEvent::Error { message } => {
                error!(error = %message, "identity stream error; failing closed");
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.status = AdminStatus::SignedOut;
        self.email = None;
    }
}

impl<I: IdentityProvider> AdminGate<I> {
    /// Observe the provider's assertion stream. The caller drives received
    /// events through [`AdminGate::apply`] and cancels the handle when the
    /// admin view is torn down.
    pub fn subscribe(&self) -> Subscription<IdentityEvent> {
        self.provider.subscribe()
    }

    /// Start the provider's interactive sign-in flow.
    ///
    /// Completion does not change gate state: the transition is driven
    /// solely by the next assertion event. Failures are logged and the
    /// previous state stands.
    pub async fn sign_in(&self) {
        if let Err(err) = self.provider.sign_in().await {
            error!(error = %err, "interactive sign-in failed");
        }
    }

    /// End the session. Local state is forced to `SignedOut` and the email
    /// cleared whether or not the provider-side sign-out succeeded.
    pub async fn sign_out(&mut self) {
        if let Err(err) = self.provider.sign_out().await {
            error!(error = %err, "provider sign-out failed");
        }
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{IdentityProviderError, MockIdentityProvider};
    use rstest::rstest;

    fn fixed_allow_list() -> AllowList {
        AllowList::new(["a@x.com", "b@y.com"])
    }

    fn gate_with(provider: MockIdentityProvider) -> AdminGate<MockIdentityProvider> {
        AdminGate::new(Arc::new(provider), fixed_allow_list())
    }

    #[rstest]
    #[case("a@x.com", true)]
    #[case(" A@X.com ", true)]
    #[case("B@Y.COM", true)]
    #[case("c@z.com", false)]
    #[case("", false)]
    #[case("   ", false)]
    fn allow_list_membership_ignores_case_and_padding(
        #[case] email: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(fixed_allow_list().authorizes(email), expected);
    }

    #[rstest]
    fn gate_starts_loading() {
        let gate = gate_with(MockIdentityProvider::new());
        assert_eq!(gate.status(), AdminStatus::Loading);
        assert_eq!(gate.email(), None);
    }

    #[rstest]
    fn allow_listed_assertion_authorizes() {
        let mut gate = gate_with(MockIdentityProvider::new());
        gate.apply(IdentityEvent::SignedIn {
            email: " A@X.com ".to_owned(),
        });
        assert_eq!(gate.status(), AdminStatus::Authorized);
        assert_eq!(gate.email(), Some("a@x.com"));
    }

    #[rstest]
    fn unknown_assertion_is_forbidden_but_exposes_the_email() {
        let mut gate = gate_with(MockIdentityProvider::new());
        gate.apply(IdentityEvent::SignedIn {
            email: "c@z.com".to_owned(),
        });
        assert_eq!(gate.status(), AdminStatus::Forbidden);
        assert_eq!(gate.email(), Some("c@z.com"));
    }

    #[rstest]
    fn blank_assertion_is_forbidden_with_no_email() {
        let mut gate = gate_with(MockIdentityProvider::new());
        gate.apply(IdentityEvent::SignedIn {
            email: "   ".to_owned(),
        });
        assert_eq!(gate.status(), AdminStatus::Forbidden);
        assert_eq!(gate.email(), None);
    }

    #[rstest]
    fn signed_out_event_resets_state() {
        let mut gate = gate_with(MockIdentityProvider::new());
        gate.apply(IdentityEvent::SignedIn {
            email: "a@x.com".to_owned(),
        });
        gate.apply(IdentityEvent::SignedOut);
        assert_eq!(gate.status(), AdminStatus::SignedOut);
        assert_eq!(gate.email(), None);
    }

    #[rstest]
    fn stream_errors_fail_closed() {
        let mut gate = gate_with(MockIdentityProvider::new());
        gate.apply(IdentityEvent::SignedIn {
            email: "a@x.com".to_owned(),
        });
        gate.apply(IdentityEvent::Error {
            message: "token refresh failed".to_owned(),
        });
        assert_eq!(gate.status(), AdminStatus::SignedOut);
        assert_eq!(gate.email(), None);
    }

    #[rstest]
    fn require_authorized_passes_only_an_allow_listed_session() {
        use crate::domain::ErrorCode;

        let mut gate = gate_with(MockIdentityProvider::new());
        assert_eq!(
            gate.require_authorized().unwrap_err().code(),
            ErrorCode::Unauthorized
        );

        gate.apply(IdentityEvent::SignedIn {
            email: "c@z.com".to_owned(),
        });
        assert_eq!(
            gate.require_authorized().unwrap_err().code(),
            ErrorCode::Forbidden
        );

        gate.apply(IdentityEvent::SignedIn {
            email: "a@x.com".to_owned(),
        });
        assert!(gate.require_authorized().is_ok());
    }

    #[tokio::test]
    async fn sign_in_failure_leaves_state_untouched() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_in()
            .returning(|| Err(IdentityProviderError::sign_in("popup closed")));
        let gate = gate_with(provider);

        gate.sign_in().await;
        assert_eq!(gate.status(), AdminStatus::Loading);
    }

    #[tokio::test]
    async fn sign_out_forces_signed_out_even_when_the_provider_fails() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_sign_out()
            .returning(|| Err(IdentityProviderError::sign_out("network down")));
        let mut gate = gate_with(provider);
        gate.apply(IdentityEvent::SignedIn {
            email: "a@x.com".to_owned(),
        });

        gate.sign_out().await;
        assert_eq!(gate.status(), AdminStatus::SignedOut);
        assert_eq!(gate.email(), None);
    }
}
