//! Front-end session state.
//!
//! Owned by whatever drives the UI and passed through its render loop;
//! nothing here is global.

use secrecy::{ExposeSecret, SecretString};

use crate::credentials::{CredentialError, CredentialVerifier};
use crate::evaluator::evaluate_password_strength;
use crate::report::StrengthReport;

pub const REJECTION_MESSAGE: &str = "Invalid identifier or password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Rejected,
}

impl LoginOutcome {
    /// Message shown to the user, `None` when access was granted.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Granted => None,
            LoginOutcome::Rejected => Some(REJECTION_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_granted: bool,
    show_login: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_granted(&self) -> bool {
        self.access_granted
    }

    pub fn show_login(&self) -> bool {
        self.show_login
    }

    /// Reveals the login form.
    pub fn request_login(&mut self) {
        self.show_login = true;
    }

    /// Checks the pair against `verifier` and grants access on match.
    ///
    /// A rejected attempt leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Propagates verifier failures (e.g. a corrupt stored hash).
    pub fn submit_credentials<V: CredentialVerifier>(
        &mut self,
        verifier: &V,
        identifier: &str,
        secret: &SecretString,
    ) -> Result<LoginOutcome, CredentialError> {
        if verifier.verify(identifier, secret)? {
            self.access_granted = true;
            #[cfg(feature = "tracing")]
            tracing::info!("access granted");
            Ok(LoginOutcome::Granted)
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("login rejected");
            Ok(LoginOutcome::Rejected)
        }
    }

    /// Evaluates a candidate password for display.
    ///
    /// Returns `None` until access is granted, and for empty input.
    pub fn evaluate(&self, password: &SecretString) -> Option<StrengthReport> {
        if !self.access_granted || password.expose_secret().is_empty() {
            return None;
        }
        Some(StrengthReport::new(&evaluate_password_strength(password)))
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }
}
