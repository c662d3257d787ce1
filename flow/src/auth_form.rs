//! Sign-in / sign-up form.
//!
//! Credentials are collected but never checked: logging in always signs in
//! as a seller, and sign-up stops at the e-mail confirmation step.

use agromarket_core::auth::{AuthProvider, AuthSnapshot, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedIn(AuthSnapshot),
    ConfirmationSent,
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    tab: AuthTab,
    confirming: bool,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirmation_code: String,
}

impl SignInForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Changing tabs always leaves the confirmation step.
    pub fn set_tab(&mut self, tab: AuthTab) {
        if self.tab != tab {
            self.tab = tab;
            self.confirming = false;
        }
    }

    /// The "switch" link under the form.
    pub fn toggle_tab(&mut self) {
        self.set_tab(match self.tab {
            AuthTab::Login => AuthTab::Signup,
            AuthTab::Signup => AuthTab::Login,
        });
    }

    /// Primary button label for the current tab.
    pub fn action_label(&self) -> &'static str {
        match self.tab {
            AuthTab::Login => "Iniciar Sesión",
            AuthTab::Signup => "Crear Cuenta",
        }
    }

    pub fn submit(&mut self, auth: &mut AuthProvider) -> SubmitOutcome {
        match self.tab {
            AuthTab::Login => SubmitOutcome::SignedIn(auth.sign_in(Role::Seller)),
            AuthTab::Signup => {
                self.confirming = true;
                debug!(email = %self.email, "confirmation code requested");
                SubmitOutcome::ConfirmationSent
            }
        }
    }

    /// Accepts any code and returns to the login tab.
    pub fn confirm(&mut self) {
        if !self.confirming {
            return;
        }
        self.confirming = false;
        self.confirmation_code.clear();
        self.tab = AuthTab::Login;
    }

    /// Back out of the confirmation step, staying on sign-up.
    pub fn cancel_confirmation(&mut self) {
        self.confirming = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_signs_in_as_seller() {
        let mut auth = AuthProvider::new();
        let mut form = SignInForm::new();
        form.email = "juan@example.com".into();

        let SubmitOutcome::SignedIn(snapshot) = form.submit(&mut auth) else {
            panic!("login should sign in");
        };
        assert!(snapshot.is_seller());
        assert!(auth.snapshot().is_signed_in());
    }

    #[test]
    fn test_signup_enters_confirmation() {
        let mut auth = AuthProvider::new();
        let mut form = SignInForm::new();
        form.set_tab(AuthTab::Signup);
        assert_eq!(form.action_label(), "Crear Cuenta");

        assert_eq!(form.submit(&mut auth), SubmitOutcome::ConfirmationSent);
        assert!(form.is_confirming());
        assert!(!auth.snapshot().is_signed_in());

        form.confirmation_code = "123456".into();
        form.confirm();
        assert!(!form.is_confirming());
        assert_eq!(form.tab(), AuthTab::Login);
        assert!(form.confirmation_code.is_empty());
    }

    #[test]
    fn test_switching_tabs_leaves_confirmation() {
        let mut auth = AuthProvider::new();
        let mut form = SignInForm::new();
        form.toggle_tab();
        form.submit(&mut auth);
        form.toggle_tab();
        assert_eq!(form.tab(), AuthTab::Login);
        assert!(!form.is_confirming());
    }

    #[test]
    fn test_cancel_confirmation_stays_on_signup() {
        let mut auth = AuthProvider::new();
        let mut form = SignInForm::new();
        form.set_tab(AuthTab::Signup);
        form.submit(&mut auth);
        form.cancel_confirmation();
        assert_eq!(form.tab(), AuthTab::Signup);
        assert!(!form.is_confirming());
    }
}
