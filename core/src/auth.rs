//! Mock authentication.
//!
//! `sign_in` always succeeds. The provider is the only place the session
//! changes; everything else reads an [`AuthSnapshot`].

use serde::{Deserialize, Serialize};
use tracing::info;

const DEMO_USER_NAME: &str = "Gadri";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

/// Read-only view of the session handed to screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_ready: bool,
}

impl AuthSnapshot {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_seller(&self) -> bool {
        matches!(&self.user, Some(u) if u.role == Role::Seller)
    }
}

#[derive(Debug, Default)]
pub struct AuthProvider {
    user: Option<User>,
    is_ready: bool,
}

impl AuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the provider as loaded so navigation may proceed.
    pub fn mark_ready(&mut self) {
        self.is_ready = true;
    }

    pub fn sign_in(&mut self, role: Role) -> AuthSnapshot {
        info!(?role, "signed in");
        self.user = Some(User {
            name: DEMO_USER_NAME.to_string(),
            role,
        });
        self.snapshot()
    }

    pub fn sign_out(&mut self) -> AuthSnapshot {
        if self.user.take().is_some() {
            info!("signed out");
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.user.clone(),
            is_ready: self.is_ready,
        }
    }
}
