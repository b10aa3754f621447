//! Interaction state for the combined sign-in / sign-up screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::auth` wraps an `AuthScreenState` in an `RwSignal` for the lifetime
//! of one mount. Every mutation here is a plain overwrite; the only logic is in
//! the two submit methods, which defer to `routing::decide_destination`.
//!
//! TRADE-OFFS
//! ==========
//! Login submission reads the tab the screen was constructed with, not the
//! live tab selection. Register submission does not depend on the tab at all
//! because it marks the session first. The asymmetry is kept as-is pending a
//! product decision on what `default_tab` is meant to encode.

#[cfg(test)]
#[path = "auth_screen_test.rs"]
mod auth_screen_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::routing::{Destination, decide_destination};
use crate::state::session::SessionState;

/// Which side of the marketplace the user represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Candidate,
    Employer,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Candidate, Self::Employer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Job Seeker",
            Self::Employer => "Employer",
        }
    }

    /// Label for the name field on the registration form.
    pub fn name_label(self) -> &'static str {
        match self {
            Self::Candidate => "Full name",
            Self::Employer => "Company name",
        }
    }
}

/// Tabs of the auth screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Rejected `default_tab` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown auth tab: {0:?}")]
pub struct ParseAuthTabError(pub String);

impl AuthTab {
    pub const ALL: [Self; 2] = [Self::Login, Self::Register];

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }

    /// Parse the inbound `default_tab` value, falling back to `Login`.
    ///
    /// Missing and unrecognized values both yield `Login`; the screen must
    /// still render.
    pub fn from_config(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Login;
        };
        raw.parse().unwrap_or_else(|e: ParseAuthTabError| {
            leptos::logging::warn!("{e}; falling back to login");
            Self::Login
        })
    }
}

impl FromStr for AuthTab {
    type Err = ParseAuthTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            other => Err(ParseAuthTabError(other.to_owned())),
        }
    }
}

/// Sign-in credential fields. Never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Sign-up fields. Never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Masking state, one flag per password input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PasswordVisibility {
    login: bool,
    register: bool,
}

/// Ephemeral state for one mount of the auth screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthScreenState {
    default_tab: AuthTab,
    pub active_tab: AuthTab,
    pub role: Role,
    pub login: LoginForm,
    pub register: RegisterForm,
    password_visibility: PasswordVisibility,
}

impl Default for AuthScreenState {
    fn default() -> Self {
        Self::new(AuthTab::Login)
    }
}

impl AuthScreenState {
    pub fn new(default_tab: AuthTab) -> Self {
        Self {
            default_tab,
            active_tab: default_tab,
            role: Role::default(),
            login: LoginForm::default(),
            register: RegisterForm::default(),
            password_visibility: PasswordVisibility::default(),
        }
    }

    /// Tab the screen was constructed with.
    pub fn default_tab(&self) -> AuthTab {
        self.default_tab
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Switch the visible tab. Does not affect login routing.
    pub fn set_active_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
    }

    /// Whether the password input on `field`'s tab is shown in clear text.
    pub fn password_visible(&self, field: AuthTab) -> bool {
        match field {
            AuthTab::Login => self.password_visibility.login,
            AuthTab::Register => self.password_visibility.register,
        }
    }

    pub fn set_password_visibility(&mut self, field: AuthTab, visible: bool) {
        match field {
            AuthTab::Login => self.password_visibility.login = visible,
            AuthTab::Register => self.password_visibility.register = visible,
        }
    }

    pub fn toggle_password_visibility(&mut self, field: AuthTab) {
        let visible = self.password_visible(field);
        self.set_password_visibility(field, !visible);
    }

    /// Password typed on `field`'s tab.
    pub fn password(&self, field: AuthTab) -> &str {
        match field {
            AuthTab::Login => &self.login.password,
            AuthTab::Register => &self.register.password,
        }
    }

    pub fn set_password(&mut self, field: AuthTab, value: String) {
        match field {
            AuthTab::Login => self.login.password = value,
            AuthTab::Register => self.register.password = value,
        }
    }

    /// Handle the sign-in button.
    pub fn submit_login(&self, session: &SessionState) -> Destination {
        decide_destination(self.role, self.default_tab, session.is_new_account())
    }

    /// Handle the create-account button.
    ///
    /// Marks the session as a new account before deciding, so candidates always
    /// go to profile setup.
    pub fn submit_register(&self, session: &mut SessionState) -> Destination {
        session.mark_new_account();
        decide_destination(self.role, AuthTab::Register, session.is_new_account())
    }
}
