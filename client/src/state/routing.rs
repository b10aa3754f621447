//! Post-submit routing decision for the auth screen.
//!
//! DESIGN
//! ======
//! `decide_destination` is the only branching logic behind the login and
//! register buttons. It is a pure function of role, tab, and the session's
//! new-account flag so it can be exercised without a reactive runtime.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::auth_screen::{AuthTab, Role};

/// Screens the auth flow can hand off to.
///
/// The kebab-case identifiers are what the navigation capability receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Landing,
    ProfileSetup,
    CandidateDashboard,
    EmployerDashboard,
}

impl Destination {
    pub const ALL: [Self; 4] = [
        Self::Landing,
        Self::ProfileSetup,
        Self::CandidateDashboard,
        Self::EmployerDashboard,
    ];

    /// Opaque identifier for this destination.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::ProfileSetup => "profile-setup",
            Self::CandidateDashboard => "candidate-dashboard",
            Self::EmployerDashboard => "employer-dashboard",
        }
    }

    /// App route serving this destination.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::ProfileSetup => "/profile-setup",
            Self::CandidateDashboard => "/candidate-dashboard",
            Self::EmployerDashboard => "/employer-dashboard",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick where to send the user after a login or register submission.
///
/// Employers always land on their dashboard; there is no employer onboarding.
/// Candidates go through profile setup when the submission came from the
/// register tab or the session already registered a new account.
pub fn decide_destination(role: Role, tab: AuthTab, new_account: bool) -> Destination {
    match role {
        Role::Employer => Destination::EmployerDashboard,
        Role::Candidate if tab == AuthTab::Register || new_account => Destination::ProfileSetup,
        Role::Candidate => Destination::CandidateDashboard,
    }
}
