//! Landing page and post-auth placeholder screens.
//!
//! Each screen is the target of one `Destination`.

use leptos::prelude::*;

use crate::state::routing::Destination;
use crate::state::session::SessionState;

/// Public landing page with entry points into the auth screen.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"HireBridge"</h1>
            <p>"Find your next role, or your next hire."</p>
            <div class="landing-page__actions">
                <a class="auth-submit" href="/login">"Sign In"</a>
                <a class="auth-submit" href="/register">"Create Account"</a>
            </div>
        </div>
    }
}

/// Candidate onboarding after registration.
#[component]
pub fn ProfileSetupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="destination-page" data-destination={Destination::ProfileSetup.as_str()}>
            <h1>"Set up your profile"</h1>
            <Show
                when=move || session.with(SessionState::is_new_account)
                fallback=|| view! { <p>"Finish your candidate profile to get matched."</p> }
            >
                <p>"Welcome aboard! Tell employers about yourself."</p>
            </Show>
        </div>
    }
}

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    view! {
        <div class="destination-page" data-destination={Destination::CandidateDashboard.as_str()}>
            <h1>"Candidate dashboard"</h1>
            <p>"Your applications and matches will appear here."</p>
        </div>
    }
}

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    view! {
        <div class="destination-page" data-destination={Destination::EmployerDashboard.as_str()}>
            <h1>"Employer dashboard"</h1>
            <p>"Your postings and applicants will appear here."</p>
        </div>
    }
}
