//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::auth::{AuthPage, AuthQueryPage};
use crate::pages::destinations::{CandidateDashboardPage, EmployerDashboardPage, LandingPage, ProfileSetupPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session state for the lifetime of the page and sets up routing
/// for the auth screen and every destination it can hand off to.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/hirebridge.css"/>
        <Title text="HireBridge"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=|| view! { <AuthPage default_tab="login"/> }/>
                <Route path=StaticSegment("register") view=|| view! { <AuthPage default_tab="register"/> }/>
                <Route path=StaticSegment("auth") view=AuthQueryPage/>
                <Route path=StaticSegment("profile-setup") view=ProfileSetupPage/>
                <Route path=StaticSegment("candidate-dashboard") view=CandidateDashboardPage/>
                <Route path=StaticSegment("employer-dashboard") view=EmployerDashboardPage/>
            </Routes>
        </Router>
    }
}
