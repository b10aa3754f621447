//! Combined sign-in / sign-up screen for candidates and employers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/login`, `/register`, and `/auth?tab=`. On submit it asks
//! `AuthScreenState` for a destination and hands it to the caller's navigate
//! callback, or to the router when none is given. No credentials are checked.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::callback::Callback;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth_screen::{AuthScreenState, AuthTab, Role};
use crate::state::routing::Destination;
use crate::state::session::SessionState;
use crate::util::navigation::emit_destination;

fn tab_class(tab: AuthTab, active: bool) -> &'static str {
    match (tab, active) {
        (AuthTab::Login, true) => "auth-tab auth-tab--login auth-tab--active",
        (AuthTab::Login, false) => "auth-tab auth-tab--login",
        (AuthTab::Register, true) => "auth-tab auth-tab--register auth-tab--active",
        (AuthTab::Register, false) => "auth-tab auth-tab--register",
    }
}

fn role_class(role: Role, selected: bool) -> &'static str {
    match (role, selected) {
        (Role::Candidate, true) => "auth-role auth-role--candidate auth-role--selected",
        (Role::Candidate, false) => "auth-role auth-role--candidate",
        (Role::Employer, true) => "auth-role auth-role--employer auth-role--selected",
        (Role::Employer, false) => "auth-role auth-role--employer",
    }
}

fn submit_class(role: Role) -> &'static str {
    match role {
        Role::Candidate => "auth-submit auth-submit--candidate",
        Role::Employer => "auth-submit auth-submit--employer",
    }
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

/// Run a sign-in submission against the live screen and session signals.
fn login_destination(screen: RwSignal<AuthScreenState>, session: RwSignal<SessionState>) -> Destination {
    screen.with_untracked(|s| s.submit_login(&session.get_untracked()))
}

/// Run a sign-up submission and write the marked session back.
fn register_destination(screen: RwSignal<AuthScreenState>, session: RwSignal<SessionState>) -> Destination {
    let mut next = session.get_untracked();
    let destination = screen.with_untracked(|s| s.submit_register(&mut next));
    session.set(next);
    destination
}

/// Sign-in / sign-up screen.
///
/// `default_tab` selects the initial tab and also feeds the login routing
/// decision; unrecognized values behave like `"login"`. When `on_navigate`
/// is omitted the destination's route is pushed onto the router.
#[component]
pub fn AuthPage(
    #[prop(optional, into)] default_tab: Option<String>,
    #[prop(optional)] on_navigate: Option<Callback<Destination>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let screen = RwSignal::new(AuthScreenState::new(AuthTab::from_config(default_tab.as_deref())));

    let navigate = use_navigate();
    let emit = move |destination: Destination| emit_destination(on_navigate, &navigate, destination);

    let on_login = {
        let emit = emit.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            emit(login_destination(screen, session));
        }
    };

    let on_register = {
        let emit = emit.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            emit(register_destination(screen, session));
        }
    };

    let on_back = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        emit(Destination::Landing);
    };

    let tabs = AuthTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(tab, screen.with(|s| s.active_tab == tab))
                    on:click=move |_| screen.update(|s| s.set_active_tab(tab))
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let roles = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <button
                    type="button"
                    class=move || role_class(role, screen.with(|s| s.role == role))
                    on:click=move |_| screen.update(|s| s.set_role(role))
                >
                    {role.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-back" on:click=on_back>
                    "Back to home"
                </a>
                <h1>"HireBridge"</h1>
                <p class="auth-card__subtitle">"Where talent meets opportunity"</p>
                <div class="auth-tabs" role="tablist">
                    {tabs}
                </div>
                <p class="auth-label">"I am a"</p>
                <div class="auth-roles">{roles}</div>

                <form
                    class="auth-form"
                    hidden=move || screen.with(|s| s.active_tab != AuthTab::Login)
                    on:submit=on_login
                >
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || screen.with(|s| s.login.email.clone())
                            on:input=move |ev| screen.update(|s| s.login.email = event_target_value(&ev))
                        />
                    </label>
                    <PasswordField screen=screen field=AuthTab::Login/>
                    <button class=move || submit_class(screen.with(|s| s.role)) type="submit">
                        "Sign In"
                    </button>
                </form>

                <form
                    class="auth-form"
                    hidden=move || screen.with(|s| s.active_tab != AuthTab::Register)
                    on:submit=on_register
                >
                    <label class="auth-label">
                        {move || screen.with(|s| s.role.name_label())}
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || screen.with(|s| s.register.full_name.clone())
                            on:input=move |ev| {
                                screen.update(|s| s.register.full_name = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || screen.with(|s| s.register.email.clone())
                            on:input=move |ev| screen.update(|s| s.register.email = event_target_value(&ev))
                        />
                    </label>
                    <PasswordField screen=screen field=AuthTab::Register/>
                    <button class=move || submit_class(screen.with(|s| s.role)) type="submit">
                        "Create Account"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Password input with its own show/hide toggle.
#[component]
fn PasswordField(screen: RwSignal<AuthScreenState>, field: AuthTab) -> impl IntoView {
    let visible = move || screen.with(|s| s.password_visible(field));

    view! {
        <label class="auth-label">
            "Password"
            <div class="auth-password">
                <input
                    class="auth-input"
                    type=move || password_input_type(visible())
                    placeholder="Password"
                    prop:value=move || screen.with(|s| s.password(field).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.update(|s| s.set_password(field, value));
                    }
                />
                <button
                    type="button"
                    class="auth-password__toggle"
                    on:click=move |_| screen.update(|s| s.toggle_password_visibility(field))
                >
                    {move || visibility_toggle_label(visible())}
                </button>
            </div>
        </label>
    }
}

/// Auth screen whose initial tab comes from `?tab=` at mount time.
#[component]
pub fn AuthQueryPage() -> impl IntoView {
    let query = use_query_map();
    match query.with_untracked(|q| q.get("tab")) {
        Some(tab) => view! { <AuthPage default_tab=tab/> }.into_any(),
        None => view! { <AuthPage/> }.into_any(),
    }
}
