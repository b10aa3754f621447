//! Navigation emission for auth hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth screen computes a `Destination` and hands it to whatever navigate
//! capability the caller wired in. This module is that boundary call; it does
//! not inspect the outcome and never retries.
//!
//! Two boundaries exist. A caller-supplied `on_navigate` callback receives the
//! typed `Destination` (whose `as_str()` is the opaque identifier such as
//! `landing`). The router fallback receives the route path instead, e.g. `/`
//! for `Destination::Landing`, since that is what `use_navigate` understands.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::callback::{Callable, Callback};
use leptos_router::NavigateOptions;

use crate::state::routing::Destination;

/// Push `destination`'s route path through a router-style `navigate`.
pub fn navigate_to<F>(navigate: &F, destination: Destination)
where
    F: Fn(&str, NavigateOptions) + ?Sized,
{
    leptos::logging::log!("auth: navigating to {destination}");
    navigate(destination.path(), NavigateOptions::default());
}

/// Hand `destination` to `on_navigate` when present, otherwise to the router.
///
/// Exactly one of the two is invoked, once.
pub fn emit_destination<F>(on_navigate: Option<Callback<Destination>>, navigate: &F, destination: Destination)
where
    F: Fn(&str, NavigateOptions) + ?Sized,
{
    match on_navigate {
        Some(callback) => {
            leptos::logging::log!("auth: handing {destination} to caller");
            callback.run(destination);
        }
        None => navigate_to(navigate, destination),
    }
}
