//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by lifetime: `auth_screen` lives for one mount of the auth
//! screen, `session` for the whole browser session, and `routing` is the pure
//! decision that connects them on submit.

pub mod auth_screen;
pub mod routing;
pub mod session;
