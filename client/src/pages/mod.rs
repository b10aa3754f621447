//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `auth` owns the sign-in / sign-up flow; `destinations` holds the screens
//! it hands off to.

pub mod auth;
pub mod destinations;
