//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads the session context for rendering and leaves every
//! session transition to the handle.

pub mod callback;
pub mod home;
pub mod login;
