//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only shared state; pages keep their own local signals.

pub mod auth;
