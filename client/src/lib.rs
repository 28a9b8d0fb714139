//! # client
//!
//! Leptos + WASM frontend for the iReserve facility-reservation app,
//! rendered client-side (`csr` feature, bundled by Trunk from `index.html`).
//!
//! This crate provides the session context to the component tree, binds the
//! session's token store to `localStorage`, attaches the bearer header to
//! every REST call, and implements the login, OAuth callback and role home
//! pages. Session rules themselves live in the `session` crate.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
