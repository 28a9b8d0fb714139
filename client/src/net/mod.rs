//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the iReserve backend with the session's
//! bearer header attached.

pub mod api;
