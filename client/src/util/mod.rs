//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation, time) from
//! page logic so the session seams can be exercised natively.

pub mod auth;
pub mod browser;
pub mod storage;
