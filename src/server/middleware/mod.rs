//! Session wrappers and the per-request authentication guard.

pub mod auth;
pub mod session;
