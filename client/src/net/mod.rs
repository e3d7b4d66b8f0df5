//! Networking modules for the auth REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles auth endpoints and response interpretation, and `types`
//! defines the wire schema for job records and auth payloads.

pub mod api;
pub mod types;
