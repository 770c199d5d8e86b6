//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls through `gloo-net`, and `types` defines the
//! request/response wire schema.

pub mod api;
pub mod types;
