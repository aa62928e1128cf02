//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema. All
//! paths are relative; the host server proxies `/api/*` to the backend.

pub mod api;
pub mod types;
