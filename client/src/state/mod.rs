//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `language`, `notifications`,
//! `integrations`) so individual components can depend on small focused
//! models. `App` provides each one as a context.

pub mod auth;
pub mod integrations;
pub mod language;
pub mod notifications;
