//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Authenticated pages are wrapped by `ProtectedRoute` and
//! `AppLayout` in `app.rs`, never by themselves.

pub mod approvals;
pub mod dashboard;
pub mod integrations;
pub mod landing;
pub mod login;
pub mod reports;
