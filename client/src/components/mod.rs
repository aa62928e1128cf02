//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (layout, guard, tables, badges) while
//! reading shared state from Leptos context providers set up in `app.rs`.

pub mod app_layout;
pub mod data_table;
pub mod icon;
pub mod kpi_card;
pub mod landing;
pub mod language_toggle;
pub mod notification_bell;
pub mod protected_route;
pub mod status_badge;
