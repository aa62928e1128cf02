//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure data
//! transforms from page and component logic to improve reuse and testability.

pub mod document;
pub mod format;
pub mod icons;
pub mod mapping;
pub mod redact;
pub mod storage;
