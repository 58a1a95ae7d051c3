//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and form
//! logic to improve reuse and testability.

pub mod storage;
pub mod validate;
