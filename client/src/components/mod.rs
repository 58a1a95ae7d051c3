//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome around route pages; they hold no workflow
//! state of their own.

pub mod sidebar;
