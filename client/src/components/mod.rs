//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Structural primitives (section, pill, button) and shared chrome used by
//! every page, plus the FAQ disclosure widget. Components here are pure
//! functions of their props; the only state anywhere is the per-widget
//! open flag inside `faq_entry`.

pub mod button;
pub mod chrome;
pub mod faq_entry;
pub mod pill;
pub mod section;
