//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a pure composition: shared chrome once at top and bottom,
//! then an ordered sequence of sections built from literal content and the
//! shared primitives. Pages hold no state and share none with each other;
//! navigating between routes is a full, independent render.

pub mod digital_assets;
pub mod faq;
pub mod home;
pub mod privacy;
pub mod terms;
