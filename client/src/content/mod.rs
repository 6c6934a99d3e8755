//! Static site content: the FAQ catalog and outbound link targets.
//!
//! DESIGN
//! ======
//! Everything here is authored compile-time data. Pages read it by
//! reference; nothing mutates it and nothing re-creates it at runtime.

pub mod faq;
pub mod links;
