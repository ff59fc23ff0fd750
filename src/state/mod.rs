//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so individual components can depend on small
//! focused models provided through Leptos context.

pub mod session;
