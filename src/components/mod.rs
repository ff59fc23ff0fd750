//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers and wrap page
//! content with cross-cutting behavior (guards, branding).

pub mod branding;
pub mod guard;
pub mod listing_card;
pub mod nav_bar;
